use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Wraps serialized CSV as a browser download. The engine produced the
/// bytes; this only attaches transport headers.
pub fn csv_response(csv: String, filename: &str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSV_UTF_8.as_ref())
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(csv))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
