use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}

/// Serves the embedded stylesheet.
pub fn css_response(css: &'static str) -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS.as_ref())
        .body(Body::from(css.to_string()))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
