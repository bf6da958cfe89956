use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Converts a ServerError into the standalone HTML error page. Used by
/// the serve loop as the fallback for any handler error.
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => render_error(404, "Not Found"),
        ServerError::BadRequest(msg) => render_error(400, &msg),
        ServerError::DataUnavailable(msg) => {
            render_error(500, &format!("Property data unavailable: {msg}"))
        }
        ServerError::DbError(msg) => render_error(500, &format!("Database Error: {msg}")),
        ServerError::InternalError => render_error(500, "Internal Server Error"),
    }
}

/// Builds a basic HTML error page outside the maud layout, so it still
/// renders when the failure happened before any view model existed.
fn render_error(status: u16, message: &str) -> Response {
    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Error {status}</title>
  <style>
    body {{
      font-family: system-ui, sans-serif;
      max-width: 720px;
      margin: 4rem auto;
      padding: 1rem;
    }}
    h1 {{
      font-size: 2rem;
      margin-bottom: 1rem;
    }}
    p {{
      font-size: 1.1rem;
      color: #444;
    }}
  </style>
</head>
<body>
  <h1>Error {status}</h1>
  <p>{message}</p>
  <p><a href="/dashboard">Back to the dashboard</a></p>
</body>
</html>"#
    );

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(html))
        .unwrap()
}
