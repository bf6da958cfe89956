use std::fmt;

/// Errors originating from routing, the query boundary, or the
/// persistence layer. Filter inputs that fail to parse are not errors;
/// the criterion is simply dropped before reaching this type.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    /// The property dataset could not be read at all.
    DataUnavailable(String),
    DbError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::DataUnavailable(msg) => write!(f, "Data Unavailable: {msg}"),
            ServerError::DbError(msg) => write!(f, "Database Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}
