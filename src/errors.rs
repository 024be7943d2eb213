// errors.rs
use thiserror::Error;

/// Errors originating from the server logic (routing, bad params, missing
/// resources). Converted to an HTML page at the server boundary.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Internal Server Error")]
    InternalError,
}
