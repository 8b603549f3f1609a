use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// The only message unexpected failures are allowed to carry across the
/// service boundary; full detail stays in the server logs.
pub const GENERIC_INTERNAL_MESSAGE: &str = "Unexpected error, check server logs";

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
