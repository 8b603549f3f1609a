use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::AuthError;

use crate::api::error::{ErrorResponse, GENERIC_INTERNAL_MESSAGE, IntoErrorResponse};

impl IntoErrorResponse for AuthError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            // One message for unknown email and wrong password alike.
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "auth.invalid_credentials".to_string(),
            ),
            AuthError::DuplicatedEmail(detail) => {
                (StatusCode::BAD_REQUEST, "DuplicateKey", detail.clone())
            }
            AuthError::TokenIssueFailed
            | AuthError::PasswordHashFailed
            | AuthError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                GENERIC_INTERNAL_MESSAGE.to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message,
            }),
        )
    }
}
