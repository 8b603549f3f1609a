use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::seed::errors::SeedError;

use crate::api::error::{ErrorResponse, GENERIC_INTERNAL_MESSAGE, IntoErrorResponse};

impl IntoErrorResponse for SeedError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            SeedError::Product(err) => err.into_error_response(),
            SeedError::Auth(err) => err.into_error_response(),
            SeedError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    message: GENERIC_INTERNAL_MESSAGE.to_string(),
                }),
            ),
        }
    }
}
