use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, GENERIC_INTERNAL_MESSAGE, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::TitleEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.title_empty".to_string(),
            ),
            ProductError::ImageUrlTooShort => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.image_url_too_short".to_string(),
            ),
            ProductError::NotFound { term } => (
                StatusCode::NOT_FOUND,
                "NotFound",
                format!("Product with id or slug {} not found", term),
            ),
            ProductError::Duplicated(detail) => {
                (StatusCode::BAD_REQUEST, "DuplicateKey", detail.clone())
            }
            ProductError::Repository(_) => (
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
