use std::path::PathBuf;

use poem_openapi::payload::{Attachment, AttachmentType, Json};
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object, OpenApi, param::Path};
use uuid::Uuid;

use crate::api::error::{ErrorResponse, GENERIC_INTERNAL_MESSAGE};
use crate::api::tags::ApiTags;
use crate::config::files_config::FilesConfig;

const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

#[derive(Debug, Multipart)]
pub struct UploadProductImage {
    /// Image file (jpg, jpeg, png or gif)
    file: Upload,
}

#[derive(Debug, Clone, Object)]
pub struct UploadedFileResponse {
    /// Public URL of the stored image
    pub secure_url: String,
}

fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

fn bad_request(message: impl Into<String>) -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: message.into(),
    })
}

/// Product image storage API
///
/// The catalog only ever stores the resulting URL strings; bytes live on
/// disk under the configured directory.
pub struct FilesApi {
    config: FilesConfig,
}

impl FilesApi {
    pub fn new(config: FilesConfig) -> Self {
        Self { config }
    }
}

#[OpenApi]
impl FilesApi {
    /// Upload a product image
    ///
    /// Stores the file under a generated name and returns its public URL.
    #[oai(path = "/files/product", method = "post", tag = "ApiTags::Files")]
    async fn upload_product_image(&self, upload: UploadProductImage) -> UploadFileResponse {
        let Some(file_name) = upload.file.file_name().map(str::to_string) else {
            return UploadFileResponse::BadRequest(bad_request(
                "Make sure that the file is an image",
            ));
        };

        let Some(extension) =
            extension_of(&file_name).filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        else {
            return UploadFileResponse::BadRequest(bad_request(
                "Make sure that the file is an image",
            ));
        };

        let bytes = match upload.file.into_vec().await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("Upload read failed: {e}");
                return UploadFileResponse::InternalError(Json(ErrorResponse {
                    name: "InternalError".to_string(),
                    message: GENERIC_INTERNAL_MESSAGE.to_string(),
                }));
            }
        };

        let stored_name = format!("{}.{}", Uuid::new_v4(), extension);
        let target = PathBuf::from(&self.config.upload_dir).join(&stored_name);

        let write_result = async {
            tokio::fs::create_dir_all(&self.config.upload_dir).await?;
            tokio::fs::write(&target, &bytes).await
        }
        .await;

        if let Err(e) = write_result {
            tracing::error!("Upload write failed: {e}");
            return UploadFileResponse::InternalError(Json(ErrorResponse {
                name: "InternalError".to_string(),
                message: GENERIC_INTERNAL_MESSAGE.to_string(),
            }));
        }

        UploadFileResponse::Created(Json(UploadedFileResponse {
            secure_url: format!("{}/files/product/{}", self.config.host_api, stored_name),
        }))
    }

    /// Fetch a stored product image by name
    #[oai(
        path = "/files/product/:image_name",
        method = "get",
        tag = "ApiTags::Files"
    )]
    async fn get_product_image(&self, image_name: Path<String>) -> GetFileResponse {
        // The stored name is a generated UUID plus extension; anything that
        // walks the filesystem is rejected outright.
        if image_name.0.contains(['/', '\\']) || image_name.0.contains("..") {
            return GetFileResponse::BadRequest(bad_request(format!(
                "No product found with image {}",
                image_name.0
            )));
        }

        let path = PathBuf::from(&self.config.upload_dir).join(&image_name.0);
        match tokio::fs::read(&path).await {
            Ok(bytes) => GetFileResponse::Ok(
                Attachment::new(bytes)
                    .attachment_type(AttachmentType::Inline)
                    .filename(image_name.0),
            ),
            Err(_) => GetFileResponse::BadRequest(bad_request(format!(
                "No product found with image {}",
                image_name.0
            ))),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadFileResponse {
    #[oai(status = 201)]
    Created(Json<UploadedFileResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetFileResponse {
    #[oai(status = 200)]
    Ok(Attachment<Vec<u8>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
