use std::env;

/// Where uploaded product images land and how their public URLs are built.
#[derive(Debug, Clone)]
pub struct FilesConfig {
    pub upload_dir: String,
    pub host_api: String,
}

impl FilesConfig {
    /// Load file storage configuration from environment variables
    ///
    /// Environment variables:
    /// - FILES_PATH: upload directory (default: "./static/products")
    /// - HOST_API: public base URL for served files
    ///   (default: "http://localhost:8080")
    pub fn from_env() -> Self {
        let upload_dir = env::var("FILES_PATH").unwrap_or_else(|_| "./static/products".to_string());
        let host_api = env::var("HOST_API").unwrap_or_else(|_| "http://localhost:8080".to_string());

        Self {
            upload_dir,
            host_api,
        }
    }
}
