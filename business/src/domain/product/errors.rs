#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.title_empty")]
    TitleEmpty,
    #[error("product.image_url_too_short")]
    ImageUrlTooShort,
    #[error("product.not_found: {term}")]
    NotFound { term: String },
    #[error("product.duplicated: {0}")]
    Duplicated(String),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
