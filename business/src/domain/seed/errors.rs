#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("seed.product_failed")]
    Product(#[from] crate::domain::product::errors::ProductError),
    #[error("seed.auth_failed")]
    Auth(#[from] crate::domain::user::errors::AuthError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
