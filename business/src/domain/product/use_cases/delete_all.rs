use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

#[async_trait]
pub trait DeleteAllProductsUseCase: Send + Sync {
    async fn execute(&self) -> Result<u64, ProductError>;
}
