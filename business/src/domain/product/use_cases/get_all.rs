use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::shared::pagination::PageQuery;

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, query: PageQuery) -> Result<Vec<Product>, ProductError>;
}
