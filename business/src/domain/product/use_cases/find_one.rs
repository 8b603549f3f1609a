use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct FindOneProductParams {
    /// UUID or slug; the shape of the term decides which lookup runs.
    pub term: String,
}

#[async_trait]
pub trait FindOneProductUseCase: Send + Sync {
    async fn execute(&self, params: FindOneProductParams) -> Result<Product, ProductError>;
}
