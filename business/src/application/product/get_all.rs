use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::GetAllProductsUseCase;
use crate::domain::shared::pagination::{PageQuery, Pagination};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, query: PageQuery) -> Result<Vec<Product>, ProductError> {
        let page = Pagination::normalize(&query);
        self.logger.debug(&format!(
            "Listing products: limit={} offset={} direction={}",
            page.limit, page.offset, page.direction
        ));

        let products = self.repository.get_all(&page).await?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
