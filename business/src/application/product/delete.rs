use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::find_one::resolve_product;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.term));

        // Resolve first, exactly like the read path; owned images cascade.
        let product = resolve_product(self.repository.as_ref(), &params.term).await?;

        self.repository.delete(product.id).await?;

        self.logger
            .info(&format!("Product deleted: {}", product.id));
        Ok(())
    }
}
