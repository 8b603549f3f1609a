use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::find_one::{FindOneProductParams, FindOneProductUseCase};

/// Dual-key resolution: a term shaped like a UUID is looked up by id, anything
/// else by slug lower-cased. Exactly one path runs per call; there is no
/// fallback from one to the other. Not-found names the original term.
///
/// Shared with the delete path, which must resolve identically.
pub(crate) async fn resolve_product(
    repository: &dyn ProductRepository,
    term: &str,
) -> Result<Product, ProductError> {
    let lookup = match Uuid::parse_str(term) {
        Ok(id) => repository.get_by_id(id).await,
        Err(_) => repository.get_by_slug(&term.to_lowercase()).await,
    };

    lookup.map_err(|e| match e {
        RepositoryError::NotFound => ProductError::NotFound {
            term: term.to_string(),
        },
        other => ProductError::Repository(other),
    })
}

pub struct FindOneProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindOneProductUseCase for FindOneProductUseCaseImpl {
    async fn execute(&self, params: FindOneProductParams) -> Result<Product, ProductError> {
        self.logger
            .debug(&format!("Resolving product term: {}", params.term));

        resolve_product(self.repository.as_ref(), &params.term).await
    }
}
