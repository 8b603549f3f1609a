use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::pagination::Pagination;

use super::model::Product;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Page of products ordered by price in the requested direction, ties
    /// broken by id ascending so identical pages always come back identical.
    async fn get_all(&self, page: &Pagination) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError>;
    /// Persists the product row together with its image rows as one unit.
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    /// Atomic update of the product row and its image collection.
    ///
    /// `images: Some(urls)` replaces every owned image row (an empty list
    /// clears the collection); `None` leaves the stored rows untouched.
    /// Implementations must commit or roll back as a single transaction and
    /// return the product with its final image set.
    async fn update(
        &self,
        product: &Product,
        images: Option<Vec<String>>,
    ) -> Result<Product, RepositoryError>;
    /// Deletes the product; owned image rows go with it.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Bulk wipe, used only by the seed path. Returns the number of rows gone.
    async fn delete_all(&self) -> Result<u64, RepositoryError>;
}
