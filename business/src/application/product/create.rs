use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.title));

        let product = Product::new(NewProductProps {
            title: params.title,
            price: params.price,
            description: params.description,
            slug: params.slug,
            stock: params.stock,
            sizes: params.sizes,
            gender: params.gender,
            tags: params.tags,
            images: params.images,
            user_id: params.user_id,
        })?;

        self.repository
            .insert(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated(detail) => ProductError::Duplicated(detail),
                other => {
                    self.logger
                        .error(&format!("Product insert failed: {}", other));
                    ProductError::Repository(other)
                }
            })?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::value_objects::Gender;
    use crate::domain::shared::pagination::Pagination;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self, page: &Pagination) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn get_by_slug(&self, slug: &str) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn update(&self, product: &Product, images: Option<Vec<String>>) -> Result<Product, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn delete_all(&self) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(title: &str) -> CreateProductParams {
        CreateProductParams {
            title: title.to_string(),
            price: Some(10.0),
            description: None,
            slug: None,
            stock: Some(5),
            sizes: vec!["M".to_string(), "L".to_string()],
            gender: Gender::Men,
            tags: vec!["shirt".to_string()],
            images: vec!["a.jpg".to_string(), "b.jpg".to_string()],
            user_id: None,
        }
    }

    #[tokio::test]
    async fn should_create_product_with_staged_images() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .withf(|product| product.image_urls() == vec!["a.jpg", "b.jpg"])
            .returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Shirt")).await;

        assert!(result.is_ok());
        let product = result.unwrap();
        assert_eq!(product.title, "Shirt");
        assert_eq!(product.slug, "shirt");
        assert_eq!(product.image_urls(), vec!["a.jpg", "b.jpg"]);
    }

    #[tokio::test]
    async fn should_reject_product_when_title_is_empty() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().never();

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ")).await;

        assert!(matches!(result.unwrap_err(), ProductError::TitleEmpty));
    }

    #[tokio::test]
    async fn should_map_duplicate_slug_to_domain_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_insert().returning(|_| {
            Err(RepositoryError::Duplicated(
                "Key (slug)=(shirt) already exists.".to_string(),
            ))
        });

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Shirt")).await;

        match result.unwrap_err() {
            ProductError::Duplicated(detail) => assert!(detail.contains("slug")),
            other => panic!("expected duplicated error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_surface_generic_error_on_other_store_failures() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_insert()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Shirt")).await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
