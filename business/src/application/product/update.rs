use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{MIN_IMAGE_URL_LEN, Product, normalize_slug};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if let Some(title) = &params.title
            && title.trim().is_empty()
        {
            return Err(ProductError::TitleEmpty);
        }

        // Staged image URLs are validated before any store work happens.
        if let Some(urls) = &params.images
            && urls.iter().any(|url| url.trim().len() < MIN_IMAGE_URL_LEN)
        {
            return Err(ProductError::ImageUrlTooShort);
        }

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound {
                    term: params.id.to_string(),
                },
                other => ProductError::Repository(other),
            })?;

        // Scalar merge; the image collection is handled by the repository's
        // transactional update, so `existing.images` here is only a carrier.
        let merged = Product::from_repository(
            existing.id,
            params.title.unwrap_or(existing.title),
            params.price.unwrap_or(existing.price),
            params.description.or(existing.description),
            params
                .slug
                .as_deref()
                .map(normalize_slug)
                .unwrap_or(existing.slug),
            params.stock.unwrap_or(existing.stock),
            params.sizes.unwrap_or(existing.sizes),
            params.gender.unwrap_or(existing.gender),
            params.tags.unwrap_or(existing.tags),
            existing.images,
            existing.user_id,
        );

        let updated = self
            .repository
            .update(&merged, params.images)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated(detail) => ProductError::Duplicated(detail),
                RepositoryError::NotFound => ProductError::NotFound {
                    term: params.id.to_string(),
                },
                other => {
                    self.logger
                        .error(&format!("Product update failed: {}", other));
                    ProductError::Repository(other)
                }
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::ProductImage;
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

    fn stored_product(id: Uuid, urls: &[&str]) -> Product {
        Product::from_repository(
            id,
            "Shirt".to_string(),
            10.0,
            None,
            "shirt".to_string(),
            5,
            vec!["M".to_string()],
            Gender::Men,
            vec![],
            urls.iter()
                .map(|url| ProductImage::from_repository(Uuid::new_v4(), url.to_string()))
                .collect(),
            None,
        )
    }

    fn empty_patch(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            title: None,
            price: None,
            description: None,
            slug: None,
            stock: None,
            sizes: None,
            gender: None,
            tags: None,
            images: None,
        }
    }

    /// Repository double that echoes the merged product back, applying the
    /// image patch the way the transactional adapter would.
    fn echoing_update(mock_repo: &mut MockProductRepo) {
        mock_repo
            .expect_update()
            .returning(|product, images| {
                let mut updated = product.clone();
                if let Some(urls) = images {
                    updated.images = urls
                        .into_iter()
                        .map(|url| ProductImage::from_repository(Uuid::new_v4(), url))
                        .collect();
                }
                Ok(updated)
            });
    }

    #[tokio::test]
    async fn should_merge_scalars_and_preserve_images_when_patch_omits_them() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(stored_product(id, &["a.jpg", "b.jpg"])));
        mock_repo
            .expect_update()
            .withf(|product, images| product.price == 12.0 && images.is_none())
            .returning(|product, _| Ok(product.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                price: Some(12.0),
                ..empty_patch(product_id)
            })
            .await;

        let product = result.unwrap();
        assert_eq!(product.price, 12.0);
        assert_eq!(product.title, "Shirt");
        assert_eq!(product.image_urls(), vec!["a.jpg", "b.jpg"]);
    }

    #[tokio::test]
    async fn should_replace_image_collection_when_patch_provides_one() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(stored_product(id, &["a.jpg", "b.jpg"])));
        echoing_update(&mut mock_repo);

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                images: Some(vec!["c.jpg".to_string()]),
                ..empty_patch(product_id)
            })
            .await;

        assert_eq!(result.unwrap().image_urls(), vec!["c.jpg"]);
    }

    #[tokio::test]
    async fn should_clear_image_collection_when_patch_provides_empty_list() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(stored_product(id, &["a.jpg"])));
        mock_repo
            .expect_update()
            .withf(|_, images| matches!(images, Some(urls) if urls.is_empty()))
            .returning(|product, _| {
                let mut updated = product.clone();
                updated.images = vec![];
                Ok(updated)
            });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                images: Some(vec![]),
                ..empty_patch(product_id)
            })
            .await;

        assert!(result.unwrap().image_urls().is_empty());
    }

    #[tokio::test]
    async fn should_normalize_slug_before_merge() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(stored_product(id, &[])));
        mock_repo
            .expect_update()
            .withf(|product, _| product.slug == "mens_shirt")
            .returning(|product, _| Ok(product.clone()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                slug: Some("Men's Shirt".to_string()),
                ..empty_patch(product_id)
            })
            .await;

        assert_eq!(result.unwrap().slug, "mens_shirt");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product_id = Uuid::new_v4();
        let result = use_case.execute(empty_patch(product_id)).await;

        match result.unwrap_err() {
            ProductError::NotFound { term } => assert_eq!(term, product_id.to_string()),
            other => panic!("expected not found, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_reject_short_image_url_before_touching_the_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_by_id().never();
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                images: Some(vec!["x".to_string()]),
                ..empty_patch(Uuid::new_v4())
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::ImageUrlTooShort));
    }

    #[tokio::test]
    async fn should_map_duplicate_slug_to_domain_error() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(stored_product(id, &[])));
        mock_repo.expect_update().returning(|_, _| {
            Err(RepositoryError::Duplicated(
                "Key (slug)=(taken_slug) already exists.".to_string(),
            ))
        });

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                slug: Some("taken_slug".to_string()),
                ..empty_patch(product_id)
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Duplicated(_)));
    }

    #[tokio::test]
    async fn should_surface_generic_error_when_transaction_fails() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |id| Ok(stored_product(id, &["a.jpg"])));
        mock_repo
            .expect_update()
            .returning(|_, _| Err(RepositoryError::DatabaseError));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                images: Some(vec!["c.jpg".to_string()]),
                ..empty_patch(product_id)
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
