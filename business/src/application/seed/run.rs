use std::sync::Arc;

use async_trait::async_trait;

use crate::application::seed::data;
use crate::domain::logger::Logger;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::use_cases::delete_all::DeleteAllProductsUseCase;
use crate::domain::seed::errors::SeedError;
use crate::domain::seed::use_cases::run::RunSeedUseCase;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;

pub struct RunSeedUseCaseImpl {
    pub delete_all_products_use_case: Arc<dyn DeleteAllProductsUseCase>,
    pub create_product_use_case: Arc<dyn CreateProductUseCase>,
    pub user_repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RunSeedUseCase for RunSeedUseCaseImpl {
    async fn execute(&self) -> Result<String, SeedError> {
        self.logger.warn("Running seed, wiping catalog and accounts");

        // Products reference users, so they go first.
        self.delete_all_products_use_case.execute().await?;
        self.user_repository.delete_all().await?;

        let mut admin_id = None;
        for fixture in data::initial_users() {
            let password_hash = self.password_hasher.hash(fixture.password)?;
            let mut user = User::new(
                fixture.email.to_string(),
                password_hash,
                fixture.full_name.to_string(),
            );
            user.roles = fixture.roles.iter().map(|role| role.to_string()).collect();

            self.user_repository.insert(&user).await?;
            admin_id.get_or_insert(user.id);
        }

        // Every fixture product is attributed to the first (admin) user.
        for fixture in data::initial_products() {
            self.create_product_use_case
                .execute(CreateProductParams {
                    title: fixture.title.to_string(),
                    price: Some(fixture.price),
                    description: Some(fixture.description.to_string()),
                    slug: None,
                    stock: Some(fixture.stock),
                    sizes: fixture.sizes.iter().map(|size| size.to_string()).collect(),
                    gender: fixture.gender,
                    tags: fixture.tags.iter().map(|tag| tag.to_string()).collect(),
                    images: fixture.images.iter().map(|url| url.to_string()).collect(),
                    user_id: admin_id,
                })
                .await?;
        }

        self.logger.info("Seed executed");
        Ok("Seed executed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::errors::ProductError;
    use crate::domain::product::model::Product;
    use crate::domain::user::errors::AuthError;
    use crate::domain::user::model::UserCredentials;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub DeleteAllProducts {}

        #[async_trait]
        impl DeleteAllProductsUseCase for DeleteAllProducts {
            async fn execute(&self) -> Result<u64, ProductError>;
        }
    }

    mock! {
        pub CreateProduct {}

        #[async_trait]
        impl CreateProductUseCase for CreateProduct {
            async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
        }
    }

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn insert(&self, user: &User) -> Result<(), RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<User, RepositoryError>;
            async fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>, RepositoryError>;
            async fn delete_all(&self) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Hasher {}

        impl PasswordHasher for Hasher {
            fn hash(&self, plain: &str) -> Result<String, AuthError>;
            fn verify(&self, plain: &str, hash: &str) -> bool;
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

    fn make_created_product(params: &CreateProductParams) -> Product {
        use crate::domain::product::model::NewProductProps;

        Product::new(NewProductProps {
            title: params.title.clone(),
            price: params.price,
            description: params.description.clone(),
            slug: params.slug.clone(),
            stock: params.stock,
            sizes: params.sizes.clone(),
            gender: params.gender,
            tags: params.tags.clone(),
            images: params.images.clone(),
            user_id: params.user_id,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_wipe_then_insert_fixture_users_and_products() {
        let mut delete_all = MockDeleteAllProducts::new();
        delete_all.expect_execute().times(1).returning(|| Ok(6));

        let mut create_product = MockCreateProduct::new();
        create_product
            .expect_execute()
            .times(data::initial_products().len())
            .withf(|params| params.user_id.is_some() && !params.images.is_empty())
            .returning(|params| Ok(make_created_product(&params)));

        let mut mock_users = MockUserRepo::new();
        mock_users.expect_delete_all().times(1).returning(|| Ok(2));
        mock_users
            .expect_insert()
            .times(data::initial_users().len())
            .withf(|user| user.password_hash == "hashed")
            .returning(|_| Ok(()));

        let mut hasher = MockHasher::new();
        hasher.expect_hash().returning(|_| Ok("hashed".to_string()));

        let use_case = RunSeedUseCaseImpl {
            delete_all_products_use_case: Arc::new(delete_all),
            create_product_use_case: Arc::new(create_product),
            user_repository: Arc::new(mock_users),
            password_hasher: Arc::new(hasher),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert_eq!(result.unwrap(), "Seed executed");
    }

    #[tokio::test]
    async fn should_stop_when_wipe_fails() {
        let mut delete_all = MockDeleteAllProducts::new();
        delete_all
            .expect_execute()
            .returning(|| Err(ProductError::Repository(RepositoryError::DatabaseError)));

        let mut create_product = MockCreateProduct::new();
        create_product.expect_execute().never();

        let mut mock_users = MockUserRepo::new();
        mock_users.expect_delete_all().never();
        mock_users.expect_insert().never();

        let use_case = RunSeedUseCaseImpl {
            delete_all_products_use_case: Arc::new(delete_all),
            create_product_use_case: Arc::new(create_product),
            user_repository: Arc::new(mock_users),
            password_hasher: Arc::new(MockHasher::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute().await;

        assert!(matches!(result.unwrap_err(), SeedError::Product(_)));
    }
}
