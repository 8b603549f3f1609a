use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;
use security::{BcryptPasswordHasher, JwtTokenIssuer};

use business::application::auth::check_status::CheckAuthStatusUseCaseImpl;
use business::application::auth::login::LoginUserUseCaseImpl;
use business::application::auth::register::RegisterUserUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::delete_all::DeleteAllProductsUseCaseImpl;
use business::application::product::find_one::FindOneProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::seed::run::RunSeedUseCaseImpl;
use business::domain::user::repository::UserRepository;

use crate::config::files_config::FilesConfig;
use crate::config::jwt_config::JwtConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub auth_api: crate::api::auth::routes::AuthApi,
    pub files_api: crate::api::files::routes::FilesApi,
    pub seed_api: crate::api::seed::routes::SeedApi,
    /// Shared with the bearer checker through request data.
    pub user_repository: Arc<dyn UserRepository>,
    pub jwt_config: JwtConfig,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let user_repository: Arc<dyn UserRepository> = Arc::new(UserRepositoryPostgres::new(pool));

        let jwt_config = JwtConfig::from_env();
        let password_hasher = Arc::new(BcryptPasswordHasher::new());
        let token_issuer = Arc::new(JwtTokenIssuer::new(jwt_config.secret.clone()));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let find_one_use_case = Arc::new(FindOneProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let delete_all_use_case = Arc::new(DeleteAllProductsUseCaseImpl {
            repository: product_repository,
            logger: logger.clone(),
        });

        // Auth use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            token_issuer: token_issuer.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUserUseCaseImpl {
            repository: user_repository.clone(),
            password_hasher: password_hasher.clone(),
            token_issuer: token_issuer.clone(),
            logger: logger.clone(),
        });
        let check_status_use_case = Arc::new(CheckAuthStatusUseCaseImpl {
            token_issuer,
            logger: logger.clone(),
        });

        // Seed orchestration
        let run_seed_use_case = Arc::new(RunSeedUseCaseImpl {
            delete_all_products_use_case: delete_all_use_case,
            create_product_use_case: create_use_case.clone(),
            user_repository: user_repository.clone(),
            password_hasher,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_all_use_case,
            find_one_use_case,
            update_use_case,
            delete_use_case,
        );

        let auth_api = crate::api::auth::routes::AuthApi::new(
            register_use_case,
            login_use_case,
            check_status_use_case,
        );

        let files_api = crate::api::files::routes::FilesApi::new(FilesConfig::from_env());
        let seed_api = crate::api::seed::routes::SeedApi::new(run_seed_use_case);

        Ok(Self {
            health_api,
            product_api,
            auth_api,
            files_api,
            seed_api,
            user_repository,
            jwt_config,
        })
    }
}
