use std::sync::Arc;

use poem_openapi::{Object, OpenApi, payload::Json};

use business::domain::seed::use_cases::run::RunSeedUseCase;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

#[derive(Debug, Clone, Object)]
pub struct SeedResponse {
    pub message: String,
}

pub struct SeedApi {
    run_seed_use_case: Arc<dyn RunSeedUseCase>,
}

impl SeedApi {
    pub fn new(run_seed_use_case: Arc<dyn RunSeedUseCase>) -> Self {
        Self { run_seed_use_case }
    }
}

/// Fixture data API
#[OpenApi]
impl SeedApi {
    /// Reset the catalog and accounts to fixture data
    ///
    /// Wipes every product and user, then re-inserts the fixtures.
    #[oai(path = "/seed", method = "get", tag = "ApiTags::Seed")]
    async fn run_seed(&self) -> RunSeedResponse {
        match self.run_seed_use_case.execute().await {
            Ok(message) => RunSeedResponse::Ok(Json(SeedResponse { message })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                RunSeedResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RunSeedResponse {
    #[oai(status = 200)]
    Ok(Json<SeedResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
