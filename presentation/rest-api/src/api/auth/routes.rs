use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::check_status::CheckAuthStatusUseCase;
use business::domain::user::use_cases::login::{LoginUserParams, LoginUserUseCase};
use business::domain::user::use_cases::register::{RegisterUserParams, RegisterUserUseCase};

use crate::api::auth::dto::{
    LoggedInUserResponse, LoginUserRequest, RegisterUserRequest, RegisteredUserResponse,
    SessionStatusResponse,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct AuthApi {
    register_use_case: Arc<dyn RegisterUserUseCase>,
    login_use_case: Arc<dyn LoginUserUseCase>,
    check_status_use_case: Arc<dyn CheckAuthStatusUseCase>,
}

impl AuthApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterUserUseCase>,
        login_use_case: Arc<dyn LoginUserUseCase>,
        check_status_use_case: Arc<dyn CheckAuthStatusUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            login_use_case,
            check_status_use_case,
        }
    }
}

/// Account and session API
#[OpenApi]
impl AuthApi {
    /// Register a new account
    ///
    /// Stores only a one-way hash of the password and returns a session token.
    #[oai(path = "/auth/register", method = "post", tag = "ApiTags::Auth")]
    async fn register(&self, body: Json<RegisterUserRequest>) -> RegisterResponse {
        let params = RegisterUserParams {
            email: body.0.email,
            password: body.0.password,
            full_name: body.0.full_name,
        };

        match self.register_use_case.execute(params).await {
            Ok(user) => RegisterResponse::Created(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterResponse::BadRequest(json),
                    _ => RegisterResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in with email and password
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginUserRequest>) -> LoginResponse {
        let params = LoginUserParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(user) => LoginResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Refresh the session of an authenticated user
    #[oai(path = "/auth/check-status", method = "get", tag = "ApiTags::Auth")]
    async fn check_status(&self, auth: JwtBearer) -> CheckStatusResponse {
        match self.check_status_use_case.execute(auth.0).await {
            Ok(status) => CheckStatusResponse::Ok(Json(status.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CheckStatusResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterResponse {
    #[oai(status = 201)]
    Created(Json<RegisteredUserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<LoggedInUserResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CheckStatusResponse {
    #[oai(status = 200)]
    Ok(Json<SessionStatusResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
