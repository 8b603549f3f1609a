use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::errors::AuthError;

pub struct RegisterUserParams {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Attributes echoed back after registration plus a fresh session token.
/// Never carries the password hash or the `is_active` flag.
#[derive(Debug)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub token: String,
}

#[async_trait]
pub trait RegisterUserUseCase: Send + Sync {
    async fn execute(&self, params: RegisterUserParams) -> Result<RegisteredUser, AuthError>;
}
