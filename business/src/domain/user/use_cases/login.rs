use async_trait::async_trait;

use crate::domain::user::errors::AuthError;

pub struct LoginUserParams {
    pub email: String,
    pub password: String,
}

/// Login result: the email plus a fresh session token, nothing else — in
/// particular neither the identifier nor the stored hash.
#[derive(Debug)]
pub struct LoggedInUser {
    pub email: String,
    pub token: String,
}

#[async_trait]
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, params: LoginUserParams) -> Result<LoggedInUser, AuthError>;
}
