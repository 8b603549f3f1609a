use async_trait::async_trait;

use crate::domain::user::errors::AuthError;
use crate::domain::user::model::User;

/// Session echo for an already-authenticated user, with identifier and hash
/// stripped and a fresh token attached.
pub struct SessionStatus {
    pub email: String,
    pub full_name: String,
    pub roles: Vec<String>,
    pub token: String,
}

#[async_trait]
pub trait CheckAuthStatusUseCase: Send + Sync {
    async fn execute(&self, user: User) -> Result<SessionStatus, AuthError>;
}
