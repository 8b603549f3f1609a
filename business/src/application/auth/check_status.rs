use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::User;
use crate::domain::user::services::TokenIssuer;
use crate::domain::user::use_cases::check_status::{CheckAuthStatusUseCase, SessionStatus};

pub struct CheckAuthStatusUseCaseImpl {
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckAuthStatusUseCase for CheckAuthStatusUseCaseImpl {
    async fn execute(&self, user: User) -> Result<SessionStatus, AuthError> {
        let token = self.token_issuer.issue(user.id)?;

        self.logger
            .debug(&format!("Session refreshed for user: {}", user.id));
        Ok(SessionStatus {
            email: user.email,
            full_name: user.full_name,
            roles: user.roles,
            token,
        })
    }
}
