use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenIssuer};
use crate::domain::user::use_cases::login::{LoggedInUser, LoginUserParams, LoginUserUseCase};

pub struct LoginUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUserUseCase for LoginUserUseCaseImpl {
    async fn execute(&self, params: LoginUserParams) -> Result<LoggedInUser, AuthError> {
        // Only the credentials projection leaves the store; the caller gets
        // the same error whether the email is unknown or the password wrong.
        let credentials = self
            .repository
            .find_credentials_by_email(&params.email)
            .await?;

        let Some(credentials) = credentials else {
            self.logger
                .debug(&format!("Login failed, unknown email: {}", params.email));
            return Err(AuthError::InvalidCredentials);
        };

        if !self
            .password_hasher
            .verify(&params.password, &credentials.password_hash)
        {
            self.logger
                .debug(&format!("Login failed, bad password: {}", params.email));
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(credentials.id)?;

        self.logger
            .info(&format!("User logged in: {}", credentials.id));
        Ok(LoggedInUser {
            email: credentials.email,
            token,
        })
    }
}
