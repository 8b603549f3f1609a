use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::AuthError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::{PasswordHasher, TokenIssuer};
use crate::domain::user::use_cases::register::{
    RegisterUserParams, RegisterUserUseCase, RegisteredUser,
};

pub struct RegisterUserUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_issuer: Arc<dyn TokenIssuer>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterUserUseCase for RegisterUserUseCaseImpl {
    async fn execute(&self, params: RegisterUserParams) -> Result<RegisteredUser, AuthError> {
        self.logger
            .info(&format!("Registering user: {}", params.email));

        let password_hash = self.password_hasher.hash(&params.password)?;
        let user = User::new(params.email, password_hash, params.full_name);

        self.repository.insert(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated(detail) => AuthError::DuplicatedEmail(detail),
            other => {
                self.logger.error(&format!("User insert failed: {}", other));
                AuthError::Repository(other)
            }
        })?;

        let token = self.token_issuer.issue(user.id)?;

        self.logger
            .info(&format!("User registered with id: {}", user.id));
        Ok(RegisteredUser {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            roles: user.roles,
            token,
        })
    }
}
