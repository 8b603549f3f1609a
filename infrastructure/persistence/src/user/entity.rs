use sqlx::FromRow;
use uuid::Uuid;

use business::domain::user::model::{User, UserCredentials};

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub is_active: bool,
    pub roles: Vec<String>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            self.id,
            self.email,
            self.password_hash,
            self.full_name,
            self.is_active,
            self.roles,
        )
    }
}

/// Login projection; nothing beyond id, email and the stored hash is read.
#[derive(Debug, FromRow)]
pub struct UserCredentialsEntity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}

impl UserCredentialsEntity {
    pub fn into_domain(self) -> UserCredentials {
        UserCredentials {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}
