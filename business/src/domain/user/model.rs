use uuid::Uuid;

pub const ROLE_USER: &str = "user";
pub const ROLE_ADMIN: &str = "admin";

/// Registered account. `password_hash` never crosses the service boundary;
/// neither does `is_active`, which only the authentication gatekeeper reads.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub is_active: bool,
    pub roles: Vec<String>,
}

impl User {
    pub fn new(email: String, password_hash: String, full_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.to_lowercase(),
            password_hash,
            full_name,
            is_active: true,
            roles: vec![ROLE_USER.to_string()],
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        email: String,
        password_hash: String,
        full_name: String,
        is_active: bool,
        roles: Vec<String>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            full_name,
            is_active,
            roles,
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// Login-only projection of a user: identifier, email and stored hash.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
}
