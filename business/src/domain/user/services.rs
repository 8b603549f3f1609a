use uuid::Uuid;

use super::errors::AuthError;

/// One-way salted password hashing port. The stored hash is never reversible
/// and never equal to the plaintext input.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> Result<String, AuthError>;
    fn verify(&self, plain: &str, hash: &str) -> bool;
}

/// Signed, time-boxed session token port. Tokens encode only the user's
/// identifier; verification and role gating happen outside the auth service.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError>;
}
