/// The credential mismatch variant is shared by "unknown email" and "wrong
/// password" so callers cannot tell the two apart; internal log messages may.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("auth.invalid_credentials")]
    InvalidCredentials,
    #[error("auth.duplicated_email: {0}")]
    DuplicatedEmail(String),
    #[error("auth.token_issue_failed")]
    TokenIssueFailed,
    #[error("auth.password_hash_failed")]
    PasswordHashFailed,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
