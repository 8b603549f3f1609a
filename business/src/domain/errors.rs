/// Repository errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
///
/// `Duplicated` keeps the store's constraint detail (Postgres `23505`) so the
/// caller gets an actionable message; every other store failure degrades to
/// `DatabaseError` and the detail only reaches the log sink.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.duplicated: {0}")]
    Duplicated(String),
    #[error("repository.database_error")]
    DatabaseError,
}
