use business::domain::errors::RepositoryError;
use sqlx::postgres::PgDatabaseError;

/// PostgreSQL unique-constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Translates driver errors into domain repository errors.
///
/// Unique-constraint violations keep the constraint detail so callers get an
/// actionable duplicate message; every other failure is logged with full
/// detail here and degrades to the generic database error.
pub(crate) fn map_sqlx_error(operation: &str, error: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &error
        && db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
    {
        let detail = db_err
            .try_downcast_ref::<PgDatabaseError>()
            .and_then(|pg| pg.detail())
            .unwrap_or_else(|| db_err.message());
        return RepositoryError::Duplicated(detail.to_string());
    }

    tracing::error!(target: "persistence", "{} failed: {}", operation, error);
    RepositoryError::DatabaseError
}
