//! SQLSTATE classification helpers.
//!
//! The application is expected to run against a partially provisioned
//! schema (soft-migration tolerance): every read treats "relation does not
//! exist" as zero rows instead of an error. Detection is a single canonical
//! SQLSTATE code check, never message-substring matching.

/// SQLSTATE 42P01: undefined_table.
const UNDEFINED_TABLE: &str = "42P01";

/// SQLSTATE 23505: unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

/// True when the error means the backing relation has not been created yet.
pub fn undefined_table(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNDEFINED_TABLE))
}

/// True when the error is a unique-constraint violation.
pub fn unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some(UNIQUE_VIOLATION))
}

/// Map "relation does not exist" to the type's empty value; pass everything
/// else through unchanged.
pub fn absorb_missing<T: Default>(result: Result<T, sqlx::Error>) -> Result<T, sqlx::Error> {
    match result {
        Err(ref err) if undefined_table(err) => Ok(T::default()),
        other => other,
    }
}
