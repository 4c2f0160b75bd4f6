//! Error types for lightbnb-db
//!
//! Lookup misses are not errors: repositories return `Option` for those.
//! Everything here is a failed interaction with the storage engine or a row
//! that could not be shaped into a domain type.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Result type alias for lightbnb-db operations
pub type Result<T> = std::result::Result<T, DbError>;

/// Failure while executing a statement or shaping its result
#[derive(Debug, Error)]
pub enum DbError {
    /// Storage engine unreachable (io, tls, pool exhausted or closed)
    #[error("database unavailable: {0}")]
    Connectivity(#[source] sqlx::Error),

    /// Statement rejected by a unique, foreign-key, not-null or check constraint
    #[error("constraint violation{}: {message}", constraint_suffix(.constraint))]
    ConstraintViolation {
        constraint: Option<String>,
        message: String,
    },

    /// Any other rejection by the storage engine (syntax, type mismatch, ...)
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// Column type the record conversion does not understand
    #[error("column '{column}' has unsupported type {type_name}")]
    UnsupportedColumn { column: String, type_name: String },

    /// Record could not be deserialized into the target model
    #[error("failed to decode {target} record: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An insert-with-returning statement produced no row
    #[error("insert into {table} returned no row")]
    MissingReturning { table: &'static str },
}

impl DbError {
    /// Create a decode error for the given model name
    pub fn decode(target: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { target, source }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity(_))
    }

    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, Self::ConstraintViolation { .. })
    }

    /// Short label used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Connectivity(_) => "connectivity",
            Self::ConstraintViolation { .. } => "constraint_violation",
            Self::Query(_) => "query",
            Self::UnsupportedColumn { .. } => "unsupported_column",
            Self::Decode { .. } => "decode",
            Self::MissingReturning { .. } => "missing_returning",
        }
    }
}

fn constraint_suffix(constraint: &Option<String>) -> String {
    constraint
        .as_deref()
        .map(|name| format!(" on '{name}'"))
        .unwrap_or_default()
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation {
                    constraint: db_err.constraint().map(str::to_owned),
                    message: db_err.message().to_owned(),
                },
                _ => Self::Query(sqlx::Error::Database(db_err)),
            },
            err @ (sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed) => Self::Connectivity(err),
            other => Self::Query(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_errors_are_connectivity() {
        let err: DbError = sqlx::Error::Io(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
        .into();

        assert!(err.is_connectivity());
        assert_eq!(err.kind(), "connectivity");
    }

    #[test]
    fn pool_timeout_is_connectivity() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(err.is_connectivity());
    }

    #[test]
    fn row_not_found_is_query_error() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::Query(_)));
        assert!(!err.is_constraint_violation());
    }

    #[test]
    fn constraint_display_names_constraint() {
        let err = DbError::ConstraintViolation {
            constraint: Some("users_email_key".to_owned()),
            message: "duplicate key value violates unique constraint".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "constraint violation on 'users_email_key': duplicate key value violates unique constraint"
        );

        let err = DbError::ConstraintViolation {
            constraint: None,
            message: "null value".to_owned(),
        };
        assert_eq!(err.to_string(), "constraint violation: null value");
    }
}
