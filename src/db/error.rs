//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Entity not found: {entity_type} with id '{id}'")]
    #[diagnostic(code(crud_trio::db::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("Constraint violation: {message}")]
    #[diagnostic(code(crud_trio::db::constraint))]
    Constraint { message: String },

    /// The row exists but is not in a state that allows the operation.
    #[error("Invalid state: {message}")]
    #[diagnostic(code(crud_trio::db::invalid_state))]
    InvalidState { message: String },

    #[error("Database error: {message}")]
    #[diagnostic(code(crud_trio::db::database_error))]
    Database { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(crud_trio::db::migration_error))]
    Migration { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(crud_trio::db::connection_error))]
    Connection { message: String },
}

impl DbError {
    pub fn not_found(entity_type: &str, id: impl ToString) -> Self {
        DbError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        // Unique, NOT NULL and CHECK failures are caller mistakes, not outages.
        if let Some(db_err) = e.as_database_error()
            && matches!(
                db_err.kind(),
                sqlx::error::ErrorKind::UniqueViolation
                    | sqlx::error::ErrorKind::NotNullViolation
                    | sqlx::error::ErrorKind::CheckViolation
            )
        {
            return DbError::Constraint {
                message: db_err.message().to_string(),
            };
        }

        DbError::Database {
            message: e.to_string(),
        }
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
