/// Structured error types for rosterctl-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (rosterctl-cli) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use std::io;
use thiserror::Error;

/// Main error type for roster store operations
#[derive(Error, Debug)]
pub enum RosterError {
    /// The store is unreachable or failed in an unexpected way
    #[error("database error: {source}")]
    Database {
        #[from]
        source: rusqlite::Error,
    },

    /// A uniqueness, not-null, or range constraint rejected a write
    #[error("constraint violation: {reason}")]
    Constraint { reason: String },

    /// A foreign key target is missing
    #[error("no {entity} with id {id}")]
    MissingReference { entity: &'static str, id: i64 },

    /// An update or delete target does not exist
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A manager assignment would loop the management graph
    #[error("employee {employee_id} cannot report to employee {manager_id}: the management chain would loop back")]
    ManagerCycle { employee_id: i64, manager_id: i64 },

    /// Filesystem failure while creating the store location
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for roster store operations
pub type Result<T> = std::result::Result<T, RosterError>;

impl RosterError {
    /// Create a constraint violation error
    pub fn constraint(reason: impl Into<String>) -> Self {
        Self::Constraint {
            reason: reason.into(),
        }
    }

    /// Create a missing-reference error
    pub fn missing_reference(entity: &'static str, id: i64) -> Self {
        Self::MissingReference { entity, id }
    }

    /// Create a not-found error
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        Self::NotFound { entity, id }
    }

    /// Create a manager-cycle error
    pub fn manager_cycle(employee_id: i64, manager_id: i64) -> Self {
        Self::ManagerCycle {
            employee_id,
            manager_id,
        }
    }

    /// Classify a rusqlite failure on a write path.
    ///
    /// SQLite reports UNIQUE, NOT NULL, and CHECK failures with a constraint
    /// error code; those become `Constraint` so callers can tell a rejected
    /// write apart from an unreachable store.
    pub fn from_write(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(e, ref msg)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Constraint {
                    reason: msg
                        .clone()
                        .unwrap_or_else(|| "constraint violation".to_string()),
                }
            }
            other => Self::Database { source: other },
        }
    }
}
