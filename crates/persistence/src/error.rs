// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use campus_review_domain::DomainError;

/// Errors raised by the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A statement failed inside `SQLite`.
    DatabaseError(String),
    /// The database could not be opened.
    DatabaseConnectionFailed(String),
    /// Embedded migrations could not be applied.
    MigrationFailed(String),
    /// A raw PRAGMA or helper query failed.
    QueryFailed(String),
    /// The database location is unusable.
    InitializationError(String),
    /// `PRAGMA foreign_keys` reports enforcement is off.
    ForeignKeyEnforcementNotEnabled,
    /// An update was requested with no fields to write.
    EmptyUpdate(String),
    /// A stored row holds a value the domain does not recognise.
    CorruptRecord(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::EmptyUpdate(table) => write!(f, "No fields to update in {table}"),
            Self::CorruptRecord(msg) => write!(f, "Corrupt record: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Lookups translate a missing row into `Ok(None)` before conversion.
impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::CorruptRecord(err.to_string())
    }
}
