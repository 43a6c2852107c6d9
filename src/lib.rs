//! # Food Delivery - relational schema and seed data
//!
//! An eight-table schema for a food-delivery domain on SQLite:
//! users, restaurants, menu items, delivery partners, orders, order items,
//! deliveries and reviews.
//!
//! The crate provides:
//! - DDL with keys, indexes, uniqueness, range and enumeration CHECKs
//! - Literal seed rows for demonstration
//! - Typed insert and `SELECT *` operations per table
//! - Catalog queries (`SHOW TABLES`, `DESC <table>`) and row counts
//! - An advisory audit of order status against delivery status

pub mod model;
pub mod storage;
pub mod audit;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use model::{DeliveryStatus, OrderStatus, PaymentMethod, PaymentStatus};
pub use storage::SqliteStore;

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[source] rusqlite::Error),

    #[error("{kind} constraint violated: {message}")]
    Constraint { kind: ConstraintKind, message: String },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Database is not empty; seed data needs an empty database")]
    NotEmpty,
}

impl Error {
    /// The violated constraint, if this error is a constraint violation
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            Error::Constraint { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Which declarative constraint the engine rejected a statement for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
    NotNull,
    PrimaryKey,
    Other,
}

impl ConstraintKind {
    fn from_extended_code(code: std::os::raw::c_int) -> Self {
        match code {
            rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE => ConstraintKind::Unique,
            rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY => ConstraintKind::ForeignKey,
            rusqlite::ffi::SQLITE_CONSTRAINT_CHECK => ConstraintKind::Check,
            rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL => ConstraintKind::NotNull,
            rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY => ConstraintKind::PrimaryKey,
            _ => ConstraintKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::Unique => "unique",
            ConstraintKind::ForeignKey => "foreign key",
            ConstraintKind::Check => "check",
            ConstraintKind::NotNull => "not null",
            ConstraintKind::PrimaryKey => "primary key",
            ConstraintKind::Other => "other",
        }
    }
}

impl std::fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(failure, message) = &err {
            if failure.code == rusqlite::ErrorCode::ConstraintViolation {
                return Error::Constraint {
                    kind: ConstraintKind::from_extended_code(failure.extended_code),
                    message: message.clone().unwrap_or_else(|| failure.to_string()),
                };
            }
        }
        Error::Storage(err)
    }
}
