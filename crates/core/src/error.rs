//! Error types for kollect
//!
//! This module defines all error types used throughout the collections.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every operation that can break a container's type invariant reports the
//! same [`Error::InvalidType`] shape: the operation, the side (for two-sided
//! operations such as `chain`, `zip` and `unpair`), the expected constraint
//! and what was found instead.

use crate::constraint::TypeConstraint;
use std::fmt;
use thiserror::Error;

/// Result type alias for kollect operations
pub type Result<T> = std::result::Result<T, Error>;

/// The operation during which a validation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Single append
    Add,
    /// Bulk append
    AddAll,
    /// Indexed write
    Set,
    /// Appending another container
    Chain,
    /// Pairing two containers
    Zip,
    /// Reconstructing two containers from pairs
    Unpair,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::AddAll => "add_all",
            Operation::Set => "set",
            Operation::Chain => "chain",
            Operation::Zip => "zip",
            Operation::Unpair => "unpair",
        };
        f.write_str(name)
    }
}

/// Which of two sources a two-sided operation was reading from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The receiver / left element of a pair
    Left,
    /// The argument / right element of a pair
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Error types for kollect
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A value (or a whole container, for `chain`) failed a type constraint
    #[error("Invalid type in {operation}{}: expected {expected}, found {found}", side_suffix(.side))]
    InvalidType {
        /// Operation that performed the check
        operation: Operation,
        /// Failing source, when the operation has two
        side: Option<Side>,
        /// The constraint that was enforced
        expected: TypeConstraint,
        /// Type name of the rejected value or constraint
        found: String,
    },

    /// A type name or container kind could not be turned into a container
    #[error("Construction error: {0}")]
    Construction(String),

    /// Caller passed an argument outside the operation's domain
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration text could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

fn side_suffix(side: &Option<Side>) -> String {
    match side {
        Some(side) => format!(" ({} side)", side),
        None => String::new(),
    }
}

impl Error {
    /// Build an `InvalidType` error
    pub fn invalid_type(
        operation: Operation,
        side: Option<Side>,
        expected: &TypeConstraint,
        found: impl Into<String>,
    ) -> Self {
        Error::InvalidType {
            operation,
            side,
            expected: expected.clone(),
            found: found.into(),
        }
    }

    /// Build a `Construction` error
    pub fn construction(msg: impl Into<String>) -> Self {
        Error::Construction(msg.into())
    }

    /// Build an `InvalidArgument` error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Check if this is an `InvalidType` error
    pub fn is_invalid_type(&self) -> bool {
        matches!(self, Error::InvalidType { .. })
    }

    /// Check if this is a `Construction` error
    pub fn is_construction(&self) -> bool {
        matches!(self, Error::Construction(_))
    }

    /// The failing side of an `InvalidType` error, if recorded
    pub fn side(&self) -> Option<Side> {
        match self {
            Error::InvalidType { side, .. } => *side,
            _ => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
