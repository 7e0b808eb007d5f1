//! Category-keyed task storage and its JSON file persistence.
//!
//! # Responsibility
//! - Hold every task under exactly one of the five categories.
//! - Load the persisted record with repair, and save it after mutations.
//!
//! # Invariants
//! - All five categories are present after every constructor and load.
//! - Failed mutations leave the store unchanged.
//! - Load never fails; unusable input is recovered and reported as
//!   `StoreIssue` values.

use crate::model::category::Category;
use crate::model::task::TaskId;
use crate::model::validation::ValidationError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod persist;
pub mod task_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Rejected task position, or a position that is not a number at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    NotANumber(String),
    Negative(i64),
    OutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },
    UnknownTask(TaskId),
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotANumber(value) => write!(f, "enter a valid number, got `{value}`"),
            Self::Negative(index) => write!(f, "not a valid index: {index}"),
            Self::OutOfRange {
                category,
                index,
                len,
            } => write!(
                f,
                "not a valid index: {index} ({category} has {len} task(s))"
            ),
            Self::UnknownTask(id) => write!(f, "task no longer exists: {id}"),
        }
    }
}

impl Error for IndexError {}

/// Error returned by store mutations and saves.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Index(IndexError),
    Encode(serde_json::Error),
    Persistence {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Index(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode store: {err}"),
            Self::Persistence { path, source } => {
                write!(f, "unable to save `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Index(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::Persistence { source, .. } => Some(source),
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<IndexError> for StoreError {
    fn from(value: IndexError) -> Self {
        Self::Index(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Condition recovered while loading the persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreIssue {
    /// No file yet; started with empty categories.
    NotFound { path: PathBuf },
    /// The file exists but could not be read; full reset.
    Unreadable { path: PathBuf, reason: String },
    /// The file could not be parsed; full reset.
    Corrupt { path: PathBuf, reason: String },
    /// Parsed record lacked this category; inserted empty.
    MissingCategory(Category),
}

impl StoreIssue {
    /// Stable short code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::Unreadable { .. } => "unreadable",
            Self::Corrupt { .. } => "corrupt",
            Self::MissingCategory(_) => "missing_category",
        }
    }
}

impl Display for StoreIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { path } => write!(
                f,
                "No task file at `{}`. Starting a new inbox.",
                path.display()
            ),
            Self::Unreadable { path, reason } => write!(
                f,
                "ERROR: Unable to read `{}` ({reason}). Check permissions. Initialized new inbox.",
                path.display()
            ),
            Self::Corrupt { path, reason } => write!(
                f,
                "ERROR: Corrupted JSON file `{}` ({reason}). Initialized new inbox.",
                path.display()
            ),
            Self::MissingCategory(category) => {
                write!(f, "ERROR: Corrupted JSON file, no {category} in file")
            }
        }
    }
}

/// Parses a user-typed task position.
///
/// Negative numbers parse but are rejected; anything non-integer is
/// `NotANumber`.
pub fn parse_index(input: &str) -> Result<usize, IndexError> {
    let trimmed = input.trim();
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| IndexError::NotANumber(trimmed.to_string()))?;
    usize::try_from(value).map_err(|_| IndexError::Negative(value))
}

#[cfg(test)]
mod tests {
    use super::{parse_index, IndexError};

    #[test]
    fn parse_index_accepts_padded_numbers() {
        assert_eq!(parse_index(" 3 ").unwrap(), 3);
        assert_eq!(parse_index("0").unwrap(), 0);
    }

    #[test]
    fn parse_index_rejects_negative_and_text() {
        assert_eq!(parse_index("-1").unwrap_err(), IndexError::Negative(-1));
        assert_eq!(
            parse_index("two").unwrap_err(),
            IndexError::NotANumber("two".to_string())
        );
        assert!(matches!(
            parse_index("").unwrap_err(),
            IndexError::NotANumber(_)
        ));
    }
}
