//! Validation errors for user-supplied task input.

use super::category::Category;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected input; the operation is aborted and state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming surrounding whitespace.
    EmptyTitle,
    /// Move destination equals the source list.
    SameCategory(Category),
    /// Input does not name one of the five categories.
    UnknownCategory(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task can not be empty"),
            Self::SameCategory(category) => {
                write!(f, "task is already in {category}")
            }
            Self::UnknownCategory(value) => write!(f, "not a valid category: `{value}`"),
        }
    }
}

impl Error for ValidationError {}
