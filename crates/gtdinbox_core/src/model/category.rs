//! Fixed GTD category set.

use super::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One of the five GTD lists a task can live in.
///
/// Declaration order is the canonical display order, and `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Inbox")]
    Inbox,
    #[serde(rename = "Next Actions")]
    NextActions,
    #[serde(rename = "Waiting")]
    Waiting,
    #[serde(rename = "Projects")]
    Projects,
    #[serde(rename = "Someday/Maybe")]
    SomedayMaybe,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Inbox,
        Category::NextActions,
        Category::Waiting,
        Category::Projects,
        Category::SomedayMaybe,
    ];

    /// Storage key used in the persisted record.
    pub fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::NextActions => "Next Actions",
            Self::Waiting => "Waiting",
            Self::Projects => "Projects",
            Self::SomedayMaybe => "Someday/Maybe",
        }
    }

    /// One-letter menu code (first letter of the label).
    pub fn code(self) -> char {
        match self {
            Self::Inbox => 'I',
            Self::NextActions => 'N',
            Self::Waiting => 'W',
            Self::Projects => 'P',
            Self::SomedayMaybe => 'S',
        }
    }

    /// Menu entry with the code bracketed, e.g. `[N]ext Actions`.
    pub fn menu_entry(self) -> String {
        let label = self.label();
        let rest = label.get(1..).unwrap_or_default();
        format!("[{}]{rest}", self.code())
    }

    /// Parses a storage label such as `Next Actions`.
    pub fn from_label(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label() == trimmed)
            .ok_or_else(|| ValidationError::UnknownCategory(trimmed.to_string()))
    }

    /// Parses a one-letter menu code, case-insensitive.
    pub fn from_code(value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim().to_ascii_uppercase();
        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::ALL
                .into_iter()
                .find(|category| category.code() == code)
                .ok_or(ValidationError::UnknownCategory(normalized)),
            _ => Err(ValidationError::UnknownCategory(normalized)),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
