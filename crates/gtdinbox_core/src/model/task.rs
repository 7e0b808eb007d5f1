//! Task record and its status lifecycle.
//!
//! # Invariants
//! - `title` is non-empty and trimmed for tasks built through `Task::new`.
//! - `created_at` has second precision and serializes as
//!   `YYYY-MM-DD HH:MM:SS`.
//! - `id` is generated per process and never written to disk.

use super::validation::ValidationError;
use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session-scoped stable task identifier.
pub type TaskId = Uuid;

/// Storage format for `created_at`.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Completion state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Open,
    Closed,
}

impl TaskStatus {
    /// Status after one toggle.
    pub fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }

    /// Checkbox glyph used in task listings.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Open => "[ ]",
            Self::Closed => "[X]",
        }
    }
}

/// One captured task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(skip, default = "Uuid::new_v4")]
    id: TaskId,
    title: String,
    // Older files spell the key with a space.
    #[serde(alias = "created at", with = "created_at_format")]
    created_at: NaiveDateTime,
    status: TaskStatus,
}

impl Task {
    /// Creates an open task stamped with the current local time.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTitle` when `title` is blank after trimming.
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        let now = Local::now().naive_local();
        Self::with_created_at(title, now.with_nanosecond(0).unwrap_or(now))
    }

    /// Creates an open task with a caller-provided creation time.
    ///
    /// Sub-second precision is dropped to match the storage format.
    pub fn with_created_at(
        title: &str,
        created_at: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            title: title.to_string(),
            created_at: created_at.with_nanosecond(0).unwrap_or(created_at),
            status: TaskStatus::Open,
        })
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    /// Creation time in storage format.
    pub fn created_at_display(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }

    /// Flips `open <-> closed` and returns the new status.
    pub(crate) fn toggle(&mut self) -> TaskStatus {
        self.status = self.status.toggled();
        self.status
    }
}

/// Content equality; the session-scoped `id` is ignored so a reloaded task
/// compares equal to the one that was saved.
impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
            && self.created_at == other.created_at
            && self.status == other.status
    }
}

impl Eq for Task {}

mod created_at_format {
    use super::CREATED_AT_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &NaiveDateTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(CREATED_AT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), CREATED_AT_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Task, TaskStatus};

    #[test]
    fn toggled_flips_both_ways() {
        assert_eq!(TaskStatus::Open.toggled(), TaskStatus::Closed);
        assert_eq!(TaskStatus::Closed.toggled(), TaskStatus::Open);
    }

    #[test]
    fn new_task_trims_title_and_drops_subseconds() {
        let task = Task::new("  Buy milk  ").unwrap();
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.status(), TaskStatus::Open);
        assert_eq!(task.created_at_display().len(), "YYYY-MM-DD HH:MM:SS".len());
    }

    #[test]
    fn equality_ignores_session_id() {
        let task = Task::new("same").unwrap();
        let mut copy = task.clone();
        copy.id = uuid::Uuid::new_v4();
        assert_eq!(task, copy);
    }
}
