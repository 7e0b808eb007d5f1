//! In-memory task store.
//!
//! # Responsibility
//! - Own the category -> ordered task list mapping.
//! - Provide validated positional and id-addressed mutations.
//!
//! # Invariants
//! - Every `Category` key is present, possibly with an empty list.
//! - A task lives in exactly one list; moves append to the destination.
//! - Removing a task shifts later positions down by one.

use super::{IndexError, StoreResult};
use crate::model::category::Category;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::model::validation::ValidationError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Category-keyed task collection.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStore {
    lists: BTreeMap<Category, Vec<Task>>,
    /// Unknown top-level keys from the loaded record, written back verbatim.
    passthrough: Map<String, Value>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Creates a store with all five categories empty.
    pub fn new() -> Self {
        Self::from_parts(BTreeMap::new(), Map::new())
    }

    /// Builds a store from decoded parts, filling absent categories.
    pub(crate) fn from_parts(
        mut lists: BTreeMap<Category, Vec<Task>>,
        passthrough: Map<String, Value>,
    ) -> Self {
        for category in Category::ALL {
            lists.entry(category).or_default();
        }
        Self { lists, passthrough }
    }

    /// Tasks of one category in display order.
    pub fn tasks(&self, category: Category) -> &[Task] {
        self.lists
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn len(&self, category: Category) -> usize {
        self.tasks(category).len()
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.tasks(category).is_empty()
    }

    /// Task count across all categories.
    pub fn total_len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// Unknown keys preserved from the loaded record.
    pub fn passthrough(&self) -> &Map<String, Value> {
        &self.passthrough
    }

    /// Appends a new open task.
    ///
    /// # Errors
    /// - `ValidationError::EmptyTitle` when `title` is blank.
    pub fn append(&mut self, category: Category, title: &str) -> StoreResult<&Task> {
        let task = Task::new(title)?;
        Ok(self.push(category, task))
    }

    /// Appends an already constructed task, keeping its content as is.
    pub fn push(&mut self, category: Category, task: Task) -> &Task {
        let list = self.list_mut(category);
        list.push(task);
        &list[list.len() - 1]
    }

    /// Removes and returns the task at `index`.
    pub fn remove_at(&mut self, category: Category, index: usize) -> StoreResult<Task> {
        self.check_index(category, index)?;
        Ok(self.list_mut(category).remove(index))
    }

    /// Whether toggling the task at `index` would reopen it.
    pub fn is_reopen(&self, category: Category, index: usize) -> StoreResult<bool> {
        self.check_index(category, index)?;
        Ok(self.tasks(category)[index].status() == TaskStatus::Closed)
    }

    /// Flips the status of the task at `index` and returns the new status.
    ///
    /// Reopen confirmation is the caller's concern; see `is_reopen`.
    pub fn toggle_status(&mut self, category: Category, index: usize) -> StoreResult<TaskStatus> {
        self.check_index(category, index)?;
        Ok(self.list_mut(category)[index].toggle())
    }

    /// Moves the task at `index` from `source` to the end of `dest`.
    ///
    /// # Errors
    /// - `ValidationError::SameCategory` when `dest == source`.
    /// - `IndexError::OutOfRange` when `index` is not in `source`.
    ///
    /// Both checks run before anything is detached.
    pub fn move_task(&mut self, source: Category, index: usize, dest: Category) -> StoreResult<()> {
        if source == dest {
            return Err(ValidationError::SameCategory(dest).into());
        }
        self.check_index(source, index)?;
        let task = self.list_mut(source).remove(index);
        self.list_mut(dest).push(task);
        Ok(())
    }

    /// Resolves a listed position to the task's stable id.
    pub fn task_id_at(&self, category: Category, index: usize) -> StoreResult<TaskId> {
        self.check_index(category, index)?;
        Ok(self.tasks(category)[index].id())
    }

    /// Current position of `id` within `category`.
    pub fn position_of(&self, category: Category, id: TaskId) -> Option<usize> {
        self.tasks(category).iter().position(|task| task.id() == id)
    }

    pub fn remove_by_id(&mut self, category: Category, id: TaskId) -> StoreResult<Task> {
        let index = self.require_position(category, id)?;
        Ok(self.list_mut(category).remove(index))
    }

    pub fn toggle_status_by_id(
        &mut self,
        category: Category,
        id: TaskId,
    ) -> StoreResult<TaskStatus> {
        let index = self.require_position(category, id)?;
        Ok(self.list_mut(category)[index].toggle())
    }

    pub fn move_by_id(&mut self, source: Category, id: TaskId, dest: Category) -> StoreResult<()> {
        if source == dest {
            return Err(ValidationError::SameCategory(dest).into());
        }
        let index = self.require_position(source, id)?;
        self.move_task(source, index, dest)
    }

    fn require_position(&self, category: Category, id: TaskId) -> Result<usize, IndexError> {
        self.position_of(category, id)
            .ok_or(IndexError::UnknownTask(id))
    }

    fn check_index(&self, category: Category, index: usize) -> Result<(), IndexError> {
        let len = self.len(category);
        if index < len {
            Ok(())
        } else {
            Err(IndexError::OutOfRange {
                category,
                index,
                len,
            })
        }
    }

    fn list_mut(&mut self, category: Category) -> &mut Vec<Task> {
        self.lists.entry(category).or_default()
    }
}

/// Serializes as one JSON object: the five category labels plus any
/// passthrough keys.
impl Serialize for TaskStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = self
            .passthrough
            .iter()
            .filter(|(key, _)| Category::from_label(key).is_err());
        let mut map = serializer.serialize_map(None)?;
        for category in Category::ALL {
            map.serialize_entry(category.label(), self.tasks(category))?;
        }
        for (key, value) in extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
