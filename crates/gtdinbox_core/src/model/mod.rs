//! Domain model for GTD task capture.
//!
//! # Responsibility
//! - Define the fixed category set and the task record stored under it.
//! - Own input validation shared by store and session layers.
//!
//! # Invariants
//! - The category set is closed and ordered; it never grows at runtime.
//! - A task's title and creation time never change after construction.
//! - Task identity is session-scoped; only content is persisted.

pub mod category;
pub mod task;
pub mod validation;
