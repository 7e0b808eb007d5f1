//! Core of the GTD inbox: task model, category store, persistence and the
//! interactive session state machine.
//! This crate is the single source of truth for task invariants.

pub mod config;
pub mod logging;
pub mod model;
pub mod session;
pub mod store;

pub use config::AppConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::category::Category;
pub use model::task::{Task, TaskId, TaskStatus, CREATED_AT_FORMAT};
pub use model::validation::ValidationError;
pub use session::confirm::Confirmation;
pub use session::menu::MenuState;
pub use session::terminal::Terminal;
pub use session::Session;
pub use store::persist::{load_store, save_store, StoreLoad, DEFAULT_STORE_FILE};
pub use store::task_store::TaskStore;
pub use store::{parse_index, IndexError, StoreError, StoreIssue, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
