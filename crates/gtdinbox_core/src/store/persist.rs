//! JSON file persistence with load-time repair.
//!
//! # Responsibility
//! - Read the persisted record and recover from missing, unreadable or
//!   corrupt files.
//! - Write the full record after every mutation.
//!
//! # Invariants
//! - `load_store` always returns a store with all five categories.
//! - `save_store` replaces the target through a sibling temp file, so a
//!   failed save leaves the previous file content in place.
//! - No file locking; one process per file is assumed.

use super::task_store::TaskStore;
use super::{StoreError, StoreIssue, StoreResult};
use crate::model::category::Category;
use crate::model::task::Task;
use log::{error, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Default store file name, relative to the working directory.
pub const DEFAULT_STORE_FILE: &str = "inbox.json";

const JSON_INDENT: &[u8] = b"    ";

/// Loaded store plus every condition that was recovered on the way.
#[derive(Debug, Clone)]
pub struct StoreLoad {
    pub store: TaskStore,
    pub issues: Vec<StoreIssue>,
}

/// Loads the store at `path`, repairing instead of failing.
///
/// - Missing, unreadable or unparsable file: all categories reset to empty.
/// - Parsed record without some categories: those are inserted empty and
///   the rest keep their content.
///
/// # Side effects
/// - Emits `store_load` / `store_repair` logging events.
pub fn load_store(path: impl AsRef<Path>) -> StoreLoad {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!("event=store_load module=store status=start");

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return reset(
                StoreIssue::NotFound {
                    path: path.to_path_buf(),
                },
                started_at,
            );
        }
        Err(err) => {
            return reset(
                StoreIssue::Unreadable {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                },
                started_at,
            );
        }
    };

    let (store, missing) = match decode_record(&raw) {
        Ok(decoded) => decoded,
        Err(err) => {
            return reset(
                StoreIssue::Corrupt {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                },
                started_at,
            );
        }
    };

    let issues = missing
        .into_iter()
        .map(|category| {
            warn!(
                "event=store_repair module=store status=repaired issue=missing_category category={:?}",
                category.label()
            );
            StoreIssue::MissingCategory(category)
        })
        .collect::<Vec<_>>();

    info!(
        "event=store_load module=store status=ok duration_ms={} tasks={} repaired={}",
        started_at.elapsed().as_millis(),
        store.total_len(),
        issues.len()
    );
    StoreLoad { store, issues }
}

/// Saves the full store to `path`.
///
/// Parent directories are created on demand. On failure the in-memory
/// store is untouched and the previous file content survives.
///
/// # Errors
/// - `StoreError::Persistence` when the temp file cannot be written or
///   renamed into place.
pub fn save_store(store: &TaskStore, path: impl AsRef<Path>) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();

    let result = encode_record(store).and_then(|bytes| write_replace(path, &bytes));
    match &result {
        Ok(()) => info!(
            "event=store_save module=store status=ok duration_ms={} tasks={}",
            started_at.elapsed().as_millis(),
            store.total_len()
        ),
        Err(err) => error!(
            "event=store_save module=store status=error duration_ms={} error_code=store_save_failed error={}",
            started_at.elapsed().as_millis(),
            err
        ),
    }
    result
}

/// Encodes the store as pretty JSON with four-space indentation.
pub fn encode_record(store: &TaskStore) -> StoreResult<Vec<u8>> {
    let mut bytes = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut bytes, formatter);
    store.serialize(&mut serializer)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Decodes a persisted record, reporting which categories were absent.
///
/// A top level that is not an object, or a category whose value is not a
/// list of well-formed tasks, is a decode error.
pub fn decode_record(raw: &str) -> Result<(TaskStore, Vec<Category>), serde_json::Error> {
    let value: Value = serde_json::from_str(raw)?;
    let Value::Object(mut object) = value else {
        return Err(serde::de::Error::custom(
            "top-level value must be an object of categories",
        ));
    };

    let mut lists = BTreeMap::new();
    let mut missing = Vec::new();
    for category in Category::ALL {
        match object.remove(category.label()) {
            Some(tasks) => {
                let tasks: Vec<Task> = serde_json::from_value(tasks)?;
                lists.insert(category, tasks);
            }
            None => missing.push(category),
        }
    }

    let passthrough: Map<String, Value> = object;
    Ok((TaskStore::from_parts(lists, passthrough), missing))
}

fn reset(issue: StoreIssue, started_at: Instant) -> StoreLoad {
    warn!(
        "event=store_load module=store status=reset duration_ms={} issue={}",
        started_at.elapsed().as_millis(),
        issue.code()
    );
    StoreLoad {
        store: TaskStore::new(),
        issues: vec![issue],
    }
}

fn write_replace(path: &Path, bytes: &[u8]) -> StoreResult<()> {
    let persistence = |source: std::io::Error| StoreError::Persistence {
        path: path.to_path_buf(),
        source,
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(persistence)?;
    }

    let tmp = temp_sibling(path);
    fs::write(&tmp, bytes).map_err(persistence)?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(persistence(err));
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_STORE_FILE));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::temp_sibling;
    use std::path::Path;

    #[test]
    fn temp_sibling_keeps_directory_and_appends_suffix() {
        assert_eq!(
            temp_sibling(Path::new("data/inbox.json")),
            Path::new("data/inbox.json.tmp")
        );
        assert_eq!(temp_sibling(Path::new("tasks")), Path::new("tasks.tmp"));
    }
}
