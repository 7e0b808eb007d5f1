use chrono::{NaiveDate, NaiveDateTime};
use gtdinbox_core::{Category, Task, TaskStatus, ValidationError};

fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .unwrap()
}

#[test]
fn new_task_defaults_to_open() {
    let task = Task::with_created_at("Call plumber", at(8, 15, 0)).unwrap();

    assert!(!task.id().is_nil());
    assert_eq!(task.title(), "Call plumber");
    assert_eq!(task.status(), TaskStatus::Open);
    assert_eq!(task.created_at_display(), "2024-05-01 08:15:00");
}

#[test]
fn blank_titles_are_rejected() {
    assert_eq!(Task::new("").unwrap_err(), ValidationError::EmptyTitle);
    assert_eq!(Task::new(" \t ").unwrap_err(), ValidationError::EmptyTitle);
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let task = Task::with_created_at("Write report", at(17, 5, 9)).unwrap();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "title": "Write report",
            "created_at": "2024-05-01 17:05:09",
            "status": "open"
        })
    );

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
    assert_ne!(decoded.id(), task.id());
}

#[test]
fn deserialize_accepts_legacy_created_at_key() {
    let value = serde_json::json!({
        "title": "Old task",
        "created at": "2023-12-31 23:59:59",
        "status": "closed"
    });

    let task: Task = serde_json::from_value(value).unwrap();
    assert_eq!(task.status(), TaskStatus::Closed);
    assert_eq!(task.created_at_display(), "2023-12-31 23:59:59");
}

#[test]
fn deserialize_rejects_malformed_timestamp_and_status() {
    let bad_time = serde_json::json!({
        "title": "x",
        "created_at": "yesterday",
        "status": "open"
    });
    assert!(serde_json::from_value::<Task>(bad_time).is_err());

    let bad_status = serde_json::json!({
        "title": "x",
        "created_at": "2024-05-01 08:00:00",
        "status": "done"
    });
    assert!(serde_json::from_value::<Task>(bad_status).is_err());
}

#[test]
fn category_labels_round_trip_through_serde() {
    for category in Category::ALL {
        let json = serde_json::to_value(category).unwrap();
        assert_eq!(json, category.label());
        assert_eq!(Category::from_label(category.label()).unwrap(), category);
    }
    assert_eq!(
        Category::from_label("inbox").unwrap_err(),
        ValidationError::UnknownCategory("inbox".to_string())
    );
}
