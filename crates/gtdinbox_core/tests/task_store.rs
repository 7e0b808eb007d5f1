use gtdinbox_core::{
    Category, IndexError, StoreError, TaskStatus, TaskStore, ValidationError,
};

fn store_with(category: Category, titles: &[&str]) -> TaskStore {
    let mut store = TaskStore::new();
    for title in titles {
        store.append(category, title).unwrap();
    }
    store
}

fn titles(store: &TaskStore, category: Category) -> Vec<String> {
    store
        .tasks(category)
        .iter()
        .map(|task| task.title().to_string())
        .collect()
}

#[test]
fn new_store_has_every_category_empty() {
    let store = TaskStore::new();
    for category in Category::ALL {
        assert!(store.is_empty(category));
    }
    assert_eq!(store.total_len(), 0);
}

#[test]
fn append_rejects_blank_titles_without_changing_length() {
    let mut store = TaskStore::new();

    for blank in ["", "   "] {
        let err = store.append(Category::Inbox, blank).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::EmptyTitle)
        ));
        assert_eq!(store.len(Category::Inbox), 0);
    }

    let task = store.append(Category::Inbox, "Buy milk").unwrap();
    assert_eq!(task.status(), TaskStatus::Open);
    assert_eq!(store.len(Category::Inbox), 1);
}

#[test]
fn remove_and_toggle_reject_out_of_range_indices() {
    let mut store = store_with(Category::Waiting, &["a", "b", "c"]);
    let before = store.clone();

    let err = store.remove_at(Category::Waiting, 3).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Index(IndexError::OutOfRange {
            category: Category::Waiting,
            index: 3,
            len: 3
        })
    ));
    assert!(store.toggle_status(Category::Waiting, 3).is_err());
    assert!(store.is_reopen(Category::Waiting, 3).is_err());
    assert_eq!(store, before);

    for index in 0..3 {
        assert_eq!(
            store.toggle_status(Category::Waiting, index).unwrap(),
            TaskStatus::Closed
        );
    }
}

#[test]
fn remove_shifts_later_positions_down() {
    let mut store = store_with(Category::Inbox, &["a", "b", "c"]);

    let removed = store.remove_at(Category::Inbox, 1).unwrap();
    assert_eq!(removed.title(), "b");
    assert_eq!(titles(&store, Category::Inbox), ["a", "c"]);
}

#[test]
fn toggle_reports_reopen_only_for_closed_tasks() {
    let mut store = store_with(Category::Inbox, &["a"]);

    assert!(!store.is_reopen(Category::Inbox, 0).unwrap());
    store.toggle_status(Category::Inbox, 0).unwrap();
    assert!(store.is_reopen(Category::Inbox, 0).unwrap());
    assert_eq!(
        store.toggle_status(Category::Inbox, 0).unwrap(),
        TaskStatus::Open
    );
}

#[test]
fn move_appends_to_destination_and_keeps_total() {
    let mut store = store_with(Category::Inbox, &["a", "b", "c"]);
    store.append(Category::Waiting, "already waiting").unwrap();
    let total = store.total_len();

    store
        .move_task(Category::Inbox, 1, Category::Waiting)
        .unwrap();

    assert_eq!(titles(&store, Category::Inbox), ["a", "c"]);
    assert_eq!(
        titles(&store, Category::Waiting),
        ["already waiting", "b"]
    );
    assert_eq!(store.total_len(), total);
}

#[test]
fn move_rejects_same_category_and_bad_index_without_detaching() {
    let mut store = store_with(Category::Projects, &["a", "b"]);
    let before = store.clone();

    let err = store
        .move_task(Category::Projects, 0, Category::Projects)
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::SameCategory(Category::Projects))
    ));

    let err = store
        .move_task(Category::Projects, 2, Category::Inbox)
        .unwrap_err();
    assert!(matches!(err, StoreError::Index(_)));
    assert_eq!(store, before);
}

#[test]
fn id_addressing_survives_position_shifts() {
    let mut store = store_with(Category::Inbox, &["a", "b", "c"]);
    let c_id = store.task_id_at(Category::Inbox, 2).unwrap();

    store.remove_at(Category::Inbox, 0).unwrap();
    assert_eq!(store.position_of(Category::Inbox, c_id), Some(1));

    assert_eq!(
        store.toggle_status_by_id(Category::Inbox, c_id).unwrap(),
        TaskStatus::Closed
    );
    store
        .move_by_id(Category::Inbox, c_id, Category::SomedayMaybe)
        .unwrap();

    assert_eq!(store.position_of(Category::Inbox, c_id), None);
    let moved = store
        .tasks(Category::SomedayMaybe)
        .iter()
        .find(|task| task.id() == c_id)
        .unwrap();
    assert_eq!(moved.title(), "c");
    assert_eq!(moved.status(), TaskStatus::Closed);
}

#[test]
fn unknown_ids_are_reported() {
    let mut store = store_with(Category::Inbox, &["a"]);
    let id = store.task_id_at(Category::Inbox, 0).unwrap();
    store.remove_by_id(Category::Inbox, id).unwrap();

    let err = store.remove_by_id(Category::Inbox, id).unwrap_err();
    assert!(matches!(err, StoreError::Index(IndexError::UnknownTask(missing)) if missing == id));
    assert!(store
        .move_by_id(Category::Inbox, id, Category::Waiting)
        .is_err());
}
