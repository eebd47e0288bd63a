//! Record store behaviour through the public API
//!
//! Covers the add/find/update/delete contract and the Alice/Bob
//! end-to-end scenario.

use student_db::record::{StudentPatch, StudentRecord};
use student_db::store::RecordStore;
use student_db::Error;

fn alice() -> StudentRecord {
    StudentRecord::new(1, "Alice", 20, "A", ["Math", "Science"])
}

fn bob() -> StudentRecord {
    StudentRecord::new(2, "Bob", 22, "B", ["English", "History"])
}

#[test]
fn test_end_to_end_scenario() {
    let mut store = RecordStore::new();

    store.add(alice()).unwrap();
    store.add(bob()).unwrap();

    let records = store.list();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), "Alice");
    assert!(records[1].to_string().contains("Bob"));

    store
        .update(1, StudentPatch::new().age(21).grade("A+"))
        .unwrap();
    let updated = store.find(1).unwrap();
    assert_eq!(updated.age(), 21);
    assert_eq!(updated.grade(), "A+");
    assert_eq!(updated.name(), "Alice");
    assert_eq!(updated.subjects(), ["Math", "Science"]);

    store.delete(1).unwrap();
    assert_eq!(store.list(), [bob()]);
}

#[test]
fn test_view_empty_store() {
    let store = RecordStore::new();
    assert_eq!(store.list().len(), 0);
}

#[test]
fn test_find_returns_added_record() {
    let mut store = RecordStore::new();
    store.add(alice()).unwrap();
    assert_eq!(store.find(1), Some(&alice()));
}

#[test]
fn test_duplicate_id_rejected() {
    let mut store = RecordStore::new();
    store.add(alice()).unwrap();

    let err = store
        .add(StudentRecord::new(1, "Other", 40, "C", ["Art"]))
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateId(1)));
    assert_eq!(store.list(), [alice()]);
}

#[test]
fn test_update_with_empty_patch_is_noop() {
    let mut store = RecordStore::from_records(vec![alice(), bob()]);
    let before = store.clone();

    store.update(1, StudentPatch::new()).unwrap();

    assert_eq!(store, before);
}

#[test]
fn test_update_blank_values_mean_no_change() {
    let mut store = RecordStore::from_records(vec![alice()]);

    store
        .update(1, StudentPatch::new().name("").subjects(Vec::<String>::new()))
        .unwrap();

    assert_eq!(store.find(1), Some(&alice()));
}

#[test]
fn test_update_age_to_zero_is_applied() {
    let mut store = RecordStore::from_records(vec![alice()]);
    store.update(1, StudentPatch::new().age(0)).unwrap();
    assert_eq!(store.find(1).unwrap().age(), 0);
}

#[test]
fn test_update_subjects_replaces_list() {
    let mut store = RecordStore::from_records(vec![alice()]);
    store
        .update(1, StudentPatch::new().subjects(["Art", "Art"]))
        .unwrap();
    assert_eq!(store.find(1).unwrap().subjects(), ["Art", "Art"]);
}

#[test]
fn test_update_missing_id() {
    let mut store = RecordStore::from_records(vec![alice()]);
    assert!(matches!(
        store.update(3, StudentPatch::new().grade("C")),
        Err(Error::NotFound(3))
    ));
}

#[test]
fn test_delete_then_find_is_absent() {
    let mut store = RecordStore::from_records(vec![alice(), bob()]);
    store.delete(2).unwrap();
    assert!(store.find(2).is_none());
    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_unknown_id() {
    let mut store = RecordStore::from_records(vec![alice(), bob()]);
    let before = store.clone();

    assert!(matches!(store.delete(99), Err(Error::NotFound(99))));
    assert_eq!(store, before);
}

#[test]
fn test_id_reusable_after_delete() {
    let mut store = RecordStore::from_records(vec![alice()]);
    store.delete(1).unwrap();
    store
        .add(StudentRecord::new(1, "Alice II", 19, "B", ["Law"]))
        .unwrap();
    assert_eq!(store.find(1).unwrap().name(), "Alice II");
}
