use jotter_core::{
    KeyValueRepository, MemoryKeyValueRepository, NoteId, NoteStore, NoteValidationError,
    RepoError, RepoResult, NOTES_STORAGE_KEY, TITLE_MAX_CHARS,
};
use std::collections::HashSet;

/// Backend that refuses every read and write.
struct BrokenStorage;

impl KeyValueRepository for BrokenStorage {
    fn get(&self, _key: &str) -> RepoResult<Option<String>> {
        Err(RepoError::Unavailable("read disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> RepoResult<()> {
        Err(RepoError::Unavailable("quota exceeded".to_string()))
    }
}

fn memory_store() -> NoteStore<MemoryKeyValueRepository> {
    NoteStore::open(MemoryKeyValueRepository::new())
}

#[test]
fn create_yields_unique_empty_active_note_at_front() {
    let mut store = memory_store();
    let mut ids = HashSet::new();
    for _ in 0..25 {
        let id = store.create();
        assert!(ids.insert(id.clone()));
        assert_eq!(store.active_id(), Some(&id));
        assert_eq!(store.notes()[0].id, id);

        let note = store.get(&id).unwrap();
        assert_eq!(note.title, "");
        assert_eq!(note.body, "");
        assert_eq!(note.created, note.updated);
        assert_eq!(store.draft().title(), "");
        assert_eq!(store.draft().body(), "");
    }
    assert_eq!(store.len(), 25);
}

#[test]
fn deleting_active_note_clears_selection_and_draft() {
    let mut store = memory_store();
    let id = store.create();
    store.draft_mut().set_title("unsaved");

    assert!(store.delete(&id));
    assert!(store.active_id().is_none());
    assert_eq!(store.draft().title(), "");
    assert!(store.is_empty());
}

#[test]
fn deleting_other_note_keeps_selection() {
    let mut store = memory_store();
    let first = store.create();
    let second = store.create();

    assert!(store.delete(&first));
    assert_eq!(store.active_id(), Some(&second));
    assert_eq!(store.len(), 1);
}

#[test]
fn deleting_unknown_note_is_a_noop() {
    let mut store = memory_store();
    let id = store.create();
    assert!(!store.delete(&NoteId::from("missing")));
    assert_eq!(store.active_id(), Some(&id));
    assert_eq!(store.len(), 1);
}

#[test]
fn save_replaces_fields_and_keeps_identity() {
    let mut store = memory_store();
    let id = store.create();
    let before = store.get(&id).unwrap().clone();

    assert!(store.save(&id, "Title", "Body").unwrap());

    let after = store.get(&id).unwrap();
    assert_eq!(after.id, before.id);
    assert_eq!(after.created, before.created);
    assert!(after.updated >= before.updated);
    assert_eq!(after.title, "Title");
    assert_eq!(after.body, "Body");
    assert_eq!(store.draft().title(), "Title");
}

#[test]
fn save_unknown_id_changes_nothing() {
    let mut store = memory_store();
    let id = store.create();
    let snapshot = store.notes().to_vec();

    assert!(!store.save(&NoteId::from("ghost"), "x", "y").unwrap());
    assert_eq!(store.notes(), snapshot.as_slice());
    assert_eq!(store.active_id(), Some(&id));
}

#[test]
fn save_rejects_oversized_title_without_mutation() {
    let mut store = memory_store();
    let id = store.create();

    let err = store
        .save(&id, "t".repeat(TITLE_MAX_CHARS + 1), "body")
        .unwrap_err();
    assert!(matches!(err, NoteValidationError::TitleTooLong { .. }));
    assert_eq!(store.get(&id).unwrap().body, "");
}

#[test]
fn save_on_background_note_leaves_draft_alone() {
    let mut store = memory_store();
    let background = store.create();
    store.create();
    store.draft_mut().set_title("in progress");

    assert!(store.save(&background, "bg", "").unwrap());
    assert_eq!(store.draft().title(), "in progress");
}

#[test]
fn select_loads_draft_and_discards_unsaved_edits() {
    let mut store = memory_store();
    let first = store.create();
    store.save(&first, "First", "one").unwrap();
    let second = store.create();
    store.draft_mut().set_title("never saved");

    store.select(first.as_str());
    assert_eq!(store.active_id(), Some(&first));
    assert_eq!(store.draft().title(), "First");
    assert_eq!(store.draft().body(), "one");

    store.select(second.as_str());
    assert_eq!(store.draft().title(), "");
    assert_eq!(store.get(&second).unwrap().title, "");
}

#[test]
fn select_empty_or_unknown_clears_selection() {
    let mut store = memory_store();
    let id = store.create();
    store.save(&id, "kept", "").unwrap();

    store.select("");
    assert!(store.active_id().is_none());
    assert_eq!(store.draft().title(), "");

    store.select(id.as_str());
    store.select("does-not-exist");
    assert!(store.active_id().is_none());
    assert_eq!(store.draft().title(), "");
}

#[test]
fn save_draft_without_selection_is_a_noop() {
    let mut store = memory_store();
    store.draft_mut().set_title("orphan");
    assert!(!store.save_draft().unwrap());
    assert!(store.is_empty());
}

#[test]
fn search_scenario_returns_only_matching_note() {
    let mut store = memory_store();

    let a = store.create();
    store.draft_mut().set_title("Foo");
    store.draft_mut().set_body("Bar");
    assert!(store.save_draft().unwrap());

    let b = store.create();
    store.draft_mut().set_title("Baz");
    assert!(store.save_draft().unwrap());

    let hits = store.visible("foo");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, a);
    assert_eq!(hits[0].body, "Bar");

    let all = store.visible("");
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|note| note.id == b));
}

#[test]
fn broken_storage_loads_empty_and_keeps_memory_authoritative() {
    let mut store = NoteStore::open(BrokenStorage);
    assert!(store.is_empty());
    assert!(store.last_persist_error().is_none());

    let id = store.create();
    assert!(store.last_persist_error().unwrap().contains("quota exceeded"));
    assert!(store.save(&id, "still", "works").unwrap());
    assert_eq!(store.get(&id).unwrap().title, "still");
    assert_eq!(store.visible("works").len(), 1);

    assert!(store.delete(&id));
    assert!(store.is_empty());
}

#[test]
fn oversized_stored_title_is_clipped_in_draft_and_savable() {
    let long_title = "t".repeat(TITLE_MAX_CHARS + 1);
    let mut kv = MemoryKeyValueRepository::new();
    kv.set(
        NOTES_STORAGE_KEY,
        &format!(
            r#"[{{"id":"a","title":"{long_title}","body":"old",
                "created":"2024-01-01T00:00:00Z","updated":"2024-01-01T00:00:00Z"}}]"#
        ),
    )
    .unwrap();
    let mut store = NoteStore::open(kv);
    assert_eq!(store.get(&NoteId::from("a")).unwrap().title, long_title);

    store.select("a");
    assert_eq!(store.draft().title().chars().count(), TITLE_MAX_CHARS);

    store.draft_mut().set_body("new body");
    assert!(store.save_draft().unwrap());

    let saved = store.get(&NoteId::from("a")).unwrap();
    assert_eq!(saved.title, "t".repeat(TITLE_MAX_CHARS));
    assert_eq!(saved.body, "new body");
}
