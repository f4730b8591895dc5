use jotter_core::service::sidebar::{
    last_updated_label, DELETE_CONFIRM_PROMPT, EMPTY_LIST_MESSAGE, NO_NOTES_MESSAGE,
    SELECT_NOTE_MESSAGE, UNTITLED_LABEL,
};
use jotter_core::{editor_pane, sidebar_view, EditorPane, MemoryKeyValueRepository, NoteStore};

#[test]
fn empty_store_shows_getting_started_message() {
    let store = NoteStore::open(MemoryKeyValueRepository::new());

    let view = sidebar_view(&store, "");
    assert!(view.items.is_empty());
    assert_eq!(view.empty_message, Some(EMPTY_LIST_MESSAGE));
    assert_eq!(editor_pane(&store), EditorPane::Placeholder(NO_NOTES_MESSAGE));
}

#[test]
fn unselected_store_asks_for_a_selection() {
    let mut store = NoteStore::open(MemoryKeyValueRepository::new());
    store.create();
    store.select("");

    assert_eq!(editor_pane(&store), EditorPane::Placeholder(SELECT_NOTE_MESSAGE));
}

#[test]
fn list_rows_use_placeholder_label_and_mark_active() {
    let mut store = NoteStore::open(MemoryKeyValueRepository::new());
    let titled = store.create();
    store
        .save(&titled, "Shopping", "apples\n\n  pears and a very long tail of text")
        .unwrap();
    let untitled = store.create();

    let view = sidebar_view(&store, "");
    assert_eq!(view.empty_message, None);
    assert_eq!(view.items.len(), 2);

    let untitled_row = view.items.iter().find(|row| row.id == untitled).unwrap();
    assert_eq!(untitled_row.label, UNTITLED_LABEL);
    assert!(untitled_row.untitled);
    assert!(untitled_row.active);

    let titled_row = view.items.iter().find(|row| row.id == titled).unwrap();
    assert_eq!(titled_row.label, "Shopping");
    assert_eq!(titled_row.preview, "apples pears and a very long");
    assert!(!titled_row.active);
}

#[test]
fn search_with_no_hits_reports_empty_list() {
    let mut store = NoteStore::open(MemoryKeyValueRepository::new());
    let id = store.create();
    store.save(&id, "alpha", "").unwrap();

    let view = sidebar_view(&store, "zzz");
    assert!(view.items.is_empty());
    assert_eq!(view.empty_message, Some(EMPTY_LIST_MESSAGE));
}

#[test]
fn editor_pane_reports_dirty_draft() {
    let mut store = NoteStore::open(MemoryKeyValueRepository::new());
    store.create();
    store.draft_mut().set_title("typing");

    match editor_pane(&store) {
        EditorPane::Editing { note, draft, dirty } => {
            assert!(dirty);
            assert_eq!(draft.title(), "typing");
            assert_eq!(note.title, "");
            assert!(last_updated_label(note).starts_with("Last updated: "));
        }
        other => panic!("unexpected pane: {other:?}"),
    }
    assert!(DELETE_CONFIRM_PROMPT.contains("permanently delete"));
}
