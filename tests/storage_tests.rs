use tally_core::storage::{share_link, JsonStore, LIST_LIMIT};
use tally_core::{parse, LedgerError};
use uuid::Uuid;

fn store() -> (tempfile::TempDir, JsonStore) {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonStore::new(Some(dir.path().to_path_buf())).expect("store");
    (dir, store)
}

#[test]
fn save_then_load_round_trips_the_snapshot() {
    let (_dir, store) = store();
    let text = "A\nx: 2";
    let ledger = parse(text);
    let id = store.save("My Home", text, &ledger).unwrap();

    let doc = store.load(id).unwrap();
    assert_eq!(doc.id, id);
    assert_eq!(doc.title, "My Home");
    assert_eq!(doc.text, text);
    assert_eq!(doc.ledger, ledger);
    assert_eq!(doc.created_at, doc.updated_at);
}

#[test]
fn blank_titles_default() {
    let (_dir, store) = store();
    let ledger = parse("");
    let id = store.save("   ", "", &ledger).unwrap();
    assert_eq!(store.load(id).unwrap().title, "Untitled Document");
}

#[test]
fn update_refreshes_timestamp_and_keeps_creation() {
    let (_dir, store) = store();
    let ledger = parse("A\nx: 2");
    let id = store.save("t", "A\nx: 2", &ledger).unwrap();
    let created = store.load(id).unwrap().created_at;

    let edited = parse("A\nx: 9");
    store.update(id, "t2", "A\nx: 9", &edited).unwrap();
    let doc = store.load(id).unwrap();
    assert_eq!(doc.title, "t2");
    assert_eq!(doc.ledger.grand_total, 9.0);
    assert_eq!(doc.created_at, created);
    assert!(doc.updated_at >= created);
}

#[test]
fn missing_documents_are_errors() {
    let (_dir, store) = store();
    let id = Uuid::new_v4();
    assert!(matches!(
        store.load(id),
        Err(LedgerError::DocumentNotFound(missing)) if missing == id
    ));
    assert!(matches!(
        store.update(id, "t", "", &parse("")),
        Err(LedgerError::DocumentNotFound(_))
    ));
    assert!(matches!(
        store.delete(id),
        Err(LedgerError::DocumentNotFound(_))
    ));
}

#[test]
fn delete_removes_the_document() {
    let (_dir, store) = store();
    let id = store.save("t", "A", &parse("A")).unwrap();
    store.delete(id).unwrap();
    assert!(store.load(id).is_err());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn list_returns_most_recently_updated_first() {
    let (_dir, store) = store();
    let first = store.save("first", "A", &parse("A")).unwrap();
    let second = store.save("second", "B", &parse("B")).unwrap();
    store.update(first, "first", "A2", &parse("A2")).unwrap();

    let docs = store.list().unwrap();
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, first);
    assert_eq!(docs[1].id, second);
    assert!(docs.len() <= LIST_LIMIT);
}

#[test]
fn list_skips_files_that_do_not_decode() {
    let (dir, store) = store();
    store.save("good", "A", &parse("A")).unwrap();
    std::fs::write(dir.path().join("junk.json"), "not json").unwrap();
    std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let docs = store.list().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].title, "good");
}

#[test]
fn share_links_carry_the_document_id() {
    let id = Uuid::new_v4();
    let link = share_link("https://example.test/sheets", id);
    assert_eq!(link, format!("https://example.test/sheets?doc={id}"));
}
