// Integration tests for the filesystem document store
// Covers bootstrap, corruption handling, round-trip stability and atomic replace

use statelog_core::{DocumentName, ExErrorKind, StateDocument, SubsystemId};
use statelog_store::DocumentStore;
use std::fs;
use tempfile::TempDir;

const EMPTY_DOCUMENT: &str = r#"{
  "what_we_decided": [],
  "what_we_built": [],
  "what_we_need_to_decide": [],
  "what_we_resolved": [],
  "important_files": [],
  "context": []
}
"#;

fn setup_store() -> (DocumentStore, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp journal directory");
    let store = DocumentStore::new(temp_dir.path());
    (store, temp_dir)
}

fn subsystem_name(id: &str) -> DocumentName {
    DocumentName::for_subsystem(&SubsystemId::parse(id).unwrap())
}

#[test]
fn test_precreated_empty_document_is_accepted() {
    // Given: an externally created empty document
    let (store, dir) = setup_store();
    fs::write(dir.path().join("project.json"), EMPTY_DOCUMENT).unwrap();

    // When: we load it
    let doc = store.load_or_create(&DocumentName::main()).unwrap();

    // Then: it is a valid, empty document and the file is untouched
    assert!(doc.is_empty());
    assert_eq!(
        fs::read_to_string(dir.path().join("project.json")).unwrap(),
        EMPTY_DOCUMENT
    );
}

#[test]
fn test_compact_precreated_document_is_accepted() {
    let (store, dir) = setup_store();
    fs::write(
        dir.path().join("project.json"),
        r#"{"what_we_decided":[],"what_we_built":[],"what_we_need_to_decide":[],"what_we_resolved":[],"important_files":[],"context":[]}"#,
    )
    .unwrap();

    assert!(store.load_or_create(&DocumentName::main()).unwrap().is_empty());
}

#[test]
fn test_round_trip_is_byte_identical() {
    // Given: a document written by the store
    let (store, dir) = setup_store();
    let name = subsystem_name("tracking");
    let doc = StateDocument {
        decisions: vec!["2026-01-08 - Use Obsidian → graph view".to_string()],
        open_questions: vec!["2026-01-08 - Cache synthesis results?".to_string()],
        key_files: vec!["2026-01-09 - src/main.rs - entry point".to_string()],
        subsystem: Some("tracking".to_string()),
        ..StateDocument::new()
    };
    store.write(&name, &doc).unwrap();
    let path = dir.path().join("tracking-state.json");
    let before = fs::read(&path).unwrap();

    // When: we load and write back without mutation
    let loaded = store.load_or_create(&name).unwrap();
    store.write(&name, &loaded).unwrap();

    // Then: the bytes are unchanged
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(loaded, doc);
}

#[test]
fn test_invalid_json_is_corrupt_and_untouched() {
    let (store, dir) = setup_store();
    let path = dir.path().join("project.json");
    fs::write(&path, b"{ \"what_we_decided\": [").unwrap();

    let err = store.load_or_create(&DocumentName::main()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::CorruptState);
    assert_eq!(err.document(), Some("project.json"));
    assert_eq!(fs::read(&path).unwrap(), b"{ \"what_we_decided\": [");
}

#[test]
fn test_wrong_shape_is_corrupt() {
    let (store, dir) = setup_store();
    let cases = [
        // missing context
        r#"{"what_we_decided":[],"what_we_built":[],"what_we_need_to_decide":[],"what_we_resolved":[],"important_files":[]}"#,
        // field is not a list
        r#"{"what_we_decided":"x","what_we_built":[],"what_we_need_to_decide":[],"what_we_resolved":[],"important_files":[],"context":[]}"#,
        // unknown key
        r#"{"what_we_decided":[],"what_we_built":[],"what_we_need_to_decide":[],"what_we_resolved":[],"important_files":[],"context":[],"notes":[]}"#,
        // not an object
        r#"[]"#,
        "",
    ];

    for case in cases {
        fs::write(dir.path().join("project.json"), case).unwrap();
        let err = store.read(&DocumentName::main()).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::CorruptState, "case: {case}");
    }
}

#[test]
fn test_read_missing_is_none() {
    let (store, _dir) = setup_store();
    assert_eq!(store.read(&subsystem_name("glossary")).unwrap(), None);
}

#[test]
fn test_unreadable_document_is_io_error() {
    // A directory where the document file should be
    let (store, dir) = setup_store();
    fs::create_dir(dir.path().join("project.json")).unwrap();

    let err = store.read(&DocumentName::main()).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Io);
}

#[test]
fn test_failed_replace_keeps_previous_content() {
    // Given: the target name is occupied by a non-empty directory
    let (store, dir) = setup_store();
    let target = dir.path().join("project.json");
    fs::create_dir(&target).unwrap();
    fs::write(target.join("keep"), b"keep").unwrap();

    // When: we try to write the document
    let doc = StateDocument {
        built: vec!["2026-01-08 - feature".to_string()],
        ..StateDocument::new()
    };
    let err = store.write(&DocumentName::main(), &doc).unwrap_err();

    // Then: WriteFailure, nothing replaced, no temp files left behind
    assert_eq!(err.kind(), ExErrorKind::WriteFailure);
    assert_eq!(fs::read(target.join("keep")).unwrap(), b"keep");
    let leftovers = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn test_last_writer_wins() {
    // Two writers holding stale copies of the same document: the later write wins
    let (store, _dir) = setup_store();
    let name = DocumentName::main();

    let mut first = store.load_or_create(&name).unwrap();
    let mut second = store.load_or_create(&name).unwrap();
    first.decisions.push("2026-01-08 - from first".to_string());
    second.context.push("2026-01-08 - from second".to_string());

    store.write(&name, &first).unwrap();
    store.write(&name, &second).unwrap();

    let stored = store.read(&name).unwrap().unwrap();
    assert_eq!(stored, second);
    assert!(stored.decisions.is_empty());
}

#[test]
fn test_write_creates_journal_directory() {
    let temp_dir = TempDir::new().unwrap();
    let store = DocumentStore::new(temp_dir.path().join("state"));

    store
        .write(&DocumentName::main(), &StateDocument::new())
        .unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("state").join("project.json")).unwrap(),
        EMPTY_DOCUMENT
    );
}

#[test]
fn test_documents_are_independent() {
    let (store, _dir) = setup_store();
    let doc = StateDocument {
        context: vec!["2026-01-08 - main only".to_string()],
        ..StateDocument::new()
    };

    store.write(&DocumentName::main(), &doc).unwrap();

    assert!(store
        .load_or_create(&subsystem_name("tracking"))
        .unwrap()
        .is_empty());
}
