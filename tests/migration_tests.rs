mod common;
use common::{memory_store, setup_test_db};
use pcdeath::core::migrate::decode_document;
use pcdeath::core::migrate::decode_statuses;
use pcdeath::core::{ChecklistStore, RootSource, StatusSource, open_store};
use pcdeath::db::initialize::open_db;
use pcdeath::db::kv::SqliteKv;
use pcdeath::db::log::load_log;
use pcdeath::errors::AppError;
use pcdeath::models::{ItemDraft, ItemStatus, Priority, Status, StoreRoot, StoredDocument};
use pcdeath::storage::{KeyValueStore, MemoryKv, ROOT_KEY, STATUSES_KEY};

const LEGACY: &str = r#"{
  "programs": [
    { "id": "k3j9x0a1b", "name": "Firefox", "link": "https://firefox.com", "priority": "HIGH" },
    { "id": "p0q9r8s7t", "name": "Discord", "link": "", "priority": "LOW" }
  ],
  "drivers": [],
  "extensions": [
    { "id": "z1y2x3w4v", "name": "uBlock", "link": "https://ublock.org", "priority": "MEDIUM" }
  ]
}"#;

const TWO_ITEMS: &str = r#"{"groups":[{"id":"programs","name":"Programs","iconType":"monitor","isDefault":true,"items":[
  {"id":"a","name":"A","link":"","priority":"LOW"},
  {"id":"b","name":"B","link":"","priority":"HIGH"}
]}]}"#;

fn stored_statuses(store: &ChecklistStore<MemoryKv>) -> Vec<ItemStatus> {
    serde_json::from_str(store.backend().raw(STATUSES_KEY).unwrap()).unwrap()
}

#[test]
fn legacy_document_is_detected_structurally() {
    let doc = decode_document(LEGACY).unwrap();
    assert!(doc.is_legacy());

    let current = decode_document(r#"{"groups": []}"#).unwrap();
    assert!(matches!(current, StoredDocument::Current(ref r) if r.groups.is_empty()));
}

#[test]
fn legacy_upgrade_preserves_items_and_order() {
    let root = decode_document(LEGACY).unwrap().into_root();

    let ids: Vec<&str> = root.groups.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["programs", "drivers", "extensions"]);
    assert!(root.groups.iter().all(|g| g.is_default));

    let programs = root.group("programs").unwrap();
    let names: Vec<&str> = programs.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Firefox", "Discord"]);
    assert_eq!(programs.items[0].id, "k3j9x0a1b");
    assert_eq!(programs.items[0].priority, Priority::High);
    assert!(root.group("drivers").unwrap().items.is_empty());
    assert_eq!(root.group("extensions").unwrap().items[0].name, "uBlock");
}

#[test]
fn importing_single_item_legacy_document() {
    let mut store = memory_store();
    let doc = r#"{"programs":[{"id":"a","name":"A","link":"","priority":"LOW"}],"drivers":[],"extensions":[]}"#;

    let summary = store.import_snapshot(doc).unwrap();

    assert!(summary.legacy);
    let programs = store.group("programs").unwrap();
    assert!(programs.is_default);
    assert_eq!(programs.items.len(), 1);
    assert_eq!(programs.items[0].id, "a");
    assert!(store.group("drivers").unwrap().items.is_empty());
    assert!(store.group("extensions").unwrap().items.is_empty());
    assert_eq!(store.groups().len(), 3);
}

#[test]
fn legacy_value_in_storage_is_upgraded_on_open() {
    let backend = MemoryKv::with_values([(ROOT_KEY, LEGACY)]);

    let store = ChecklistStore::open(backend).unwrap();

    assert_eq!(store.source(), &RootSource::MigratedLegacy);
    assert_eq!(store.total_items(), 3);

    // written back in the current shape
    let raw = store.backend().raw(ROOT_KEY).unwrap();
    let stored: StoreRoot = serde_json::from_str(raw).unwrap();
    assert_eq!(&stored, store.root());
}

#[test]
fn unreadable_stored_root_falls_back_without_overwriting() {
    let backend = MemoryKv::with_values([(ROOT_KEY, "{ broken")]);

    let store = ChecklistStore::open(backend).unwrap();

    assert!(matches!(store.source(), RootSource::Unreadable(_)));
    assert_eq!(store.root(), &StoreRoot::default());
    assert_eq!(store.backend().raw(ROOT_KEY), Some("{ broken"));
}

#[test]
fn legacy_document_missing_a_category_is_rejected() {
    let err = decode_document(r#"{"programs": [], "drivers": []}"#).unwrap_err();
    assert!(matches!(err, AppError::Import(_)));
}

#[test]
fn missing_optional_fields_take_defaults() {
    let doc = r#"{"groups":[{"id":"g","name":"G","items":[{"id":"i","name":"N","priority":"HIGH"}]}]}"#;

    let root = decode_document(doc).unwrap().into_root();

    let group = root.group("g").unwrap();
    assert!(!group.is_default);
    assert_eq!(group.icon_type.as_str(), "folder");
    assert_eq!(group.items[0].link, "");
}

#[test]
fn sqlite_schema_migrations_are_recorded_once() {
    let db_path = setup_test_db("schema_migrations_once");

    {
        let pool = open_db(&db_path).unwrap();
        let applied = load_log(&pool.conn)
            .unwrap()
            .into_iter()
            .filter(|e| e.operation == "migration_applied")
            .count();
        assert_eq!(applied, 2);
    }

    let pool = open_db(&db_path).unwrap();
    let applied = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied, 2);
}

#[test]
fn sqlite_backend_round_trips_values() {
    let db_path = setup_test_db("sqlite_kv_values");
    let mut kv = SqliteKv::new(open_db(&db_path).unwrap());

    assert_eq!(kv.get("language").unwrap(), None);
    kv.set("language", "\"pt\"").unwrap();
    kv.set("language", "\"en\"").unwrap();
    kv.set_many(&[("a", "1".to_string()), ("b", "2".to_string())])
        .unwrap();

    assert_eq!(kv.get("language").unwrap().as_deref(), Some("\"en\""));
    assert_eq!(kv.keys().unwrap(), ["a", "b", "language"]);

    kv.remove("a").unwrap();
    assert_eq!(kv.get("a").unwrap(), None);
}

#[test]
fn sqlite_store_survives_reopen() {
    let db_path = setup_test_db("sqlite_store_reopen");

    let item_id = {
        let mut store = open_store(&db_path).unwrap();
        assert_eq!(store.source(), &RootSource::Seeded);
        store
            .add_item("drivers", &ItemDraft::new("Audio", "", Priority::Medium))
            .unwrap()
            .id
    };

    let store = open_store(&db_path).unwrap();
    assert_eq!(store.source(), &RootSource::Current);
    assert_eq!(
        store.find_item(&item_id).map(|(g, i)| (g.id.as_str(), i.name.as_str())),
        Some(("drivers", "Audio"))
    );
}

#[test]
fn legacy_value_in_sqlite_is_upgraded_and_logged() {
    let db_path = setup_test_db("sqlite_legacy_upgrade");
    {
        let mut kv = SqliteKv::new(open_db(&db_path).unwrap());
        kv.set(ROOT_KEY, LEGACY).unwrap();
    }

    let store = open_store(&db_path).unwrap();

    assert_eq!(store.source(), &RootSource::MigratedLegacy);
    assert_eq!(store.total_items(), 3);
    let log = load_log(&store.backend().pool().conn).unwrap();
    assert!(log.iter().any(|e| e.operation == "migrate_legacy"));
}

#[test]
fn differently_spelled_statuses_survive_reopen_and_next_write() {
    let backend = MemoryKv::with_values([
        (ROOT_KEY, TWO_ITEMS),
        (STATUSES_KEY, r#"[{"id":"a","status":"done"},{"id":"b","status":"DONE"}]"#),
    ]);

    let mut store = ChecklistStore::open(backend).unwrap();
    assert_eq!(store.status_source(), &StatusSource::Clean);
    assert_eq!(store.status_of("a"), Status::Done);
    assert_eq!(store.status_of("b"), Status::Done);

    store.set_status("b", Status::Skip).unwrap();

    let stored = stored_statuses(&store);
    assert!(stored.contains(&ItemStatus { id: "a".into(), status: Status::Done }));
    assert!(stored.contains(&ItemStatus { id: "b".into(), status: Status::Skip }));
}

#[test]
fn unusable_status_entries_are_dropped_and_reported() {
    let raw = r#"[{"id":"a","status":"done"},{"id":"b","status":"maybe"},42,{"status":"skip"}]"#;
    let backend = MemoryKv::with_values([(ROOT_KEY, TWO_ITEMS), (STATUSES_KEY, raw)]);

    let store = ChecklistStore::open(backend).unwrap();

    assert_eq!(store.status_source(), &StatusSource::Partial { dropped: 3 });
    assert_eq!(store.status_of("a"), Status::Done);
    assert_eq!(store.status_of("b"), Status::None);
    // left alone until the next status write
    assert_eq!(store.backend().raw(STATUSES_KEY), Some(raw));
}

#[test]
fn status_value_that_is_not_a_list_is_unreadable() {
    let backend = MemoryKv::with_values([(ROOT_KEY, TWO_ITEMS), (STATUSES_KEY, r#"{"a":"done"}"#)]);

    let store = ChecklistStore::open(backend).unwrap();

    assert!(matches!(store.status_source(), StatusSource::Unreadable(_)));
    assert!(store.statuses().is_empty());
    assert_eq!(store.backend().raw(STATUSES_KEY), Some(r#"{"a":"done"}"#));

    let err = decode_statuses("not json").unwrap_err();
    assert!(matches!(err, AppError::Corrupt(_)));
}

#[test]
fn bad_statuses_in_sqlite_are_logged_on_open() {
    let db_path = setup_test_db("sqlite_bad_statuses");
    {
        let mut kv = SqliteKv::new(open_db(&db_path).unwrap());
        kv.set(STATUSES_KEY, "[1, 2]").unwrap();
    }

    let store = open_store(&db_path).unwrap();

    assert_eq!(store.status_source(), &StatusSource::Partial { dropped: 2 });
    let log = load_log(&store.backend().pool().conn).unwrap();
    assert!(log.iter().any(|e| e.operation == "load_error" && e.target == STATUSES_KEY));
}
