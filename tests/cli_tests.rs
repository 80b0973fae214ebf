use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db, pcd, setup_test_db, temp_out};
use pcdeath::core::open_store;
use pcdeath::models::Status;

/// Id of the item named `name` in the database at `db_path`.
fn find_item_id(db_path: &str, name: &str) -> String {
    let store = open_store(db_path).expect("open store");
    store
        .groups()
        .iter()
        .flat_map(|g| g.items.iter())
        .find(|i| i.name == name)
        .map(|i| i.id.clone())
        .expect("item present")
}

fn add_item(db_path: &str, group: &str, name: &str, priority: &str) {
    pcd()
        .args([
            "--db", db_path, "item", "add", group, name, "--link", "https://example.com",
            "--priority", priority,
        ])
        .assert()
        .success();
}

#[test]
fn test_init_seeds_default_groups() {
    let db_path = setup_test_db("cli_init");
    init_db(&db_path);

    pcd()
        .args(["--db", &db_path, "group", "list"])
        .assert()
        .success()
        .stdout(contains("programs"))
        .stdout(contains("drivers"))
        .stdout(contains("extensions"));
}

#[test]
fn test_add_and_list_items() {
    let db_path = setup_test_db("cli_add_list");
    init_db(&db_path);

    add_item(&db_path, "programs", "Firefox", "HIGH");
    add_item(&db_path, "drivers", "Chipset", "low");

    pcd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Firefox"))
        .stdout(contains("Chipset"))
        .stdout(contains("2 itens cadastrados"));
}

#[test]
fn test_list_filters_by_search_and_priority() {
    let db_path = setup_test_db("cli_list_filter");
    init_db(&db_path);

    add_item(&db_path, "programs", "Firefox", "HIGH");
    add_item(&db_path, "programs", "Thunderbird", "LOW");

    pcd()
        .args(["--db", &db_path, "list", "--search", "FIRE"])
        .assert()
        .success()
        .stdout(contains("Firefox"))
        .stdout(contains("Thunderbird").not());

    pcd()
        .args(["--db", &db_path, "list", "--priority", "low", "--group", "programs"])
        .assert()
        .success()
        .stdout(contains("Thunderbird"))
        .stdout(contains("Firefox").not());
}

#[test]
fn test_add_item_with_blank_name_changes_nothing() {
    let db_path = setup_test_db("cli_blank_name");
    init_db(&db_path);

    pcd()
        .args(["--db", &db_path, "item", "add", "programs", "   "])
        .assert()
        .success()
        .stdout(contains("vazio"));

    let store = open_store(&db_path).unwrap();
    assert_eq!(store.total_items(), 0);
}

#[test]
fn test_delete_default_group_is_refused() {
    let db_path = setup_test_db("cli_protected_group");
    init_db(&db_path);

    pcd()
        .args(["--db", &db_path, "group", "del", "programs", "--yes"])
        .assert()
        .failure()
        .stderr(contains("cannot be deleted"));

    let store = open_store(&db_path).unwrap();
    assert!(store.group("programs").is_some());
}

#[test]
fn test_custom_group_lifecycle() {
    let db_path = setup_test_db("cli_custom_group");
    init_db(&db_path);

    pcd()
        .args(["--db", &db_path, "group", "add", "Utilities", "--icon", "wrench"])
        .assert()
        .success()
        .stdout(contains("Utilities"));

    let group_id = {
        let store = open_store(&db_path).unwrap();
        let g = store.groups().last().unwrap();
        assert_eq!(g.name, "Utilities");
        g.id.clone()
    };

    add_item(&db_path, &group_id, "7-Zip", "MEDIUM");
    let zip_id = find_item_id(&db_path, "7-Zip");
    pcd()
        .args(["--db", &db_path, "status", &zip_id, "done"])
        .assert()
        .success();

    // declined confirmation keeps the group
    pcd()
        .args(["--db", &db_path, "group", "del", &group_id])
        .write_stdin("n\n")
        .assert()
        .success();
    assert!(open_store(&db_path).unwrap().group(&group_id).is_some());

    pcd()
        .args(["--db", &db_path, "group", "del", &group_id])
        .write_stdin("y\n")
        .assert()
        .success();

    let store = open_store(&db_path).unwrap();
    assert!(store.group(&group_id).is_none());
    assert!(store.statuses().is_empty());
}

#[test]
fn test_status_cycles_when_omitted() {
    let db_path = setup_test_db("cli_status_cycle");
    init_db(&db_path);
    add_item(&db_path, "programs", "Steam", "MEDIUM");
    let id = find_item_id(&db_path, "Steam");

    for expected in [Status::Done, Status::Skip, Status::None] {
        pcd()
            .args(["--db", &db_path, "status", &id])
            .assert()
            .success()
            .stdout(contains(expected.as_str()));
        assert_eq!(open_store(&db_path).unwrap().status_of(&id), expected);
    }
}

#[test]
fn test_edit_item_keeps_unspecified_fields() {
    let db_path = setup_test_db("cli_edit_item");
    init_db(&db_path);
    add_item(&db_path, "programs", "Obs", "LOW");
    let id = find_item_id(&db_path, "Obs");

    pcd()
        .args(["--db", &db_path, "item", "edit", "programs", &id, "--name", "OBS Studio"])
        .assert()
        .success();

    let store = open_store(&db_path).unwrap();
    let (_, item) = store.find_item(&id).unwrap();
    assert_eq!(item.name, "OBS Studio");
    assert_eq!(item.link, "https://example.com");
    assert_eq!(item.priority.as_str(), "LOW");
}

#[test]
fn test_move_item_between_groups() {
    let db_path = setup_test_db("cli_move_item");
    init_db(&db_path);
    add_item(&db_path, "programs", "Realtek audio", "HIGH");
    add_item(&db_path, "drivers", "Chipset", "HIGH");
    let audio = find_item_id(&db_path, "Realtek audio");
    let chipset = find_item_id(&db_path, "Chipset");

    pcd()
        .args(["--db", &db_path, "move", &audio, "--onto", &chipset])
        .assert()
        .success();

    let store = open_store(&db_path).unwrap();
    let drivers = store.group("drivers").unwrap();
    assert_eq!(drivers.items.len(), 2);
    assert_eq!(drivers.items[1].id, audio);
    assert!(store.group("programs").unwrap().items.is_empty());

    pcd()
        .args(["--db", &db_path, "move", &audio, "--group", "drivers"])
        .assert()
        .success()
        .stdout(contains("Nada a fazer"));
}

#[test]
fn test_delete_item_removes_status() {
    let db_path = setup_test_db("cli_delete_item");
    init_db(&db_path);
    add_item(&db_path, "extensions", "Dark Reader", "LOW");
    let id = find_item_id(&db_path, "Dark Reader");

    pcd()
        .args(["--db", &db_path, "status", &id, "skip"])
        .assert()
        .success();
    pcd()
        .args(["--db", &db_path, "item", "del", "extensions", &id])
        .assert()
        .success();

    let store = open_store(&db_path).unwrap();
    assert_eq!(store.total_items(), 0);
    assert!(store.statuses().is_empty());
}

#[test]
fn test_export_import_round_trip() {
    let db_path = setup_test_db("cli_export_src");
    init_db(&db_path);
    add_item(&db_path, "programs", "Firefox", "HIGH");
    add_item(&db_path, "extensions", "uBlock", "MEDIUM");

    let out = temp_out("cli_export_round_trip", "json");
    pcd()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"groups\""));
    assert!(content.contains("Firefox"));

    let other_db = setup_test_db("cli_export_dst");
    init_db(&other_db);
    pcd()
        .args(["--db", &other_db, "import", &out])
        .assert()
        .success();

    let src = open_store(&db_path).unwrap();
    let dst = open_store(&other_db).unwrap();
    assert_eq!(src.root(), dst.root());
}

#[test]
fn test_export_with_no_items_writes_nothing() {
    let db_path = setup_test_db("cli_export_empty");
    init_db(&db_path);
    let out = temp_out("cli_export_empty", "json");

    pcd()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_import_legacy_file() {
    let db_path = setup_test_db("cli_import_legacy");
    init_db(&db_path);
    let file = temp_out("cli_import_legacy", "json");
    fs::write(
        &file,
        r#"{"programs":[{"id":"abc123xyz","name":"WinRAR","link":"","priority":"LOW"}],"drivers":[],"extensions":[]}"#,
    )
    .unwrap();

    pcd()
        .args(["--db", &db_path, "import", &file])
        .assert()
        .success();

    let store = open_store(&db_path).unwrap();
    let programs = store.group("programs").unwrap();
    assert!(programs.is_default);
    assert_eq!(programs.items[0].id, "abc123xyz");
}

#[test]
fn test_import_invalid_file_fails_and_keeps_data() {
    let db_path = setup_test_db("cli_import_invalid");
    init_db(&db_path);
    add_item(&db_path, "programs", "Firefox", "HIGH");
    let file = temp_out("cli_import_invalid", "json");
    fs::write(&file, "definitely not json").unwrap();

    pcd()
        .args(["--db", &db_path, "import", &file])
        .assert()
        .failure()
        .stderr(contains("Invalid import file"));

    assert_eq!(open_store(&db_path).unwrap().total_items(), 1);
}

#[test]
fn test_clear_all() {
    let db_path = setup_test_db("cli_clear");
    init_db(&db_path);
    add_item(&db_path, "programs", "Firefox", "HIGH");
    add_item(&db_path, "drivers", "GPU", "HIGH");

    pcd()
        .args(["--db", &db_path, "clear"])
        .write_stdin("n\n")
        .assert()
        .success();
    assert_eq!(open_store(&db_path).unwrap().total_items(), 2);

    pcd()
        .args(["--db", &db_path, "clear", "--yes"])
        .assert()
        .success();

    let store = open_store(&db_path).unwrap();
    assert_eq!(store.total_items(), 0);
    assert_eq!(store.groups().len(), 3);
}

#[test]
fn test_language_switch() {
    let db_path = setup_test_db("cli_language");
    init_db(&db_path);

    pcd()
        .args(["--db", &db_path, "lang", "en"])
        .assert()
        .success();

    pcd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("0 registered items"))
        .stdout(contains("Extensions"));

    pcd()
        .args(["--db", &db_path, "lang", "fr"])
        .assert()
        .failure()
        .stderr(contains("Invalid language"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);
    add_item(&db_path, "programs", "Firefox", "HIGH");

    pcd()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("init"))
        .stdout(contains("Added 'Firefox' to programs"));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("cli_backup");
    init_db(&db_path);
    add_item(&db_path, "programs", "Firefox", "HIGH");

    let out = temp_out("cli_backup", "sqlite");
    pcd()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();

    let copy = open_store(&out).unwrap();
    assert_eq!(copy.total_items(), 1);

    let zipped = temp_out("cli_backup_zip", "zip");
    pcd()
        .args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(fs::metadata(&zipped).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_config_print_shows_defaults() {
    let home = std::env::temp_dir().join("pcdeath_config_home");
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).unwrap();

    pcd()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("default_priority: MEDIUM"))
        .stdout(contains("export_file: pc-death-red-death.json"));
}

#[test]
fn test_import_non_utf8_file_reports_import_error() {
    let db_path = setup_test_db("cli_import_non_utf8");
    init_db(&db_path);
    add_item(&db_path, "programs", "Firefox", "HIGH");
    let file = temp_out("cli_import_non_utf8", "json");
    fs::write(&file, [0xff, 0xfe, 0x7b, 0x00, 0xc3]).unwrap();

    pcd()
        .args(["--db", &db_path, "import", &file])
        .assert()
        .failure()
        .stderr(contains("Erro ao importar"))
        .stderr(contains("Invalid import file"));

    assert_eq!(open_store(&db_path).unwrap().total_items(), 1);
}

#[test]
fn test_export_keeps_empty_custom_groups() {
    let db_path = setup_test_db("cli_export_empty_group");
    init_db(&db_path);
    pcd()
        .args(["--db", &db_path, "group", "add", "Games", "--icon", "package"])
        .assert()
        .success();

    let out = temp_out("cli_export_empty_group", "json");
    pcd()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("export written");
    assert!(content.contains("Games"));
}

#[test]
fn test_messages_follow_selected_language() {
    let db_path = setup_test_db("cli_messages_language");
    init_db(&db_path);
    add_item(&db_path, "drivers", "Chipset", "HIGH");
    let id = find_item_id(&db_path, "Chipset");

    pcd()
        .args(["--db", &db_path, "group", "add", "Jogos"])
        .assert()
        .success()
        .stdout(contains("Grupo criado"));
    pcd()
        .args(["--db", &db_path, "move", &id, "--group", "drivers"])
        .assert()
        .success()
        .stdout(contains("Nada a fazer"));

    pcd()
        .args(["--db", &db_path, "lang", "en"])
        .assert()
        .success()
        .stdout(contains("Language set to en"));

    pcd()
        .args(["--db", &db_path, "group", "add", "Games"])
        .assert()
        .success()
        .stdout(contains("Group created"))
        .stdout(contains("Grupo criado").not());
    pcd()
        .args(["--db", &db_path, "move", &id, "--group", "drivers"])
        .assert()
        .success()
        .stdout(contains("Nothing to do"));
}

#[test]
fn test_unreadable_statuses_are_reported_on_open() {
    let db_path = setup_test_db("cli_bad_statuses");
    init_db(&db_path);
    {
        use pcdeath::db::initialize::open_db;
        use pcdeath::db::kv::SqliteKv;
        use pcdeath::storage::{KeyValueStore, STATUSES_KEY};
        let mut kv = SqliteKv::new(open_db(&db_path).unwrap());
        kv.set(STATUSES_KEY, r#"[{"id":"x","status":"maybe"}]"#).unwrap();
    }

    pcd()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Marcações salvas inválidas foram ignoradas: 1"));

    pcd()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Skipped 1 unusable status entries"));
}
