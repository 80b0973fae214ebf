#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use pcdeath::core::ChecklistStore;
use pcdeath::models::{IconType, ItemDraft, Priority};
use pcdeath::storage::MemoryKv;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn pcd() -> Command {
    cargo_bin_cmd!("pcdeath")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_pcdeath.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a DB through the CLI in test mode
pub fn init_db(db_path: &str) {
    pcd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Fresh in-memory store with the three default groups.
pub fn memory_store() -> ChecklistStore<MemoryKv> {
    ChecklistStore::open(MemoryKv::new()).expect("open memory store")
}

/// In-memory store with two programs, one driver and a custom "Tools" group
/// holding one item. Returns the store and the custom group id.
pub fn populated_store() -> (ChecklistStore<MemoryKv>, String) {
    let mut store = memory_store();
    store
        .add_item("programs", &ItemDraft::new("Firefox", "https://firefox.com", Priority::High))
        .unwrap();
    store
        .add_item("programs", &ItemDraft::new("VLC", "", Priority::Low))
        .unwrap();
    store
        .add_item("drivers", &ItemDraft::new("GPU driver", "https://nvidia.com", Priority::Medium))
        .unwrap();
    let tools = store.add_group("Tools", IconType::Wrench).unwrap();
    store
        .add_item(&tools.id, &ItemDraft::new("7-Zip", "https://7-zip.org", Priority::Medium))
        .unwrap();
    (store, tools.id)
}

/// Id of the item named `name`.
pub fn item_id(store: &ChecklistStore<MemoryKv>, name: &str) -> String {
    store
        .groups()
        .iter()
        .flat_map(|g| g.items.iter())
        .find(|i| i.name == name)
        .map(|i| i.id.clone())
        .expect("item present")
}
