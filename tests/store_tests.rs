//! Store backend contract tests.
//!
//! Both backends are driven through the `Store` trait so they stay
//! interchangeable. The SQLite backend runs without a secret vault here;
//! offload behavior degrades to plaintext and the contract is identical.

use auth::core::entry::Entry;
use auth::core::store::{FileStore, SqliteStore, Store};
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("db.toml"))
}

fn sqlite_store(dir: &TempDir) -> SqliteStore {
    SqliteStore::open(dir.path().join("auth.db"), None).unwrap()
}

fn sample(name: &str) -> Entry {
    let mut entry = Entry::new(name, "JBSWY3DPEHPK3PXP");
    entry.digits = 6;
    entry.period = 30;
    entry
}

/// Shared contract: spec'd behavior every backend must satisfy.
fn check_store_contract(store: &mut dyn Store) {
    // Round-trip: one entry, equal in all fields except the assigned id
    let entry = sample("github");
    let id = store.add(&entry).unwrap();
    assert!(id > 0);

    let entries = store.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, entry.name);
    assert_eq!(entries[0].secret, entry.secret);
    assert_eq!(entries[0].digits, entry.digits);
    assert_eq!(entries[0].period, entry.period);
    assert_eq!(entries[0].id, id);

    // Caller-supplied ids are ignored
    let mut forced = sample("forced");
    forced.id = 999_999;
    let forced_id = store.add(&forced).unwrap();
    assert_ne!(forced_id, 999_999);

    // Uniqueness across sequential adds
    for i in 0..10 {
        store.add(&sample(&format!("entry-{i}"))).unwrap();
    }
    let mut ids: Vec<u64> = store.entries().unwrap().iter().map(|e| e.id).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total, "store allocated a duplicate id");

    // Remove on an unknown id fails and leaves the collection unchanged
    assert!(store.remove(0).is_err());
    assert_eq!(store.entries().unwrap().len(), total);

    // Remove on a known id succeeds and that id disappears
    store.remove(id).unwrap();
    assert!(store.entries().unwrap().iter().all(|e| e.id != id));

    // Update on an unknown id fails with no side effects
    let mut ghost = sample("ghost");
    ghost.id = 424_242;
    assert!(store.update(&ghost).is_err());
    assert!(store.entries().unwrap().iter().all(|e| e.name != "ghost"));

    // Update on a known id replaces exactly the targeted entry
    let mut target = store.entries().unwrap()[0].clone();
    let target_id = target.id;
    target.name = "renamed".to_string();
    target.secret = "MZXW6YTBOI".to_string();
    target.digits = 8;
    target.period = 60;
    store.update(&target).unwrap();

    let after = store.entries().unwrap();
    let updated = after.iter().find(|e| e.id == target_id).unwrap();
    assert_eq!(updated.name, "renamed");
    assert_eq!(updated.secret, "MZXW6YTBOI");
    assert_eq!(updated.digits, 8);
    assert_eq!(updated.period, 60);
    assert_eq!(after.iter().filter(|e| e.name == "renamed").count(), 1);
}

#[test]
fn file_store_contract() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);
    check_store_contract(&mut store);
}

#[test]
fn sqlite_store_contract() {
    let dir = TempDir::new().unwrap();
    let mut store = sqlite_store(&dir);
    store.load().unwrap();
    check_store_contract(&mut store);
}

#[test]
fn file_store_load_missing_file_fails_but_leaves_store_usable() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    assert!(store.load().is_err());
    assert!(store.entries().unwrap().is_empty());

    // Still usable
    let id = store.add(&sample("github")).unwrap();
    assert_eq!(id, 1);
}

#[test]
fn file_store_load_corrupt_file_fails_but_leaves_store_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.toml");
    std::fs::write(&path, "this is [not valid toml").unwrap();

    let mut store = FileStore::new(&path);
    assert!(store.load().is_err());
    assert!(store.entries().unwrap().is_empty());
}

#[test]
fn file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    let id = {
        let mut store = file_store(&dir);
        let mut entry = sample("github");
        entry.digits = 7;
        entry.period = 45;
        store.add(&entry).unwrap()
    };

    let mut reopened = file_store(&dir);
    reopened.load().unwrap();
    let entries = reopened.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].digits, 7);
    assert_eq!(entries[0].period, 45);
}

#[test]
fn file_store_ids_are_sequential() {
    let dir = TempDir::new().unwrap();
    let mut store = file_store(&dir);

    assert_eq!(store.add(&sample("a")).unwrap(), 1);
    assert_eq!(store.add(&sample("b")).unwrap(), 2);
    store.remove(1).unwrap();
    // max + 1, not first gap
    assert_eq!(store.add(&sample("c")).unwrap(), 3);
}

#[test]
fn file_store_omits_default_digits_and_period_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("db.toml");
    let mut store = FileStore::new(&path);
    store.add(&sample("github")).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("name"));
    assert!(contents.contains("id"));
    assert!(!contents.contains("digits"));
    assert!(!contents.contains("period"));

    let mut custom = sample("mail");
    custom.digits = 8;
    custom.period = 60;
    store.add(&custom).unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("digits"));
    assert!(contents.contains("period"));
}

#[test]
fn sqlite_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();

    let id = {
        let mut store = sqlite_store(&dir);
        store.load().unwrap();
        store.add(&sample("github")).unwrap()
    };

    let mut reopened = sqlite_store(&dir);
    reopened.load().unwrap();
    let entries = reopened.entries().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].name, "github");
}

#[test]
fn sqlite_store_ids_fall_in_the_allocation_range() {
    let dir = TempDir::new().unwrap();
    let mut store = sqlite_store(&dir);
    store.load().unwrap();

    for i in 0..20 {
        let id = store.add(&sample(&format!("entry-{i}"))).unwrap();
        assert!((1000..=5000).contains(&id), "id {id} outside range");
    }
}

#[test]
fn sqlite_store_fresh_database_loads_empty() {
    let dir = TempDir::new().unwrap();
    let mut store = sqlite_store(&dir);
    store.load().unwrap();
    assert!(store.entries().unwrap().is_empty());
}
