//! Tests for the TOML/JSON import/export adapters.

use auth::core::entry::Entry;
use auth::core::import_export::{export_entries, import_entries, Format};
use auth::core::store::{FileStore, Store};
use tempfile::TempDir;

fn store(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("db.toml"))
}

#[test]
fn toml_roundtrip_preserves_fields() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("backup.toml");

    let mut mail = Entry::new("mail", "MZXW6YTBOI");
    mail.digits = 8;
    mail.period = 60;
    let entries = vec![Entry::new("github", "JBSWY3DPEHPK3PXP"), mail];

    export_entries(&file, Format::Toml, &entries).unwrap();

    let mut target = store(&dir);
    let imported = import_entries(&file, Format::Toml, &mut target).unwrap();
    assert_eq!(imported, 2);

    let restored = target.entries().unwrap();
    let mail = restored.iter().find(|e| e.name == "mail").unwrap();
    assert_eq!(mail.secret, "MZXW6YTBOI");
    assert_eq!(mail.digits, 8);
    assert_eq!(mail.period, 60);

    let github = restored.iter().find(|e| e.name == "github").unwrap();
    assert_eq!(github.digits, 6);
    assert_eq!(github.period, 30);
}

#[test]
fn json_roundtrip_preserves_fields() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("backup.json");

    let mut mail = Entry::new("mail", "MZXW6YTBOI");
    mail.digits = 7;
    let entries = vec![mail];

    export_entries(&file, Format::Json, &entries).unwrap();

    let mut target = store(&dir);
    assert_eq!(import_entries(&file, Format::Json, &mut target).unwrap(), 1);

    let restored = target.entries().unwrap();
    assert_eq!(restored[0].name, "mail");
    assert_eq!(restored[0].digits, 7);
    assert_eq!(restored[0].period, 30);
}

#[test]
fn export_omits_defaults_and_ids() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("backup.toml");

    let mut entry = Entry::new("github", "JBSWY3DPEHPK3PXP");
    entry.id = 1234;
    export_entries(&file, Format::Toml, &[entry]).unwrap();

    let contents = std::fs::read_to_string(&file).unwrap();
    assert!(contents.contains("github"));
    assert!(!contents.contains("digits"));
    assert!(!contents.contains("period"));
    assert!(!contents.contains("id"));
    assert!(!contents.contains("1234"));
}

#[test]
fn import_ignores_foreign_ids() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("backup.toml");
    std::fs::write(
        &file,
        r#"
[[entries]]
name = "github"
secret = "JBSWY3DPEHPK3PXP"
id = 777
"#,
    )
    .unwrap();

    let mut target = store(&dir);
    assert_eq!(import_entries(&file, Format::Toml, &mut target).unwrap(), 1);
    // The store allocated its own id
    assert_eq!(target.entries().unwrap()[0].id, 1);
}

#[test]
fn import_skips_records_missing_name_or_secret() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("partial.json");
    std::fs::write(
        &file,
        r#"{
  "entries": [
    { "name": "complete", "secret": "JBSWY3DPEHPK3PXP" },
    { "name": "no-secret" },
    { "secret": "MZXW6YTBOI" },
    { "name": "custom", "secret": "MZXW6YTBOI", "digits": 8, "period": 90 }
  ]
}"#,
    )
    .unwrap();

    let mut target = store(&dir);
    assert_eq!(import_entries(&file, Format::Json, &mut target).unwrap(), 2);

    let restored = target.entries().unwrap();
    assert_eq!(restored.len(), 2);
    let custom = restored.iter().find(|e| e.name == "custom").unwrap();
    assert_eq!(custom.digits, 8);
    assert_eq!(custom.period, 90);
}

#[test]
fn import_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let mut target = store(&dir);
    assert!(import_entries(
        dir.path().join("nope.toml").as_path(),
        Format::Toml,
        &mut target
    )
    .is_err());
}

#[test]
fn import_malformed_document_fails() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.toml");
    std::fs::write(&file, "entries = \"not an array\"").unwrap();

    let mut target = store(&dir);
    assert!(import_entries(&file, Format::Toml, &mut target).is_err());
}

#[test]
fn import_empty_document_imports_nothing() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("empty.toml");
    std::fs::write(&file, "").unwrap();

    let mut target = store(&dir);
    assert_eq!(import_entries(&file, Format::Toml, &mut target).unwrap(), 0);
}
