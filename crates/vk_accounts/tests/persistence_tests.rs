//! Tests for the on-disk vault: file layout, reopening, corruption recovery.

use vk_accounts::{AccountStore, FileBackend, RegisterRequest};

fn file_store(dir: &std::path::Path) -> AccountStore {
    AccountStore::with_backend(Box::new(FileBackend::new(dir)))
}

fn ann() -> RegisterRequest {
    RegisterRequest {
        name: "Ann".to_owned(),
        email: "a@b.com".to_owned(),
        phone: "1234567890".to_owned(),
        password: "p1".to_owned(),
        confirm_password: "p1".to_owned(),
    }
}

#[test]
fn test_accounts_survive_reopening_the_vault() {
    let tmp = tempfile::tempdir().unwrap();

    let store = file_store(tmp.path());
    store.register(ann()).unwrap();
    store.login("a@b.com", "p1", true).unwrap();
    drop(store);

    let reopened = file_store(tmp.path());
    assert_eq!(reopened.list_accounts().len(), 1);
    assert_eq!(reopened.get_session().unwrap().name, "Ann");
}

#[test]
fn test_vault_files_are_named_after_their_keys() {
    let tmp = tempfile::tempdir().unwrap();

    let store = file_store(tmp.path());
    store.register(ann()).unwrap();
    store.login("a@b.com", "p1", true).unwrap();

    assert!(tmp.path().join("users.json").is_file());
    assert!(tmp.path().join("currentUser.json").is_file());
    assert!(tmp.path().join("rememberMe.json").is_file());
}

#[test]
fn test_logout_removes_slots_from_disk() {
    let tmp = tempfile::tempdir().unwrap();

    let store = file_store(tmp.path());
    store.register(ann()).unwrap();
    store.login("a@b.com", "p1", false).unwrap();
    store.logout();

    assert!(!tmp.path().join("currentUser.json").exists());
    assert!(!tmp.path().join("users.json").exists());
}

#[test]
fn test_corrupt_users_file_is_quarantined() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("users.json"), "{ half a record").unwrap();

    let store = file_store(tmp.path());
    assert!(store.list_accounts().is_empty());

    // The corrupt payload is kept aside for diagnosis and the slot is free
    let backup = tmp.path().join("users.json.bak");
    assert_eq!(std::fs::read_to_string(backup).unwrap(), "{ half a record");
    assert!(!tmp.path().join("users.json").exists());

    // Registration starts over cleanly
    store.register(ann()).unwrap();
    assert_eq!(store.list_accounts().len(), 1);
}

#[test]
fn test_sessions_written_by_older_vaults_still_parse() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join("currentUser.json"),
        r#"{"id":1755000000000,"name":"Ann","email":"a@b.com","phone":"1234567890"}"#,
    )
    .unwrap();

    let store = file_store(tmp.path());
    let session = store.get_session().unwrap();
    assert_eq!(session.id, 1_755_000_000_000);
    assert_eq!(session.name, "Ann");
}
