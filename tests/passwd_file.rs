//! Integration tests against a real password file on disk.

mod common;

use common::TestPasswd;
use keyward::{
    delete_user, is_admin_user, is_logged_in, is_regular_user, is_valid_new_username, load_users,
    login, register_user, CredentialStore, KeywardError, Role,
};

#[test]
fn test_password_file_does_not_exist() {
    let passwd = TestPasswd::sample();
    let result = load_users(passwd.missing_path());
    assert!(matches!(result, Err(KeywardError::NotFound(_))));
}

#[test]
fn test_blank_password_file() {
    let passwd = TestPasswd::with_contents("");
    let table = load_users(&passwd.path).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_open_password_file() {
    let passwd = TestPasswd::sample();
    let table = load_users(&passwd.path).unwrap();
    assert_eq!(table.len(), 2);

    let user = table.get("jdelgad").unwrap();
    assert_eq!(user.username, "jdelgad");
    assert_eq!(user.password, "pass");
    assert_eq!(user.role, Role::Admin);
}

#[test]
fn test_reference_scenario() {
    let passwd = TestPasswd::sample();
    let store = CredentialStore::open(&passwd.path);
    let table = store.load_users().unwrap();

    assert!(is_admin_user("jdelgad", &table).unwrap());
    assert!(!is_regular_user("jdelgad", &table).unwrap());
    assert!(is_regular_user("newUser", &table).unwrap());
    assert!(!is_admin_user("newUser", &table).unwrap());

    assert!(login("jdelgad", "pass", &table).unwrap().is_active());
    assert!(!login("jdelgad", "wrong", &table).unwrap().is_active());

    assert!(matches!(
        is_valid_new_username(&store, "jdelgad"),
        Err(KeywardError::AlreadyExists(_))
    ));
    assert!(is_valid_new_username(&store, "newestUser").unwrap());
}

#[test]
fn test_authenticate_reads_file_each_time() {
    let passwd = TestPasswd::sample();
    let store = CredentialStore::open(&passwd.path);
    assert!(store.authenticate("jdelgad", b"pass"));

    std::fs::write(&passwd.path, "jdelgad,changed,Admin\n").unwrap();
    assert!(!store.authenticate("jdelgad", b"pass"));
    assert!(store.authenticate("jdelgad", b"changed"));
    assert!(!store.user_exists("newUser"));
}

#[test]
fn test_is_logged_in_across_sessions() {
    let passwd = TestPasswd::sample();
    let table = load_users(&passwd.path).unwrap();

    let session = login("jdelgad", "pass", &table).unwrap();
    assert!(is_logged_in("jdelgad", &session));

    let session = login("newUser", "pass2", &table).unwrap();
    assert!(is_logged_in("newUser", &session));
    assert!(!is_logged_in("jdelgad", &session));
}

#[test]
fn test_register_user_persists() {
    let passwd = TestPasswd::sample();
    let store = CredentialStore::open(&passwd.path);
    register_user(&store, "newestUser", "password").unwrap();

    let table = load_users(&passwd.path).unwrap();
    let user = table.get("newestUser").unwrap();
    assert_eq!(user.password, "password");
    assert_eq!(user.role, Role::Regular);

    // Existing rows are rewritten with an explicit role column.
    assert!(passwd.read().contains("newUser,pass2,Regular\n"));
    assert_eq!(passwd.read().lines().count(), 3);
}

#[test]
fn test_register_user_missing_file() {
    let passwd = TestPasswd::sample();
    let store = CredentialStore::open(passwd.missing_path());

    let result = register_user(&store, "bob", "pw");
    assert!(matches!(result, Err(KeywardError::NotFound(_))));
    assert!(!passwd.missing_path().exists());
}

#[test]
fn test_delete_user() {
    let passwd = TestPasswd::sample();
    let store = CredentialStore::open(&passwd.path);

    register_user(&store, "newestUser", "pass3").unwrap();
    delete_user(&store, "newestUser").unwrap();

    let table = load_users(&passwd.path).unwrap();
    assert!(!table.is_registered("newestUser"));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_delete_last_user_leaves_empty_file() {
    let passwd = TestPasswd::with_contents("solo,pw\n");
    let store = CredentialStore::open(&passwd.path);

    delete_user(&store, "solo").unwrap();
    assert_eq!(passwd.read(), "");
    assert!(load_users(&passwd.path).unwrap().is_empty());
}

#[test]
fn test_delete_user_nonexistent_keeps_file() {
    let passwd = TestPasswd::sample();
    let store = CredentialStore::open(&passwd.path);

    let result = delete_user(&store, "ghost");
    assert!(matches!(result, Err(KeywardError::NotFound(_))));
    assert_eq!(passwd.read(), common::SAMPLE_PASSWD);
}

#[test]
fn test_unknown_role_survives_rewrite() {
    let passwd = TestPasswd::with_contents("mod,pw,Moderator\n");
    let store = CredentialStore::open(&passwd.path);

    register_user(&store, "bob", "pw2").unwrap();

    let table = load_users(&passwd.path).unwrap();
    assert_eq!(
        table.get("mod").unwrap().role,
        Role::Other("Moderator".to_string())
    );
    assert!(!is_admin_user("mod", &table).unwrap());
    assert!(!is_regular_user("mod", &table).unwrap());
}
