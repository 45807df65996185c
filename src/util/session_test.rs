use super::*;
use crate::host::MemorySessionStore;
use serde_json::{Value, json};

fn keys() -> SessionKeys {
    SessionKeys::default()
}

#[test]
fn get_token_is_none_when_unset() {
    let store = MemorySessionStore::new();
    assert_eq!(get_token(&store, &keys()), None);
}

#[test]
fn get_token_returns_stored_value() {
    let store = MemorySessionStore::new();
    store.set_item("app_token", "X");
    assert_eq!(get_token(&store, &keys()).as_deref(), Some("X"));
}

#[test]
fn get_token_honors_configured_key() {
    let store = MemorySessionStore::new();
    store.set_item("app_token", "default");
    store.set_item("other_token", "custom");
    let keys = SessionKeys { token_key: "other_token".to_owned(), ..SessionKeys::default() };
    assert_eq!(get_token(&store, &keys).as_deref(), Some("custom"));
}

#[test]
fn get_user_data_is_none_when_unset_or_empty() {
    let store = MemorySessionStore::new();
    assert!(get_user_data::<Value, _>(&store, &keys()).unwrap().is_none());

    store.set_item("user_data", "");
    assert!(get_user_data::<Value, _>(&store, &keys()).unwrap().is_none());
}

#[test]
fn get_user_data_parses_stored_json() {
    let store = MemorySessionStore::new();
    let profile = json!({ "personal_nr": 12345, "rolle": "Mitarbeiter", "name": "Alex Muster", "email": "" });
    store.set_item("user_data", &profile.to_string());

    let value = get_user_data::<Value, _>(&store, &keys()).unwrap();
    assert_eq!(value, Some(profile));
}

#[test]
fn get_user_data_reads_typed_profile() {
    let store = MemorySessionStore::new();
    store.set_item("user_data", r#"{"personal_nr":7,"rolle":"HR","name":"Kim Beispiel"}"#);

    let user = get_user_data::<UserData, _>(&store, &keys()).unwrap().unwrap();
    assert_eq!(user.personal_nr, 7);
    assert_eq!(user.name, "Kim Beispiel");
    assert_eq!(user.email, None);
    assert!(user.is_hr());
}

#[test]
fn get_user_data_reports_corrupt_json() {
    let store = MemorySessionStore::new();
    store.set_item("user_data", "{not json");

    let err = get_user_data::<Value, _>(&store, &keys()).unwrap_err();
    assert!(matches!(err, SessionError::CorruptUserData(_)));
    assert_eq!(err.error_code(), "E_CORRUPT_USER_DATA");
    assert!(err.to_string().starts_with("stored user data is not valid JSON"));
}

#[test]
fn is_hr_requires_exact_role() {
    let user = UserData { personal_nr: 1, rolle: "Mitarbeiter".to_owned(), name: "A".to_owned(), email: None };
    assert!(!user.is_hr());
    let user = UserData { rolle: "hr".to_owned(), ..user };
    assert!(!user.is_hr());
}
