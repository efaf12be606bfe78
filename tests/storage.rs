//! Browser-only round-trips of the session store against real `localStorage`.
//! Run with `wasm-pack test --headless --chrome` (or `--firefox`).
#![cfg(target_arch = "wasm32")]

use gloo::storage::{LocalStorage, Storage};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

use contratos_frontend::services::SessionStore;
use contratos_frontend::types::{Session, User};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn restores_persisted_session() {
    SessionStore::clear();
    let storage = LocalStorage::raw();
    storage.set_item("token", "abc").unwrap();
    storage
        .set_item("user", r#"{"id":1,"nome":"Ana","email":"ana@example.com"}"#)
        .unwrap();

    let session = SessionStore::load().expect("session should restore");
    assert_eq!(session.token, "abc");
    assert_eq!(session.user.nome, "Ana");
}

#[wasm_bindgen_test]
fn corrupt_user_clears_both_keys() {
    SessionStore::clear();
    let storage = LocalStorage::raw();
    storage.set_item("token", "abc").unwrap();
    storage.set_item("user", "{not json").unwrap();

    assert!(SessionStore::load().is_none());
    assert!(storage.get_item("token").unwrap().is_none());
    assert!(storage.get_item("user").unwrap().is_none());
}

#[wasm_bindgen_test]
fn save_load_clear_round_trip() {
    SessionStore::clear();
    let session = Session {
        token: "tok-123".to_string(),
        user: User {
            id: 7,
            nome: "Bia".to_string(),
            email: "bia@example.com".to_string(),
            data_cadastro: None,
        },
    };

    SessionStore::save(&session);
    let loaded = SessionStore::load().expect("saved session should load");
    assert_eq!(loaded, session);

    SessionStore::clear();
    assert!(SessionStore::load().is_none());
}
