use web_sys::window;

use crate::shared::api_client::Session;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Restore the persisted session, if any.
pub fn load_session() -> Session {
    let storage = match get_local_storage() {
        Some(s) => s,
        None => return Session::default(),
    };
    Session {
        token: storage.get_item(TOKEN_KEY).ok().flatten(),
        username: storage.get_item(USERNAME_KEY).ok().flatten(),
    }
}

/// Persist the session after a successful login.
pub fn save_session(token: &str, username: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(USERNAME_KEY, username);
    }
}

/// Clear the persisted session.
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USERNAME_KEY);
    }
}
