//! Credential store adapter over `window.localStorage`.
//!
//! Four fixed keys, written and removed together. `load` hands back an
//! identity only when the full set is present and non-empty; anything less
//! reads as logged out. Values are opaque pass-throughs, no validation.

use common::model::identity::Identity;
use gloo_console::error;
use web_sys::Storage;

const KEY_ID: &str = "userId";
const KEY_PASSWORD: &str = "password";
const KEY_NAME: &str = "name";
const KEY_FULL_NAME: &str = "fullName";

fn storage() -> Option<Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(_) => {
            error!("localStorage is unavailable; the session will not survive a reload");
            None
        }
    }
}

/// Writes all four identity fields. A failed write is logged, never raised:
/// the in-memory session stays valid, only persistence is lost.
pub fn save(identity: &Identity) {
    let Some(storage) = storage() else { return };
    let result = storage
        .set_item(KEY_ID, &identity.id)
        .and_then(|()| storage.set_item(KEY_PASSWORD, &identity.password))
        .and_then(|()| storage.set_item(KEY_NAME, &identity.short_name))
        .and_then(|()| storage.set_item(KEY_FULL_NAME, &identity.display_name));
    if result.is_err() {
        error!("failed to persist credentials; the session will not survive a reload");
    }
}

/// Removes all four keys.
pub fn clear() {
    let Some(storage) = storage() else { return };
    for key in [KEY_ID, KEY_PASSWORD, KEY_NAME, KEY_FULL_NAME] {
        if storage.remove_item(key).is_err() {
            error!("failed to remove stored credential", key);
        }
    }
}

/// Restores the identity persisted by a previous visit, or `None` unless
/// every key is present and non-empty.
pub fn load() -> Option<Identity> {
    let storage = storage()?;
    let read = |key: &str| {
        storage
            .get_item(key)
            .ok()
            .flatten()
            .filter(|value| !value.is_empty())
    };
    Identity::from_parts(
        read(KEY_ID)?,
        read(KEY_PASSWORD)?,
        read(KEY_FULL_NAME)?,
        read(KEY_NAME)?,
    )
}
