//! Durable session storage bridge over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session keeps two copies of identity and credential: the reactive
//! in-memory state and this durable mirror that survives reloads. The two
//! durable keys (`user`, `token`) are always written together and cleared
//! together; `state::session` is the only caller, so no other code path can
//! leave one key behind without the other.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::Identity;

/// Durable key holding the serialized [`Identity`].
pub const USER_KEY: &str = "user";
/// Durable key holding the opaque bearer credential.
pub const TOKEN_KEY: &str = "token";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Write both durable keys for an authenticated session.
pub fn save_session(identity: &Identity, token: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(user_json) = serde_json::to_string(identity) else {
            return;
        };
        let _ = storage.set_item(USER_KEY, &user_json);
        let _ = storage.set_item(TOKEN_KEY, token);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (identity, token);
    }
}

/// Erase both durable keys.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(USER_KEY);
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

/// Read the durable credential, the fallback source when the in-memory copy
/// has not been repopulated after a fresh page load.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
