//! Browser-scoped token store.
//!
//! The session is a pair of opaque tokens persisted in `localStorage` under
//! fixed keys. The store has no expiry logic of its own; session lifetime is
//! governed entirely by the tokens' `exp` claims.

use crate::config::AuthConfig;
use gateway_client::types::TokenPair;
use web_sys::Storage;

/// Handle over the browser's local storage area.
#[derive(Clone)]
pub struct SessionStore {
    storage: Storage,
}

impl SessionStore {
    /// Open the store. Returns `None` outside a browser context or when
    /// storage access is denied.
    pub fn new() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }

    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    /// Current access token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.get(AuthConfig::ACCESS_TOKEN_KEY)
    }

    /// Current refresh token, if any.
    pub fn refresh_token(&self) -> Option<String> {
        self.get(AuthConfig::REFRESH_TOKEN_KEY)
    }

    /// Persist both tokens, as issued at sign-in / sign-up / OAuth callback.
    pub fn set_tokens(&self, tokens: &TokenPair) {
        let _ = self
            .storage
            .set_item(AuthConfig::ACCESS_TOKEN_KEY, &tokens.access);
        let _ = self
            .storage
            .set_item(AuthConfig::REFRESH_TOKEN_KEY, &tokens.refresh);
    }

    /// Replace the access token in place after a refresh.
    pub fn set_access_token(&self, access: &str) {
        let _ = self.storage.set_item(AuthConfig::ACCESS_TOKEN_KEY, access);
    }

    /// Wipe the whole storage area, not just the two token keys. Logout
    /// intentionally nukes all local state the application owns.
    pub fn clear_all(&self) {
        let _ = self.storage.clear();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn tokens_round_trip_and_clear() {
        let store = SessionStore::new().expect("storage available in browser tests");
        store.clear_all();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());

        store.set_tokens(&TokenPair {
            access: "a.b.c".into(),
            refresh: "d.e.f".into(),
        });
        assert_eq!(store.access_token().as_deref(), Some("a.b.c"));
        assert_eq!(store.refresh_token().as_deref(), Some("d.e.f"));

        store.set_access_token("x.y.z");
        assert_eq!(store.access_token().as_deref(), Some("x.y.z"));
        // Refresh token untouched by an in-place access refresh
        assert_eq!(store.refresh_token().as_deref(), Some("d.e.f"));

        store.clear_all();
        assert!(store.access_token().is_none());
        assert!(store.refresh_token().is_none());
    }
}
