//! Durable token persistence.
//!
//! The session outlives a page load through a single `access_token` key in
//! browser `localStorage`. The `TokenStore` trait keeps the session store
//! testable natively; `BrowserStore` is the real thing and `MemoryStore`
//! backs unit tests.
//!
//! All browser access is best-effort: an absent window or storage object
//! degrades to `None`/no-op rather than failing. The key is shared mutable
//! state between tabs with no synchronization.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::rc::Rc;

/// localStorage key holding the raw bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

/// Synchronous key-value persistence for the session token.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn token(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn set_token(&self, token: &str);
    /// Delete the persisted token. Safe to call when none exists.
    fn clear_token(&self);
}

/// Token store backed by browser `localStorage`. Requires a browser
/// environment; on the server every read is `None` and writes are no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(ACCESS_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear_token(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            }
        }
    }
}

/// In-memory token store for native tests and non-browser consumers.
/// Clones share the same slot, mirroring how every `BrowserStore` sees the
/// same localStorage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(Rc<RefCell<Option<String>>>);

impl TokenStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear_token(&self) {
        *self.0.borrow_mut() = None;
    }
}
