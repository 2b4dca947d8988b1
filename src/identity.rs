//! Persisted identity storage.
//!
//! The username survives navigations and reloads in the browser's
//! `localStorage`. This crate only reads it; the login flow writes it.
//! Requires a browser environment for [`BrowserStorage`] to return data.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key holding the persisted username.
pub const IDENTITY_KEY: &str = "username";

/// Read access to a persisted key-value store.
pub trait IdentityStore {
    fn get_item(&self, key: &str) -> Option<String>;
}

/// `window.localStorage`. Always empty outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl IdentityStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let storage = web_sys::window()?.local_storage().ok()??;
            storage.get_item(key).ok()?
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }
}

/// In-process store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding only the persisted username.
    #[must_use]
    pub fn with_identity(username: &str) -> Self {
        let store = Self::new();
        store.set_item(IDENTITY_KEY, username);
        store
    }

    pub fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

impl IdentityStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }
}

impl<S: IdentityStore + ?Sized> IdentityStore for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }
}

/// Read the persisted username. An empty value counts as absent.
pub fn read_identity(store: &impl IdentityStore) -> Option<String> {
    store.get_item(IDENTITY_KEY).filter(|name| !name.is_empty())
}
