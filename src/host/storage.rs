//! Session-scoped key-value storage.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// String key-value store that lives as long as the browser tab.
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str);
    fn remove_item(&self, key: &str);
}

/// `window.sessionStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct BrowserSessionStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl BrowserSessionStore {
    /// Returns `None` outside a window or when storage access is denied.
    pub fn new() -> Option<Self> {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        Some(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for BrowserSessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set_item(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }

    fn remove_item(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

/// In-memory store. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Drop every entry, as the browser does when the tab closes.
    pub fn clear(&self) {
        self.items.borrow_mut().clear();
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}
