use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::window;

/// Durable key-value persistence injected into the widget and the theme.
///
/// Errors are plain strings; callers treat every failure as "no value".
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

/// `window.localStorage`. Every call re-acquires the storage handle so a
/// disabled storage shows up as an error instead of a panic.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, String> {
        window()
            .ok_or_else(|| "no window".to_string())?
            .local_storage()
            .map_err(|_| "local storage access denied".to_string())?
            .ok_or_else(|| "local storage unavailable".to_string())
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| format!("failed to read {}", key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| format!("failed to write {} (quota?)", key))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| format!("failed to remove {}", key))
    }
}

/// In-memory store, used by tests and as a stand-in when no durable store exists.
#[derive(Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
    broken: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store where every operation fails, like a browser with storage disabled.
    pub fn unavailable() -> Self {
        Self {
            items: Rc::default(),
            broken: true,
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, String> {
        if self.broken {
            return Err("storage disabled".to_string());
        }
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        if self.broken {
            return Err("storage disabled".to_string());
        }
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        if self.broken {
            return Err("storage disabled".to_string());
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Shared store handle usable as a component property.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn KeyValueStore>);

impl StoreHandle {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Default for StoreHandle {
    fn default() -> Self {
        Self::new(BrowserStore)
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for StoreHandle {
    type Target = dyn KeyValueStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
