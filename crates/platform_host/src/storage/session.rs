//! Tab-scoped session storage contracts and adapters.
//!
//! Session values live and die with one browsing context: a fresh tab starts
//! empty even when durable preferences persist. The browser adapter maps this
//! onto `sessionStorage`, which is synchronous at the platform boundary, so
//! the contract stays synchronous too.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for tab-scoped string flags.
pub trait SessionStore {
    /// Reads the value stored for a session key.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a value for a session key.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying storage rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), String>;

    /// Removes a session key.
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op session store for unsupported targets.
pub struct NoopSessionStore;

impl SessionStore for NoopSessionStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), String> {
        Ok(())
    }

    fn remove(&self, _key: &str) {}
}

#[derive(Debug, Clone, Default)]
/// In-memory session store standing in for one browsing context in tests.
pub struct MemorySessionStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_session_store_round_trip() {
        let store = MemorySessionStore::default();
        assert_eq!(store.get("ageVerified"), None);
        store.set("ageVerified", "true").expect("set");
        assert_eq!(store.get("ageVerified"), Some("true".to_string()));
        store.remove("ageVerified");
        assert_eq!(store.get("ageVerified"), None);
    }

    #[test]
    fn separate_stores_do_not_share_state() {
        let first = MemorySessionStore::default();
        let second = MemorySessionStore::default();
        first.set("flag", "true").expect("set");
        assert_eq!(second.get("flag"), None);
    }
}
