use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage backend unavailable")]
    Unavailable,
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write rejected: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// A string key-value slot, the shape of browser `localStorage`.
pub trait CartStorage {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: CartStorage + ?Sized> CartStorage for Rc<T> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

#[derive(Default)]
pub struct InMemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryStorage {
    /// Storage pre-seeded with one raw entry, handy for corrupt-blob cases.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl CartStorage for InMemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_roundtrip_replaces_value() {
        let storage = InMemoryStorage::default();
        assert_eq!(storage.load("k").unwrap(), None);
        storage.save("k", "[1]").unwrap();
        storage.save("k", "[2]").unwrap();
        assert_eq!(storage.load("k").unwrap().as_deref(), Some("[2]"));
    }

    #[test]
    fn shared_handle_sees_writes() {
        let storage = Rc::new(InMemoryStorage::default());
        let other = Rc::clone(&storage);
        other.save("k", "v").unwrap();
        assert_eq!(storage.raw("k").as_deref(), Some("v"));
    }
}
