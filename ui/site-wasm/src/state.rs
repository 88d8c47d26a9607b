//! Shared application state.
//!
//! The cart lives in one `CartStore` backed by `localStorage`; `init` builds
//! it once and hands an `Rc` to every feature that needs it. WASM is
//! single-threaded, so `Rc` + interior mutability is all the sharing needed.

use bh_cart::{CartStore, SiteConfig};
use bh_storage::{CartStorage, StorageError};
use std::rc::Rc;

pub type SiteStore = CartStore<BrowserStorage>;
pub type SharedStore = Rc<SiteStore>;

/// `window.localStorage` as a cart backend.
#[derive(Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Read(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

impl CartStorage for BrowserStorage {
    fn load(&self, key: &str) -> bh_storage::Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn save(&self, key: &str, value: &str) -> bh_storage::Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

pub fn new_store(config: &SiteConfig) -> SharedStore {
    Rc::new(CartStore::with_key(BrowserStorage, config.storage_key.clone()))
}
