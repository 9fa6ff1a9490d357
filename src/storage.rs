use oracle_core::{KeyValueStore, MemoryStore, StoreError};
use web_sys as web;

/// `window.localStorage` as a key-value store.
pub struct LocalStore {
    storage: web::Storage,
}

impl LocalStore {
    pub fn open() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(format!("{:?}", e)))
    }
}

/// localStorage when the browser allows it, otherwise an in-memory store for
/// the session (private mode, sandboxed iframes).
pub fn open_store() -> Box<dyn KeyValueStore> {
    match LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            log::warn!("[storage] falling back to memory: {:?}", e);
            Box::new(MemoryStore::new())
        }
    }
}
