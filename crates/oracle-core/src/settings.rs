//! User settings and spin history, persisted as JSON in a key-value store.

use crate::clock::MotionPreference;
use crate::constants::{DEFAULT_BASE_URL, HISTORY_CAPACITY, HISTORY_KEY, SETTINGS_KEY};
use crate::error::StoreError;
use crate::oracle::OracleResponse;
use crate::theme::ThemeId;
use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: FnvHashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// Missing fields in stored JSON take their defaults, so older saves still load.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub base_url: String,
    pub reduce_motion: bool,
    pub sound_enabled: bool,
    pub theme: ThemeId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            reduce_motion: false,
            sound_enabled: true,
            theme: ThemeId::default(),
        }
    }
}

impl Settings {
    pub fn motion(&self) -> MotionPreference {
        MotionPreference::from_reduce_motion(self.reduce_motion)
    }

    pub fn load(store: &(impl KeyValueStore + ?Sized)) -> Result<Self, StoreError> {
        match store.get(SETTINGS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, store: &mut (impl KeyValueStore + ?Sized)) -> Result<(), StoreError> {
        store.set(SETTINGS_KEY, &serde_json::to_string(self)?)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub question: String,
    pub result: OracleResponse,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Most recent spins, newest first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    pub fn push(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
        self.items.truncate(HISTORY_CAPACITY);
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.first()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn load(store: &(impl KeyValueStore + ?Sized)) -> Result<Self, StoreError> {
        let mut history: History = match store.get(HISTORY_KEY)? {
            Some(json) => serde_json::from_str(&json)?,
            None => History::default(),
        };
        history.items.truncate(HISTORY_CAPACITY);
        Ok(history)
    }

    pub fn save(&self, store: &mut (impl KeyValueStore + ?Sized)) -> Result<(), StoreError> {
        store.set(HISTORY_KEY, &serde_json::to_string(self)?)
    }
}
