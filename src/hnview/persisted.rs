//! A single named value that lives in a [`KeyValueStore`].
//!
//! Reads happen once, at [`PersistedValue::load`]. Every [`PersistedValue::set`] writes
//! through to the store immediately; there is no batching or debouncing.

use crate::error::Result;
use crate::store::KeyValueStore;

pub struct PersistedValue<S: KeyValueStore> {
    store: S,
    key: String,
    value: String,
}

impl<S: KeyValueStore> PersistedValue<S> {
    /// Seeds the value from the store, or from `default` when nothing non-empty is stored.
    pub fn load(store: S, key: impl Into<String>, default: &str) -> Result<Self> {
        let key = key.into();
        let value = store
            .get(&key)?
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string());
        Ok(Self { store, key, value })
    }

    pub fn get(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        self.store.set(&self.key, &value)?;
        self.value = value;
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
