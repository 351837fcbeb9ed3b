//! Best-score persistence port.
//!
//! Activities only talk to a [`ScoreStore`]; the browser build plugs in
//! local storage, tests use [`MemoryStore`].

use std::collections::HashMap;

use crate::error::StoreError;

pub trait ScoreStore {
    fn get(&self, key: &str) -> Option<u64>;
    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn get(&self, key: &str) -> Option<u64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

/// Storage key for a level's best score.
pub fn best_score_key(prefix: &str, level_id: &str) -> String {
    format!("{prefix}{level_id}")
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(mut self, key: &str, value: u64) -> Self {
        self.values.insert(key.to_string(), value);
        self
    }
}

impl ScoreStore for MemoryStore {
    fn get(&self, key: &str) -> Option<u64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// Cached best score for one activity, written through to a store.
#[derive(Debug)]
pub struct BestScore<S> {
    store: S,
    key: String,
    best: u64,
}

impl<S: ScoreStore> BestScore<S> {
    /// Reads the stored value once; a missing value counts as zero.
    pub fn load(store: S, key: String) -> Self {
        let best = store.get(&key).unwrap_or(0);
        Self { store, key, best }
    }

    pub fn get(&self) -> u64 {
        self.best
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Persists `score` if it beats the current best. Returns whether it was a
    /// new record. A failed write is logged and otherwise ignored.
    pub fn offer(&mut self, score: u64) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        if let Err(err) = self.store.set(&self.key, score) {
            log::warn!("best score for {} not saved: {err}", self.key);
        }
        true
    }
}
