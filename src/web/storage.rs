//! Best scores in `window.localStorage`.

use web_sys::{Storage, window};

use crate::error::StoreError;
use crate::store::ScoreStore;

/// Local storage scoped to the page origin. Values are stored as decimal text.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

impl ScoreStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<u64> {
        let raw = local_storage()?.get_item(key).ok()??;
        raw.trim().parse().ok()
    }

    fn set(&mut self, key: &str, value: u64) -> Result<(), StoreError> {
        let storage = local_storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, &value.to_string())
            .map_err(|e| StoreError::WriteFailed(format!("{e:?}")))
    }
}
