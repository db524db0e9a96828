use crate::data::loader::{load, DataSource};
use crate::data::LoadError;
use crate::domain::table::ListingTable;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::sync::{Arc, Mutex, MutexGuard};

/// An immutable loaded dataset.
#[derive(Debug)]
pub struct Snapshot {
    pub table: ListingTable,
    pub loaded_at: DateTime<Utc>,
}

/// Process-wide memo of the loaded dataset.
///
/// The lock is held across a load so concurrent first requests trigger a
/// single fetch. Failed loads are not remembered.
pub struct DatasetCache {
    source: DataSource,
    slot: Mutex<Option<Arc<Snapshot>>>,
}

impl DatasetCache {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            slot: Mutex::new(None),
        }
    }

    pub fn get_or_load(&self) -> Result<Arc<Snapshot>, LoadError> {
        let mut slot = self.lock();

        if let Some(snapshot) = slot.as_ref() {
            return Ok(Arc::clone(snapshot));
        }

        let table = load(&self.source).map_err(|e| {
            warn!("Dataset load failed: {e}");
            e
        })?;

        let snapshot = Arc::new(Snapshot {
            table,
            loaded_at: Utc::now(),
        });
        *slot = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// Drops the cached dataset; the next `get_or_load` fetches it again.
    pub fn invalidate(&self) {
        if self.lock().take().is_some() {
            info!("Dataset cache invalidated");
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<Snapshot>>> {
        // the slot only ever holds a complete snapshot, so a poisoned lock is still usable
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
