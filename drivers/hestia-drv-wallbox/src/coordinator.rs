//! Shared snapshot of the Wallbox portal data.
//!
//! The portal is polled outside this crate; every poll replaces the
//! snapshot held here wholesale. Sensor entities read whichever
//! snapshot the poller wrote last. There is no consistency guarantee
//! across fields beyond that.

use chrono::{DateTime, Utc};
use hestia_api::device;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Field key to cached value map, as produced by one poll of the
/// portal.
pub type DataMap = HashMap<String, device::Value>;

#[derive(Debug, Default)]
struct Snapshot {
    data: DataMap,
    last_updated: Option<DateTime<Utc>>,
}

/// Cloneable handle on the cached portal data. Reads never block on
/// I/O; writers replace the whole map.
#[derive(Debug, Clone, Default)]
pub struct Coordinator(Arc<RwLock<Snapshot>>);

impl Coordinator {
    pub fn new() -> Coordinator {
        Coordinator::default()
    }

    // A poisoned lock still holds a usable snapshot, so writers and
    // readers both recover the guard.

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Snapshot> {
        self.0.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Replaces the snapshot with the result of a fresh poll.
    pub fn update(&self, data: DataMap) {
        let mut snap = self.0.write().unwrap_or_else(|e| e.into_inner());

        snap.data = data;
        snap.last_updated = Some(Utc::now());
    }

    /// The last value the portal reported for `key`.
    pub fn value(&self, key: &str) -> Option<device::Value> {
        self.read().data.get(key).cloned()
    }

    /// The field keys present in the current snapshot.
    pub fn keys(&self) -> Vec<String> {
        self.read().data.keys().cloned().collect()
    }

    /// When the current snapshot was taken. `None` before the first
    /// poll.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.read().last_updated
    }
}
