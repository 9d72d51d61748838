//! Bridges the store and in-memory state. Load happens once at startup;
//! save happens synchronously after every validated commit, never on a
//! timer. Persistence failures are logged and swallowed so an edit always
//! succeeds in memory.

use crate::models::{AppData, Metrics, Profile};
use crate::storage::{Store, StoreError};
use serde_json::Value;
use tracing::{debug, error};

pub const METRICS_KEY: &str = "appData";
pub const PROFILE_KEY: &str = "profileData";

/// Fetches both records and wholesale-replaces the defaults for each one
/// found. Absent or malformed records leave that record at its default.
pub async fn load_from_storage(store: &Store) -> AppData {
    let mut data = AppData::default();

    if let Some(value) = store.get(METRICS_KEY).await {
        match serde_json::from_value::<Metrics>(value) {
            Ok(metrics) => data.metrics = metrics,
            Err(err) => error!("malformed metrics record, keeping defaults: {err}"),
        }
    }

    if let Some(value) = store.get(PROFILE_KEY).await {
        match serde_json::from_value::<Profile>(value) {
            Ok(profile) => data.profile = profile,
            Err(err) => error!("malformed profile record, keeping defaults: {err}"),
        }
    }

    data
}

/// Writes both records. Custom cards are session-only and deliberately not
/// included.
pub async fn save_to_storage(store: &Store, data: &AppData) -> Result<(), StoreError> {
    store
        .put(METRICS_KEY, to_value(&data.metrics)?)
        .await?;
    store
        .put(PROFILE_KEY, to_value(&data.profile)?)
        .await?;
    Ok(())
}

/// Fail-soft save: without a store (degraded mode) this is a no-op, and a
/// write fault is logged and dropped. Callers must have already committed
/// the state in memory.
pub async fn persist(store: Option<&Store>, data: &AppData) {
    let Some(store) = store else {
        debug!("no store open, skipping persist");
        return;
    };
    if let Err(err) = save_to_storage(store, data).await {
        error!("failed to persist dashboard state: {err}");
    }
}

fn to_value<T: serde::Serialize>(record: &T) -> Result<Value, StoreError> {
    serde_json::to_value(record).map_err(StoreError::Serialize)
}
