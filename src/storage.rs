use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    collections::BTreeMap,
    env, fmt,
    path::PathBuf,
    sync::Arc,
};
use tokio::{fs, sync::Mutex};
use tracing::error;

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug)]
pub enum StoreError {
    /// The backing file exists but cannot be read or its directory cannot
    /// be created. The app keeps running without persistence.
    Unavailable(std::io::Error),
    Serialize(serde_json::Error),
    Write(std::io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(err) => write!(f, "store unavailable: {err}"),
            StoreError::Serialize(err) => write!(f, "failed to serialize store: {err}"),
            StoreError::Write(err) => write!(f, "failed to write store: {err}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Unavailable(err) | StoreError::Write(err) => Some(err),
            StoreError::Serialize(err) => Some(err),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    records: BTreeMap<String, Value>,
}

/// Key-value store backed by a single JSON file. Records are held in memory
/// after open; every put rewrites the whole file, so the file always holds a
/// complete snapshot.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    records: Arc<Mutex<BTreeMap<String, Value>>>,
}

impl Store {
    /// Opens the store, creating the parent directory on demand. A missing
    /// file is an empty store; an unparseable one or a file with an unknown
    /// schema version is logged and treated as empty. Reopening an already
    /// initialized path has no side effects.
    pub async fn open(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(StoreError::Unavailable)?;
            }
        }

        let records = match fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice::<StoreFile>(&bytes) {
                Ok(file) if file.version == SCHEMA_VERSION => file.records,
                Ok(file) => {
                    error!(
                        "store at {} has unknown schema version {}, starting empty",
                        path.display(),
                        file.version
                    );
                    BTreeMap::new()
                }
                Err(err) => {
                    error!("failed to parse store file {}: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => return Err(StoreError::Unavailable(err)),
        };

        Ok(Self {
            path,
            records: Arc::new(Mutex::new(records)),
        })
    }

    pub async fn get(&self, key: &str) -> Option<Value> {
        self.records.lock().await.get(key).cloned()
    }

    pub async fn put(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        records.insert(key.to_string(), value);
        let file = StoreFile {
            version: SCHEMA_VERSION,
            records: records.clone(),
        };
        let payload = serde_json::to_vec_pretty(&file).map_err(StoreError::Serialize)?;
        fs::write(&self.path, payload)
            .await
            .map_err(StoreError::Write)?;
        Ok(())
    }
}

pub fn resolve_store_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("DASHBOARD_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/sport_stats.json"))
}
