//! Durable local storage for user-reported incidents
//!
//! The persisted value is a JSON-encoded array of incident records under a
//! fixed key. Read and write failures are absorbed: a failed read behaves as
//! "no data", a failed write as a no-op, both logged at warn level.

use crate::core::config::StorageConfig;
use crate::core::incident::{seed_incidents, Incident};
use crate::Result;
use fxhash::FxHashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Key the incident collection is stored under
pub const STORAGE_KEY: &str = "disasterPlatformIncidents";

/// Anything that can durably hold string values by key
pub trait StorageBackend: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed storage: one JSON file per key under a data directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and headless demos
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<fxhash::FxHashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| crate::MapError::Storage("poisoned lock".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| crate::MapError::Storage("poisoned lock".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| crate::MapError::Storage("poisoned lock".to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Owns the combined list of seed and user incidents
pub struct IncidentStore {
    backend: Box<dyn StorageBackend>,
    key: String,
}

impl IncidentStore {
    pub fn new(backend: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Store backed by a JSON file per the storage configuration
    pub fn with_file_storage(config: &StorageConfig) -> Self {
        Self::new(
            Box::new(FileStorage::new(config.dir.clone())),
            config.key.clone(),
        )
    }

    /// Reads the persisted user-incident list; absent or unparseable data
    /// yields an empty list
    pub fn load_user_incidents(&self) -> Vec<Incident> {
        let raw = match self.backend.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to load incidents from storage: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Incident>>(&raw) {
            Ok(incidents) => {
                log::info!("loaded {} incidents from storage", incidents.len());
                incidents
            }
            Err(e) => {
                log::warn!("failed to parse stored incidents: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrites the persisted collection with `incidents`
    pub fn save_user_incidents(&self, incidents: &[Incident]) {
        let raw = match serde_json::to_string(incidents) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("failed to serialize incidents: {}", e);
                return;
            }
        };

        match self.backend.write(&self.key, &raw) {
            Ok(()) => log::info!("saved {} incidents to storage", incidents.len()),
            Err(e) => log::warn!("failed to save incidents to storage: {}", e),
        }
    }

    /// Appends one incident to the persisted list. No dedup: identical
    /// submissions produce distinct entries.
    pub fn append(&self, incident: &Incident) {
        let mut stored = self.load_user_incidents();
        stored.push(incident.clone());
        self.save_user_incidents(&stored);
    }

    /// The seed list followed by persisted user incidents, excluding any
    /// stored record that structurally equals a seed record
    pub fn all_incidents(&self) -> Vec<Incident> {
        let seeds = seed_incidents();
        let seed_forms: FxHashSet<String> = seeds
            .iter()
            .filter_map(|seed| serde_json::to_string(seed).ok())
            .collect();

        let mut all: Vec<Incident> = seeds.to_vec();
        all.extend(self.load_user_incidents().into_iter().filter(|incident| {
            serde_json::to_string(incident)
                .map(|form| !seed_forms.contains(&form))
                .unwrap_or(true)
        }));
        all
    }

    /// Drops the persisted collection
    pub fn clear(&self) {
        match self.backend.remove(&self.key) {
            Ok(()) => log::info!("incidents cleared from storage"),
            Err(e) => log::warn!("failed to clear storage: {}", e),
        }
    }
}
