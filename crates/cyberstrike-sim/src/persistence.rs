//! Single-slot save game storage.
//!
//! The save is one JSON document stored under `SAVE_KEY` in a key-value
//! store. It is written and read wholesale; there is no versioning.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use cyberstrike_core::components::Weapon;
use cyberstrike_core::constants::{PLAYER_MAX_HEALTH, SAVE_KEY, XP_TO_FIRST_LEVEL};

/// Errors from save storage.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no save game found")]
    NoSave,
}

/// Key-value string storage.
pub trait SaveStore: Send {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SaveStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// In-process store (the default when no save directory is configured).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

fn default_max_health() -> f32 {
    PLAYER_MAX_HEALTH
}

fn default_xp_to_next() -> u32 {
    XP_TO_FIRST_LEVEL
}

/// Persisted player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedPlayer {
    pub health: f32,
    #[serde(default = "default_max_health")]
    pub max_health: f32,
    pub level: u32,
    pub xp: u32,
    #[serde(default = "default_xp_to_next")]
    pub xp_to_next: u32,
    pub position: [f32; 3],
    pub weapons: Vec<Weapon>,
}

/// Full save document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub player: SavedPlayer,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Current wall-clock time in milliseconds.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn save_game(store: &mut dyn SaveStore, data: &SaveData) -> Result<(), PersistError> {
    let json = serde_json::to_string(data)?;
    store.set(SAVE_KEY, &json)
}

pub fn load_game(store: &dyn SaveStore) -> Result<SaveData, PersistError> {
    let json = store.get(SAVE_KEY)?.ok_or(PersistError::NoSave)?;
    Ok(serde_json::from_str(&json)?)
}
