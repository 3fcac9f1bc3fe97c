//! pocket-storage-json
//!
//! JSON persistence for the ledger on top of a pluggable string key-value
//! backend. The whole ledger lives under one key as a JSON array.

use std::{
    collections::HashMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::Utc;
use pocket_core::{storage::LedgerStorage, CoreError};
use pocket_domain::Ledger;

/// Key the ledger is stored under unless configured otherwise.
pub const DEFAULT_LEDGER_KEY: &str = "transactions";

const FILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";
const SET_ASIDE_PREFIX: &str = "corrupt";
const SET_ASIDE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A string key-value store.
pub trait KeyValueBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CoreError>;
    /// Moves the value under `key` somewhere `get`/`set` on `key` will not
    /// touch, tagged with `label`. Returns the new location, or `None` when
    /// nothing is stored under `key`.
    fn set_aside(&self, key: &str, label: &str) -> Result<Option<String>, CoreError>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir
            .join(format!("{}.{}", canonical_name(key), FILE_EXTENSION))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let path = self.path_for(key);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn set_aside(&self, key: &str, label: &str) -> Result<Option<String>, CoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let mut target = suffixed_path(&path, label);
        let mut attempt = 1;
        while target.exists() {
            attempt += 1;
            target = suffixed_path(&path, &format!("{label}_{attempt}"));
        }
        fs::rename(&path, &target)?;
        Ok(Some(target.display().to_string()))
    }
}

/// Keeps entries in process memory.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory backend lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory backend lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_aside(&self, key: &str, label: &str) -> Result<Option<String>, CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory backend lock poisoned".into()))?;
        let Some(value) = entries.remove(key) else {
            return Ok(None);
        };
        let target = format!("{key}.{label}");
        entries.insert(target.clone(), value);
        Ok(Some(target))
    }
}

/// Persists the ledger as a compact JSON array under a single key.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> JsonLedgerStorage<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_LEDGER_KEY)
    }

    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KeyValueBackend> LedgerStorage for JsonLedgerStorage<B> {
    fn load_ledger(&self) -> Result<Option<Ledger>, CoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(None);
        };
        // A stored `null` counts as nothing stored.
        let ledger: Option<Ledger> = serde_json::from_str(&raw).map_err(|err| {
            CoreError::Serde(format!("stored value under `{}`: {err}", self.key))
        })?;
        Ok(ledger)
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError> {
        let json = serde_json::to_string(ledger).map_err(|err| CoreError::Serde(err.to_string()))?;
        self.backend.set(&self.key, &json)?;
        tracing::debug!(key = %self.key, transactions = ledger.len(), "ledger persisted");
        Ok(())
    }

    fn set_aside_unreadable(&self) -> Result<Option<String>, CoreError> {
        let label = format!(
            "{}-{}",
            SET_ASIDE_PREFIX,
            Utc::now().format(SET_ASIDE_TIMESTAMP_FORMAT)
        );
        self.backend.set_aside(&self.key, &label)
    }
}

/// Writes a pretty-printed copy of the ledger to an arbitrary path.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<(), CoreError> {
    let json =
        serde_json::to_string_pretty(ledger).map_err(|err| CoreError::Serde(err.to_string()))?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Reads a ledger previously written with [`save_ledger_to_path`] or by the
/// file backend.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        DEFAULT_LEDGER_KEY.into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    suffixed_path(path, TMP_SUFFIX)
}

fn suffixed_path(path: &Path, suffix: &str) -> PathBuf {
    let mut target = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, suffix),
        None => suffix.to_string(),
    };
    target.set_extension(ext);
    target
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_name_sanitizes_keys() {
        assert_eq!(canonical_name("Transactions"), "transactions");
        assert_eq!(canonical_name("my ledger/2024"), "my_ledger_2024");
        assert_eq!(canonical_name("  "), DEFAULT_LEDGER_KEY);
    }

    #[test]
    fn tmp_path_appends_suffix() {
        let tmp = tmp_path(Path::new("/data/transactions.json"));
        assert_eq!(tmp, PathBuf::from("/data/transactions.json.tmp"));
    }

    #[test]
    fn null_value_loads_as_nothing_stored() {
        let backend = MemoryBackend::new();
        backend.set(DEFAULT_LEDGER_KEY, "null").unwrap();
        let storage = JsonLedgerStorage::new(backend);
        assert!(storage.load_ledger().unwrap().is_none());
    }
}
