//! Token storage behind a small cookie-like interface.
//!
//! The login flow writes the `token` entry, every request reads it and logout or
//! the session guard removes it. `CookieJar` persists entries to a file so the
//! CLI keeps its session between invocations; `MemoryStore` is process-local.
//! Values are wrapped in `SecretString` and must never be logged.

use secrecy::{ExposeSecret, SecretString};
use std::{
    collections::{BTreeMap, HashMap},
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Mutex, RwLock},
};
use thiserror::Error;
use tracing::{debug, warn};

/// Cookie key holding the signed session token.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("cookie jar I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid cookie name or value")]
    InvalidEntry,
    #[error("token store lock poisoned")]
    Poisoned,
}

pub trait TokenStore: Send + Sync {
    fn get(&self, key: &str) -> Option<SecretString>;

    /// # Errors
    /// Returns an error if the entry cannot be persisted.
    fn set(&self, key: &str, value: SecretString) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    /// # Errors
    /// Returns an error if the backing storage cannot be updated.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    fn token(&self) -> Option<SecretString> {
        self.get(TOKEN_KEY)
    }

    /// # Errors
    /// Returns an error if the token cannot be persisted.
    fn set_token(&self, token: SecretString) -> Result<(), StoreError> {
        self.set(TOKEN_KEY, token)
    }

    /// # Errors
    /// Returns an error if the token cannot be removed.
    fn remove_token(&self) -> Result<(), StoreError> {
        self.remove(TOKEN_KEY)
    }
}

#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, SecretString>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        if let Ok(mut entries) = store.entries.write() {
            entries.insert(TOKEN_KEY.to_string(), SecretString::from(token.to_string()));
        }
        store
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<SecretString> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: SecretString) -> Result<(), StoreError> {
        self.entries
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .write()
            .map_err(|_| StoreError::Poisoned)?
            .remove(key);
        Ok(())
    }
}

/// File-backed store with one `name=value` entry per line.
pub struct CookieJar {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process.
    lock: Mutex<()>,
}

impl CookieJar {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> io::Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(parse_entries(&contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err),
        }
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        for (name, value) in entries {
            writeln!(file, "{name}={value}")?;
        }
        file.flush()
    }
}

fn parse_entries(contents: &str) -> BTreeMap<String, String> {
    contents
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                return None;
            }
            let (name, value) = line.split_once('=')?;
            Some((name.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

fn valid_entry(key: &str, value: &str) -> bool {
    !key.is_empty()
        && !key.contains(['=', '\n', '\r'])
        && !value.contains(['\n', '\r'])
        && key.trim() == key
}

impl TokenStore for CookieJar {
    fn get(&self, key: &str) -> Option<SecretString> {
        let _guard = self.lock.lock().ok()?;
        match self.load() {
            Ok(mut entries) => entries
                .remove(key)
                .filter(|value| !value.is_empty())
                .map(SecretString::from),
            Err(err) => {
                warn!("Could not read cookie jar {}: {}", self.path.display(), err);
                None
            }
        }
    }

    fn set(&self, key: &str, value: SecretString) -> Result<(), StoreError> {
        let value = value.expose_secret().trim();
        if !valid_entry(key, value) {
            return Err(StoreError::InvalidEntry);
        }

        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)?;
        debug!("stored cookie {key} in {}", self.path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().map_err(|_| StoreError::Poisoned)?;
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
            debug!("removed cookie {key} from {}", self.path.display());
        }
        Ok(())
    }
}
