// src/infra/prefs.rs — Durable local preferences
//
// A flat JSON object of string values. The only entry the client writes is
// the disclaimer flag; unknown keys are preserved on write.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::infra::errors::HaqooqError;
use crate::infra::paths;

/// Fixed key for the "disclaimer has been seen" flag.
pub const DISCLAIMER_SEEN_KEY: &str = "haqooq-disclaimer-seen";

pub struct Prefs {
    path: PathBuf,
}

impl Prefs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Preferences at the default location in the config directory.
    pub fn open_default() -> Self {
        Self::new(paths::prefs_file_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn disclaimer_seen(&self) -> bool {
        self.get(DISCLAIMER_SEEN_KEY).is_some()
    }

    pub fn mark_disclaimer_seen(&self) -> Result<(), HaqooqError> {
        self.set(DISCLAIMER_SEEN_KEY, "true")
    }

    pub fn clear_disclaimer(&self) -> Result<(), HaqooqError> {
        self.remove(DISCLAIMER_SEEN_KEY)
    }

    /// A missing or unreadable file reads as empty.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    pub fn set(&self, key: &str, value: &str) -> Result<(), HaqooqError> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());
        self.write_all(&all)
    }

    pub fn remove(&self, key: &str) -> Result<(), HaqooqError> {
        let mut all = self.read_all();
        if all.remove(key).is_some() {
            self.write_all(&all)?;
        }
        Ok(())
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return BTreeMap::new(),
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable {}: {}", self.path.display(), e);
            BTreeMap::new()
        })
    }

    /// Atomic write (temp file + rename).
    fn write_all(&self, all: &BTreeMap<String, String>) -> Result<(), HaqooqError> {
        let dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        std::fs::create_dir_all(&dir)?;

        let json =
            serde_json::to_string_pretty(all).map_err(|e| HaqooqError::Prefs(e.to_string()))?;
        let tmp = dir.join(".prefs.json.tmp");

        let mut f = std::fs::File::create(&tmp)?;
        f.write_all(json.as_bytes())?;
        f.flush()?;
        f.sync_all()?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
