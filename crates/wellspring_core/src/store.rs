//! Persistence for tracked records.
//!
//! The calculators never touch storage. Callers load a [`WellnessData`]
//! snapshot through a [`WellnessStore`], compute, and save it back.

use std::io::Write;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cycle::CycleRecord;
use crate::exams::ExamRecord;
use crate::hydration::WaterLog;
use crate::profile::Profile;
use crate::{CoreError, Result};

/// Everything a user has recorded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, alias = "periodData", skip_serializing_if = "Option::is_none")]
    pub cycle: Option<CycleRecord>,
    #[serde(default)]
    pub exams: Vec<ExamRecord>,
    #[serde(default)]
    pub water_logs: Vec<WaterLog>,
}

/// Repository for [`WellnessData`].
pub trait WellnessStore {
    fn load(&self) -> Result<WellnessData>;
    fn save(&self, data: &WellnessData) -> Result<()>;

    /// Forget everything that has been recorded.
    fn clear(&self) -> Result<()> {
        self.save(&WellnessData::default())
    }

    /// Load, apply `f`, save. Returns whatever `f` returns.
    fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut WellnessData) -> Result<T>,
        Self: Sized,
    {
        let mut data = self.load()?;
        let value = f(&mut data)?;
        self.save(&data)?;
        Ok(value)
    }
}

/// Stores data as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Default data file under the user's data directory.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wellspring")
            .join("data.json")
    }
}

impl WellnessStore for JsonFileStore {
    /// A missing file reads as empty data.
    fn load(&self) -> Result<WellnessData> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(WellnessData::default());
        }

        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| CoreError::store_io("read", self.path.display().to_string(), e))?;

        let data = serde_json::from_str(&content).map_err(|e| CoreError::SerializationError {
            data_type: "wellness data".to_string(),
            cause: e,
        })?;

        debug!(path = %self.path.display(), "loaded wellness data");
        Ok(data)
    }

    /// Writes a sibling temp file and renames it over the data file, so a
    /// crash mid-write leaves the previous contents intact.
    fn save(&self, data: &WellnessData) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| {
            CoreError::store_io("create directory", parent.display().to_string(), e)
        })?;

        let content =
            serde_json::to_string_pretty(data).map_err(|e| CoreError::SerializationError {
                data_type: "wellness data".to_string(),
                cause: e,
            })?;

        let mut staged = tempfile::NamedTempFile::new_in(parent).map_err(|e| {
            CoreError::store_io("create temp file in", parent.display().to_string(), e)
        })?;
        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| CoreError::store_io("write", staged.path().display().to_string(), e))?;
        staged
            .persist(&self.path)
            .map_err(|e| CoreError::store_io("replace", self.path.display().to_string(), e.error))?;

        debug!(path = %self.path.display(), "saved wellness data");
        Ok(())
    }

    /// Removes the data file. A missing file is already clear.
    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "removed wellness data");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CoreError::store_io(
                "remove",
                self.path.display().to_string(),
                e,
            )),
        }
    }
}

/// In-process store, mostly for tests and embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<WellnessData>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: WellnessData) -> Self {
        Self {
            data: RwLock::new(data),
        }
    }
}

impl WellnessStore for MemoryStore {
    fn load(&self) -> Result<WellnessData> {
        Ok(self.data.read().clone())
    }

    fn save(&self, data: &WellnessData) -> Result<()> {
        *self.data.write() = data.clone();
        Ok(())
    }
}
