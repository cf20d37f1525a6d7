use crate::errors::GymbotError;
use crate::schedule::Mode;
use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Persisted single-value state: the active workout mode.
///
/// Absence or corruption is never an error — `load` falls back to the
/// default mode so a bad settings file can't stop a notification run.
pub trait ModeStore: Send + Sync {
    fn load(&self) -> Mode;
    fn save(&self, mode: Mode) -> Result<()>;
}

/// File-backed store: a single JSON object `{"mode": 4|6}`.
///
/// Writes go through a temp file + rename so a crash mid-write leaves
/// either the old content or nothing (which `load` treats as the default).
/// No cross-process lock is taken — gymbot is single-instance by design.
pub struct FileModeStore {
    path: PathBuf,
}

impl FileModeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ModeStore for FileModeStore {
    fn load(&self) -> Mode {
        let Ok(content) = fs::read_to_string(&self.path) else {
            debug!("no settings file at {}, using default mode", self.path.display());
            return Mode::default();
        };
        let Ok(data) = serde_json::from_str::<Value>(&content) else {
            debug!("settings file is not valid JSON, using default mode");
            return Mode::default();
        };
        data.get("mode")
            .and_then(Value::as_u64)
            .and_then(Mode::from_days)
            .unwrap_or_default()
    }

    fn save(&self, mode: Mode) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            crate::utils::ensure_dir(parent)?;
        }
        let content = serde_json::to_string(&json!({ "mode": mode.days() }))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(|e| {
            GymbotError::State(format!("failed to write settings to {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            GymbotError::State(format!(
                "failed to move settings into {}: {}",
                self.path.display(),
                e
            ))
        })?;
        Ok(())
    }
}

/// In-memory store for tests and dry runs.
#[derive(Default)]
pub struct MemoryModeStore {
    mode: Mutex<Option<Mode>>,
}

impl MemoryModeStore {
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            mode: Mutex::new(Some(mode)),
        }
    }
}

impl ModeStore for MemoryModeStore {
    fn load(&self) -> Mode {
        self.mode.lock().expect("mode lock").unwrap_or_default()
    }

    fn save(&self, mode: Mode) -> Result<()> {
        *self.mode.lock().expect("mode lock") = Some(mode);
        Ok(())
    }
}
