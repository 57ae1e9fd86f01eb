//! Persisted session state.
//!
//! ## Design
//!
//! One fixed schema, one file. Loading validates every field it depends
//! on — schema version, project invariants, presence of the reserved
//! files, a resolvable active file — and any violation is a typed
//! [`CoreError::CorruptState`]. Nothing is silently dropped or repaired:
//! a corrupt file is the user's data, and the UI decides whether to fall
//! back to a starter project or restore a backup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use webforge_project::{Project, RESERVED_FILES};

use crate::config::Config;
use crate::event::SessionEvent;
use crate::session::Session;
use crate::{CoreError, CoreResult};

/// Version written into every state file. Bump on incompatible changes.
pub const SCHEMA_VERSION: u32 = 1;

/// The on-disk shape of a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    /// Schema version of this file
    pub schema_version: u32,

    /// The full project
    pub project: Project,

    /// Name of the active file at save time
    pub active_file: String,

    /// When the state was written
    pub saved_at: DateTime<Utc>,
}

impl SavedSession {
    /// Captures the current session state.
    pub fn capture(session: &Session) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            project: session.project().clone(),
            active_file: session.active_file().to_string(),
            saved_at: Utc::now(),
        }
    }

    /// Checks the schema against everything a restored session relies on.
    fn validate(&self) -> Result<(), String> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(format!(
                "unsupported schema version {} (expected {SCHEMA_VERSION})",
                self.schema_version
            ));
        }

        self.project.validate()?;

        for name in RESERVED_FILES {
            if !self.project.contains(name) {
                return Err(format!("reserved file '{name}' is missing"));
            }
        }

        if !self.project.contains(&self.active_file) {
            return Err(format!(
                "active file '{}' does not exist in the project",
                self.active_file
            ));
        }

        Ok(())
    }
}

/// Returns the default state file path.
pub fn default_path() -> CoreResult<PathBuf> {
    let data_dir = dirs::data_dir().ok_or(CoreError::NoDataDir)?;
    Ok(data_dir.join("webforge").join("session.json"))
}

/// Writes the session state to disk, creating parent directories.
pub fn save(session: &Session, path: impl AsRef<Path>) -> CoreResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let state = SavedSession::capture(session);
    let json = serde_json::to_string_pretty(&state)?;
    std::fs::write(path, json)?;

    tracing::debug!(path = %path.display(), "session saved");
    session.emit(SessionEvent::ProjectSaved);
    Ok(())
}

/// Loads a session from disk.
///
/// Unparseable or invalid state fails with [`CoreError::CorruptState`];
/// a missing file is an ordinary [`CoreError::Io`] the caller can treat
/// as "no prior session".
pub fn load(path: impl AsRef<Path>, config: Config) -> CoreResult<Session> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let state: SavedSession = serde_json::from_str(&content)
        .map_err(|e| CoreError::CorruptState(format!("invalid JSON: {e}")))?;
    state.validate().map_err(CoreError::CorruptState)?;

    tracing::debug!(path = %path.display(), "session loaded");
    Ok(Session::restore(state.project, state.active_file, config))
}
