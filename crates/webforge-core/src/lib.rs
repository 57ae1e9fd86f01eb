//! # Webforge Core
//!
//! Stateful orchestration of the site builder.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Session                           │
//! │  ┌──────────┐ ┌─────────────┐ ┌───────────────────────┐  │
//! │  │  Config  │ │  Event Bus  │ │  Generation Tickets   │  │
//! │  └──────────┘ └─────────────┘ └───────────────────────┘  │
//! │        │                                                 │
//! │  ┌─────┴──────────────────────────────────┐              │
//! │  │          Project (active file)          │              │
//! │  │  index.html │ style.css │ script.js ... │              │
//! │  └────────────────────────────────────────┘              │
//! └──────────────────────────────────────────────────────────┘
//!        │                    │
//!   persist (session.json)  backup (bounded snapshots)
//! ```
//!
//! The [`Session`] is the single logical writer over the project. There
//! are no global singletons: the session, backup store, and generation
//! provider are constructed explicitly and passed to whoever needs them.
//! Every mutation is followed by an explicit publish on the event bus;
//! nothing intercepts the storage layer to observe writes.

pub mod backup;
pub mod config;
pub mod event;
pub mod persist;
pub mod session;

pub use backup::{BackupStore, Snapshot};
pub use config::Config;
pub use event::{EventBus, EventHandler, SessionEvent};
pub use persist::SavedSession;
pub use session::{GenerationOutcome, GenerationTicket, Session};

use webforge_ai::GenerationError;
use webforge_project::ProjectError;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Project error: {0}")]
    Project(#[from] ProjectError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("Corrupt session state: {0}")]
    CorruptState(String),

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(uuid::Uuid),

    #[error("Data directory not found")]
    NoDataDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}
