//! # Webforge Project
//!
//! Data model for the site builder: a project is an ordered collection of
//! named text files (HTML/CSS/JS and friends) that together make up one
//! website. Identity of a file is its name, and names are unique within
//! a project.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                   Project                     │
//! │  ┌────────────┐ ┌───────────┐ ┌────────────┐  │
//! │  │ index.html │ │ style.css │ │ script.js  │  │  (reserved)
//! │  └────────────┘ └───────────┘ └────────────┘  │
//! │  ┌────────────┐ ┌───────────┐                 │
//! │  │ about.html │ │ extra.js  │  ...            │  (user files)
//! │  └────────────┘ └───────────┘                 │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! This crate is deliberately free of I/O and async: it only models the
//! project and its invariants. Stateful orchestration lives in
//! `webforge-core`.

pub mod export;
pub mod file;
pub mod position;
pub mod project;

pub use export::ProjectExport;
pub use file::{Language, ProjectFile};
pub use position::EditorPosition;
pub use project::{Project, RESERVED_FILES};

/// Result type for project operations
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Errors that can occur when manipulating a project
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("A file named '{0}' already exists")]
    DuplicateFileName(String),

    #[error("Cannot delete reserved file: {0}")]
    ProtectedFile(String),
}
