//! Cursor position within the editing widget.

use serde::{Deserialize, Serialize};

/// A 1-based cursor location (line and column).
///
/// Transient editor state: it is reported to the status bar but never
/// persisted with the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPosition {
    /// Line number, starting at 1
    pub line: u32,

    /// Column number, starting at 1
    pub column: u32,
}

impl EditorPosition {
    /// Creates a position, clamping both coordinates to at least 1.
    pub fn new(line: u32, column: u32) -> Self {
        Self {
            line: line.max(1),
            column: column.max(1),
        }
    }
}

impl Default for EditorPosition {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl std::fmt::Display for EditorPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ln {}, Col {}", self.line, self.column)
    }
}
