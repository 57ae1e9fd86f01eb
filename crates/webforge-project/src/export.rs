//! Project export: a plain JSON dump of the project for download.
//!
//! The export format is intentionally unversioned — it is a data dump for
//! the user, not a persistence format. Persisted session state (which is
//! versioned and validated) lives in `webforge-core`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::file::ProjectFile;
use crate::project::Project;

/// A serializable snapshot of a project with an export timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectExport {
    /// Project display name
    pub name: String,

    /// All files at export time
    pub files: Vec<ProjectFile>,

    /// When the export was taken
    pub exported_at: DateTime<Utc>,
}

impl ProjectExport {
    /// Captures the project as of now.
    pub fn capture(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            files: project.files().to_vec(),
            exported_at: Utc::now(),
        }
    }

    /// Serializes the export as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_round_trip() {
        let project = Project::starter("demo");
        let export = ProjectExport::capture(&project);
        let json = export.to_json().unwrap();

        assert!(json.contains("\"exportedAt\""));
        assert!(json.contains("\"index.html\""));

        let parsed: ProjectExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.name, "demo");
        assert_eq!(parsed.files.len(), 3);
    }
}
