//! Bounded project snapshots.
//!
//! A [`BackupStore`] keeps full-project snapshots as individual JSON
//! files in one directory and prunes the oldest once a configured count
//! is exceeded. It is constructed explicitly and passed to whoever takes
//! or restores snapshots; it does not watch the session, the caller
//! decides when a snapshot is worth taking (typically on save, driven by
//! a `ProjectSaved` event subscription).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

use webforge_project::Project;

use crate::{CoreError, CoreResult};

/// A full copy of the project at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot identity
    pub id: Uuid,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    /// The project as it was
    pub project: Project,
}

/// Directory-backed snapshot store with count-bounded retention.
pub struct BackupStore {
    dir: PathBuf,
    max_snapshots: usize,
}

impl BackupStore {
    /// Opens (and creates, if needed) a store at the given directory.
    pub fn open(dir: impl Into<PathBuf>, max_snapshots: usize) -> CoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir, max_snapshots })
    }

    /// Takes a snapshot of the project and prunes old ones.
    pub fn snapshot(&self, project: &Project) -> CoreResult<Snapshot> {
        let snapshot = Snapshot {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            project: project.clone(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(self.path_for(snapshot.id), json)?;
        tracing::debug!(id = %snapshot.id, "snapshot written");

        self.prune()?;
        Ok(snapshot)
    }

    /// Lists all snapshots, newest first.
    pub fn list(&self) -> CoreResult<Vec<Snapshot>> {
        let mut snapshots = Vec::new();

        for entry in std::fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let content = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<Snapshot>(&content) {
                Ok(snapshot) => snapshots.push(snapshot),
                Err(e) => {
                    // A corrupt snapshot must not take the whole list down.
                    tracing::warn!(path = %path.display(), "skipping unreadable snapshot: {e}");
                }
            }
        }

        snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(snapshots)
    }

    /// Restores the project from a snapshot.
    pub fn restore(&self, id: Uuid) -> CoreResult<Project> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(CoreError::SnapshotNotFound(id));
        }

        let content = std::fs::read_to_string(&path)?;
        let snapshot: Snapshot = serde_json::from_str(&content)
            .map_err(|e| CoreError::CorruptState(format!("snapshot {id}: {e}")))?;
        snapshot
            .project
            .validate()
            .map_err(|e| CoreError::CorruptState(format!("snapshot {id}: {e}")))?;

        Ok(snapshot.project)
    }

    /// Deletes a snapshot.
    pub fn delete(&self, id: Uuid) -> CoreResult<()> {
        let path = self.path_for(id);
        if !path.exists() {
            return Err(CoreError::SnapshotNotFound(id));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }

    /// Removes the oldest snapshots beyond the retention limit.
    fn prune(&self) -> CoreResult<()> {
        let snapshots = self.list()?;
        for stale in snapshots.iter().skip(self.max_snapshots) {
            tracing::debug!(id = %stale.id, "pruning old snapshot");
            std::fs::remove_file(self.path_for(stale.id))?;
        }
        Ok(())
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("snapshot_{id}.json"))
    }

    /// Returns the store directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_snapshot_and_restore() {
        let dir = tempdir().unwrap();
        let store = BackupStore::open(dir.path(), 5).unwrap();

        let mut project = Project::starter("demo");
        project.update_content("script.js", "alert(1)");

        let snapshot = store.snapshot(&project).unwrap();
        let restored = store.restore(snapshot.id).unwrap();
        assert_eq!(restored, project);
    }

    #[test]
    fn test_list_is_newest_first() {
        let dir = tempdir().unwrap();
        let store = BackupStore::open(dir.path(), 5).unwrap();
        let project = Project::starter("demo");

        let first = store.snapshot(&project).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = store.snapshot(&project).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[test]
    fn test_retention_prunes_oldest() {
        let dir = tempdir().unwrap();
        let store = BackupStore::open(dir.path(), 2).unwrap();
        let project = Project::starter("demo");

        let oldest = store.snapshot(&project).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.snapshot(&project).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        store.snapshot(&project).unwrap();

        let listed = store.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|s| s.id != oldest.id));
    }

    #[test]
    fn test_restore_unknown_id_fails() {
        let dir = tempdir().unwrap();
        let store = BackupStore::open(dir.path(), 5).unwrap();

        let err = store.restore(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, CoreError::SnapshotNotFound(_)));
    }

    #[test]
    fn test_delete_removes_snapshot() {
        let dir = tempdir().unwrap();
        let store = BackupStore::open(dir.path(), 5).unwrap();
        let snapshot = store.snapshot(&Project::starter("demo")).unwrap();

        store.delete(snapshot.id).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(
            store.delete(snapshot.id),
            Err(CoreError::SnapshotNotFound(_))
        ));
    }
}
