//! Whole-file load/save against the backing JSON document.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs;

use crate::document::ProjectDocument;

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed.
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the document failed.
    #[error("Store serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to the on-disk JSON document.
///
/// There is no locking: concurrent `save` calls race and the later write
/// wins whole-document. Callers must not assume isolation -- the expected
/// load is a single operator, and the API layer reloads on every request.
#[derive(Debug, Clone)]
pub struct ProjectStoreFile {
    path: PathBuf,
}

impl ProjectStoreFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full document.
    ///
    /// A missing file is the first-run case: the seed document is written
    /// and returned. A present-but-unparseable file is set aside under a
    /// `.corrupt-<unix-ts>` suffix before reseeding, so operator data is
    /// never silently discarded. Only a failing seed write propagates.
    pub async fn load(&self) -> Result<ProjectDocument, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "Data file missing, seeding");
                return self.seed().await;
            }
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice(&bytes) {
            Ok(doc) => Ok(doc),
            Err(err) => {
                let set_aside = self.set_aside_corrupt().await?;
                tracing::warn!(
                    path = %self.path.display(),
                    set_aside = %set_aside.display(),
                    error = %err,
                    "Data file unparseable; preserved and reseeded"
                );
                self.seed().await
            }
        }
    }

    /// Serialize the full document and overwrite the backing file.
    pub async fn save(&self, doc: &ProjectDocument) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(doc)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn seed(&self) -> Result<ProjectDocument, StoreError> {
        let doc = ProjectDocument::seeded();
        self.save(&doc).await?;
        Ok(doc)
    }

    /// Rename the current backing file to a timestamped `.corrupt-*`
    /// sibling and return the new path.
    async fn set_aside_corrupt(&self) -> Result<PathBuf, StoreError> {
        let mut set_aside = self.path.as_os_str().to_owned();
        set_aside.push(format!(".corrupt-{}", Utc::now().timestamp()));
        let set_aside = PathBuf::from(set_aside);
        fs::rename(&self.path, &set_aside).await?;
        Ok(set_aside)
    }
}

#[cfg(test)]
mod tests {
    use portfolio_core::category::Category;
    use portfolio_core::project::{CreateProject, ProjectRecord};

    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> ProjectStoreFile {
        ProjectStoreFile::new(dir.path().join("projects.json"))
    }

    fn sample_record(title: &str) -> ProjectRecord {
        ProjectRecord::create(CreateProject {
            title: title.to_string(),
            description: "desc".to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn load_seeds_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let doc = store.load().await.unwrap();
        assert_eq!(doc.personal.len(), 1);
        assert_eq!(doc.group.len(), 1);
        assert!(store.path().exists(), "seed must be written to disk");
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut doc = ProjectDocument::default();
        doc.collection_mut(Category::Personal)
            .push(sample_record("Persisted"));
        store.save(&doc).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn corrupt_file_is_set_aside_not_deleted() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), b"{not json at all").unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc.personal.len(), 1, "reseeded after corruption");

        let set_aside: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_string_lossy()
                    .contains("projects.json.corrupt-")
            })
            .collect();
        assert_eq!(set_aside.len(), 1, "corrupt file must be preserved");
        let preserved = std::fs::read(set_aside[0].path()).unwrap();
        assert_eq!(preserved, b"{not json at all");
    }

    #[tokio::test]
    async fn document_missing_group_key_loads_with_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            br#"{"personal": [{"id": "p1", "title": "Old", "description": "D",
                 "createdAt": "2023-01-01T00:00:00Z"}]}"#,
        )
        .unwrap();

        let doc = store.load().await.unwrap();
        assert_eq!(doc.personal.len(), 1);
        assert!(doc.group.is_empty());
        assert!(doc.personal[0].updated_at.is_none());
    }

    #[tokio::test]
    async fn later_save_wins_whole_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut first = ProjectDocument::default();
        first
            .collection_mut(Category::Personal)
            .push(sample_record("First"));
        let mut second = ProjectDocument::default();
        second
            .collection_mut(Category::Group)
            .push(sample_record("Second"));

        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, second);
    }
}
