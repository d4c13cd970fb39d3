//! Project record entity and DTOs.
//!
//! Wire field names are camelCase to match the JSON contract consumed by
//! the browser frontend.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::Timestamp;

/// A single project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    /// Server-generated identifier, immutable after creation.
    ///
    /// Uniqueness is probabilistic (random UUID v4), not enforced: the store
    /// never checks for collisions. This matches the contract of the system
    /// -- a soft guarantee, not a hard invariant.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered technology tags; insertion order is display order.
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Empty string means "absent".
    #[serde(default)]
    pub project_link: String,
    /// Empty string means "absent".
    #[serde(default)]
    pub download_link: String,
    /// Set once at creation, never overwritten.
    pub created_at: Timestamp,
    /// Set on every successful modification; absent until first update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Input payload for creating a project. Optional fields default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub project_link: String,
    #[serde(default)]
    pub download_link: String,
}

/// Partial update payload. `None` fields keep the existing value.
///
/// `id` and `createdAt` are deliberately not fields here: a patch carrying
/// them deserializes with those keys ignored, so the originals can never be
/// overridden.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub project_link: Option<String>,
    pub download_link: Option<String>,
}

impl ProjectRecord {
    /// Build a new record from a create payload.
    ///
    /// Validates that title and description are non-empty after trimming,
    /// trims the text fields, assigns a fresh id and `createdAt`.
    pub fn create(input: CreateProject) -> Result<Self, CoreError> {
        let title = input.title.trim();
        let description = input.description.trim();

        if title.is_empty() {
            return Err(CoreError::Validation(
                "Title must not be empty".to_string(),
            ));
        }
        if description.is_empty() {
            return Err(CoreError::Validation(
                "Description must not be empty".to_string(),
            ));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            technologies: input.technologies,
            project_link: input.project_link.trim().to_string(),
            download_link: input.download_link.trim().to_string(),
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Merge a patch over this record in place.
    ///
    /// `id` and `created_at` are untouchable (the patch type cannot carry
    /// them); `updated_at` is stamped with the current time.
    pub fn apply_patch(&mut self, patch: UpdateProject) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(technologies) = patch.technologies {
            self.technologies = technologies;
        }
        if let Some(project_link) = patch.project_link {
            self.project_link = project_link;
        }
        if let Some(download_link) = patch.download_link {
            self.download_link = download_link;
        }
        self.updated_at = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CreateProject {
        CreateProject {
            title: "Task Manager".to_string(),
            description: "A small task tracking app".to_string(),
            technologies: vec!["Rust".to_string(), "Axum".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn create_assigns_id_and_created_at() {
        let record = ProjectRecord::create(valid_input()).unwrap();
        assert!(!record.id.is_empty());
        assert!(record.updated_at.is_none());
        assert_eq!(record.technologies, vec!["Rust", "Axum"]);
    }

    #[test]
    fn create_ids_differ() {
        let a = ProjectRecord::create(valid_input()).unwrap();
        let b = ProjectRecord::create(valid_input()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn create_rejects_blank_title() {
        let input = CreateProject {
            title: "   ".to_string(),
            ..valid_input()
        };
        assert!(matches!(
            ProjectRecord::create(input),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn create_rejects_blank_description() {
        let input = CreateProject {
            description: String::new(),
            ..valid_input()
        };
        assert!(matches!(
            ProjectRecord::create(input),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn create_trims_text_fields() {
        let input = CreateProject {
            title: "  Padded  ".to_string(),
            project_link: " https://example.com ".to_string(),
            ..valid_input()
        };
        let record = ProjectRecord::create(input).unwrap();
        assert_eq!(record.title, "Padded");
        assert_eq!(record.project_link, "https://example.com");
    }

    #[test]
    fn patch_preserves_id_and_created_at() {
        let mut record = ProjectRecord::create(valid_input()).unwrap();
        let id = record.id.clone();
        let created_at = record.created_at;

        record.apply_patch(UpdateProject {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(record.id, id);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.title, "Renamed");
        let updated_at = record.updated_at.expect("updated_at must be stamped");
        assert!(updated_at >= created_at);
    }

    #[test]
    fn patch_keeps_unset_fields() {
        let mut record = ProjectRecord::create(valid_input()).unwrap();
        record.apply_patch(UpdateProject {
            download_link: Some("https://example.com/dl".to_string()),
            ..Default::default()
        });
        assert_eq!(record.title, "Task Manager");
        assert_eq!(record.download_link, "https://example.com/dl");
    }

    #[test]
    fn update_payload_ignores_id_and_created_at_keys() {
        // A client sending id/createdAt in a patch must not be able to
        // override them -- those keys simply do not deserialize.
        let patch: UpdateProject = serde_json::from_str(
            r#"{"id": "forged", "createdAt": "2001-01-01T00:00:00Z", "title": "New"}"#,
        )
        .unwrap();
        assert_eq!(patch.title.as_deref(), Some("New"));
    }

    #[test]
    fn record_serializes_camel_case_and_skips_absent_updated_at() {
        let record = ProjectRecord::create(valid_input()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("projectLink").is_some());
        assert!(json.get("updatedAt").is_none());
    }

    #[test]
    fn record_deserializes_with_missing_optional_fields() {
        // Documents written before a field existed must load unchanged.
        let record: ProjectRecord = serde_json::from_str(
            r#"{"id": "abc", "title": "T", "description": "D",
                "createdAt": "2024-05-01T12:00:00Z"}"#,
        )
        .unwrap();
        assert!(record.technologies.is_empty());
        assert_eq!(record.project_link, "");
        assert!(record.updated_at.is_none());
    }
}
