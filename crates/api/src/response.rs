//! Response envelope types for API handlers.
//!
//! Every response carries a `success` flag; successful operations add their
//! payload under the key the frontend expects (`data`, `project`,
//! `deletedProject`) plus a human-readable `message`. Typed envelopes are
//! used instead of ad-hoc `serde_json::json!` so the wire shape is fixed at
//! compile time.

use serde::Serialize;

use portfolio_core::project::ProjectRecord;
use portfolio_store::ProjectDocument;

/// Success envelope for the list operation: `{success, data}`.
#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: ProjectDocument,
}

impl ListResponse {
    pub fn new(data: ProjectDocument) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Success envelope for create/update: `{success, message, project}`.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub success: bool,
    pub message: &'static str,
    pub project: ProjectRecord,
}

impl ProjectResponse {
    pub fn created(project: ProjectRecord) -> Self {
        Self {
            success: true,
            message: "Project added successfully",
            project,
        }
    }

    pub fn updated(project: ProjectRecord) -> Self {
        Self {
            success: true,
            message: "Project updated successfully",
            project,
        }
    }
}

/// Success envelope for delete: `{success, message, deletedProject}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedResponse {
    pub success: bool,
    pub message: &'static str,
    pub deleted_project: ProjectRecord,
}

impl DeletedResponse {
    pub fn new(deleted_project: ProjectRecord) -> Self {
        Self {
            success: true,
            message: "Project deleted successfully",
            deleted_project,
        }
    }
}

/// Failure envelope: `{success: false, error}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
