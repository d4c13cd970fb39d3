//! Handlers for the `/projects` resource.
//!
//! Each operation is an independent load -> validate/mutate -> save cycle
//! against the backing file. Nothing is cached between requests, and no
//! transaction spans the load/save gap: a crash in between loses that one
//! write but leaves the prior document intact.

use axum::extract::{Path, State};
use axum::Json;

use portfolio_core::category::Category;
use portfolio_core::error::CoreError;
use portfolio_core::project::{CreateProject, ProjectRecord, UpdateProject};

use crate::error::{AppError, AppResult};
use crate::response::{DeletedResponse, ListResponse, ProjectResponse};
use crate::state::AppState;

/// Parse a raw path segment into a [`Category`], mapping the failure to the
/// 400 envelope.
fn parse_category(raw: &str) -> Result<Category, AppError> {
    Ok(raw.parse::<Category>()?)
}

/// Position of a record in a collection, or the 404 error.
fn find_record(records: &[ProjectRecord], id: &str) -> Result<usize, AppError> {
    records
        .iter()
        .position(|record| record.id == id)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: id.to_string(),
            })
        })
}

// ---------------------------------------------------------------------------
// GET /projects
// ---------------------------------------------------------------------------

/// Return the full document, unfiltered and unpaginated.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ListResponse>> {
    let doc = state.store.load().await?;
    tracing::debug!(
        personal = doc.personal.len(),
        group = doc.group.len(),
        "Listed projects"
    );
    Ok(Json(ListResponse::new(doc)))
}

// ---------------------------------------------------------------------------
// POST /projects/{category}
// ---------------------------------------------------------------------------

/// Create a project in a category.
pub async fn create(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<ProjectResponse>> {
    let category = parse_category(&category)?;
    let record = ProjectRecord::create(input)?;

    let mut doc = state.store.load().await?;
    doc.collection_mut(category).push(record.clone());
    state.store.save(&doc).await?;

    tracing::info!(id = %record.id, %category, title = %record.title, "Project created");
    Ok(Json(ProjectResponse::created(record)))
}

// ---------------------------------------------------------------------------
// PUT /projects/{category}/{id}
// ---------------------------------------------------------------------------

/// Merge a partial update over an existing project.
///
/// The original `id` and `createdAt` survive any patch payload;
/// `updatedAt` is stamped.
pub async fn update(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
    Json(patch): Json<UpdateProject>,
) -> AppResult<Json<ProjectResponse>> {
    let category = parse_category(&category)?;

    let mut doc = state.store.load().await?;
    let records = doc.collection_mut(category);
    let index = find_record(records, &id)?;

    records[index].apply_patch(patch);
    let updated = records[index].clone();
    state.store.save(&doc).await?;

    tracing::info!(%id, %category, "Project updated");
    Ok(Json(ProjectResponse::updated(updated)))
}

// ---------------------------------------------------------------------------
// DELETE /projects/{category}/{id}
// ---------------------------------------------------------------------------

/// Remove the first record matching `id` from the category.
pub async fn delete(
    State(state): State<AppState>,
    Path((category, id)): Path<(String, String)>,
) -> AppResult<Json<DeletedResponse>> {
    let category = parse_category(&category)?;

    let mut doc = state.store.load().await?;
    let records = doc.collection_mut(category);
    let index = find_record(records, &id)?;

    let removed = records.remove(index);
    state.store.save(&doc).await?;

    tracing::info!(%id, %category, "Project deleted");
    Ok(Json(DeletedResponse::new(removed)))
}
