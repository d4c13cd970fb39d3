//! Route definitions for the `/projects` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes mounted at `/projects`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list))
        .route("/projects/{category}", post(projects::create))
        .route(
            "/projects/{category}/{id}",
            put(projects::update).delete(projects::delete),
        )
}
