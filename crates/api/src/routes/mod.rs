pub mod health;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET    /projects                  -> list
/// POST   /projects/{category}       -> create
/// PUT    /projects/{category}/{id}  -> update
/// DELETE /projects/{category}/{id}  -> delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(projects::router())
}
