pub mod health;
pub mod persons;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /persons                                         list, create
/// /persons/{id}                                    get, update, patch, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/persons", persons::router())
}
