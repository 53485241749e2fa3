pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the page route tree.
///
/// ```text
/// /          GET search form, POST search submission
/// /admin     GET search statistics
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::search::search_form).post(handlers::search::submit_search),
        )
        .route("/admin", get(handlers::admin::admin_view))
}
