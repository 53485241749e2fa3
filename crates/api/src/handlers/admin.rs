//! Handler for the search statistics page.

use axum::extract::State;
use axum::Json;
use dinefind_core::search::count_by_place;
use dinefind_db::repositories::SearchEventRepo;

use crate::error::AppResult;
use crate::state::AppState;
use crate::views::AdminPage;

/// GET /admin
///
/// Count how many times each place name has been searched, over the whole
/// log. Entries are ordered by count descending, then name.
pub async fn admin_view(State(state): State<AppState>) -> AppResult<Json<AdminPage>> {
    let mut conn = state.pool.acquire().await?;
    let names = SearchEventRepo::all_place_names(&mut conn).await?;

    let query_data = count_by_place(names);
    tracing::debug!(distinct = query_data.len(), "Search statistics computed");

    Ok(Json(AdminPage { query_data }))
}
