//! Category route handlers.

use axum::{Json, Router, extract::State, routing::get};

use crate::models::Category;
use crate::services::CatalogService;
use crate::state::AppState;

/// Build the categories router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/categories", get(list_categories))
}

/// Full category list, as seeded.
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(CatalogService::new(state.store()).list_categories())
}
