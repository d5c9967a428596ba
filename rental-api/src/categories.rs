use axum::{extract::State, routing::get, Json, Router};

use rental_core::CategorySummary;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/categories", get(list_categories))
}

/// GET /api/categories
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CategorySummary>>, AppError> {
    Ok(Json(state.listings.list_categories().await?))
}
