use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use rental_core::Listing;

use crate::{error::AppError, extract::ApiQuery, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub q: String,
    pub category: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search", get(search_listings))
}

/// GET /api/search?q=&category=
async fn search_listings(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<Listing>>, AppError> {
    let listings = state
        .listings
        .search(&query.q, query.category.as_deref())
        .await?;
    Ok(Json(listings))
}
