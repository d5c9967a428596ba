use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use rental_core::Listing;

use crate::{error::AppError, extract::ApiQuery, state::AppState};

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListListingsQuery {
    pub category: Option<String>,
    pub location: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/listings", get(list_listings))
        .route("/api/listings/{id}", get(get_listing))
}

/// GET /api/listings?category=&location=
/// Available listings, newest first
async fn list_listings(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListListingsQuery>,
) -> Result<Json<Vec<Listing>>, AppError> {
    let listings = state
        .listings
        .list_listings(query.category.as_deref(), query.location.as_deref())
        .await?;
    Ok(Json(listings))
}

/// GET /api/listings/{id}
async fn get_listing(
    State(state): State<AppState>,
    Path(listing_id): Path<String>,
) -> Result<Json<Listing>, AppError> {
    let listing = state.listings.get_listing(&listing_id).await?;
    Ok(Json(listing))
}
