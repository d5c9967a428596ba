use axum::{extract::State, routing::post, Json, Router};

use rental_core::{InquiryReceipt, NewInquiry};

use crate::{error::AppError, extract::ApiJson, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/inquiries", post(create_inquiry))
}

/// POST /api/inquiries
/// Unknown fields in the body (e.g. a client-chosen `id`) are ignored.
async fn create_inquiry(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewInquiry>,
) -> Result<Json<InquiryReceipt>, AppError> {
    let receipt = state.inquiries.create_inquiry(req).await?;
    Ok(Json(receipt))
}
