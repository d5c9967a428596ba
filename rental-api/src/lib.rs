use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod state;
pub mod error;
pub mod extract;
pub mod health;
pub mod listings;
pub mod categories;
pub mod search;
pub mod inquiries;

pub use error::AppError;
pub use state::AppState;

pub fn app(state: AppState) -> Router {
    // Browser clients are served from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::routes())
        .merge(listings::routes())
        .merge(categories::routes())
        .merge(search::routes())
        .merge(inquiries::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
