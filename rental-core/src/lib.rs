pub mod listing;
pub mod inquiry;
pub mod filter;
pub mod repository;

pub use filter::ListingFilter;
pub use inquiry::{Inquiry, InquiryReceipt, NewInquiry};
pub use listing::{Category, CategoryCount, CategorySummary, Listing, Specifications};
pub use repository::{InquiryRepository, ListingRepository};

/// Failure inside a storage backend. Driver errors are wrapped with the
/// operation that failed via `anyhow::Context`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),
    #[error("Store failure: {0}")]
    Store(#[from] StoreError),
}

impl CoreError {
    pub fn listing_not_found() -> Self {
        CoreError::NotFound("Listing not found".to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
