use async_trait::async_trait;
use crate::filter::ListingFilter;
use crate::inquiry::Inquiry;
use crate::listing::{CategoryCount, Listing};
use crate::StoreResult;

/// Repository trait for listing data access
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Listings matching `filter`, newest `created_at` first.
    async fn find_listings(&self, filter: &ListingFilter) -> StoreResult<Vec<Listing>>;

    async fn get_listing(&self, id: &str) -> StoreResult<Option<Listing>>;

    /// Number of listings per stored category value, regardless of
    /// availability, largest count first.
    async fn count_by_category(&self) -> StoreResult<Vec<CategoryCount>>;

    async fn count_listings(&self) -> StoreResult<u64>;

    async fn insert_listings(&self, listings: &[Listing]) -> StoreResult<()>;
}

/// Repository trait for inquiry persistence
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    async fn insert_inquiry(&self, inquiry: &Inquiry) -> StoreResult<()>;
}
