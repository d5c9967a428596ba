use std::sync::Arc;
use tracing::debug;

use rental_core::{CategorySummary, CoreError, CoreResult, Listing, ListingFilter, ListingRepository};

/// Read-only queries over the listing catalog.
#[derive(Clone)]
pub struct ListingService {
    repo: Arc<dyn ListingRepository>,
}

impl ListingService {
    pub fn new(repo: Arc<dyn ListingRepository>) -> Self {
        Self { repo }
    }

    /// Available listings, newest first, optionally narrowed by category
    /// (exact, case-insensitive) and location (substring).
    pub async fn list_listings(
        &self,
        category: Option<&str>,
        location: Option<&str>,
    ) -> CoreResult<Vec<Listing>> {
        let filter = ListingFilter::available()
            .with_category(category)
            .with_location(location);

        let listings = self.repo.find_listings(&filter).await?;
        debug!("Listed {} listings ({:?})", listings.len(), filter);
        Ok(listings)
    }

    pub async fn get_listing(&self, id: &str) -> CoreResult<Listing> {
        self.repo
            .get_listing(id)
            .await?
            .ok_or_else(CoreError::listing_not_found)
    }

    /// Listing counts per category, largest first. Counts include
    /// unavailable listings; categories missing from the display table are
    /// dropped.
    pub async fn list_categories(&self) -> CoreResult<Vec<CategorySummary>> {
        let counts = self.repo.count_by_category().await?;
        Ok(counts.iter().filter_map(CategorySummary::from_count).collect())
    }

    /// Available listings whose title, description or location contains
    /// `query`, newest first. No relevance ranking.
    pub async fn search(&self, query: &str, category: Option<&str>) -> CoreResult<Vec<Listing>> {
        let filter = ListingFilter::available()
            .with_keyword(query)
            .with_category(category);

        let listings = self.repo.find_listings(&filter).await?;
        debug!("Search '{}' matched {} listings", query, listings.len());
        Ok(listings)
    }
}
