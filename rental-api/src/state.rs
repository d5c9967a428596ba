use std::sync::Arc;

use rental_catalog::{InquiryService, ListingService};
use rental_core::{InquiryRepository, ListingRepository};

#[derive(Clone)]
pub struct AppState {
    pub listings: ListingService,
    pub inquiries: InquiryService,
}

impl AppState {
    pub fn new(
        listing_repo: Arc<dyn ListingRepository>,
        inquiry_repo: Arc<dyn InquiryRepository>,
    ) -> Self {
        Self {
            listings: ListingService::new(listing_repo.clone()),
            inquiries: InquiryService::new(listing_repo, inquiry_repo),
        }
    }
}
