use std::sync::Arc;
use tracing::info;

use rental_core::{
    CoreError, CoreResult, Inquiry, InquiryReceipt, InquiryRepository, ListingRepository,
    NewInquiry,
};

/// Accepts rental inquiries for existing listings.
#[derive(Clone)]
pub struct InquiryService {
    listings: Arc<dyn ListingRepository>,
    inquiries: Arc<dyn InquiryRepository>,
}

impl InquiryService {
    pub fn new(listings: Arc<dyn ListingRepository>, inquiries: Arc<dyn InquiryRepository>) -> Self {
        Self { listings, inquiries }
    }

    /// Persists the inquiry once its listing is known to exist.
    ///
    /// The listing reference is checked at creation time only. Dates and
    /// contact fields are stored as given.
    pub async fn create_inquiry(&self, new: NewInquiry) -> CoreResult<InquiryReceipt> {
        let inquiry = Inquiry::from_new(new);

        if self.listings.get_listing(&inquiry.listing_id).await?.is_none() {
            return Err(CoreError::listing_not_found());
        }

        self.inquiries.insert_inquiry(&inquiry).await?;
        info!(
            "Inquiry {} received for listing {} from {}",
            inquiry.id, inquiry.listing_id, inquiry.email
        );

        Ok(InquiryReceipt::submitted(inquiry.id))
    }
}
