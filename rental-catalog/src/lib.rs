pub mod listings;
pub mod inquiries;
pub mod seed;

pub use inquiries::InquiryService;
pub use listings::ListingService;
