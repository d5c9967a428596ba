pub mod app_config;
pub mod database;
pub mod listing_repo;
pub mod inquiry_repo;
pub mod memory;

pub use database::DbClient;
pub use inquiry_repo::MongoInquiryRepository;
pub use listing_repo::MongoListingRepository;
pub use memory::InMemoryStore;
