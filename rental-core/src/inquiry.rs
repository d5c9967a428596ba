use chrono::{DateTime, Utc};
use rental_shared::Masked;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inquiry as submitted by a prospective renter.
///
/// Dates are kept as the caller sent them. No format or ordering checks are
/// made here; the client is responsible for that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInquiry {
    pub listing_id: String,
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub start_date: String,
    pub end_date: String,
    pub message: String,
}

/// A persisted inquiry. Written once, never read back by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: String,
    pub listing_id: String,
    pub name: String,
    pub email: Masked<String>,
    pub phone: Masked<String>,
    pub start_date: String,
    pub end_date: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Inquiry {
    /// Assigns a fresh id and stamps the current time.
    pub fn from_new(new: NewInquiry) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            listing_id: new.listing_id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            start_date: new.start_date,
            end_date: new.end_date,
            message: new.message,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InquiryReceipt {
    pub message: String,
    pub inquiry_id: String,
}

impl InquiryReceipt {
    pub fn submitted(inquiry_id: String) -> Self {
        Self {
            message: "Inquiry submitted successfully".to_string(),
            inquiry_id,
        }
    }
}
