use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::Collection;
use serde::Serialize;

use rental_core::{Inquiry, InquiryRepository, StoreResult};

use crate::database::{DbClient, INQUIRIES_COLLECTION};

pub struct MongoInquiryRepository {
    inquiries: Collection<InquiryDocument>,
}

impl MongoInquiryRepository {
    pub fn new(db: &DbClient) -> Self {
        Self {
            inquiries: db.collection(INQUIRIES_COLLECTION),
        }
    }
}

// Write-only: inquiries are never read back, so only Serialize is needed.
#[derive(Debug, Serialize)]
struct InquiryDocument {
    id: String,
    listing_id: String,
    name: String,
    email: String,
    phone: String,
    start_date: String,
    end_date: String,
    message: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

impl From<&Inquiry> for InquiryDocument {
    fn from(inquiry: &Inquiry) -> Self {
        Self {
            id: inquiry.id.clone(),
            listing_id: inquiry.listing_id.clone(),
            name: inquiry.name.clone(),
            email: inquiry.email.expose().clone(),
            phone: inquiry.phone.expose().clone(),
            start_date: inquiry.start_date.clone(),
            end_date: inquiry.end_date.clone(),
            message: inquiry.message.clone(),
            created_at: inquiry.created_at,
        }
    }
}

#[async_trait]
impl InquiryRepository for MongoInquiryRepository {
    async fn insert_inquiry(&self, inquiry: &Inquiry) -> StoreResult<()> {
        self.inquiries
            .insert_one(InquiryDocument::from(inquiry))
            .await
            .with_context(|| format!("insert inquiry {}", inquiry.id))?;
        Ok(())
    }
}
