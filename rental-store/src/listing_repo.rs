use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::Collection;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rental_core::{CategoryCount, Listing, ListingFilter, ListingRepository, Specifications, StoreResult};

use crate::database::{DbClient, LISTINGS_COLLECTION};

pub struct MongoListingRepository {
    listings: Collection<ListingDocument>,
}

impl MongoListingRepository {
    pub fn new(db: &DbClient) -> Self {
        Self {
            listings: db.collection(LISTINGS_COLLECTION),
        }
    }
}

// Stored shape. `created_at` is a BSON datetime so the server sorts it
// chronologically; `_id` is left to the driver and never read back.
#[derive(Debug, Serialize, Deserialize)]
struct ListingDocument {
    id: String,
    title: String,
    description: String,
    category: String,
    price_per_day: f64,
    location: String,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    specifications: Specifications,
    #[serde(default = "default_available")]
    available: bool,
    owner_name: String,
    owner_contact: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    created_at: DateTime<Utc>,
}

fn default_available() -> bool {
    true
}

impl From<&Listing> for ListingDocument {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            title: listing.title.clone(),
            description: listing.description.clone(),
            category: listing.category.clone(),
            price_per_day: listing.price_per_day,
            location: listing.location.clone(),
            images: listing.images.clone(),
            specifications: listing.specifications.clone(),
            available: listing.available,
            owner_name: listing.owner_name.clone(),
            owner_contact: listing.owner_contact.clone(),
            created_at: listing.created_at,
        }
    }
}

impl From<ListingDocument> for Listing {
    fn from(doc: ListingDocument) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            description: doc.description,
            category: doc.category,
            price_per_day: doc.price_per_day,
            location: doc.location,
            images: doc.images,
            specifications: doc.specifications,
            available: doc.available,
            owner_name: doc.owner_name,
            owner_contact: doc.owner_contact,
            created_at: doc.created_at,
        }
    }
}

/// Translates a `ListingFilter` into a MongoDB query document.
pub fn filter_document(filter: &ListingFilter) -> Document {
    let mut query = Document::new();

    // Documents without the flag load as available, so match them too
    if filter.available_only {
        query.insert("available", doc! { "$ne": false });
    }
    if let Some(category) = &filter.category {
        query.insert("category", category.as_str());
    }
    if let Some(location) = &filter.location {
        query.insert("location", literal_regex(location));
    }
    if let Some(keyword) = &filter.keyword {
        query.insert(
            "$or",
            vec![
                doc! { "title": literal_regex(keyword) },
                doc! { "description": literal_regex(keyword) },
                doc! { "location": literal_regex(keyword) },
            ],
        );
    }

    query
}

/// Case-insensitive substring match; user text is escaped so it never acts
/// as a pattern.
fn literal_regex(text: &str) -> Document {
    doc! { "$regex": regex::escape(text), "$options": "i" }
}

pub fn category_count_pipeline() -> Vec<Document> {
    vec![
        doc! { "$group": { "_id": "$category", "count": { "$sum": 1 } } },
        doc! { "$sort": { "count": -1 } },
    ]
}

fn parse_category_count(row: &Document) -> Option<CategoryCount> {
    // Documents without a string category group under a null `_id`
    let category = row.get_str("_id").ok()?.to_string();
    let count = match row.get("count") {
        Some(Bson::Int32(n)) => u64::try_from(*n).ok(),
        Some(Bson::Int64(n)) => u64::try_from(*n).ok(),
        _ => None,
    };

    match count {
        Some(count) => Some(CategoryCount { category, count }),
        None => {
            warn!("Skipping category '{}' with unexpected count {:?}", category, row.get("count"));
            None
        }
    }
}

#[async_trait]
impl ListingRepository for MongoListingRepository {
    async fn find_listings(&self, filter: &ListingFilter) -> StoreResult<Vec<Listing>> {
        let query = filter_document(filter);
        debug!("Listing query: {}", query);

        let cursor = self
            .listings
            .find(query)
            .sort(doc! { "created_at": -1 })
            .await
            .context("find listings")?;
        let docs: Vec<ListingDocument> = cursor.try_collect().await.context("read listings")?;

        Ok(docs.into_iter().map(Listing::from).collect())
    }

    async fn get_listing(&self, id: &str) -> StoreResult<Option<Listing>> {
        let doc = self
            .listings
            .find_one(doc! { "id": id })
            .await
            .with_context(|| format!("find listing {}", id))?;

        Ok(doc.map(Listing::from))
    }

    async fn count_by_category(&self) -> StoreResult<Vec<CategoryCount>> {
        let cursor = self
            .listings
            .aggregate(category_count_pipeline())
            .await
            .context("aggregate categories")?;
        let rows: Vec<Document> = cursor.try_collect().await.context("read category counts")?;

        Ok(rows.iter().filter_map(parse_category_count).collect())
    }

    async fn count_listings(&self) -> StoreResult<u64> {
        let count = self
            .listings
            .count_documents(doc! {})
            .await
            .context("count listings")?;
        Ok(count)
    }

    async fn insert_listings(&self, listings: &[Listing]) -> StoreResult<()> {
        if listings.is_empty() {
            return Ok(());
        }

        let docs: Vec<ListingDocument> = listings.iter().map(ListingDocument::from).collect();
        self.listings
            .insert_many(docs)
            .await
            .context("insert listings")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_only_requires_availability() {
        let query = filter_document(&ListingFilter::available());
        assert_eq!(query, doc! { "available": { "$ne": false } });
        assert!(filter_document(&ListingFilter::default()).is_empty());
    }

    #[test]
    fn test_category_and_location_filters() {
        let filter = ListingFilter::available()
            .with_category(Some("Cars"))
            .with_location(Some("Los Angeles"));
        let query = filter_document(&filter);

        assert_eq!(
            query,
            doc! {
                "available": { "$ne": false },
                "category": "cars",
                "location": { "$regex": "Los Angeles", "$options": "i" }
            }
        );
    }

    #[test]
    fn test_keyword_searches_three_fields_literally() {
        let filter = ListingFilter::available().with_keyword("C++");
        let query = filter_document(&filter);

        let clauses = query.get_array("$or").unwrap();
        assert_eq!(clauses.len(), 3);
        let title = clauses[0].as_document().unwrap().get_document("title").unwrap();
        assert_eq!(title.get_str("$regex").unwrap(), r"C\+\+");
        assert_eq!(title.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_pipeline_groups_then_sorts_descending() {
        let pipeline = category_count_pipeline();
        assert_eq!(pipeline.len(), 2);
        assert!(pipeline[0].contains_key("$group"));
        assert_eq!(pipeline[1], doc! { "$sort": { "count": -1 } });
    }

    #[test]
    fn test_parse_category_count() {
        let row = doc! { "_id": "boats", "count": 4 };
        assert_eq!(
            parse_category_count(&row),
            Some(CategoryCount { category: "boats".to_string(), count: 4 })
        );

        let wide = doc! { "_id": "cars", "count": 7_i64 };
        assert_eq!(parse_category_count(&wide).unwrap().count, 7);

        let missing = doc! { "_id": Bson::Null, "count": 2 };
        assert!(parse_category_count(&missing).is_none());
    }

    #[test]
    fn test_parse_category_count_rejects_odd_counts() {
        assert!(parse_category_count(&doc! { "_id": "cars", "count": 2.7 }).is_none());
        assert!(parse_category_count(&doc! { "_id": "cars", "count": "3" }).is_none());
        assert!(parse_category_count(&doc! { "_id": "cars", "count": -1 }).is_none());
        assert!(parse_category_count(&doc! { "_id": "cars" }).is_none());
    }

    #[test]
    fn test_missing_available_flag_reads_as_available() {
        let raw = doc! {
            "id": "legacy",
            "title": "Old import",
            "description": "No availability flag",
            "category": "cars",
            "price_per_day": 10.0,
            "location": "Reno, NV",
            "owner_name": "Owner",
            "owner_contact": "owner@example.com",
            "created_at": bson::DateTime::now()
        };
        let listing = Listing::from(bson::from_document::<ListingDocument>(raw).unwrap());
        assert!(listing.available);
        // and the availability query does not exclude it
        assert_eq!(
            filter_document(&ListingFilter::available()).get_document("available").unwrap(),
            &doc! { "$ne": false }
        );
    }

    #[test]
    fn test_document_keeps_listing_fields() {
        let listing = Listing {
            id: "l-1".to_string(),
            title: "Kayak".to_string(),
            description: "Two-seat kayak".to_string(),
            category: "boats".to_string(),
            price_per_day: 45.0,
            location: "Portland, OR".to_string(),
            images: vec!["https://example.com/kayak.jpg".to_string()],
            specifications: serde_json::json!({ "seats": 2 }).as_object().cloned().unwrap(),
            available: true,
            owner_name: "River Co".to_string(),
            owner_contact: "hello@river.co".to_string(),
            created_at: "2024-05-01T10:00:00Z".parse().unwrap(),
        };

        let stored = bson::to_document(&ListingDocument::from(&listing)).unwrap();
        assert!(matches!(stored.get("created_at"), Some(Bson::DateTime(_))));
        assert_eq!(stored.get_str("category").unwrap(), "boats");

        let back: ListingDocument = bson::from_document(stored).unwrap();
        assert_eq!(Listing::from(back), listing);
    }
}
