//! In-memory implementation of the listing and inquiry repositories.
//!
//! Used for local development (`database.backend = "memory"`) and tests.
//! State lives in vectors behind `tokio::sync::RwLock` and is lost on
//! restart. Query semantics follow `ListingFilter::matches`, so results are
//! the same as the MongoDB backend for the same data.
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use rental_core::{
    CategoryCount, Inquiry, InquiryRepository, Listing, ListingFilter, ListingRepository,
    StoreResult,
};

#[derive(Clone, Default)]
pub struct InMemoryStore {
    listings: Arc<RwLock<Vec<Listing>>>,
    inquiries: Arc<RwLock<Vec<Inquiry>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored inquiries.
    pub async fn inquiries(&self) -> Vec<Inquiry> {
        self.inquiries.read().await.clone()
    }
}

#[async_trait]
impl ListingRepository for InMemoryStore {
    async fn find_listings(&self, filter: &ListingFilter) -> StoreResult<Vec<Listing>> {
        let listings = self.listings.read().await;
        let mut matched: Vec<Listing> = listings
            .iter()
            .filter(|listing| filter.matches(listing))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn get_listing(&self, id: &str) -> StoreResult<Option<Listing>> {
        let listings = self.listings.read().await;
        Ok(listings.iter().find(|listing| listing.id == id).cloned())
    }

    async fn count_by_category(&self) -> StoreResult<Vec<CategoryCount>> {
        let listings = self.listings.read().await;
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for listing in listings.iter() {
            *counts.entry(listing.category.as_str()).or_insert(0) += 1;
        }

        let mut result: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(category, count)| CategoryCount {
                category: category.to_string(),
                count,
            })
            .collect();
        // Name breaks ties so output is stable across runs
        result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
        Ok(result)
    }

    async fn count_listings(&self) -> StoreResult<u64> {
        Ok(self.listings.read().await.len() as u64)
    }

    async fn insert_listings(&self, listings: &[Listing]) -> StoreResult<()> {
        self.listings.write().await.extend_from_slice(listings);
        Ok(())
    }
}

#[async_trait]
impl InquiryRepository for InMemoryStore {
    async fn insert_inquiry(&self, inquiry: &Inquiry) -> StoreResult<()> {
        self.inquiries.write().await.push(inquiry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn listing(id: &str, category: &str, available: bool, age_minutes: i64) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {}", id),
            description: "Sample".to_string(),
            category: category.to_string(),
            price_per_day: 10.0,
            location: "Austin, TX".to_string(),
            images: vec![],
            specifications: Default::default(),
            available,
            owner_name: "Owner".to_string(),
            owner_contact: "owner@example.com".to_string(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
        }
    }

    #[tokio::test]
    async fn test_find_listings_newest_first() {
        let store = InMemoryStore::new();
        store
            .insert_listings(&[
                listing("old", "cars", true, 30),
                listing("new", "cars", true, 1),
                listing("mid", "bikes", true, 10),
                listing("hidden", "cars", false, 0),
            ])
            .await
            .unwrap();

        let found = store.find_listings(&ListingFilter::available()).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);

        let all = store.find_listings(&ListingFilter::default()).await.unwrap();
        assert_eq!(all.len(), 4);
        assert_eq!(all[0].id, "hidden");
    }

    #[tokio::test]
    async fn test_count_by_category_includes_unavailable() {
        let store = InMemoryStore::new();
        store
            .insert_listings(&[
                listing("a", "cars", true, 1),
                listing("b", "cars", false, 2),
                listing("c", "boats", true, 3),
            ])
            .await
            .unwrap();

        let counts = store.count_by_category().await.unwrap();
        assert_eq!(
            counts,
            vec![
                CategoryCount { category: "cars".to_string(), count: 2 },
                CategoryCount { category: "boats".to_string(), count: 1 },
            ]
        );
        assert_eq!(store.count_listings().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_get_listing_by_id() {
        let store = InMemoryStore::new();
        store.insert_listings(&[listing("a", "cars", false, 1)]).await.unwrap();

        assert_eq!(store.get_listing("a").await.unwrap().unwrap().id, "a");
        assert!(store.get_listing("missing").await.unwrap().is_none());
    }
}
