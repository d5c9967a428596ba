use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use rental_core::{CoreResult, Listing, ListingRepository, Specifications};

/// Inserts the sample catalog when the listings store is empty.
///
/// Keyed only on emptiness: a store holding any listing, sample or not, is
/// left untouched. Returns the number of listings inserted.
pub async fn seed_sample_listings<R>(repo: &R) -> CoreResult<usize>
where
    R: ListingRepository + ?Sized,
{
    let existing = repo.count_listings().await?;
    if existing > 0 {
        info!("Listings store holds {} documents, skipping sample data", existing);
        return Ok(0);
    }

    let listings = sample_listings(Utc::now());
    repo.insert_listings(&listings).await?;
    info!("Inserted {} sample listings", listings.len());
    Ok(listings.len())
}

/// One listing per category. Each gets a fresh id; timestamps step up by one
/// millisecond from `base` in insertion order.
pub fn sample_listings(base: DateTime<Utc>) -> Vec<Listing> {
    let entries = [
        SampleListing {
            title: "Luxury Ferrari 488 Spider",
            description: "Experience the thrill of driving a luxury Ferrari 488 Spider. Perfect for special occasions and weekend getaways.",
            category: "cars",
            price_per_day: 899.00,
            location: "Los Angeles, CA",
            image: "https://images.pexels.com/photos/1545743/pexels-photo-1545743.jpeg",
            specifications: json!({
                "year": 2022,
                "seats": 2,
                "transmission": "Automatic",
                "fuel_type": "Gasoline"
            }),
            owner_name: "Elite Car Rentals",
            owner_contact: "contact@eliterentals.com",
        },
        SampleListing {
            title: "Luxury Yacht Charter - 60ft",
            description: "Stunning 60ft luxury yacht perfect for parties, events, and ocean adventures. Includes crew and amenities.",
            category: "yachts",
            price_per_day: 2499.00,
            location: "Miami, FL",
            image: "https://images.pexels.com/photos/32619596/pexels-photo-32619596.jpeg",
            specifications: json!({
                "length": "60 feet",
                "guests": 12,
                "crew_included": true,
                "amenities": ["Kitchen", "Bedrooms", "Entertainment System"]
            }),
            owner_name: "Ocean Dreams Charters",
            owner_contact: "info@oceandreams.com",
        },
        SampleListing {
            title: "Beachfront Villa Rental",
            description: "Stunning beachfront villa with panoramic ocean views. Perfect for vacation rentals and special events.",
            category: "houses",
            price_per_day: 799.00,
            location: "Malibu, CA",
            image: "https://images.pexels.com/photos/59924/pexels-photo-59924.jpeg",
            specifications: json!({
                "bedrooms": 4,
                "bathrooms": 3,
                "sleeps": 8,
                "amenities": ["Pool", "Beach Access", "Kitchen", "WiFi"]
            }),
            owner_name: "Coastal Properties",
            owner_contact: "rentals@coastalprops.com",
        },
        SampleListing {
            title: "Harley Davidson Street Glide",
            description: "Cruise in style with this iconic Harley Davidson Street Glide. Perfect for road trips and adventures.",
            category: "bikes",
            price_per_day: 199.00,
            location: "Austin, TX",
            image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64",
            specifications: json!({
                "year": 2023,
                "engine": "Milwaukee-Eight 114",
                "type": "Touring"
            }),
            owner_name: "Lone Star Bike Rentals",
            owner_contact: "info@lonestarbikerentals.com",
        },
        SampleListing {
            title: "Private Jet Charter - Cessna Citation",
            description: "Luxury private jet charter for business or leisure travel. Includes pilot and premium service.",
            category: "planes",
            price_per_day: 4999.00,
            location: "New York, NY",
            image: "https://images.unsplash.com/photo-1544636235-1-photo-1545670723-673ed2f20e04",
            specifications: json!({
                "model": "Cessna Citation CJ3+",
                "passengers": 7,
                "range": "2,040 miles",
                "pilot_included": true
            }),
            owner_name: "Elite Aviation",
            owner_contact: "charter@eliteaviation.com",
        },
        SampleListing {
            title: "Speed Boat - 32ft Sport Cruiser",
            description: "High-performance sport boat perfect for water sports, fishing, and coastal cruising.",
            category: "boats",
            price_per_day: 599.00,
            location: "San Diego, CA",
            image: "https://images.unsplash.com/photo-1560216874-c209251cba8e",
            specifications: json!({
                "length": "32 feet",
                "passengers": 8,
                "engine": "Twin 350HP",
                "features": ["GPS", "Sound System", "Safety Equipment"]
            }),
            owner_name: "Pacific Boat Rentals",
            owner_contact: "rentals@pacificboats.com",
        },
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| entry.into_listing(base + Duration::milliseconds(i as i64)))
        .collect()
}

struct SampleListing {
    title: &'static str,
    description: &'static str,
    category: &'static str,
    price_per_day: f64,
    location: &'static str,
    image: &'static str,
    specifications: Value,
    owner_name: &'static str,
    owner_contact: &'static str,
}

impl SampleListing {
    fn into_listing(self, created_at: DateTime<Utc>) -> Listing {
        let specifications: Specifications = match self.specifications {
            Value::Object(map) => map,
            _ => Specifications::new(),
        };

        Listing {
            id: Uuid::new_v4().to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category.to_string(),
            price_per_day: self.price_per_day,
            location: self.location.to_string(),
            images: vec![self.image.to_string()],
            specifications,
            available: true,
            owner_name: self.owner_name.to_string(),
            owner_contact: self.owner_contact.to_string(),
            created_at,
        }
    }
}
