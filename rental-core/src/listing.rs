use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Free-form attributes of a listing. The expected keys depend on the
/// category (e.g. `year`/`seats` for cars, `bedrooms`/`bathrooms` for houses)
/// but nothing enforces them.
pub type Specifications = serde_json::Map<String, serde_json::Value>;

/// A rentable item: vehicle, vessel, aircraft or property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Stored as text so documents with an unknown category still load.
    pub category: String,
    pub price_per_day: f64,
    pub location: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub specifications: Specifications,
    #[serde(default = "default_available")]
    pub available: bool,
    pub owner_name: String,
    pub owner_contact: String,
    pub created_at: DateTime<Utc>,
}

fn default_available() -> bool {
    true
}

/// The six categories the marketplace knows how to display.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cars,
    Bikes,
    Houses,
    Boats,
    Planes,
    Yachts,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cars,
        Category::Bikes,
        Category::Houses,
        Category::Boats,
        Category::Planes,
        Category::Yachts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cars => "cars",
            Category::Bikes => "bikes",
            Category::Houses => "houses",
            Category::Boats => "boats",
            Category::Planes => "planes",
            Category::Yachts => "yachts",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Cars => "Cars",
            Category::Bikes => "Bikes",
            Category::Houses => "Houses",
            Category::Boats => "Boats",
            Category::Planes => "Planes",
            Category::Yachts => "Yachts",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Cars => "🚗",
            Category::Bikes => "🏍️",
            Category::Houses => "🏡",
            Category::Boats => "⛵",
            Category::Planes => "✈️",
            Category::Yachts => "🛥️",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Exact match on the stored (lowercase) value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Raw grouping result from a store: number of listings per stored category value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// Category entry as returned by `GET /api/categories`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub count: u64,
}

impl CategorySummary {
    /// `None` for categories outside the display table.
    pub fn from_count(count: &CategoryCount) -> Option<Self> {
        let category = count.category.parse::<Category>().ok()?;
        Some(Self {
            id: category.as_str().to_string(),
            name: category.display_name().to_string(),
            icon: category.icon().to_string(),
            count: count.count,
        })
    }
}
