use crate::listing::Listing;

/// Declarative listing predicate. Stores translate it into their native query
/// form; `matches` is the reference semantics.
///
/// All text comparisons are case-insensitive and literal (no pattern syntax).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub available_only: bool,
    /// Lowercase category value, matched exactly.
    pub category: Option<String>,
    /// Substring of `location`.
    pub location: Option<String>,
    /// Substring of `title`, `description` or `location`.
    pub keyword: Option<String>,
}

impl ListingFilter {
    pub fn available() -> Self {
        Self {
            available_only: true,
            ..Self::default()
        }
    }

    /// Empty values are ignored.
    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = non_empty(category).map(str::to_lowercase);
        self
    }

    /// Empty values are ignored.
    pub fn with_location(mut self, location: Option<&str>) -> Self {
        self.location = non_empty(location).map(str::to_string);
        self
    }

    /// An empty keyword is kept and matches everything.
    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = Some(keyword.to_string());
        self
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        if self.available_only && !listing.available {
            return false;
        }
        if let Some(category) = &self.category {
            if listing.category != *category {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if !contains_ignore_case(&listing.location, location) {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            let hit = contains_ignore_case(&listing.title, keyword)
                || contains_ignore_case(&listing.description, keyword)
                || contains_ignore_case(&listing.location, keyword);
            if !hit {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
