//! Search filtering and sorting
//!
//! Naive linear-scan filters over the snapshot: every predicate narrows the
//! candidate set independently (pure conjunction), then an optional two-key
//! sort is applied. Matching is case-insensitive substring matching.

use super::model::Hotel;
use super::store::CatalogStore;

/// Filter predicates for a hotel search. All fields optional; an empty filter
/// matches every hotel.
#[derive(Debug, Default, Clone)]
pub struct SearchFilter {
    /// Free-text query against name/description
    pub q: Option<String>,
    /// Cuisine tag to match against the hotel's cuisine list
    pub cuisine: Option<String>,
    /// Minimum rating threshold, expected in [0, 5]
    pub rating_min: Option<f64>,
}

impl SearchFilter {
    fn matches(&self, hotel: &Hotel) -> bool {
        if let Some(q) = &self.q {
            let q = q.to_lowercase();
            let in_name = hotel.name.to_lowercase().contains(&q);
            let in_description = hotel
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&q));
            if !in_name && !in_description {
                return false;
            }
        }

        if let Some(cuisine) = &self.cuisine {
            let cuisine = cuisine.to_lowercase();
            if !hotel
                .cuisines
                .iter()
                .any(|c| c.to_lowercase().contains(&cuisine))
            {
                return false;
            }
        }

        if let Some(rating_min) = self.rating_min {
            if hotel.rating < rating_min {
                return false;
            }
        }

        true
    }
}

/// Recognized sort orders for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HotelSort {
    /// Keep dataset insertion order (also used for unrecognized values)
    #[default]
    Unsorted,
    /// Descending by (rating, ratingCount)
    Rating,
    /// Descending by (ratingCount, rating)
    Popularity,
    /// Accepted but inert: geo distance is not computed in this MVP
    Distance,
}

impl HotelSort {
    /// Map the `sort` query parameter to a sort order.
    ///
    /// Unknown values fall back to [`HotelSort::Unsorted`] rather than
    /// erroring, matching the documented API behavior.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("rating") => Self::Rating,
            Some("popularity") => Self::Popularity,
            Some("distance") => Self::Distance,
            _ => Self::Unsorted,
        }
    }
}

impl CatalogStore {
    /// Search hotels with the given filter and sort order.
    ///
    /// Returns full hotel records; an empty result is a valid outcome, not an
    /// error. Filtering preserves insertion order, so unsorted results are a
    /// subsequence of the dataset.
    pub fn search(&self, filter: &SearchFilter, sort: HotelSort) -> Vec<Hotel> {
        let mut results: Vec<Hotel> = self
            .hotels()
            .iter()
            .filter(|h| filter.matches(h))
            .cloned()
            .collect();

        match sort {
            HotelSort::Rating => results.sort_by(|a, b| {
                b.rating
                    .total_cmp(&a.rating)
                    .then(b.rating_count.cmp(&a.rating_count))
            }),
            HotelSort::Popularity => results.sort_by(|a, b| {
                b.rating_count
                    .cmp(&a.rating_count)
                    .then(b.rating.total_cmp(&a.rating))
            }),
            // Placeholder: a real implementation would compute geodesic
            // distance from the caller's (lat, lng) and sort ascending.
            HotelSort::Distance => {}
            HotelSort::Unsorted => {}
        }

        results
    }
}
