//! In-memory catalog snapshot
//!
//! The store is built once at startup and shared read-only behind an `Arc`.
//! No writer exists after construction, so lookups need no synchronization.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::model::{Hotel, MenuItem};

/// Catalog lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The referenced hotel id does not exist in the snapshot.
    #[error("Hotel not found")]
    HotelNotFound,
}

/// Immutable snapshot of hotels and their menus.
///
/// Hotels are kept in a `Vec` so dataset insertion order is preserved for
/// unsorted search results; the id index and menu map use `FxHashMap` for
/// cheap lookups.
pub struct CatalogStore {
    hotels: Vec<Hotel>,
    index: FxHashMap<String, usize>,
    menus: FxHashMap<String, Vec<MenuItem>>,
}

impl CatalogStore {
    /// Build a snapshot from an ordered hotel list and their menu items.
    ///
    /// Menu items are grouped under their `hotel_id`, preserving the order
    /// they were supplied in. Items referencing an unknown hotel are dropped
    /// with a warning; the foreign key is enforced by construction only.
    pub fn new(hotels: Vec<Hotel>, items: Vec<MenuItem>) -> Self {
        let index: FxHashMap<String, usize> = hotels
            .iter()
            .enumerate()
            .map(|(pos, h)| (h.id.clone(), pos))
            .collect();

        let mut menus: FxHashMap<String, Vec<MenuItem>> = FxHashMap::default();
        for item in items {
            if !index.contains_key(&item.hotel_id) {
                tracing::warn!(
                    item_id = %item.id,
                    hotel_id = %item.hotel_id,
                    "dropping menu item for unknown hotel"
                );
                continue;
            }
            menus.entry(item.hotel_id.clone()).or_default().push(item);
        }

        Self {
            hotels,
            index,
            menus,
        }
    }

    /// All hotels in dataset insertion order.
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Look up a hotel by id.
    pub fn hotel(&self, hotel_id: &str) -> Result<&Hotel, CatalogError> {
        self.index
            .get(hotel_id)
            .map(|&pos| &self.hotels[pos])
            .ok_or(CatalogError::HotelNotFound)
    }

    /// Menu items for a hotel, in listing order.
    ///
    /// A hotel that exists but has no items yields an empty slice; only an
    /// unknown hotel id is an error.
    pub fn menu(&self, hotel_id: &str) -> Result<&[MenuItem], CatalogError> {
        if !self.index.contains_key(hotel_id) {
            return Err(CatalogError::HotelNotFound);
        }
        Ok(self
            .menus
            .get(hotel_id)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    pub fn hotel_count(&self) -> usize {
        self.hotels.len()
    }

    pub fn menu_item_count(&self) -> usize {
        self.menus.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::GeoPoint;
    use super::super::seed::seed_catalog;
    use super::*;

    #[test]
    fn lookup_known_hotel() {
        let store = seed_catalog();
        let hotel = store.hotel("h2").unwrap();
        assert_eq!(hotel.name, "Sushi Zen");
    }

    #[test]
    fn lookup_unknown_hotel_is_not_found() {
        let store = seed_catalog();
        assert_eq!(store.hotel("nope"), Err(CatalogError::HotelNotFound));
        assert_eq!(store.menu("nope").unwrap_err(), CatalogError::HotelNotFound);
    }

    #[test]
    fn menu_for_known_hotel_never_errors() {
        let store = seed_catalog();
        for hotel in store.hotels() {
            assert!(store.menu(&hotel.id).is_ok());
        }
    }

    #[test]
    fn empty_menu_is_success_not_error() {
        let store = seed_catalog();
        let mut hotels = store.hotels().to_vec();
        hotels.push(Hotel {
            id: "h4".to_string(),
            name: "No Menu Yet".to_string(),
            description: None,
            cuisines: Vec::new(),
            rating: 3.0,
            rating_count: 0,
            price_level: None,
            is_open: false,
            location: GeoPoint { lat: 0.0, lng: 0.0 },
            address: None,
            eta_minutes: None,
            image_url: None,
        });
        let store = CatalogStore::new(hotels, Vec::new());

        assert_eq!(store.menu("h4").unwrap(), &[] as &[MenuItem]);
    }

    #[test]
    fn orphan_menu_items_are_dropped() {
        let store = seed_catalog();
        let mut item = store.menu("h1").unwrap()[0].clone();
        item.hotel_id = "ghost".to_string();
        let store = CatalogStore::new(store.hotels().to_vec(), vec![item]);

        assert_eq!(store.menu_item_count(), 0);
    }

    #[test]
    fn hotels_keep_insertion_order() {
        let store = seed_catalog();
        let ids: Vec<&str> = store.hotels().iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["h1", "h2", "h3"]);
    }
}
