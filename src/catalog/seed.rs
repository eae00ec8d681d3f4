//! Seed dataset for the MVP catalog
//!
//! Three hotels and four menu items, loaded once at startup. This stands in
//! for a real data provider; swapping it out should not touch the query path.

use super::model::{Address, GeoPoint, Hotel, MenuItem, MenuOption, MenuOptionChoice};
use super::store::CatalogStore;

/// Build the fixed catalog snapshot.
pub fn seed_catalog() -> CatalogStore {
    CatalogStore::new(seed_hotels(), seed_menu_items())
}

fn seed_hotels() -> Vec<Hotel> {
    vec![
        Hotel {
            id: "h1".to_string(),
            name: "Spice Route".to_string(),
            description: Some("Authentic Indian cuisine with a modern twist.".to_string()),
            cuisines: vec!["Indian".to_string(), "Vegetarian".to_string()],
            rating: 4.5,
            rating_count: 1630,
            price_level: Some(2),
            is_open: true,
            location: GeoPoint {
                lat: 37.7749,
                lng: -122.4194,
            },
            address: Some(Address {
                line1: Some("123 Curry Ave".to_string()),
                city: Some("San Francisco".to_string()),
                state: Some("CA".to_string()),
                postal_code: Some("94103".to_string()),
                country: Some("USA".to_string()),
                location: Some(GeoPoint {
                    lat: 37.7749,
                    lng: -122.4194,
                }),
                ..Address::default()
            }),
            eta_minutes: Some(35),
            image_url: Some("https://example.com/images/h1.jpg".to_string()),
        },
        Hotel {
            id: "h2".to_string(),
            name: "Sushi Zen".to_string(),
            description: Some("Fresh sushi and sashimi delivered fast.".to_string()),
            cuisines: vec!["Japanese".to_string(), "Seafood".to_string()],
            rating: 4.7,
            rating_count: 980,
            price_level: Some(3),
            is_open: false,
            location: GeoPoint {
                lat: 34.0522,
                lng: -118.2437,
            },
            address: Some(Address {
                line1: Some("456 Sakura St".to_string()),
                city: Some("Los Angeles".to_string()),
                state: Some("CA".to_string()),
                postal_code: Some("90012".to_string()),
                country: Some("USA".to_string()),
                location: Some(GeoPoint {
                    lat: 34.0522,
                    lng: -118.2437,
                }),
                ..Address::default()
            }),
            eta_minutes: Some(45),
            image_url: Some("https://example.com/images/h2.jpg".to_string()),
        },
        Hotel {
            id: "h3".to_string(),
            name: "Pasta Palace".to_string(),
            description: Some("Handmade pasta and sauces.".to_string()),
            cuisines: vec!["Italian".to_string()],
            rating: 4.2,
            rating_count: 540,
            price_level: Some(2),
            is_open: true,
            location: GeoPoint {
                lat: 40.7128,
                lng: -74.0060,
            },
            address: Some(Address {
                line1: Some("789 Roma Rd".to_string()),
                city: Some("New York".to_string()),
                state: Some("NY".to_string()),
                postal_code: Some("10001".to_string()),
                country: Some("USA".to_string()),
                location: Some(GeoPoint {
                    lat: 40.7128,
                    lng: -74.0060,
                }),
                ..Address::default()
            }),
            eta_minutes: Some(30),
            image_url: Some("https://example.com/images/h3.jpg".to_string()),
        },
    ]
}

fn seed_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: "m1".to_string(),
            hotel_id: "h1".to_string(),
            name: "Paneer Tikka Masala".to_string(),
            description: Some("Grilled paneer simmered in creamy tomato sauce.".to_string()),
            price: 12.5,
            currency: Some("USD".to_string()),
            is_veg: Some(true),
            spicy_level: Some(1),
            image_url: Some("https://example.com/images/m1.jpg".to_string()),
            available: Some(true),
            options: vec![
                MenuOption {
                    name: Some("Spice Level".to_string()),
                    min: Some(1),
                    max: Some(1),
                    options: vec![
                        choice("m1s0", "Mild", 0.0),
                        choice("m1s1", "Medium", 0.0),
                        choice("m1s2", "Hot", 0.0),
                    ],
                },
                MenuOption {
                    name: Some("Extras".to_string()),
                    min: Some(0),
                    max: Some(2),
                    options: vec![
                        choice("m1e1", "Extra Paneer", 2.0),
                        choice("m1e2", "Extra Sauce", 1.0),
                    ],
                },
            ],
        },
        MenuItem {
            id: "m2".to_string(),
            hotel_id: "h2".to_string(),
            name: "Salmon Nigiri (6 pc)".to_string(),
            description: Some("Fresh salmon slices over seasoned rice.".to_string()),
            price: 18.0,
            currency: Some("USD".to_string()),
            is_veg: Some(false),
            spicy_level: Some(0),
            image_url: Some("https://example.com/images/m2.jpg".to_string()),
            available: Some(true),
            options: Vec::new(),
        },
        MenuItem {
            id: "m3".to_string(),
            hotel_id: "h3".to_string(),
            name: "Spaghetti Carbonara".to_string(),
            description: Some(
                "Classic Roman recipe with eggs, pecorino, and guanciale.".to_string(),
            ),
            price: 14.0,
            currency: Some("USD".to_string()),
            is_veg: Some(false),
            spicy_level: Some(0),
            image_url: Some("https://example.com/images/m3.jpg".to_string()),
            available: Some(true),
            options: Vec::new(),
        },
        MenuItem {
            id: "m4".to_string(),
            hotel_id: "h3".to_string(),
            name: "Margherita Pizza".to_string(),
            description: Some("Tomato, mozzarella, basil, extra virgin olive oil.".to_string()),
            price: 11.0,
            currency: Some("USD".to_string()),
            is_veg: Some(true),
            spicy_level: Some(0),
            image_url: Some("https://example.com/images/m4.jpg".to_string()),
            available: Some(true),
            options: Vec::new(),
        },
    ]
}

fn choice(id: &str, label: &str, price_delta: f64) -> MenuOptionChoice {
    MenuOptionChoice {
        id: Some(id.to_string()),
        label: Some(label.to_string()),
        price_delta: Some(price_delta),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts() {
        let store = seed_catalog();
        assert_eq!(store.hotel_count(), 3);
        assert_eq!(store.menu_item_count(), 4);
    }

    #[test]
    fn every_item_references_its_owner() {
        let store = seed_catalog();
        for hotel in store.hotels() {
            for item in store.menu(&hotel.id).unwrap() {
                assert_eq!(item.hotel_id, hotel.id);
            }
        }
    }

    #[test]
    fn pasta_palace_owns_two_items() {
        let store = seed_catalog();
        let ids: Vec<&str> = store
            .menu("h3")
            .unwrap()
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["m3", "m4"]);
    }
}
