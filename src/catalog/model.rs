//! Catalog entity types
//!
//! All entities are immutable once the catalog snapshot is built. Wire shape
//! (field names, nesting, defaults) is part of the public API contract, so
//! every struct serializes in camelCase.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    #[schema(example = 37.7749)]
    pub lat: f64,
    /// Longitude in decimal degrees
    #[schema(example = -122.4194)]
    pub lng: f64,
}

/// Postal address with optional geolocation. Every field is independently
/// optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    /// Postal/ZIP code
    pub postal_code: Option<String>,
    pub country: Option<String>,
    /// Geolocation for the address
    pub location: Option<GeoPoint>,
}

/// Hotel/restaurant outlet entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    /// Unique hotel id
    #[schema(example = "h1")]
    pub id: String,
    /// Display name
    #[schema(example = "Spice Route")]
    pub name: String,
    /// Short description
    pub description: Option<String>,
    /// Cuisine tags, in listing order
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// Average rating, 0 to 5
    #[schema(example = 4.5, minimum = 0.0, maximum = 5.0)]
    pub rating: f64,
    /// Number of ratings received
    #[serde(default)]
    pub rating_count: u32,
    /// Price level, 1 (cheap) to 4 (expensive)
    #[schema(minimum = 1, maximum = 4)]
    pub price_level: Option<u8>,
    /// Open status
    pub is_open: bool,
    /// Geolocation for the outlet
    pub location: GeoPoint,
    pub address: Option<Address>,
    /// Estimated delivery time in minutes
    pub eta_minutes: Option<u32>,
    /// Preview image URL
    pub image_url: Option<String>,
}

/// A selectable choice inside a [`MenuOption`] group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuOptionChoice {
    pub id: Option<String>,
    #[schema(example = "Extra Paneer")]
    pub label: Option<String>,
    /// Additional cost when this choice is selected
    #[serde(default = "default_price_delta")]
    pub price_delta: Option<f64>,
}

/// Configuration option group for a menu item (e.g. size, toppings).
///
/// `min`/`max` are descriptive metadata for clients; the service does not
/// validate selections against them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuOption {
    #[schema(example = "Spice Level")]
    pub name: Option<String>,
    /// Minimum number of selections
    pub min: Option<u32>,
    /// Maximum number of selections
    pub max: Option<u32>,
    /// Available choices, in display order
    pub options: Vec<MenuOptionChoice>,
}

impl Default for MenuOption {
    fn default() -> Self {
        Self {
            name: None,
            min: Some(0),
            max: Some(1),
            options: Vec::new(),
        }
    }
}

/// Menu item owned by exactly one hotel (via `hotelId`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique menu item id
    #[schema(example = "m1")]
    pub id: String,
    /// Owning hotel id
    #[schema(example = "h1")]
    pub hotel_id: String,
    #[schema(example = "Paneer Tikka Masala")]
    pub name: String,
    pub description: Option<String>,
    /// Base price, non-negative
    #[schema(example = 12.5, minimum = 0.0)]
    pub price: f64,
    /// Currency code
    #[serde(default = "default_currency")]
    #[schema(example = "USD")]
    pub currency: Option<String>,
    /// Vegetarian flag
    pub is_veg: Option<bool>,
    /// Spice level, 0 to 3
    #[schema(minimum = 0, maximum = 3)]
    pub spicy_level: Option<u8>,
    pub image_url: Option<String>,
    /// Availability flag
    #[serde(default = "default_available")]
    pub available: Option<bool>,
    /// Configurable option groups
    #[serde(default)]
    pub options: Vec<MenuOption>,
}

fn default_currency() -> Option<String> {
    Some("USD".to_string())
}

fn default_available() -> Option<bool> {
    Some(true)
}

fn default_price_delta() -> Option<f64> {
    Some(0.0)
}
