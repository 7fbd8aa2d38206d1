//! # Listings
//!
//! The one domain entity: a rental property with display fields and a
//! coordinate. Listings arrive in a `ListingPayload` and are never mutated
//! after deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a listing. The payload may carry either a number or a string.
///
/// Comparison is by value and by kind, so `1` and `"1"` are different ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingId::Int(n) => write!(f, "{n}"),
            ListingId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ListingId {
    fn from(n: i64) -> Self {
        ListingId::Int(n)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        ListingId::Text(s.to_string())
    }
}

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub price: String,
    pub image_url: String,
    pub lat: f64,
    pub lng: f64,
}

impl Listing {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Wire shape of the listings endpoint: `{"items": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingPayload {
    pub items: Vec<Listing>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_parses_camel_case_fields() {
        let json = r#"{
            "items": [
                {"id": 1, "title": "Gangnam loft", "price": "₩50,000",
                 "imageUrl": "https://img.example/1.jpg", "lat": 37.1, "lng": 127.1}
            ]
        }"#;
        let payload: ListingPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.items.len(), 1);
        let listing = &payload.items[0];
        assert_eq!(listing.id, ListingId::Int(1));
        assert_eq!(listing.image_url, "https://img.example/1.jpg");
        assert_eq!(listing.position(), LatLng::new(37.1, 127.1));
    }

    #[test]
    fn test_string_ids_are_accepted() {
        let json = r#"{"id": "abc", "title": "t", "price": "p",
                       "imageUrl": "u", "lat": 0.0, "lng": 0.0}"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, ListingId::Text("abc".into()));
        assert_eq!(listing.id.to_string(), "abc");
    }

    #[test]
    fn test_int_and_string_ids_differ() {
        assert_ne!(ListingId::from(1), ListingId::from("1"));
    }

    #[test]
    fn test_missing_items_field_is_rejected() {
        assert!(serde_json::from_str::<ListingPayload>("{}").is_err());
        let empty: ListingPayload = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_missing_coordinate_is_rejected() {
        let json = r#"{"id": 1, "title": "t", "price": "p", "imageUrl": "u", "lat": 1.0}"#;
        assert!(serde_json::from_str::<Listing>(json).is_err());
    }
}
