//! Share payloads for carousel cards.

use crate::core::listing::{Listing, ListingId};

pub const DEFAULT_PROMO_PREFIX: &str = "[Book now at this price!!]";

/// Plain-text payload handed to the share sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePayload {
    pub listing_id: ListingId,
    pub text: String,
}

impl SharePayload {
    pub fn for_listing(prefix: &str, listing: &Listing) -> Self {
        Self {
            listing_id: listing.id.clone(),
            text: share_text(prefix, listing),
        }
    }
}

/// `"<prefix> <title> <price> <imageUrl>"`. An empty prefix is left out.
pub fn share_text(prefix: &str, listing: &Listing) -> String {
    let prefix = prefix.trim();
    let body = format!("{} {} {}", listing.title, listing.price, listing.image_url);
    if prefix.is_empty() {
        body
    } else {
        format!("{prefix} {body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::listing;

    #[test]
    fn test_share_text_format() {
        let mut l = listing(7, 37.0, 127.0);
        l.title = "Cozy studio".into();
        l.price = "₩42,000".into();
        l.image_url = "https://img.example/7.jpg".into();
        assert_eq!(
            share_text(DEFAULT_PROMO_PREFIX, &l),
            "[Book now at this price!!] Cozy studio ₩42,000 https://img.example/7.jpg"
        );
    }

    #[test]
    fn test_blank_prefix_is_omitted() {
        let l = listing(1, 0.0, 0.0);
        assert_eq!(share_text("  ", &l), format!("{} {} {}", l.title, l.price, l.image_url));
    }

    #[test]
    fn test_payload_carries_listing_id() {
        let l = listing(3, 0.0, 0.0);
        let payload = SharePayload::for_listing("promo", &l);
        assert_eq!(payload.listing_id, ListingId::Int(3));
        assert!(payload.text.starts_with("promo "));
    }
}
