use std::fmt;

use async_trait::async_trait;

use crate::core::listing::Listing;

/// Errors that can occur while fetching listings.
/// None of them are retried; each one becomes a user notice.
#[derive(Debug)]
pub enum FetchError {
    /// Source misconfigured (bad URL, client could not be built).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint returned a non-success status.
    Api { status: u16, message: String },
    /// Body was not a valid listing payload.
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Config(msg) => write!(f, "config error: {msg}"),
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            FetchError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Returns the name of the source, for logging.
    fn name(&self) -> &str;

    /// Fetch the full listing batch in payload order.
    async fn fetch_listings(&self) -> Result<Vec<Listing>, FetchError>;
}
