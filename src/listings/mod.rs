pub mod http;
pub mod source;

pub use http::HttpListingSource;
pub use source::{FetchError, ListingSource};
