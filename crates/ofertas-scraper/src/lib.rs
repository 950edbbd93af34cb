pub mod catalog;
pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;

pub use catalog::{build_catalog, collect_pages, page_url};
pub use client::{ListingClient, PageFetcher};
pub use error::ScraperError;
pub use extract::{extract_records, ListingSelectors};
pub use normalize::{normalize_name, normalize_price, parse_discount};
