//! Gallery domain: search and detail lookups reshaped for the browser client.

pub mod posted;
pub mod rendition;
pub mod service;
pub mod types;

pub use service::GalleryService;
pub use types::{ImageDetails, SearchQuery, SearchResultItem};
