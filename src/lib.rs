//! Flickr search proxy library.
//!
//! Hides the upstream API key from browser clients and flattens the
//! upstream search / sizes / info calls into two JSON endpoints.

pub mod config;
pub mod gallery;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::schema::ProxyConfig;
pub use gallery::GalleryService;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::FlickrClient;
