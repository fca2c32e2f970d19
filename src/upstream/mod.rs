//! Upstream photo API access.
//!
//! # Data Flow
//! ```text
//! gallery operation
//!     → request.rs (method URL: api_key, format, method, params)
//!     → client.rs (GET, status check, JSONP strip, JSON parse)
//!     → types.rs (typed wire structs)
//!     → error.rs (single tagged failure type)
//! ```

pub mod client;
pub mod error;
pub mod request;
pub mod types;

pub use client::FlickrClient;
pub use error::{UpstreamError, UpstreamResult};
pub use request::FlickrMethod;
