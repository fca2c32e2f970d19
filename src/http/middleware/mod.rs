//! Router-wide middleware.

pub mod cors;
pub mod metrics;

pub use self::metrics::track_requests;
