//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, span)
//!     → images.rs (parse query/path, call gallery)
//!     → response.rs (errors → status + body)
//!     → middleware/cors.rs (CORS headers on every response)
//!     → Send to client
//! ```

pub mod health;
pub mod images;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::{ApiError, ApiResult};
pub use server::{build_router, AppState, HttpServer};
