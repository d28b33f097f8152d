//! Middleware components for HTTP request processing.
//!
//! Cross-cutting concerns layered with Axum's routing system: bearer-token
//! authentication for the protected API group and security headers for all
//! responses.

pub mod auth;
pub mod security_headers;

pub use auth::AuthUser;
