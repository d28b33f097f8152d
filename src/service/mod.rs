//! Business rules, composed from owner-scoped repository calls.
//!
//! Handlers validate the request shape and hand a verified user identity
//! plus the parsed input to these functions; everything that touches more
//! than one row or enforces an invariant lives here.

pub mod catalog;
pub mod credentials;
pub mod goals;
pub mod progress;
pub mod reviews;
