//! Integration and unit tests for the Lesezeichen application.
//!
//! ## Test Modules
//!
//! - **api_tests**: General API wiring, health endpoints and headers
//! - **auth_tests**: Registration, login and session tokens
//! - **catalog_tests**: Book CRUD, duplicate detection, search, cascade delete
//! - **progress_tests**: The reading-progress state machine over HTTP
//! - **review_tests**: One-review-per-book enforcement
//! - **goal_tests**: Goal upsert and goal-progress aggregation
//! - **dashboard_tests**: Dashboard statistics
//! - **config_tests**: Configuration loading and validation
//! - **db_tests**: Schema initialization
//! - **error_tests**: Error-to-HTTP mapping

pub mod support;

pub mod api_tests;
pub mod config_tests;
pub mod dashboard_tests;
pub mod error_tests;
