//! # Lesezeichen Backend Library
//!
//! Core library for Lesezeichen, a personal reading-tracker backend: users
//! register, log in, and manage a library of books with per-book reading
//! progress, reviews and monthly/yearly reading goals, plus a dashboard
//! aggregation over all of it.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime
//! - **Serde**: Serialization/deserialization for JSON APIs
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`db`]: Database schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`auth`]: Password hashing and session tokens
//! - [`repo`]: Owner-scoped persistence queries
//! - [`service`]: Business rules (catalog, progress state machine, reviews, goals)
//! - [`routes`]: HTTP API endpoint handlers
//! - [`middleware`]: Bearer-token auth and security headers
//! - [`metrics`]: Operational counters
//! - [`state`]: Shared application state
//! - [`types`]: Domain records and data transfer objects
//!
//! Every read and write against the store is scoped by the authenticated
//! user's id; ownership is part of the query predicate, not a separate
//! authorization step.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod repo;
pub mod routes;
pub mod service;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
