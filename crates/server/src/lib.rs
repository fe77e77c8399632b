//! # Agenda Server
//!
//! HTTP surface for the Agenda scheduling service.
//!
//! This crate contains:
//! - Application context wiring (config → database → ports → service)
//! - Axum route handlers for availability resolution and health checks
//! - Tracing/logging setup

pub mod context;
pub mod logging;
pub mod routes;

pub use context::AppContext;
