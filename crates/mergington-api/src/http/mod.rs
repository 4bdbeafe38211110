//! HTTP interface module.
//!
//! Provides the REST endpoints for:
//! - Listing activities
//! - Signing participants up and unregistering them
//! - The landing-page redirect and static assets

pub mod handlers;
pub mod routes;
