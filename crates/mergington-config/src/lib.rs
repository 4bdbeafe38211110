//! # Mergington Config
//!
//! Configuration management for the Mergington activity registry.

mod error;
mod loader;
mod schema;
mod seed;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use seed::default_activities;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
