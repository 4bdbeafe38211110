//! # Mergington API
//!
//! HTTP interface for the Mergington High School activity registry.
//!
//! - **Registry**: in-memory activities keyed by name, each with a roster
//!   of participant emails
//! - **HTTP**: list activities, sign up and unregister participants
//! - **Static**: landing page assets served from a directory, with `/`
//!   redirecting to the index document
//!
//! ```text
//! GET  /                                      -> 307 /static/index.html
//! GET  /activities                            -> name -> activity
//! POST /activities/{activity_name}/signup     ?email=
//! POST /activities/{activity_name}/unregister ?email=
//! ```
//!
//! The registry is an explicit service object owned by [`AppState`] and
//! handed to handlers through axum state, so every test can build a fresh
//! instance from its own seed list.

pub mod error;
pub mod http;
pub mod registry;
pub mod server;
pub mod state;

pub use error::{ApiError, RegistryError};
pub use http::{
    handlers::{EmailQuery, MessageResponse},
    routes::create_router,
};
pub use registry::{Activity, ActivityRegistry, ActivitySnapshot};
pub use server::ApiServer;
pub use state::AppState;
