//! Activity registry.

mod activity;
mod store;

pub use activity::{Activity, ActivitySnapshot};
pub use store::ActivityRegistry;
