//! Application state.

use std::path::PathBuf;
use std::sync::Arc;

use mergington_config::{ActivitySeed, StaticFilesConfig};

use crate::registry::ActivityRegistry;

/// Application state shared across handlers.
pub struct AppState {
    pub registry: Arc<ActivityRegistry>,
    /// Directory served under `static_mount`.
    pub static_dir: PathBuf,
    pub static_mount: String,
    /// Target of the root redirect.
    pub index_url: String,
}

impl AppState {
    pub fn new(registry: Arc<ActivityRegistry>, static_files: &StaticFilesConfig) -> Self {
        Self {
            registry,
            static_dir: static_files.dir.clone(),
            static_mount: static_files.mount.trim_end_matches('/').to_string(),
            index_url: static_files.index_url(),
        }
    }

    /// State over a fresh registry built from `seeds`.
    pub fn from_seeds(
        seeds: impl IntoIterator<Item = ActivitySeed>,
        static_files: &StaticFilesConfig,
    ) -> Self {
        Self::new(Arc::new(ActivityRegistry::from_seeds(seeds)), static_files)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_seeds(
            mergington_config::default_activities(),
            &StaticFilesConfig::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();
        assert_eq!(state.registry.len(), 9);
        assert_eq!(state.static_mount, "/static");
        assert_eq!(state.index_url, "/static/index.html");
        assert_eq!(state.static_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_app_state_custom_static() {
        let static_files = StaticFilesConfig {
            dir: PathBuf::from("/srv/www"),
            mount: "/assets/".to_string(),
            index: "home.html".to_string(),
        };
        let state = AppState::from_seeds(Vec::new(), &static_files);
        assert!(state.registry.is_empty());
        assert_eq!(state.static_mount, "/assets");
        assert_eq!(state.index_url, "/assets/home.html");
    }

    #[test]
    fn test_app_state_shares_registry() {
        let registry = Arc::new(ActivityRegistry::new());
        let state = AppState::new(registry.clone(), &StaticFilesConfig::default());
        assert!(Arc::ptr_eq(&registry, &state.registry));
    }
}
