//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::http::handlers::{list_activities, root_redirect, signup, unregister};
use crate::state::AppState;

/// Create the main router.
///
/// ## Route Structure
///
/// ```text
/// GET  /                                       - Redirect to the landing page
/// GET  /activities                             - List activities
/// POST /activities/{activity_name}/signup      - Sign up (?email=)
/// POST /activities/{activity_name}/unregister  - Unregister (?email=)
///
/// /static/*                                    - Static assets
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/", get(root_redirect))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup))
        .route("/activities/{activity_name}/unregister", post(unregister))
        .with_state(state.clone());

    let assets = ServeDir::new(&state.static_dir);

    // Nesting at the root is not allowed; an empty mount serves assets as
    // the fallback instead.
    let router = if state.static_mount.is_empty() {
        api_routes.fallback_service(assets)
    } else {
        api_routes.nest_service(&state.static_mount, assets)
    };

    router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
