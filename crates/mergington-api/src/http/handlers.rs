//! Activity API handlers.
//!
//! Provides HTTP endpoints for listing activities and managing rosters.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    response::Redirect,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::registry::ActivitySnapshot;
use crate::state::AppState;

/// Query string of the roster endpoints.
#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    /// Participant email. Taken as-is, no format check.
    pub email: String,
}

/// Confirmation returned by roster changes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, ApiError> {
    query
        .map(|Query(q)| q.email)
        .map_err(|rejection| ApiError::InvalidQuery(rejection.body_text()))
}

/// Redirect browsers to the static landing page.
///
/// GET /
pub async fn root_redirect(State(state): State<Arc<AppState>>) -> Redirect {
    Redirect::temporary(&state.index_url)
}

/// List every activity.
///
/// GET /activities
pub async fn list_activities(State(state): State<Arc<AppState>>) -> Json<ActivitySnapshot> {
    let snapshot = state.registry.list();
    debug!("Listing {} activities", snapshot.len());
    Json(snapshot)
}

/// Sign a participant up for an activity.
///
/// POST /activities/{activity_name}/signup?email=
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = email_from(query)?;

    if let Err(e) = state.registry.signup(&activity_name, &email) {
        warn!("Signup rejected: activity={}, email={}: {}", activity_name, email, e);
        return Err(e.into());
    }

    info!("Signed up {} for {}", email, activity_name);
    Ok(Json(MessageResponse::new(format!(
        "Signed up {} for {}",
        email, activity_name
    ))))
}

/// Remove a participant from an activity.
///
/// POST /activities/{activity_name}/unregister?email=
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = email_from(query)?;

    if let Err(e) = state.registry.unregister(&activity_name, &email) {
        warn!("Unregister rejected: activity={}, email={}: {}", activity_name, email, e);
        return Err(e.into());
    }

    info!("Unregistered {} from {}", email, activity_name);
    Ok(Json(MessageResponse::new(format!(
        "Unregistered {} from {}",
        email, activity_name
    ))))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
