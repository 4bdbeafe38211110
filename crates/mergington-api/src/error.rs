//! API error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors raised by registry mutations.
///
/// Every variant is detected before the registry is touched, so a failed
/// call never leaves a partial change behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// No activity with this name.
    #[error("Activity not found")]
    ActivityNotFound(String),

    /// Email already on the activity's roster.
    #[error("Student {email} is already signed up for {activity}")]
    DuplicateSignup { activity: String, email: String },

    /// Email not on the activity's roster.
    #[error("Student {email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}

impl RegistryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ActivityNotFound(_) => StatusCode::NOT_FOUND,
            Self::DuplicateSignup { .. } | Self::NotSignedUp { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

/// Errors returned by HTTP handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Query string missing or malformed.
    #[error("{0}")]
    InvalidQuery(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Registry(e) => e.status_code(),
            Self::InvalidQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_not_found_display() {
        let err = RegistryError::ActivityNotFound("Underwater Basket Weaving".to_string());
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_signup_display() {
        let err = RegistryError::DuplicateSignup {
            activity: "Chess Club".to_string(),
            email: "michael@mergington.edu".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("already signed up"));
        assert!(display.contains("michael@mergington.edu"));
        assert!(display.contains("Chess Club"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_signed_up_display() {
        let err = RegistryError::NotSignedUp {
            activity: "Drama Club".to_string(),
            email: "new@mergington.edu".to_string(),
        };
        assert!(err.to_string().contains("not signed up"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_from_registry_is_transparent() {
        let err: ApiError = RegistryError::ActivityNotFound("x".to_string()).into();
        assert_eq!(err.to_string(), "Activity not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_query_status() {
        let err = ApiError::InvalidQuery("missing field `email`".to_string());
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_into_response_detail_body() {
        let err = ApiError::from(RegistryError::NotSignedUp {
            activity: "Drama Club".to_string(),
            email: "new@mergington.edu".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body["detail"],
            "Student new@mergington.edu is not signed up for Drama Club"
        );
    }
}
