use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::database::activity_directory::DirectoryError;

impl DirectoryError {
    pub fn status(&self) -> StatusCode {
        match self {
            DirectoryError::ActivityNotFound | DirectoryError::ParticipantNotFound => {
                StatusCode::NOT_FOUND
            }
            DirectoryError::AlreadyEnrolled { .. }
            | DirectoryError::ActivityFull
            | DirectoryError::InvalidEmail => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
