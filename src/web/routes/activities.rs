use axum::{
    extract::{Path, Query, State},
    Json,
};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::activity_directory::{ActivityDirectory, DirectoryError};
use crate::models::Activity;
use crate::services::enrollment_service;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    // Missing and blank both end up as `Email is required`.
    pub email: Option<String>,
}

pub async fn activities_handler(
    State(directory): State<ActivityDirectory>,
) -> Json<IndexMap<String, Activity>> {
    Json(enrollment_service::list_activities(&directory).await)
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<Value>, DirectoryError> {
    let email = query.email.unwrap_or_default();
    let message = enrollment_service::signup(&directory, &activity_name, &email).await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(directory): State<ActivityDirectory>,
) -> Result<Json<Value>, DirectoryError> {
    let email = query.email.unwrap_or_default();
    let message = enrollment_service::unregister(&directory, &activity_name, &email).await?;
    Ok(Json(json!({ "message": message })))
}
