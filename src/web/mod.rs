use std::path::Path;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::database::activity_directory::ActivityDirectory;

pub mod error;
pub mod routes;

use routes::{activities, health};

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn build_router(directory: ActivityDirectory, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/health", get(health::health_handler))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_handler),
        )
        .nest_service(
            "/static",
            get_service(ServeDir::new(static_dir.as_ref())).layer(
                SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("no-store"),
                ),
            ),
        )
        .layer(CatchPanicLayer::new())
        .with_state(directory)
}
