use crate::domain::response::ApiResponse;
use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};

pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(ApiResponse::message("server is running")),
    )
}

pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}
