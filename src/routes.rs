// routes.rs
use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;

use crate::handlers;

pub fn create_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/polls", get(handlers::index))
        .route("/polls/{poll_id}", get(handlers::detail))
        .route("/polls/{poll_id}/results", get(handlers::results))
        .route("/polls/{poll_id}/vote", post(handlers::vote))
        .layer(CorsLayer::permissive())
        .with_state(pool)
}
