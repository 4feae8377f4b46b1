// src/main.rs
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod poll;
mod routes;

use std::net::SocketAddr;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load environment variables from .env file

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config::Config::from_env();

    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to connect to the database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    let app = routes::create_routes(pool);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {addr}");

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
