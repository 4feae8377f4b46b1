// src/config.rs
use std::env;

pub struct Config {
    pub port: u16,
    pub database_url: String,
}

impl Config {
    /// Read configuration from the environment. Call after dotenvy has
    /// loaded any .env file.
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3030".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid number");

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        Self { port, database_url }
    }
}
