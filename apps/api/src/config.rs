use anyhow::{Context, Result};

pub const DEFAULT_DATABASE_NAME: &str = "resume_app_db";

/// Application configuration loaded from environment variables.
/// Constructed once in `main` and handed to the components that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_name: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; real env vars win

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            database_name: std::env::var("DATABASE_NAME")
                .unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
