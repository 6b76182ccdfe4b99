use std::env;

/// Default store when DATABASE_URL is unset: a local SQLite file, created on
/// first run.
const DEFAULT_DATABASE_URL: &str = "sqlite://pizzeria.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5555);
        Ok(Self {
            port,
            database_url,
            host,
        })
    }
}
