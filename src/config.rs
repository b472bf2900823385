use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub jwt_secret: Option<String>,
    pub request_body_limit: usize,
    pub concurrency_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = parse_var("APP_PORT").unwrap_or(3000);
        let max_connections = parse_var("DATABASE_MAX_CONNECTIONS").unwrap_or(10);
        let jwt_secret = env::var("JWT_SECRET").ok().filter(|s| !s.is_empty());
        let request_body_limit = parse_var("REQUEST_BODY_LIMIT").unwrap_or(1024 * 1024);
        let concurrency_limit = parse_var("CONCURRENCY_LIMIT").unwrap_or(100);
        Ok(Self {
            port,
            database_url,
            host,
            max_connections,
            jwt_secret,
            request_body_limit,
            concurrency_limit,
        })
    }

    /// Configuration for in-process use (tests, tooling) where no environment is read.
    pub fn with_database_url(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_connections: 5,
            jwt_secret: None,
            request_body_limit: 1024 * 1024,
            concurrency_limit: 100,
        }
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}
