use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_API_PORT: u16 = 5001;
pub const DEFAULT_WEB_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:5001/api";
/// Doctors per page when a list request has no `limit`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub api_base_url: String,
    pub web_port: u16,
    pub default_page_size: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_API_PORT,
            database_url: None,
            database_max_connections: 5,
            api_base_url: DEFAULT_API_URL.to_string(),
            web_port: DEFAULT_WEB_PORT,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            port: parse_var("PORT", defaults.port),
            database_url: non_empty_var("DATABASE_URL"),
            database_max_connections: parse_var(
                "DATABASE_MAX_CONNECTIONS",
                defaults.database_max_connections,
            ),
            api_base_url: env::var("NEXT_PUBLIC_API_URL")
                .unwrap_or_else(|_| {
                    warn!("NEXT_PUBLIC_API_URL not set, using default");
                    defaults.api_base_url.clone()
                }),
            web_port: parse_var("WEB_PORT", defaults.web_port),
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", defaults.default_page_size),
        }
    }

    pub fn is_database_configured(&self) -> bool {
        self.database_url.is_some()
    }
}

/// The variable's value, or `None` when it is unset or blank.
fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_var<T: FromStr + Copy + std::fmt::Display>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}
