use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend origin, e.g. `https://api.nooracademy.com`
    pub api_url: String,
    /// How long identical public GETs are served from memory
    pub public_cache_ttl: Duration,
    pub request_timeout: Duration,
    /// Role claim value that grants access to `/admin`
    pub admin_role: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            api_url: env::var("API_URL").unwrap_or_else(|_| "http://localhost:5000".to_string()),
            public_cache_ttl: Duration::from_secs(
                env::var("PUBLIC_CACHE_TTL_SECS")
                    .unwrap_or_else(|_| "300".to_string())
                    .parse()
                    .context("PUBLIC_CACHE_TTL_SECS must be a valid number")?,
            ),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a valid number")?,
            ),
            admin_role: env::var("ADMIN_ROLE").unwrap_or_else(|_| "Admin".to_string()),
        })
    }

    /// Resolve a relative upload path (as stored on teachers and
    /// testimonials) against the backend origin.
    pub fn asset_url(&self, path: &str) -> String {
        resolve_asset_url(&self.api_url, path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".to_string(),
            public_cache_ttl: Duration::from_secs(300),
            request_timeout: Duration::from_secs(30),
            admin_role: "Admin".to_string(),
        }
    }
}

/// Join a backend origin and a relative path. Absolute URLs and empty paths
/// pass through untouched.
pub fn resolve_asset_url(origin: &str, path: &str) -> String {
    let path = path.trim();
    if path.is_empty() || path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
