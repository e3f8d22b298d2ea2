use std::env::var;
use std::time::Duration;

use dotenvy::dotenv;

pub const DEFAULT_STATUS_URL: &str = "https://status.mojang.com";
pub const DEFAULT_API_URL: &str = "https://api.mojang.com";
pub const DEFAULT_SESSION_URL: &str = "https://sessionserver.mojang.com";
pub const DEFAULT_AUTH_URL: &str = "https://authserver.mojang.com";
pub const DEFAULT_SERVICES_URL: &str = "https://api.minecraftservices.com";

/// Client configuration with environment variable overrides
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Service status host
    /// Env: MOJANG_STATUS_URL (default: https://status.mojang.com)
    pub status_url: String,

    /// Name/uuid lookup host
    /// Env: MOJANG_API_URL (default: https://api.mojang.com)
    pub api_url: String,

    /// Session host serving profiles and textures
    /// Env: MOJANG_SESSION_URL (default: https://sessionserver.mojang.com)
    pub session_url: String,

    /// Authentication host
    /// Env: MOJANG_AUTH_URL (default: https://authserver.mojang.com)
    pub auth_url: String,

    /// Minecraft services host (bearer-token endpoints)
    /// Env: MOJANG_SERVICES_URL (default: https://api.minecraftservices.com)
    pub services_url: String,

    /// Request timeout in seconds
    /// Env: MOJANG_REQUEST_TIMEOUT_SECS (default: 30)
    pub request_timeout: Duration,

    /// User-Agent header sent with every request
    /// Env: MOJANG_USER_AGENT (default: "mojang-api/<version>")
    pub user_agent: String,
}

impl ApiConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let _ = dotenv();
        Self {
            status_url: env_or_default_url("MOJANG_STATUS_URL", DEFAULT_STATUS_URL),
            api_url: env_or_default_url("MOJANG_API_URL", DEFAULT_API_URL),
            session_url: env_or_default_url("MOJANG_SESSION_URL", DEFAULT_SESSION_URL),
            auth_url: env_or_default_url("MOJANG_AUTH_URL", DEFAULT_AUTH_URL),
            services_url: env_or_default_url("MOJANG_SERVICES_URL", DEFAULT_SERVICES_URL),
            request_timeout: Duration::from_secs(env_or_default("MOJANG_REQUEST_TIMEOUT_SECS", 30)),
            user_agent: var("MOJANG_USER_AGENT").unwrap_or_else(|_| default_user_agent()),
        }
    }

    /// Point every host at the same base URL (mock servers, proxies).
    pub fn with_base_url(base_url: &str) -> Self {
        let base = trim_base(base_url);
        Self {
            status_url: base.clone(),
            api_url: base.clone(),
            session_url: base.clone(),
            auth_url: base.clone(),
            services_url: base,
            ..Self::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            status_url: DEFAULT_STATUS_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            session_url: DEFAULT_SESSION_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            services_url: DEFAULT_SERVICES_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("mojang-api/{}", env!("CARGO_PKG_VERSION"))
}

fn trim_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Parse environment variable or return default value
fn env_or_default<T: std::str::FromStr>(key: &str, default: T) -> T {
    var(key)
        .ok()
        .and_then(|val| val.parse().ok())
        .unwrap_or(default)
}

/// Read a base URL from the environment, without trailing slashes
fn env_or_default_url(key: &str, default: &str) -> String {
    trim_base(&var(key).unwrap_or_else(|_| default.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.status_url, "https://status.mojang.com");
        assert_eq!(config.api_url, "https://api.mojang.com");
        assert_eq!(config.session_url, "https://sessionserver.mojang.com");
        assert_eq!(config.auth_url, "https://authserver.mojang.com");
        assert_eq!(config.services_url, "https://api.minecraftservices.com");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("mojang-api/"));
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.status_url, "http://127.0.0.1:8080");
        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.session_url, "http://127.0.0.1:8080");
        assert_eq!(config.auth_url, "http://127.0.0.1:8080");
        assert_eq!(config.services_url, "http://127.0.0.1:8080");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_or_default_falls_back_when_unset() {
        let value: u64 = env_or_default("MOJANG_TEST_SURELY_UNSET_VARIABLE", 42);
        assert_eq!(value, 42);
        assert_eq!(
            env_or_default_url("MOJANG_TEST_SURELY_UNSET_VARIABLE", "https://example.com//"),
            "https://example.com"
        );
    }
}
