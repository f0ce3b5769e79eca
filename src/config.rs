//! Client configuration: backend base URL and request timeout.

use std::time::Duration;

/// Environment override for the backend base URL.
pub const BASE_URL_ENV: &str = "STUDYLANCE_API_BASE_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Normalized base URL, always ending in exactly one `/` so relative
    /// joins resolve under the API prefix.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let env_base = std::env::var(BASE_URL_ENV).ok();
        Self {
            base_url: normalize_base_url(env_base.as_deref()),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(Some(base_url)),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn normalize_base_url(value: Option<&str>) -> String {
    let base = value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    format!("{}/", base.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_exactly_one_trailing_slash() {
        assert_eq!(normalize_base_url(Some("http://api.test/v1")), "http://api.test/v1/");
        assert_eq!(normalize_base_url(Some("http://api.test/v1///")), "http://api.test/v1/");
        assert_eq!(normalize_base_url(Some("  http://api.test/v1/ ")), "http://api.test/v1/");
    }

    #[test]
    fn absent_or_blank_value_uses_default() {
        assert_eq!(normalize_base_url(None), "http://localhost:8080/api/v1/");
        assert_eq!(normalize_base_url(Some("   ")), "http://localhost:8080/api/v1/");
    }
}
