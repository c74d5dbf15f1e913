use std::env;
use std::time::Duration;

/// Connection settings for the two backend origins. Passed explicitly to the
/// clients; there is no ambient global configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Primary API (auth, transactions, budgets, dashboard).
    pub api_base_url: String,
    /// Analytics API (spending analysis), a separate origin.
    pub analytics_base_url: String,
    /// Per-request timeout.
    pub request_timeout: Duration,
    /// TCP connect timeout.
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:5000".to_string(),
            analytics_base_url: "http://localhost:8000".to_string(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// Read overrides from `API_BASE_URL` and `ANALYTICS_BASE_URL`, falling
    /// back to the local development defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var("API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Ok(url) = env::var("ANALYTICS_BASE_URL") {
            config.analytics_base_url = url;
        }
        config
    }

    /// Trailing slashes on configured origins would double up when joined
    /// with endpoint paths.
    pub fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        while self.analytics_base_url.ends_with('/') {
            self.analytics_base_url.pop();
        }
        self
    }
}
