//! Runtime configuration for the browser client and the server host.

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Location of the backend REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');

        Self {
            base_url: if trimmed.is_empty() {
                DEFAULT_API_URL.to_string()
            } else {
                trimmed.to_string()
            },
        }
    }

    /// Base URL baked in at build time through `TOURBOOK_API_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TOURBOOK_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Scheme, host and port of the API, e.g. `http://localhost:8080`.
    pub fn origin(&self) -> &str {
        let after_scheme = self.base_url.find("://").map(|i| i + 3).unwrap_or(0);

        match self.base_url[after_scheme..].find('/') {
            Some(slash) => &self.base_url[..after_scheme + slash],
            None => &self.base_url,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Content-Security-Policy sent with every rendered page. The API origin must be
/// reachable from `connect-src` for the browser client to work.
pub fn content_security_policy(api: &ApiConfig) -> String {
    format!(
        "default-src 'self'; script-src 'self' 'unsafe-inline' 'wasm-unsafe-eval'; \
         style-src 'self' 'unsafe-inline'; img-src 'self' data: https:; \
         connect-src 'self' {} ws: wss:; frame-ancestors 'none'",
        api.origin()
    )
}

/// Settings for the SSR host, read from the environment (and `.env`).
#[cfg(feature = "ssr")]
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub api: ApiConfig,
    pub log_filter: String,
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let api = std::env::var("TOURBOOK_API_URL")
            .map(ApiConfig::new)
            .unwrap_or_else(|_| ApiConfig::from_build_env());
        let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self { api, log_filter }
    }
}
