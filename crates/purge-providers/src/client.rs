use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const API_VERSION: &str = "2022-11-28";
pub const ACCEPT: &str = "application/vnd.github+json";
pub const PAGE_SIZE: u32 = 100;

/// Immutable HTTP settings, built once and handed to the service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    pub api_version: String,
    pub per_page: u32,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: concat!("repo-purge/", env!("CARGO_PKG_VERSION")).to_string(),
            api_version: API_VERSION.to_string(),
            per_page: PAGE_SIZE,
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: Option<&str>) -> Self {
        Self {
            base_url: host_or_default(base_url),
            ..Self::default()
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

pub fn host_or_default(host: Option<&str>) -> String {
    host.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_or_default_trims_trailing_slash() {
        assert_eq!(
            host_or_default(Some("https://ghe.example.com/api/v3/")),
            "https://ghe.example.com/api/v3"
        );
        assert_eq!(host_or_default(None), DEFAULT_API_URL);
        assert_eq!(host_or_default(Some("  ")), DEFAULT_API_URL);
    }

    #[test]
    fn url_joins_paths() {
        let config = ClientConfig::default();
        assert_eq!(config.url("/user"), "https://api.github.com/user");
        assert_eq!(config.url("repos/me/x"), "https://api.github.com/repos/me/x");
    }
}
