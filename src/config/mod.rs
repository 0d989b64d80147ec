//! Client configuration (layered: code > env > defaults).

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::auth::store::{default_credential_dir, FileCredentialStore};
use crate::error::{ApiError, Result};

pub const BASE_URL_ENV: &str = "SHADEWALK_API_BASE_URL";
pub const TOKEN_DIR_ENV: &str = "SHADEWALK_TOKEN_DIR";
pub const TIMEOUT_ENV: &str = "SHADEWALK_HTTP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings shared by the gateway and the CLI.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    token_dir: PathBuf,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Create a config for the given backend with default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            token_dir: default_credential_dir(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("shadewalk/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Load from environment variables (after reading `.env` if present).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::Configuration(format!("{BASE_URL_ENV} is not set")))?;
        let mut config = Self::new(&base_url)?;

        if let Some(dir) = lookup(TOKEN_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.token_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ApiError::Configuration(format!("{TIMEOUT_ENV} must be whole seconds, got {raw:?}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_token_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.token_dir = dir.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token_dir(&self) -> &PathBuf {
        &self.token_dir
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// File-backed credential store rooted at the configured token directory.
    pub fn credential_store(&self) -> FileCredentialStore {
        FileCredentialStore::new(self.token_dir.clone())
    }

    /// Resolve an absolute API path (e.g. `/api/roads/3`) against the base URL.
    ///
    /// Any path prefix on the base URL is preserved.
    pub fn endpoint(&self, path: &str) -> Url {
        endpoint(&self.base_url, path)
    }
}

pub(crate) fn endpoint(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let joined = format!(
        "{}/{}",
        base.path().trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    url.set_path(&joined);
    url
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ApiError::Configuration(format!("invalid base URL {raw:?}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ApiError::Configuration(format!(
            "base URL must be http or https, got {}",
            url.scheme()
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        let config = ClientConfig::new("https://example.com/v1/").unwrap();
        assert_eq!(
            config.endpoint("/api/roads/7").as_str(),
            "https://example.com/v1/api/roads/7"
        );
    }

    #[test]
    fn endpoint_on_bare_host() {
        let config = ClientConfig::new("http://localhost:8080").unwrap();
        assert_eq!(
            config.endpoint("/api/favorites").as_str(),
            "http://localhost:8080/api/favorites"
        );
    }

    #[test]
    fn lookup_requires_base_url() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ApiError::Configuration(_)));
    }

    #[test]
    fn lookup_reads_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "https://api.example.com"),
            (TOKEN_DIR_ENV, "/tmp/tokens"),
            (TIMEOUT_ENV, "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url().host_str(), Some("api.example.com"));
        assert_eq!(config.token_dir(), &PathBuf::from("/tmp/tokens"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_is_a_configuration_error() {
        let err = ClientConfig::from_lookup(lookup(&[
            (BASE_URL_ENV, "https://api.example.com"),
            (TIMEOUT_ENV, "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_ENV));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        assert!(ClientConfig::new("ftp://example.com").is_err());
    }
}
