//! Blog API client configuration

use std::time::Duration;

use url::Url;

use crate::error::Result;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7001";

/// Default request timeout (5000 ms, matching the original service)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Blog API client configuration
///
/// Contains everything needed to reach the blog API: the base URL every
/// request path is joined onto, and the per-request timeout.
///
/// # Example
///
/// ```
/// use blog_client::ClientConfig;
/// use std::time::Duration;
///
/// // Recommended: the default local API
/// let config = ClientConfig::local();
///
/// // Or point at another deployment with a custom timeout
/// let config = ClientConfig::new("https://blog.example.com")
///     .unwrap()
///     .with_timeout(Duration::from_secs(10));
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL; request paths are joined onto this
    pub base_url: Url,

    /// Timeout applied to every request
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given base URL with the default timeout
    ///
    /// # Errors
    ///
    /// Returns [`crate::BlogError::InvalidUrl`] if `base_url` is not a valid
    /// absolute URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Trailing slash so joining never drops the last path segment
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a configuration for the default local API
    /// (`http://127.0.0.1:7001`, 5 second timeout)
    pub fn local() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let config = ClientConfig::new("https://blog.example.com").unwrap();
        assert_eq!(config.base_url.as_str(), "https://blog.example.com/");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_local_defaults() {
        let config = ClientConfig::local();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:7001/");
        assert_eq!(config.timeout, Duration::from_millis(5000));
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::local().with_timeout(Duration::from_secs(1));
        assert_eq!(config.timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_trailing_slash_normalization() {
        let config = ClientConfig::new("http://example.com/api").unwrap();
        assert_eq!(config.base_url.path(), "/api/");

        let joined = config.base_url.join("article/list").unwrap();
        assert_eq!(joined.as_str(), "http://example.com/api/article/list");
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn test_default_is_local() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "http://127.0.0.1:7001/");
    }
}
