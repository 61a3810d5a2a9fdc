//! Blog API client

use serde::de::DeserializeOwned;
use tracing::{debug, error};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{BlogError, Result};
use crate::request::{ApiRequest, HookChain, RequestHook};
use crate::types::{Article, ArticleQuery, Taxonomy};

/// Async client for the blog API
///
/// Owns the HTTP transport, the configuration, and the middleware chain.
/// Every operation issues exactly one GET request: there is no retry,
/// backoff, or per-request caching. Failures are logged once here and
/// propagated to the caller.
///
/// # Example
///
/// ```no_run
/// use blog_client::{ArticleQuery, BlogClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = BlogClient::local()?;
/// let articles = client.articles(&ArticleQuery::new(3).page(1)).await?;
/// println!("{} articles", articles.len());
/// # Ok(())
/// # }
/// ```
pub struct BlogClient {
    /// Client configuration (base URL, timeout)
    config: ClientConfig,
    /// Request middleware, applied before any I/O
    hooks: HookChain,
    /// Underlying HTTP transport
    inner: reqwest::Client,
}

impl BlogClient {
    /// Create a client from the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`BlogError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            config,
            hooks: HookChain::new(),
            inner,
        })
    }

    /// Create a client for the default local API (`http://127.0.0.1:7001`)
    pub fn local() -> Result<Self> {
        Self::new(ClientConfig::local())
    }

    /// Append a request hook to the middleware chain
    pub fn add_hook(&mut self, hook: RequestHook) {
        self.hooks.push(hook);
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List articles in a category (`GET /article/list`)
    ///
    /// Paging is passed through as-is; the server applies its own defaults
    /// for absent `page`/`page_size`.
    pub async fn articles(&self, query: &ArticleQuery) -> Result<Vec<Article>> {
        let request = ApiRequest::get("/article/list").with_query(query.to_pairs());
        self.get_json(request).await
    }

    /// Fetch a single article by id (`GET /article/{id}`)
    pub async fn article(&self, id: u64) -> Result<Article> {
        self.get_json(ApiRequest::get(format!("/article/{id}"))).await
    }

    /// Fetch all categories and tags (`GET /article/categoryAndTag`)
    pub async fn categories_and_tags(&self) -> Result<Taxonomy> {
        self.get_json(ApiRequest::get("/article/categoryAndTag")).await
    }

    /// Issue a request and unwrap the JSON payload
    ///
    /// The single failure-logging point: whatever goes wrong below is
    /// recorded once here and re-raised unchanged.
    async fn get_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        match self.execute(request).await {
            Ok(payload) => Ok(payload),
            Err(err) => {
                error!("API error: {err}");
                Err(err)
            }
        }
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T> {
        let request = self.hooks.apply(request)?;
        let url = self.endpoint(&request.path)?;
        debug!(%url, method = %request.method, "issuing request");

        let response = self
            .inner
            .request(request.method.clone(), url)
            .query(&request.query)
            .send()
            .await
            .map_err(map_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BlogError::Status {
                code: status.as_u16(),
                message,
            });
        }

        // The deadline also covers reading the body
        let body = response.text().await.map_err(map_transport)?;
        serde_json::from_str(&body).map_err(BlogError::Json)
    }

    /// Join a request path onto the base URL
    fn endpoint(&self, path: &str) -> Result<Url> {
        // Leading slashes would reset to the URL root and lose any base path
        let url = self.config.base_url.join(path.trim_start_matches('/'))?;
        Ok(url)
    }
}

/// Distinguish a blown deadline from other transport failures
fn map_transport(err: reqwest::Error) -> BlogError {
    if err.is_timeout() {
        BlogError::Timeout
    } else {
        BlogError::Http(err)
    }
}
