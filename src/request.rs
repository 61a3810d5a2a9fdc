//! Request descriptors and the middleware chain
//!
//! Every API call starts as an [`ApiRequest`] describing the method, path,
//! and query parameters. Before any I/O happens the descriptor is passed
//! through an ordered chain of [`RequestHook`]s, each of which may rewrite
//! it or short-circuit the call with an error. The empty chain is the
//! identity pass-through; it exists as the extension point for concerns like
//! auth headers that the API does not need today.

use reqwest::Method;

use crate::error::Result;

/// A request descriptor: what to send, before it becomes an HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method (the blog API is read-only, so GET in practice)
    pub method: Method,
    /// Path relative to the configured base URL
    pub path: String,
    /// Query parameters in wire order
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a GET request for the given path
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Attach query parameters
    #[must_use]
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }
}

/// A middleware hook: transforms a request descriptor or rejects it
pub type RequestHook = Box<dyn Fn(ApiRequest) -> Result<ApiRequest> + Send + Sync>;

/// An ordered chain of request hooks
///
/// Hooks run in registration order. The first hook to return an error aborts
/// the call; no HTTP request is issued.
///
/// # Example
///
/// ```
/// use blog_client::{ApiRequest, HookChain};
///
/// let mut chain = HookChain::new();
/// chain.push(Box::new(|mut req: ApiRequest| {
///     req.query.push(("trace".to_string(), "1".to_string()));
///     Ok(req)
/// }));
///
/// let req = chain.apply(ApiRequest::get("/article/list")).unwrap();
/// assert_eq!(req.query, vec![("trace".to_string(), "1".to_string())]);
/// ```
#[derive(Default)]
pub struct HookChain {
    hooks: Vec<RequestHook>,
}

impl HookChain {
    /// Create an empty chain (identity pass-through)
    #[must_use]
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Append a hook to the end of the chain
    pub fn push(&mut self, hook: RequestHook) {
        self.hooks.push(hook);
    }

    /// Run the request through every hook in order
    ///
    /// # Errors
    ///
    /// Propagates the first hook error unchanged.
    pub fn apply(&self, request: ApiRequest) -> Result<ApiRequest> {
        self.hooks.iter().try_fold(request, |req, hook| hook(req))
    }

    /// Number of registered hooks
    #[must_use]
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Check whether the chain is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookChain")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
