#![doc = include_str!("../README.md")]

mod client;
/// Client configuration (base URL, timeout)
pub mod config;
mod error;
/// Request descriptors and middleware hooks
pub mod request;
/// SPA route table and matcher
pub mod routes;
/// In-memory article store
pub mod store;
/// Wire types for the blog API
pub mod types;

pub use client::BlogClient;
pub use config::ClientConfig;
pub use error::{BlogError, Result};
pub use request::{ApiRequest, HookChain, RequestHook};
pub use routes::{resolve, Route, RouteDef, ROUTES};
pub use store::{ArticleCache, ArticleStore};
pub use types::{Article, ArticleQuery, Category, Tag, Taxonomy};
