//! In-memory article store
//!
//! Holds the most recent full article list fetched from the API so views can
//! look articles up synchronously, without another network round-trip.
//!
//! # Caching strategy
//!
//! - **Replacement**: wholesale - each [`ArticleCache::set_articles`] call
//!   discards the previous list, never merges
//! - **Lookup**: linear scan by article id
//! - **Bounds**: none - no eviction, no size limit, no TTL
//!
//! Articles fetched individually through
//! [`BlogClient::article`](crate::BlogClient::article) are NOT merged into
//! the store, so a lookup can miss even after a successful single-article
//! fetch. Callers that need the entry must re-fetch the list.
//!
//! # Example
//!
//! ```
//! use blog_client::{Article, ArticleCache, ArticleStore};
//!
//! # fn article(id: u64, title: &str) -> Article {
//! #     Article {
//! #         id,
//! #         title: title.to_string(),
//! #         description: String::new(),
//! #         content: String::new(),
//! #         category_id: 1,
//! #         label_ids: String::new(),
//! #         cover: String::new(),
//! #         create_time: String::new(),
//! #         update_time: String::new(),
//! #     }
//! # }
//! let mut store = ArticleStore::new();
//! store.set_articles(vec![article(1, "First"), article(2, "Second")]);
//!
//! assert_eq!(store.article_by_id(1).map(|a| a.title.as_str()), Some("First"));
//! assert!(store.article_by_id(999).is_none());
//!
//! // Replacement is total: the old list is gone
//! store.set_articles(vec![article(3, "Third")]);
//! assert!(store.article_by_id(1).is_none());
//! ```

use crate::types::Article;

/// Trait for article caching implementations
pub trait ArticleCache {
    /// Replace the entire cached list with a new one
    fn set_articles(&mut self, articles: Vec<Article>);

    /// Look up a cached article by id
    fn article_by_id(&self, id: u64) -> Option<&Article>;

    /// The cached list, in fetch order
    fn articles(&self) -> &[Article];

    /// Number of cached articles
    fn len(&self) -> usize;

    /// Check if the store is empty
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all cached articles
    fn clear(&mut self);
}

/// Vec-backed article store
///
/// Single-writer, replace-on-fetch. When fetches race, whichever completes
/// last wins; the store itself imposes no ordering.
#[derive(Debug, Clone, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
}

impl ArticleStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArticleCache for ArticleStore {
    fn set_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    fn article_by_id(&self, id: u64) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }

    fn len(&self) -> usize {
        self.articles.len()
    }

    fn clear(&mut self) {
        self.articles.clear();
    }
}
