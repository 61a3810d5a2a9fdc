//! Wire types for the blog API
//!
//! Field names follow the server's JSON exactly: the article payload mixes
//! camelCase (`categoryId`, `labelIds`) and snake_case (`create_time`,
//! `update_time`), so renames are per-field rather than container-wide.
//! Timestamps stay as strings; the client never interprets them.

use serde::{Deserialize, Serialize};

/// A blog post resource with content, category, and tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Unique article id
    pub id: u64,
    /// Article title
    pub title: String,
    /// Short description shown in list views
    pub description: String,
    /// Full article body
    pub content: String,
    /// Owning category id
    #[serde(rename = "categoryId")]
    pub category_id: u64,
    /// Serialized list of tag ids (comma-separated on the wire)
    #[serde(rename = "labelIds")]
    pub label_ids: String,
    /// Cover image URL
    pub cover: String,
    /// Creation timestamp, server-formatted
    pub create_time: String,
    /// Last-update timestamp, server-formatted
    pub update_time: String,
}

/// A taxonomy grouping for articles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category id
    pub id: u64,
    /// Display name
    pub name: String,
    /// Link target for the category
    pub href: String,
}

/// A tag referenced by [`Article::label_ids`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique tag id
    pub id: u64,
    /// Display name
    pub name: String,
}

/// Combined payload of the taxonomy endpoint (`GET /article/categoryAndTag`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    /// All categories
    pub categories: Vec<Category>,
    /// All tags
    pub tags: Vec<Tag>,
}

/// Query parameters of the article list endpoint (`GET /article/list`)
///
/// `page` and `page_size` are optional; the server applies its own defaults
/// when they are absent, and the client omits unset options from the query
/// string entirely.
///
/// # Example
///
/// ```
/// use blog_client::ArticleQuery;
///
/// let query = ArticleQuery::new(3).page(2).page_size(10);
/// assert_eq!(
///     query.to_pairs(),
///     vec![
///         ("categoryId".to_string(), "3".to_string()),
///         ("page".to_string(), "2".to_string()),
///         ("pageSize".to_string(), "10".to_string()),
///     ]
/// );
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleQuery {
    /// Category to list articles for
    pub category_id: u64,
    /// 1-based page number; server default when `None`
    pub page: Option<u32>,
    /// Page size; server default when `None`
    pub page_size: Option<u32>,
}

impl ArticleQuery {
    /// Create a query for the given category with server-default paging
    pub fn new(category_id: u64) -> Self {
        Self {
            category_id,
            page: None,
            page_size: None,
        }
    }

    /// Request a specific page
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Request a specific page size
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Render the query as wire-named key/value pairs, omitting unset options
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("categoryId".to_string(), self.category_id.to_string())];
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize".to_string(), page_size.to_string()));
        }
        pairs
    }
}
