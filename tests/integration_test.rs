//! Integration tests for blog-client
//!
//! These tests verify the public API works correctly.
//! They do not require a running blog API server.

use std::time::Duration;

use blog_client::{
    resolve, Article, ArticleCache, ArticleQuery, ArticleStore, BlogClient, BlogError,
    ClientConfig, Route, ROUTES,
};

fn article(id: u64, title: &str) -> Article {
    Article {
        id,
        title: title.to_string(),
        description: String::new(),
        content: String::new(),
        category_id: 1,
        label_ids: String::new(),
        cover: String::new(),
        create_time: "2024-01-01 10:00:00".to_string(),
        update_time: "2024-01-01 10:00:00".to_string(),
    }
}

#[test]
fn test_client_config_defaults() {
    let config = ClientConfig::local();
    assert_eq!(config.base_url.as_str(), "http://127.0.0.1:7001/");
    assert_eq!(config.timeout, Duration::from_millis(5000));
}

#[test]
fn test_client_config_custom() {
    let config = ClientConfig::new("https://blog.example.com")
        .unwrap()
        .with_timeout(Duration::from_secs(2));
    assert_eq!(config.base_url.as_str(), "https://blog.example.com/");
    assert_eq!(config.timeout, Duration::from_secs(2));
}

#[test]
fn test_client_construction() {
    let client = BlogClient::local().unwrap();
    assert_eq!(client.config().timeout, Duration::from_millis(5000));

    let client = BlogClient::new(ClientConfig::new("http://example.com/api").unwrap()).unwrap();
    assert_eq!(client.config().base_url.path(), "/api/");
}

#[test]
fn test_error_display() {
    let err = BlogError::Timeout;
    assert_eq!(err.to_string(), "Request timeout");

    let err = BlogError::Status {
        code: 404,
        message: "not found".to_string(),
    };
    assert_eq!(err.to_string(), "HTTP status 404: not found");

    let err = BlogError::Middleware("denied".to_string());
    assert_eq!(err.to_string(), "Request rejected by middleware: denied");
}

#[test]
fn test_query_pairs() {
    let query = ArticleQuery::new(3);
    assert_eq!(
        query.to_pairs(),
        vec![("categoryId".to_string(), "3".to_string())]
    );

    let query = ArticleQuery::new(3).page(2).page_size(10);
    assert_eq!(
        query.to_pairs(),
        vec![
            ("categoryId".to_string(), "3".to_string()),
            ("page".to_string(), "2".to_string()),
            ("pageSize".to_string(), "10".to_string()),
        ]
    );
}

#[test]
fn test_store_set_and_lookup() {
    let mut store = ArticleStore::new();
    store.set_articles(vec![article(1, "First"), article(2, "Second")]);

    assert_eq!(store.article_by_id(1).map(|a| a.title.as_str()), Some("First"));
    assert!(store.article_by_id(999).is_none());
}

#[test]
fn test_store_replacement_is_total() {
    let mut store = ArticleStore::new();
    store.set_articles(vec![article(1, "First"), article(2, "Second")]);
    store.set_articles(vec![article(3, "Third")]);

    assert_eq!(store.len(), 1);
    assert!(store.article_by_id(1).is_none());
    assert_eq!(store.article_by_id(3).map(|a| a.title.as_str()), Some("Third"));
}

#[test]
fn test_route_resolution() {
    assert_eq!(resolve("/"), Some(Route::Home));
    assert_eq!(
        resolve("/categories/42"),
        Some(Route::ArticleList { id: "42".to_string() })
    );
    assert_eq!(
        resolve("/articles/7"),
        Some(Route::ArticleDetail { id: "7".to_string() })
    );
    assert_eq!(resolve("/about"), Some(Route::About));
    assert_eq!(resolve("/unknown"), None);
}

#[test]
fn test_route_table_patterns() {
    let patterns: Vec<&str> = ROUTES.iter().map(|def| def.pattern).collect();
    assert_eq!(patterns, vec!["/", "/categories/:id", "/articles/:id", "/about"]);
}
