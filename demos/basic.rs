//! Basic blog client example
//!
//! Run with: cargo run --example basic

use blog_client::{ArticleCache, ArticleQuery, ArticleStore, BlogClient, ClientConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Point at the blog API; defaults to the local development server
    let base_url =
        std::env::var("BLOG_API_URL").unwrap_or_else(|_| "http://127.0.0.1:7001".to_string());
    let client = BlogClient::new(ClientConfig::new(&base_url)?)?;

    println!("Fetching taxonomy from {base_url}...");
    let taxonomy = client.categories_and_tags().await?;
    println!(
        "{} categories, {} tags",
        taxonomy.categories.len(),
        taxonomy.tags.len()
    );

    let Some(category) = taxonomy.categories.first() else {
        println!("No categories yet.");
        return Ok(());
    };

    // First page of articles in the first category
    let articles = client
        .articles(&ArticleQuery::new(category.id).page(1).page_size(10))
        .await?;
    println!("Category '{}': {} articles", category.name, articles.len());
    for article in &articles {
        println!("  [{}] {} - {}", article.id, article.title, article.description);
    }

    // Cache the list; later lookups are synchronous
    let mut store = ArticleStore::new();
    store.set_articles(articles);

    if let Some(first) = store.articles().first().map(|a| a.id) {
        let cached = store.article_by_id(first);
        println!(
            "Cached lookup of article {first}: {}",
            cached.map_or("miss", |a| a.title.as_str())
        );
    }

    Ok(())
}
