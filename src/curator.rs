use crate::types::Article;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use tracing::{debug, info};

/// Keywords that mark an article as a breaking-news candidate.
pub const BREAKING_KEYWORDS: [&str; 8] = [
    "breaking",
    "urgent",
    "developing",
    "just in",
    "alert",
    "emergency",
    "live",
    "update",
];

/// Default recency window for breaking-news detection.
pub const DEFAULT_BREAKING_WINDOW_HOURS: i64 = 2;

/// The curated editorial views derived from one accumulated article list.
#[derive(Debug, Clone, Default)]
pub struct FrontPage {
    pub hero: Option<Article>,
    pub featured: Vec<Article>,
    pub latest: Vec<Article>,
    pub breaking: Vec<Article>,
}

/// Normalized deduplication key for a title: lowercased, ASCII alphanumerics
/// only, at most 50 characters.
pub fn dedup_key(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(50)
        .collect()
}

/// Remove articles whose normalized title has already been seen, preserving
/// feed order. The first occurrence wins; articles without a title share the
/// empty key, so only the first untitled article survives.
pub fn remove_duplicates(articles: Vec<Article>) -> Vec<Article> {
    let total = articles.len();
    let mut seen: HashSet<String> = HashSet::new();
    let unique: Vec<Article> = articles
        .into_iter()
        .filter(|article| {
            let key = dedup_key(article.title.as_deref().unwrap_or(""));
            if seen.contains(&key) {
                debug!(
                    "Skipping duplicate article: {}",
                    article.title.as_deref().unwrap_or("<untitled>")
                );
                false
            } else {
                seen.insert(key);
                true
            }
        })
        .collect();

    let removed = total - unique.len();
    if removed > 0 {
        info!("Removed {} duplicate articles", removed);
    }

    unique
}

/// The single full-width story at the top of the page: the first article
/// with an image, else the first article, else none.
pub fn hero_article(articles: &[Article]) -> Option<&Article> {
    articles
        .iter()
        .find(|article| article.has_image())
        .or_else(|| articles.first())
}

/// Articles at positions [1, 5) of the full list.
///
/// The range is positional, not hero-relative: when an imageless article at
/// index 0 was skipped for hero, the chosen hero still appears here.
pub fn featured_articles(articles: &[Article]) -> &[Article] {
    if articles.len() <= 1 {
        return &[];
    }
    &articles[1..articles.len().min(5)]
}

/// Articles at positions >= 5: the paginated tail of the feed.
pub fn latest_articles(articles: &[Article]) -> &[Article] {
    if articles.len() <= 5 {
        return &[];
    }
    &articles[5..]
}

/// Articles that are both recent (published within `window` of `now`) and
/// carry a breaking-news keyword in their title or description, in feed
/// order. Unparseable timestamps count as not recent.
///
/// `now` is an explicit parameter so callers can freeze the clock in tests;
/// production callers pass `Utc::now()`.
pub fn detect_breaking_news(
    articles: &[Article],
    now: DateTime<Utc>,
    window: Duration,
) -> Vec<Article> {
    articles
        .iter()
        .filter(|article| {
            let is_recent = article
                .published_at()
                .map(|published| {
                    let age = now.signed_duration_since(published);
                    age < window
                })
                .unwrap_or(false);

            is_recent && has_breaking_keyword(article)
        })
        .cloned()
        .collect()
}

fn has_breaking_keyword(article: &Article) -> bool {
    let title = article.title.as_deref().unwrap_or("").to_lowercase();
    let description = article.description.as_deref().unwrap_or("").to_lowercase();

    BREAKING_KEYWORDS
        .iter()
        .any(|keyword| title.contains(keyword) || description.contains(keyword))
}

/// Build all four editorial views from an already-deduplicated list.
pub fn curate(articles: &[Article], now: DateTime<Utc>) -> FrontPage {
    let breaking = detect_breaking_news(
        articles,
        now,
        Duration::hours(DEFAULT_BREAKING_WINDOW_HOURS),
    );

    FrontPage {
        hero: hero_article(articles).cloned(),
        featured: featured_articles(articles).to_vec(),
        latest: latest_articles(articles).to_vec(),
        breaking,
    }
}
