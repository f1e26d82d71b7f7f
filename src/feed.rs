use crate::curator::{curate, remove_duplicates, FrontPage};
use crate::fetcher::NewsFetcher;
use crate::types::Article;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// Accumulated feed state for one category: the deduplicated article list
/// plus the provider's pagination cursor.
///
/// Pagination appends new results after existing ones and re-deduplicates
/// the whole list, so the first-seen instance of a title wins across pages.
pub struct FeedSession {
    fetcher: NewsFetcher,
    category: Option<String>,
    articles: Vec<Article>,
    next_page: Option<String>,
}

impl FeedSession {
    pub fn new(fetcher: NewsFetcher, category: Option<String>) -> Self {
        Self {
            fetcher,
            category,
            articles: Vec::new(),
            next_page: None,
        }
    }

    /// Fetch the first page, replacing any previously accumulated state.
    /// When the provider is unreachable this falls back to the fixed sample
    /// set, so the session always ends up with something to lay out.
    pub async fn load_initial(&mut self) -> usize {
        let (results, next_page) = self
            .fetcher
            .fetch_latest_or_fallback(self.category.as_deref(), None)
            .await;

        self.articles = remove_duplicates(results);
        self.next_page = next_page;

        info!(
            "Loaded {} articles for category {:?}",
            self.articles.len(),
            self.category
        );
        self.articles.len()
    }

    /// Fetch the next page and fold it into the accumulated list. Returns
    /// the number of articles that survived deduplication; 0 when there is
    /// no further page or the fetch failed (existing state is kept either
    /// way).
    pub async fn load_more(&mut self) -> usize {
        let Some(page) = self.next_page.clone() else {
            return 0;
        };

        let response = match self
            .fetcher
            .fetch_latest(self.category.as_deref(), Some(&page))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch more articles: {}", e);
                return 0;
            }
        };

        let before = self.articles.len();
        let mut combined = std::mem::take(&mut self.articles);
        combined.extend(response.results);
        self.articles = remove_duplicates(combined);
        self.next_page = response.next_page;

        let added = self.articles.len() - before;
        info!("Appended {} new articles (total {})", added, self.articles.len());
        added
    }

    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Derive the editorial views from the current list, against an
    /// explicit clock.
    pub fn front_page(&self, now: DateTime<Utc>) -> FrontPage {
        curate(&self.articles, now)
    }

    /// Convenience wrapper over [`front_page`](Self::front_page) using the
    /// current wall-clock time.
    pub fn front_page_now(&self) -> FrontPage {
        self.front_page(Utc::now())
    }
}
