use crate::sample::sample_articles;
use crate::types::{Article, FetchConfig, FrontPageError, NewsResponse, Result};
use backoff::{backoff::Backoff, exponential::ExponentialBackoff};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

/// HTTP gateway to the news provider's `latest` endpoint.
///
/// Wraps a shared reqwest client with query building, exponential-backoff
/// retries for transport failures, and the fixed-sample fallback policy for
/// callers that must always render something.
pub struct NewsFetcher {
    client: Client,
    config: FetchConfig,
    api_key: String,
}

impl NewsFetcher {
    pub fn new(api_key: impl Into<String>, config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Build the request URL for one page of the latest feed.
    pub fn endpoint(&self, category: Option<&str>, page: Option<&str>) -> Result<Url> {
        let mut params: Vec<(&str, &str)> = vec![
            ("apikey", self.api_key.as_str()),
            ("language", self.config.language.as_str()),
        ];
        if let Some(category) = category {
            params.push(("category", category));
        }
        if let Some(page) = page {
            params.push(("page", page));
        }

        Ok(Url::parse_with_params(&self.config.base_url, &params)?)
    }

    /// Fetch one page of articles, retrying transport failures with
    /// exponential backoff. A well-formed error envelope from the provider
    /// (rate limit, bad key) is returned immediately without retrying.
    pub async fn fetch_latest(
        &self,
        category: Option<&str>,
        page: Option<&str>,
    ) -> Result<NewsResponse> {
        if self.api_key.is_empty() {
            return Err(FrontPageError::MissingApiKey);
        }

        let url = self.endpoint(category, page)?;
        debug!("Fetching news page: category={:?} page={:?}", category, page);

        let mut backoff: ExponentialBackoff<backoff::SystemClock> = ExponentialBackoff {
            current_interval: Duration::from_secs(self.config.retry_delay_seconds),
            initial_interval: Duration::from_secs(self.config.retry_delay_seconds),
            max_interval: Duration::from_secs(self.config.retry_delay_seconds * 16),
            multiplier: 2.0,
            ..Default::default()
        };

        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match self.request_page(url.clone()).await {
                Ok(response) => {
                    if !response.is_success() {
                        return Err(FrontPageError::Api {
                            status: response.status.unwrap_or_else(|| "error".to_string()),
                            message: response
                                .message
                                .unwrap_or_else(|| "no message from provider".to_string()),
                        });
                    }

                    info!(
                        "Fetched {} articles (next page: {:?})",
                        response.results.len(),
                        response.next_page
                    );
                    return Ok(response);
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.config.max_retries {
                        if let Some(delay) = backoff.next_backoff() {
                            warn!(
                                "Attempt {} failed for {}, retrying in {:?}",
                                attempt + 1,
                                self.config.base_url,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                        }
                    }
                }
            }
        }

        error!(
            "Failed to fetch news after {} attempts",
            self.config.max_retries + 1
        );
        Err(last_error.unwrap_or_else(|| FrontPageError::Api {
            status: "error".to_string(),
            message: "request retries exhausted".to_string(),
        }))
    }

    async fn request_page(&self, url: Url) -> Result<NewsResponse> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        Ok(response.json::<NewsResponse>().await?)
    }

    /// Fetch one page, substituting the fixed sample set when the provider
    /// is unreachable so the caller always has something to lay out.
    pub async fn fetch_latest_or_fallback(
        &self,
        category: Option<&str>,
        page: Option<&str>,
    ) -> (Vec<Article>, Option<String>) {
        match self.fetch_latest(category, page).await {
            Ok(response) => (response.results, response.next_page),
            Err(e) => {
                error!("Falling back to sample articles: {}", e);
                (sample_articles(), None)
            }
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}
