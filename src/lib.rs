pub mod curator;
pub mod feed;
pub mod fetcher;
pub mod presentation;
pub mod sample;
pub mod store;
pub mod types;

pub use curator::{curate, detect_breaking_news, remove_duplicates, FrontPage};
pub use feed::FeedSession;
pub use fetcher::NewsFetcher;
pub use store::{BookmarkStore, ThemeStore};
pub use types::*;
