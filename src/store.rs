//! File-backed preference stores: the bookmark list and the display theme.
//!
//! Each store is an explicit object (no ambient global) that loads its file
//! once at construction and rewrites it on every mutation. A missing or
//! unreadable file is not an error; the store just starts from its default.

use crate::presentation::article_id;
use crate::types::{Article, Result, SavedArticle, Theme};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const BOOKMARKS_FILE: &str = "bookmarks.json";
pub const THEME_FILE: &str = "theme.json";

/// User-saved articles, persisted as a JSON array of entries stamped at
/// save time.
pub struct BookmarkStore {
    path: PathBuf,
    bookmarks: Vec<SavedArticle>,
}

impl BookmarkStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let bookmarks = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(bookmarks) => bookmarks,
                Err(e) => {
                    warn!("Ignoring corrupt bookmark file {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        debug!("Loaded {} bookmarks from {}", bookmarks.len(), path.display());
        Self { path, bookmarks }
    }

    pub fn bookmarks(&self) -> &[SavedArticle] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks
            .iter()
            .any(|saved| article_id(&saved.article) == id)
    }

    /// Save an article, stamping it with the current time. Returns `false`
    /// without touching the file when it is already bookmarked.
    pub fn add(&mut self, article: &Article) -> Result<bool> {
        if self.is_bookmarked(&article_id(article)) {
            return Ok(false);
        }

        self.bookmarks.push(SavedArticle {
            article: article.clone(),
            bookmarked_at: Utc::now(),
        });
        self.flush()?;
        Ok(true)
    }

    /// Returns `true` when an entry was removed.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.bookmarks.len();
        self.bookmarks
            .retain(|saved| article_id(&saved.article) != id);

        if self.bookmarks.len() == before {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    /// Add when absent, remove when present. Returns whether the article is
    /// bookmarked afterwards.
    pub fn toggle(&mut self, article: &Article) -> Result<bool> {
        let id = article_id(article);
        if self.is_bookmarked(&id) {
            self.remove(&id)?;
            Ok(false)
        } else {
            self.add(article)?;
            Ok(true)
        }
    }

    pub fn clear(&mut self) -> Result<()> {
        self.bookmarks.clear();
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        write_json_file(&self.path, &serde_json::to_string_pretty(&self.bookmarks)?)
    }
}

/// Two-valued display theme, defaulting to light when no file exists.
pub struct ThemeStore {
    path: PathBuf,
    theme: Theme,
}

impl ThemeStore {
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let theme = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(theme) => theme,
                Err(e) => {
                    warn!("Ignoring corrupt theme file {}: {}", path.display(), e);
                    Theme::Light
                }
            },
            Err(_) => Theme::Light,
        };

        Self { path, theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.flush()
    }

    /// Flip between light and dark, returning the new value.
    pub fn toggle(&mut self) -> Result<Theme> {
        self.set_theme(self.theme.toggled())?;
        Ok(self.theme)
    }

    fn flush(&self) -> Result<()> {
        write_json_file(&self.path, &serde_json::to_string(&self.theme)?)
    }
}

fn write_json_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}
