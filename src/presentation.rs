//! Per-article display derivations: fallback images, badges, category
//! colors, date formatting, excerpts, routing ids, and share links.
//!
//! Everything here is pure and total; unknown categories and unparseable
//! dates fall back to safe defaults instead of erroring.

use crate::types::{parse_pub_date, Article};
use chrono::{DateTime, Utc};
use url::Url;

/// How `format_date` renders a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// "Just now", "5m ago", "3h ago", "2d ago"; older than a week falls
    /// through to `Short`.
    Relative,
    /// "December 18, 2025 at 08:00 AM"
    Long,
    /// "Dec 18, 2025"
    Short,
}

/// Category-keyed fallback image, used when an article has no image of its
/// own. Unknown categories get the default entry.
pub fn image_fallback(category: Option<&str>) -> &'static str {
    match category.unwrap_or("default").to_lowercase().as_str() {
        "business" => "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80",
        "technology" => "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800&q=80",
        "health" => "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?w=800&q=80",
        "science" => "https://images.unsplash.com/photo-1507413245164-6160d8298b31?w=800&q=80",
        "sports" => "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?w=800&q=80",
        "entertainment" => {
            "https://images.unsplash.com/photo-1603190287605-e6ade32fa852?w=800&q=80"
        }
        "general" => "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&q=80",
        _ => "https://images.unsplash.com/photo-1585829365295-ab7cd400c167?w=800&q=80",
    }
}

/// Accent color for a category header. Unknown categories read as general.
pub fn category_color(category: Option<&str>) -> &'static str {
    match category.unwrap_or("general").to_lowercase().as_str() {
        "business" => "#1d3557",
        "technology" => "#457b9d",
        "health" => "#2a9d8f",
        "science" => "#264653",
        "sports" => "#e76f51",
        "entertainment" => "#9c6644",
        _ => "#6c757d",
    }
}

/// CSS badge class for a category: `badge-<category>`, defaulting to
/// `badge-general`.
pub fn badge_class(category: Option<&str>) -> String {
    let normalized = category.unwrap_or("general").to_lowercase();
    format!("badge-{}", normalized)
}

/// Render a provider timestamp for display.
///
/// `now` is injected so relative output stays deterministic under test.
/// Empty or unparseable input yields an empty string.
pub fn format_date(pub_date: Option<&str>, format: DateFormat, now: DateTime<Utc>) -> String {
    let Some(date) = pub_date.and_then(parse_pub_date) else {
        return String::new();
    };

    if format == DateFormat::Relative {
        let diff = now.signed_duration_since(date);
        let minutes = diff.num_minutes();
        let hours = diff.num_hours();
        let days = diff.num_days();

        if minutes < 1 {
            return "Just now".to_string();
        }
        if minutes < 60 {
            return format!("{}m ago", minutes);
        }
        if hours < 24 {
            return format!("{}h ago", hours);
        }
        if days < 7 {
            return format!("{}d ago", days);
        }
    }

    if format == DateFormat::Long {
        return date.format("%B %-d, %Y at %I:%M %p").to_string();
    }

    date.format("%b %-d, %Y").to_string()
}

/// Cut text at `max` characters, trim trailing whitespace, and append an
/// ellipsis marker. Text at or under the limit passes through unchanged.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let cut: String = text.chars().take(max).collect();
    format!("{}...", cut.trim_end())
}

/// Stable identifier for routing and bookmarks: the provider id when
/// present, otherwise a slug derived from the title.
pub fn article_id(article: &Article) -> String {
    if let Some(id) = article.article_id.as_deref() {
        if !id.is_empty() {
            return id.to_string();
        }
    }

    slugify(article.title.as_deref().unwrap_or("article"))
}

/// Lowercase, collapse non-alphanumeric runs to single hyphens, strip edge
/// hyphens, cap at 50 characters.
pub fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_matches('-').chars().take(50).collect()
}

/// Outbound share URLs for an article page.
#[derive(Debug, Clone)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

/// Build percent-encoded share intent URLs from the article's title and
/// canonical link.
pub fn share_links(article: &Article) -> ShareLinks {
    let title = article.title.as_deref().unwrap_or("");
    let link = article.link.as_deref().unwrap_or("");

    ShareLinks {
        twitter: share_url(
            "https://twitter.com/intent/tweet",
            &[("text", title), ("url", link)],
        ),
        facebook: share_url("https://www.facebook.com/sharer/sharer.php", &[("u", link)]),
        linkedin: share_url(
            "https://www.linkedin.com/sharing/share-offsite/",
            &[("url", link)],
        ),
    }
}

fn share_url(base: &str, params: &[(&str, &str)]) -> String {
    match Url::parse_with_params(base, params) {
        Ok(url) => url.to_string(),
        Err(_) => base.to_string(),
    }
}

/// Uppercase the first character, for category headings.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
