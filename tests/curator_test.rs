use chrono::{Duration, TimeZone, Utc};
use frontpage::curator::{
    curate, detect_breaking_news, featured_articles, hero_article, latest_articles,
    remove_duplicates, DEFAULT_BREAKING_WINDOW_HOURS,
};
use frontpage::types::Article;

fn article(title: &str) -> Article {
    Article {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

fn article_with_image(title: &str) -> Article {
    Article {
        title: Some(title.to_string()),
        image_url: Some("https://example.com/image.jpg".to_string()),
        ..Default::default()
    }
}

fn article_published(title: &str, pub_date: &str) -> Article {
    Article {
        title: Some(title.to_string()),
        pub_date: Some(pub_date.to_string()),
        ..Default::default()
    }
}

#[test]
fn test_dedup_removes_normalized_title_duplicates() {
    let articles = vec![article("Markets Rally"), article("markets rally!!")];
    let unique = remove_duplicates(articles);

    assert_eq!(unique.len(), 1);
    assert_eq!(unique[0].title.as_deref(), Some("Markets Rally"));
}

#[test]
fn test_dedup_preserves_first_seen_order() {
    let articles = vec![
        article("Alpha"),
        article("Beta"),
        article("ALPHA"),
        article("Gamma"),
        article("beta..."),
    ];
    let unique = remove_duplicates(articles);

    let titles: Vec<_> = unique.iter().filter_map(|a| a.title.as_deref()).collect();
    assert_eq!(titles, vec!["Alpha", "Beta", "Gamma"]);
}

#[test]
fn test_dedup_is_idempotent() {
    let articles = vec![
        article("One"),
        article("Two"),
        article("one"),
        article("Three"),
    ];
    let once = remove_duplicates(articles);
    let twice = remove_duplicates(once.clone());

    assert_eq!(once.len(), twice.len());
    let titles_once: Vec<_> = once.iter().filter_map(|a| a.title.as_deref()).collect();
    let titles_twice: Vec<_> = twice.iter().filter_map(|a| a.title.as_deref()).collect();
    assert_eq!(titles_once, titles_twice);
}

#[test]
fn test_dedup_empty_input() {
    assert!(remove_duplicates(Vec::new()).is_empty());
}

#[test]
fn test_hero_none_only_for_empty_list() {
    assert!(hero_article(&[]).is_none());
    assert!(hero_article(&[article("Imageless")]).is_some());
}

#[test]
fn test_hero_prefers_first_article_with_image() {
    let articles = vec![
        article("No Image"),
        article_with_image("Has Image"),
        article_with_image("Also Has Image"),
    ];

    let hero = hero_article(&articles).expect("hero expected");
    assert_eq!(hero.title.as_deref(), Some("Has Image"));
}

#[test]
fn test_hero_falls_back_to_first_article() {
    let articles = vec![article("First"), article("Second")];
    let hero = hero_article(&articles).expect("hero expected");
    assert_eq!(hero.title.as_deref(), Some("First"));
}

#[test]
fn test_blank_image_url_does_not_count() {
    let mut blank = article("Blank");
    blank.image_url = Some("  ".to_string());
    let articles = vec![blank, article_with_image("Real")];

    let hero = hero_article(&articles).expect("hero expected");
    assert_eq!(hero.title.as_deref(), Some("Real"));
}

#[test]
fn test_featured_and_latest_empty_for_short_lists() {
    assert!(featured_articles(&[]).is_empty());
    assert!(latest_articles(&[]).is_empty());

    let one = vec![article("Only")];
    assert!(featured_articles(&one).is_empty());
    assert!(latest_articles(&one).is_empty());
}

#[test]
fn test_five_articles_fill_featured_and_leave_latest_empty() {
    let articles: Vec<Article> = (0..5).map(|i| article(&format!("Story {}", i))).collect();

    let featured = featured_articles(&articles);
    assert_eq!(featured.len(), 4);
    assert_eq!(featured[0].title.as_deref(), Some("Story 1"));
    assert_eq!(featured[3].title.as_deref(), Some("Story 4"));
    assert!(latest_articles(&articles).is_empty());
}

#[test]
fn test_six_imageless_articles_partition_by_position() {
    let articles: Vec<Article> = (0..6).map(|i| article(&format!("Story {}", i))).collect();

    let hero = hero_article(&articles).expect("hero expected");
    assert_eq!(hero.title.as_deref(), Some("Story 0"));

    let featured = featured_articles(&articles);
    let featured_titles: Vec<_> = featured.iter().filter_map(|a| a.title.as_deref()).collect();
    assert_eq!(
        featured_titles,
        vec!["Story 1", "Story 2", "Story 3", "Story 4"]
    );

    let latest = latest_articles(&articles);
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0].title.as_deref(), Some("Story 5"));
}

#[test]
fn test_hero_can_reappear_in_featured_slice() {
    // Positional slicing is intentionally independent of hero selection:
    // when index 0 has no image, the image-bearing hero at index 1 still
    // shows up in the featured range.
    let articles = vec![
        article("Imageless Lead"),
        article_with_image("Picked Hero"),
        article("Third"),
    ];

    let hero = hero_article(&articles).expect("hero expected");
    assert_eq!(hero.title.as_deref(), Some("Picked Hero"));

    let featured = featured_articles(&articles);
    assert!(featured
        .iter()
        .any(|a| a.title.as_deref() == Some("Picked Hero")));
}

#[test]
fn test_featured_and_latest_never_overlap() {
    let articles: Vec<Article> = (0..12).map(|i| article(&format!("Story {}", i))).collect();

    let featured: Vec<_> = featured_articles(&articles)
        .iter()
        .filter_map(|a| a.title.as_deref())
        .collect();
    let latest: Vec<_> = latest_articles(&articles)
        .iter()
        .filter_map(|a| a.title.as_deref())
        .collect();

    assert!(featured.iter().all(|title| !latest.contains(title)));
    assert_eq!(featured.len() + latest.len(), articles.len() - 1);
}

#[test]
fn test_breaking_requires_both_recency_and_keyword() {
    let now = Utc.with_ymd_and_hms(2025, 12, 18, 12, 0, 0).unwrap();
    let articles = vec![
        // Recent with keyword: included.
        article_published("Breaking: Markets Halt Trading", "2025-12-18 11:30:00"),
        // Recent without keyword: excluded.
        article_published("Quiet Day in Parliament", "2025-12-18 11:45:00"),
        // Keyword but stale: excluded.
        article_published("Urgent Recall Announced", "2025-12-17 09:00:00"),
        // Unparseable timestamp: treated as not recent.
        article_published("Live Updates From the Summit", "not-a-date"),
    ];

    let breaking = detect_breaking_news(&articles, now, Duration::hours(2));
    assert_eq!(breaking.len(), 1);
    assert_eq!(
        breaking[0].title.as_deref(),
        Some("Breaking: Markets Halt Trading")
    );
}

#[test]
fn test_breaking_matches_keyword_in_description() {
    let now = Utc.with_ymd_and_hms(2025, 12, 18, 12, 0, 0).unwrap();
    let mut item = article_published("Storm Reaches the Coast", "2025-12-18 11:00:00");
    item.description = Some("Developing situation as emergency services respond.".to_string());

    let breaking = detect_breaking_news(&[item], now, Duration::hours(2));
    assert_eq!(breaking.len(), 1);
}

#[test]
fn test_breaking_is_monotonic_in_window() {
    let now = Utc.with_ymd_and_hms(2025, 12, 18, 12, 0, 0).unwrap();
    let articles = vec![
        article_published("Breaking: A", "2025-12-18 11:30:00"),
        article_published("Breaking: B", "2025-12-18 09:30:00"),
        article_published("Breaking: C", "2025-12-17 11:30:00"),
    ];

    let narrow = detect_breaking_news(&articles, now, Duration::hours(2));
    let wide = detect_breaking_news(&articles, now, Duration::hours(48));

    let narrow_titles: Vec<_> = narrow.iter().filter_map(|a| a.title.as_deref()).collect();
    let wide_titles: Vec<_> = wide.iter().filter_map(|a| a.title.as_deref()).collect();

    for title in &narrow_titles {
        assert!(
            wide_titles.contains(title),
            "widening the window removed {}",
            title
        );
    }
    assert_eq!(narrow_titles, vec!["Breaking: A"]);
    assert_eq!(wide_titles.len(), 3);
}

#[test]
fn test_curate_builds_all_views() {
    let now = Utc.with_ymd_and_hms(2025, 12, 18, 12, 0, 0).unwrap();
    let mut articles: Vec<Article> = (0..7).map(|i| article(&format!("Story {}", i))).collect();
    articles[0] = article_published("Breaking: Lead Story", "2025-12-18 11:00:00");

    let page = curate(&articles, now);

    assert_eq!(
        page.hero.as_ref().and_then(|a| a.title.as_deref()),
        Some("Breaking: Lead Story")
    );
    assert_eq!(page.featured.len(), 4);
    assert_eq!(page.latest.len(), 2);
    assert_eq!(page.breaking.len(), 1);
    assert_eq!(DEFAULT_BREAKING_WINDOW_HOURS, 2);
}
