//! Canned articles served when the provider is unreachable, so the front
//! page always has content to arrange.

use crate::types::Article;

pub fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            article_id: Some("sample-1".to_string()),
            title: Some("NASA's James Webb Telescope Discovers New Distant Galaxy".to_string()),
            link: Some("https://example.com/webb-galaxy".to_string()),
            description: Some(
                "Astronomers using the James Webb Space Telescope have identified a galaxy \
                 that formed just 300 million years after the Big Bang, breaking previous records."
                    .to_string(),
            ),
            pub_date: Some("2025-12-18 08:00:00".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1614728263952-84ea256f9679?w=1000".to_string(),
            ),
            source_id: Some("cosmos_daily".to_string()),
            category: Some(vec!["science".to_string()]),
            creator: Some(vec!["Dr. Sarah Jenkins".to_string()]),
            ..Default::default()
        },
        Article {
            article_id: Some("sample-2".to_string()),
            title: Some("Tech Giants Announce Unified AI Safety Protocol".to_string()),
            link: Some("https://example.com/ai-safety".to_string()),
            description: Some(
                "Leading technology companies have agreed on a groundbreaking set of guidelines \
                 to ensure the ethical development and deployment of advanced artificial \
                 intelligence."
                    .to_string(),
            ),
            pub_date: Some("2025-12-18 09:30:00".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=1000".to_string(),
            ),
            source_id: Some("tech_crunch".to_string()),
            category: Some(vec!["technology".to_string()]),
            creator: Some(vec!["Michael Chen".to_string()]),
            ..Default::default()
        },
        Article {
            article_id: Some("sample-3".to_string()),
            title: Some("Global Markets Rally Amid Positive Economic Data".to_string()),
            link: Some("https://example.com/markets-rally".to_string()),
            description: Some(
                "Stock markets across Asia and Europe saw significant gains today as investors \
                 reacted to lower-than-expected inflation reports from major economies."
                    .to_string(),
            ),
            pub_date: Some("2025-12-18 10:15:00".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1611974714024-4607a50ad7a7?w=1000".to_string(),
            ),
            source_id: Some("business_insider".to_string()),
            category: Some(vec!["business".to_string()]),
            creator: Some(vec!["Amanda Roberts".to_string()]),
            ..Default::default()
        },
        Article {
            article_id: Some("sample-4".to_string()),
            title: Some("Sustainable Architecture: The Future of Urban Living".to_string()),
            link: Some("https://example.com/green-skyscrapers".to_string()),
            description: Some(
                "A new wave of green skyscrapers is transforming city skylines, combining \
                 luxury living with vertical forests and carbon-neutral energy systems."
                    .to_string(),
            ),
            pub_date: Some("2025-12-18 11:00:00".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1449844908441-8829872d2607?w=1000".to_string(),
            ),
            source_id: Some("design_weekly".to_string()),
            category: Some(vec!["environment".to_string()]),
            creator: Some(vec!["Liam Thorne".to_string()]),
            ..Default::default()
        },
        Article {
            article_id: Some("sample-5".to_string()),
            title: Some("Breakthrough in Renewable Battery Storage Technology".to_string()),
            link: Some("https://example.com/battery-breakthrough".to_string()),
            description: Some(
                "Scientists have developed a new solid-state battery that can store five times \
                 more energy than current lithium-ion models, promising a revolution for EVs."
                    .to_string(),
            ),
            pub_date: Some("2025-12-18 12:00:00".to_string()),
            image_url: Some(
                "https://images.unsplash.com/photo-1593941707882-a5bba14938c7?w=1000".to_string(),
            ),
            source_id: Some("energy_news".to_string()),
            category: Some(vec!["technology".to_string()]),
            creator: Some(vec!["David Wilson".to_string()]),
            ..Default::default()
        },
    ]
}

pub fn sample_by_category(category: &str) -> Vec<Article> {
    sample_articles()
        .into_iter()
        .filter(|article| {
            article
                .category
                .as_ref()
                .map(|tags| tags.iter().any(|tag| tag == category))
                .unwrap_or(false)
        })
        .collect()
}
