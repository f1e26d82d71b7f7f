use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use frontpage::presentation::{
    article_id, badge_class, capitalize, format_date, share_links, truncate_text, DateFormat,
};
use frontpage::store::{BookmarkStore, ThemeStore, BOOKMARKS_FILE, THEME_FILE};
use frontpage::{FeedSession, FetchConfig, FrontPage, NewsFetcher};
use std::env;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch and curate a news front page", long_about = None)]
struct Cli {
    /// News provider API key; falls back to the NEWSDATA_API_KEY environment
    /// variable. Without a key the fixed sample articles are used.
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Directory holding bookmarks.json and theme.json
    #[arg(long, global = true, default_value = ".frontpage")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the latest articles and print the curated front page
    Fetch {
        /// Restrict to one category (business, technology, sports, ...)
        #[arg(long)]
        category: Option<String>,
        /// Number of pages to accumulate via the provider's cursor
        #[arg(long, default_value_t = 1)]
        pages: u32,
        /// Maximum latest-feed entries to print
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// Manage saved articles
    Bookmarks {
        #[command(subcommand)]
        command: BookmarkCommands,
    },
    /// Show or toggle the display theme
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[derive(Subcommand, Debug)]
enum BookmarkCommands {
    /// List saved articles
    List,
    /// Fetch the latest feed and save the article with the given id
    Add { id: String },
    /// Remove a saved article by id
    Remove { id: String },
    /// Remove all saved articles
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| env::var("NEWSDATA_API_KEY").ok())
        .unwrap_or_default();

    match cli.command {
        Commands::Fetch {
            category,
            pages,
            limit,
        } => {
            let fetcher = NewsFetcher::new(api_key, FetchConfig::default())?;
            let mut session = FeedSession::new(fetcher, category.clone());

            session.load_initial().await;
            for _ in 1..pages {
                if !session.has_more() {
                    break;
                }
                session.load_more().await;
            }

            let heading = category.as_deref().map(capitalize);
            print_front_page(&session.front_page_now(), heading.as_deref(), limit);
        }
        Commands::Bookmarks { command } => {
            let mut store = BookmarkStore::load(cli.data_dir.join(BOOKMARKS_FILE));
            match command {
                BookmarkCommands::List => {
                    if store.is_empty() {
                        println!("No saved articles.");
                    }
                    for saved in store.bookmarks() {
                        println!(
                            "{}  {}  (saved {})",
                            article_id(&saved.article),
                            saved.article.title.as_deref().unwrap_or("<untitled>"),
                            saved.bookmarked_at.format("%b %-d, %Y")
                        );
                    }
                }
                BookmarkCommands::Add { id } => {
                    let fetcher = NewsFetcher::new(api_key, FetchConfig::default())?;
                    let mut session = FeedSession::new(fetcher, None);
                    session.load_initial().await;

                    match session
                        .articles()
                        .iter()
                        .find(|article| article_id(article) == id)
                    {
                        Some(article) => {
                            if store.add(article)? {
                                println!("Saved: {}", article.title.as_deref().unwrap_or(&id));
                            } else {
                                println!("Already saved: {}", id);
                            }
                        }
                        None => println!("No article with id {} in the current feed", id),
                    }
                }
                BookmarkCommands::Remove { id } => {
                    if store.remove(&id)? {
                        println!("Removed {}", id);
                    } else {
                        println!("No saved article with id {}", id);
                    }
                }
                BookmarkCommands::Clear => {
                    store.clear()?;
                    println!("Cleared all saved articles.");
                }
            }
        }
        Commands::Theme { toggle } => {
            let mut store = ThemeStore::load(cli.data_dir.join(THEME_FILE));
            if toggle {
                let theme = store.toggle()?;
                println!("Theme set to {}", theme.as_str());
            } else {
                println!("Theme: {}", store.theme().as_str());
            }
        }
    }

    Ok(())
}

fn print_front_page(page: &FrontPage, heading: Option<&str>, limit: usize) {
    let now = Utc::now();

    if let Some(heading) = heading {
        println!("== {} News ==\n", heading);
    }

    if !page.breaking.is_empty() {
        println!("*** BREAKING ***");
        for article in &page.breaking {
            println!(
                "  {} ({})",
                article.title.as_deref().unwrap_or("<untitled>"),
                format_date(article.pub_date.as_deref(), DateFormat::Relative, now)
            );
        }
        println!();
    }

    match &page.hero {
        Some(hero) => {
            println!("HERO  [{}]", badge_class(hero.primary_category()));
            println!("  {}", hero.title.as_deref().unwrap_or("<untitled>"));
            if let Some(description) = hero.description.as_deref() {
                println!("  {}", truncate_text(description, 150));
            }
            let links = share_links(hero);
            println!("  share: {}", links.twitter);
        }
        None => println!("No articles available."),
    }

    if !page.featured.is_empty() {
        println!("\nFEATURED");
        for article in &page.featured {
            println!(
                "  {}  {}",
                format_date(article.pub_date.as_deref(), DateFormat::Short, now),
                article.title.as_deref().unwrap_or("<untitled>")
            );
        }
    }

    if !page.latest.is_empty() {
        println!("\nLATEST");
        for article in page.latest.iter().take(limit) {
            println!(
                "  {}  {}",
                format_date(article.pub_date.as_deref(), DateFormat::Relative, now),
                article.title.as_deref().unwrap_or("<untitled>")
            );
        }
        if page.latest.len() > limit {
            println!("  ... and {} more", page.latest.len() - limit);
        }
    }

    info!(
        "Front page: hero={} featured={} latest={} breaking={}",
        page.hero.is_some(),
        page.featured.len(),
        page.latest.len(),
        page.breaking.len()
    );
}
