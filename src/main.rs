use std::env;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use edupatch::content::{ContentLoader, FileStore, HttpFetcher, QuizFetcher};
use edupatch::resolver::resolve;

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const DEFAULT_API_URL: &str = "http://localhost:8080";
const DEFAULT_CACHE_DIR: &str = "offline_cache";

pub struct Config {
    pub raw_input: String,
    pub cache_dir: String,
    pub api_url: String,
}

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let raw_input = args
        .next()
        .context("a page URL or QR payload is required")?;
    let cache_dir = args.next().unwrap_or(DEFAULT_CACHE_DIR.to_string());
    let api_url = env::var("EDUPATCH_API_URL").unwrap_or(DEFAULT_API_URL.to_string());

    Ok(Config {
        raw_input,
        cache_dir,
        api_url,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match parse_config(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: edupatch <url-or-qr-payload> [cache_dir]");
            return Err(e);
        }
    };

    let id = resolve(&config.raw_input).context(
        "could not find a page identifier in the input, expected a URL like http://localhost:8080/pages/<id>",
    )?;
    info!(%id, "resolved page identifier");

    let store = FileStore::new(&config.cache_dir).context("failed to open the offline cache")?;
    let fetcher = HttpFetcher::new(&config.api_url);
    let loader = ContentLoader::new(store, fetcher);

    let served = loader
        .load(&id)
        .await
        .context(format!("could not load page {}", id))?;

    let source = if served.from_cache {
        "offline cache"
    } else {
        "backend (cached for offline use)"
    };

    println!(
        "{BOLD}{}{RESET} (page {}) - served from {}",
        served.page.title, served.page.ordinal, source
    );
    println!("\n{}", served.page.body);
    if let Some(summary) = &served.page.summary {
        println!("\n{BOLD}Summary{RESET}\n{}", summary);
    }
    if let Some(explanation) = &served.page.explanation {
        println!("\n{BOLD}Explanation{RESET}\n{}", explanation);
    }

    // Quiz availability is best effort: the page itself is already served,
    // so an unreachable backend only degrades to a notice here.
    match HttpFetcher::new(&config.api_url).fetch_quiz(&id).await {
        Ok(items) if items.is_empty() => {
            println!("\nNo quiz available for this page.");
        }
        Ok(items) => {
            println!(
                "\n{BOLD}{}{RESET} quiz questions available for this page.",
                items.len()
            );
        }
        Err(e) => {
            println!("\nQuiz availability unknown: {}", e);
        }
    }

    Ok(())
}
