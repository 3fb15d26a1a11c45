use reqwest::Client;
use tokio::time::{sleep, Duration};
use tracing::{debug, info};

use crate::config::Config;
use crate::crawler::models::Product;
use crate::error::ScrapeError;

mod fetcher;
pub mod models;
pub mod parser;

/// Fetches listing page 1 and reads the page count from its
/// pagination control; a site without one has a single page.
pub async fn discover_total_pages(
    client: &Client,
    cfg: &Config,
) -> Result<u32, ScrapeError> {
    let html = fetcher::fetch_html(client, &cfg.listing_url(1)).await?;
    parser::total_pages(&html)
}

/// Fetches one listing page and resolves its product tile links.
pub async fn collect_product_links(
    client: &Client,
    cfg: &Config,
    page: u32,
) -> Result<Vec<String>, ScrapeError> {
    let url = cfg.listing_url(page);
    debug!(page, %url, "Fetching listing page");

    let html = fetcher::fetch_html(client, &url).await?;
    let hrefs = parser::product_hrefs(&html)?;
    Ok(hrefs.iter().map(|h| cfg.product_url(h)).collect())
}

/// Fetches one product detail page and extracts all six fields.
pub async fn scrape_product(client: &Client, url: &str) -> Result<Product, ScrapeError> {
    debug!(%url, "Fetching product page");
    let html = fetcher::fetch_html(client, url).await?;
    parser::parse_product(&html)
}

/// Runs the whole pipeline: one catalog, accumulated strictly in
/// page-then-tile order. The first hard failure aborts the run.
pub async fn run(cfg: &Config) -> Result<Vec<Product>, ScrapeError> {
    let client = fetcher::build_client();

    let total_pages = discover_total_pages(&client, cfg).await?;
    info!(total_pages, "Discovered listing page count");

    let mut catalog = Vec::new();

    for page in 1..=total_pages {
        let links = collect_product_links(&client, cfg, page).await?;
        info!(page, count = links.len(), "Found product links");

        for link in &links {
            let product = scrape_product(&client, link).await?;
            info!(name = %product.name, "Scraped product");
            catalog.push(product);

            // polite delay
            sleep(Duration::from_millis(cfg.delay_ms)).await;
        }
    }

    Ok(catalog)
}
