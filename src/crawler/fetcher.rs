use reqwest::Client;

use crate::error::ScrapeError;

pub fn build_client() -> Client {
    Client::builder()
        .user_agent("BoutiqueScraper/0.1")
        .build()
        .expect("failed to build http client")
}

/// Fetches one page; any non-2xx status is a transport failure.
pub async fn fetch_html(client: &Client, url: &str) -> Result<String, ScrapeError> {
    let res = client.get(url).send().await?.error_for_status()?;
    Ok(res.text().await?)
}
