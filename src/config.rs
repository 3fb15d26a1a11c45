use std::env;

const DEFAULT_BASE_URL: &str = "https://69bboutique.com";
const DEFAULT_COLLECTION: &str = "collections/new-in-1";
const DEFAULT_DELAY_MS: u64 = 300;

pub struct Config {
    pub base_url: String,
    pub collection: String,
    pub delay_ms: u64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let delay_ms = match env::var("SHOP_DELAY_MS") {
            Ok(v) => v.parse()?,
            Err(_) => DEFAULT_DELAY_MS,
        };

        Ok(Self {
            base_url: env::var("SHOP_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            collection: env::var("SHOP_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
            delay_ms,
        })
    }

    pub fn listing_url(&self, page: u32) -> String {
        format!("{}/{}?page={}", self.base_url, self.collection, page)
    }

    /// Resolves a site-relative href from a product tile.
    pub fn product_url(&self, href: &str) -> String {
        format!("{}{}", self.base_url, href)
    }
}
