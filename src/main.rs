use boutique_scraper::{config::Config, crawler, table::Table};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = Config::from_env()?;

    let catalog = crawler::run(&cfg).await?;
    let table = Table::from_products(&catalog);

    println!("\n==============================");
    println!("TOTAL PRODUCTS SCRAPED: {}", table.len());
    println!("==============================\n");

    print!("{}", table);

    Ok(())
}
