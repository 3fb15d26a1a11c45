use scraper::{ElementRef, Html, Selector};

use crate::crawler::models::Product;
use crate::error::ScrapeError;

/// Second accordion block carries this prefix ahead of the actual
/// collection description.
const COLLECTION_BOILERPLATE: &str = "\u{feff}Shop Our Collection";

fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

fn trimmed_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Reads the total page count from the pagination control on a
/// listing page. The count sits in the second-to-last pagination
/// link; no control at all means a single page.
pub fn total_pages(html: &str) -> Result<u32, ScrapeError> {
    let doc = Html::parse_document(html);

    let pagination = match doc.select(&selector("div.pagination")).next() {
        Some(el) => el,
        None => return Ok(1),
    };

    let links: Vec<ElementRef> = pagination.select(&selector("a")).collect();
    let last_page = links
        .len()
        .checked_sub(2)
        .and_then(|i| links.get(i))
        .ok_or(ScrapeError::NotFound("pagination page link"))?;

    let text = trimmed_text(*last_page);
    text.parse().map_err(|_| ScrapeError::Parse {
        what: "total page count",
        value: text,
    })
}

/// Enumerates the product tiles in the listing grid and reads each
/// tile's detail-page href. A missing grid is a hard stop; an empty
/// grid is an empty page. Hrefs are site-relative; the caller resolves
/// them through `Config::product_url`.
pub fn product_hrefs(html: &str) -> Result<Vec<String>, ScrapeError> {
    let doc = Html::parse_document(html);

    let grid = doc
        .select(&selector("div.grid.grid--uniform"))
        .next()
        .ok_or(ScrapeError::NotFound("product grid"))?;

    let mut hrefs = Vec::new();
    for tile in grid.select(&selector("div[data-aos=\"fade-up\"]")) {
        let href = tile
            .select(&selector("a"))
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or(ScrapeError::NotFound("product tile link"))?;
        hrefs.push(href.to_string());
    }

    Ok(hrefs)
}

pub fn product_name(doc: &Html) -> Result<String, ScrapeError> {
    doc.select(&selector("h1.product__title"))
        .next()
        .map(trimmed_text)
        .ok_or(ScrapeError::NotFound("product title"))
}

/// Price text with the single leading `£` stripped: "£49.00" → "49.00".
pub fn product_price(doc: &Html) -> Result<String, ScrapeError> {
    let text = doc
        .select(&selector("div.product__price.h2--accent"))
        .next()
        .map(trimmed_text)
        .ok_or(ScrapeError::NotFound("product price"))?;
    Ok(text.strip_prefix('£').unwrap_or(&text).to_string())
}

/// Option labels from the size selector, in document order. Products
/// without a size selector yield `None`, never an error.
pub fn product_sizes(doc: &Html) -> Option<Vec<String>> {
    let select = doc
        .select(&selector("select#SingleOptionSelector-0"))
        .next()?;
    Some(
        select
            .select(&selector("option"))
            .map(trimmed_text)
            .collect(),
    )
}

pub fn collection_name(doc: &Html) -> Result<String, ScrapeError> {
    doc.select(&selector("a.border-bottom-link"))
        .next()
        .map(trimmed_text)
        .ok_or(ScrapeError::NotFound("collection name"))
}

/// The collection description lives in the second accordion block,
/// behind a shop-navigation boilerplate prefix. Pages with fewer than
/// two blocks have no description.
pub fn about_the_collection(doc: &Html) -> Option<String> {
    let blocks: Vec<ElementRef> = doc
        .select(&selector("div.rte.accordion-content.accordion-content--3"))
        .collect();
    let second = blocks.get(1)?;
    let text = trimmed_text(*second);
    Some(text.replacen(COLLECTION_BOILERPLATE, "", 1).trim().to_string())
}

pub fn fabric_type(doc: &Html) -> Option<String> {
    doc.select(&selector("div.custom-product-label"))
        .next()
        .map(trimmed_text)
}

/// Runs all six extractors against one product detail page.
pub fn parse_product(html: &str) -> Result<Product, ScrapeError> {
    let doc = Html::parse_document(html);

    Ok(Product {
        name: product_name(&doc)?,
        price: product_price(&doc)?,
        sizes: product_sizes(&doc),
        collection: collection_name(&doc)?,
        collection_description: about_the_collection(&doc),
        fabric_type: fabric_type(&doc),
    })
}
