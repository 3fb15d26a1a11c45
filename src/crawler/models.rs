/// One scraped product, in the fixed column order of the output
/// table. Name, price and collection are guaranteed by the site
/// template; the rest vary by product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    /// Price text with the leading `£` stripped, e.g. "49.00".
    pub price: String,
    pub sizes: Option<Vec<String>>,
    pub collection: String,
    pub collection_description: Option<String>,
    pub fabric_type: Option<String>,
}
