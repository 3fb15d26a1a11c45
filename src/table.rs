use std::fmt;

use crate::crawler::models::Product;

pub const COLUMNS: [&str; 6] = [
    "Product Name",
    "Price (£)",
    "Available Sizes",
    "Collection",
    "Collection Description",
    "Fabric Type",
];

/// In-memory export of the catalog: six named columns, one row per
/// product, insertion order preserved. Absent fields render empty.
pub struct Table {
    rows: Vec<[String; 6]>,
}

impl Table {
    pub fn from_products(products: &[Product]) -> Self {
        let rows = products
            .iter()
            .map(|p| {
                [
                    p.name.clone(),
                    p.price.clone(),
                    p.sizes.as_ref().map(|s| s.join(", ")).unwrap_or_default(),
                    p.collection.clone(),
                    p.collection_description.clone().unwrap_or_default(),
                    p.fabric_type.clone().unwrap_or_default(),
                ]
            })
            .collect();

        Self { rows }
    }

    pub fn columns(&self) -> &'static [&'static str; 6] {
        &COLUMNS
    }

    pub fn rows(&self) -> &[[String; 6]] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", COLUMNS.join("\t"))?;
        for row in &self.rows {
            writeln!(f, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_catalog_exports_header_and_no_rows() {
        let table = Table::from_products(&[]);
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 6);
        assert_eq!(table.columns()[1], "Price (£)");
        assert_eq!(table.to_string().lines().count(), 1);
    }

    #[test]
    fn rows_keep_insertion_order_and_render_absent_as_empty() {
        let products = vec![
            Product {
                name: "Linen Dress".into(),
                price: "120.00".into(),
                sizes: Some(vec!["S".into(), "M".into()]),
                collection: "Summer 2024".into(),
                collection_description: None,
                fabric_type: Some("100% Linen".into()),
            },
            Product {
                name: "Silk Top".into(),
                price: "80.00".into(),
                sizes: None,
                collection: "Summer 2024".into(),
                collection_description: Some("Summer essentials".into()),
                fabric_type: None,
            },
        ];

        let table = Table::from_products(&products);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0][0], "Linen Dress");
        assert_eq!(table.rows()[0][2], "S, M");
        assert_eq!(table.rows()[0][4], "");
        assert_eq!(table.rows()[1][2], "");
        assert_eq!(table.rows()[1][4], "Summer essentials");
    }
}
