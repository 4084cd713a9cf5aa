use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Seller as it appears in the input catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl Seller {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            start_date: None,
            position: None,
        }
    }

    /// "First Last"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Units sold of one SKU by one seller
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductSales {
    pub quantity: u64,
    pub name: Option<String>,
}

/// Running totals for one seller, owned by a single pipeline run
///
/// Fields are private; the accumulator mutates them through crate-internal
/// methods and everything downstream only reads.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerStats {
    seller_id: String,
    name: String,
    total_revenue: f64,
    total_profit: f64,
    sales_count: u64,
    products_sold: Vec<(String, ProductSales)>,
    sku_positions: HashMap<String, usize>,
}

impl SellerStats {
    /// Empty stats for a seller
    pub fn new(seller_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            seller_id: seller_id.into(),
            name: name.into(),
            total_revenue: 0.0,
            total_profit: 0.0,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_positions: HashMap::new(),
        }
    }

    pub fn from_seller(seller: &Seller) -> Self {
        Self::new(seller.id.clone(), seller.display_name())
    }

    pub fn seller_id(&self) -> &str {
        &self.seller_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    pub fn total_profit(&self) -> f64 {
        self.total_profit
    }

    pub fn sales_count(&self) -> u64 {
        self.sales_count
    }

    /// Per-SKU sales in order of first appearance
    pub fn products_sold(&self) -> impl Iterator<Item = (&str, &ProductSales)> {
        self.products_sold
            .iter()
            .map(|(sku, sales)| (sku.as_str(), sales))
    }

    // Internal mutation methods for use by the accumulator
    pub(crate) fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    pub(crate) fn add_profit(&mut self, profit: f64) {
        self.total_profit += profit;
    }

    pub(crate) fn add_revenue(&mut self, revenue: f64) {
        self.total_revenue += revenue;
    }

    pub(crate) fn add_units(&mut self, sku: &str, quantity: u64, name: Option<&str>) {
        let pos = match self.sku_positions.get(sku) {
            Some(&pos) => pos,
            None => {
                let pos = self.products_sold.len();
                self.sku_positions.insert(sku.to_string(), pos);
                self.products_sold.push((
                    sku.to_string(),
                    ProductSales {
                        quantity: 0,
                        name: name.map(str::to_string),
                    },
                ));
                pos
            }
        };

        let sales = &mut self.products_sold[pos].1;
        sales.quantity = sales.quantity.saturating_add(quantity);
    }
}

#[cfg(test)]
impl SellerStats {
    /// Units sold of a SKU (0 if never sold)
    pub(crate) fn units_sold(&self, sku: &str) -> u64 {
        self.sku_positions
            .get(sku)
            .map(|&pos| self.products_sold[pos].1.quantity)
            .unwrap_or(0)
    }

    pub(crate) fn total_units(&self) -> u64 {
        self.products_sold.iter().map(|(_, sales)| sales.quantity).sum()
    }
}
