use serde::{Deserialize, Serialize};

/// Catalog entry, looked up by SKU during accumulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    /// Cost basis per unit
    pub purchase_price: f64,
    /// Catalog sale price per unit
    pub sale_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Product {
    pub fn new(sku: impl Into<String>, purchase_price: f64, sale_price: f64) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
            sale_price,
            name: None,
            category: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
