use serde::{Deserialize, Serialize};

/// Final per-seller record, rounded for presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SellerResult {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u64,
    pub bonus: f64,
    pub top_products: Vec<TopProduct>,
}

/// Entry in a seller's best-selling product list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
}

impl TopProduct {
    pub fn new(sku: impl Into<String>, quantity: u64) -> Self {
        Self {
            sku: sku.into(),
            quantity,
            name: None,
            revenue: None,
        }
    }
}
