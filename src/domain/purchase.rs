use serde::{Deserialize, Serialize};

use super::money::line_revenue;

/// One product entry within a purchase record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,
    /// Units sold; any JSON number is accepted here and
    /// [`LineItem::whole_units`] decides whether it counts
    pub quantity: f64,
    /// Unit price at the time of sale
    pub sale_price: f64,
    /// Discount percentage; absent or null means no discount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl LineItem {
    pub fn new(sku: impl Into<String>, quantity: u32, sale_price: f64) -> Self {
        Self {
            sku: sku.into(),
            quantity: f64::from(quantity),
            sale_price,
            discount: None,
        }
    }

    pub fn with_discount(mut self, discount_percent: f64) -> Self {
        self.discount = Some(discount_percent);
        self
    }

    /// Discount percentage, 0 when absent
    pub fn discount_percent(&self) -> f64 {
        self.discount.unwrap_or(0.0)
    }

    /// Quantity as a unit count, `None` unless it is a finite,
    /// non-negative whole number
    pub fn whole_units(&self) -> Option<u64> {
        let quantity = self.quantity;
        if !quantity.is_finite() || quantity < 0.0 || quantity.fract() != 0.0 {
            return None;
        }
        // Saturates above u64::MAX
        Some(quantity as u64)
    }

    /// Unrounded revenue of this line
    pub fn revenue(&self) -> f64 {
        line_revenue(self.sale_price, self.quantity, self.discount_percent())
    }
}

/// A receipt: the seller who made the sale and the items sold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub seller_id: String,
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_discount: Option<f64>,
}

impl PurchaseRecord {
    pub fn new(seller_id: impl Into<String>, items: Vec<LineItem>) -> Self {
        Self {
            seller_id: seller_id.into(),
            items,
            receipt_id: None,
            date: None,
            customer_id: None,
            total_amount: None,
            total_discount: None,
        }
    }

    /// First line item selling the given SKU
    pub fn item_for(&self, sku: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.sku == sku)
    }
}
