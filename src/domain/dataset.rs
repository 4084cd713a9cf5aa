use serde::{Deserialize, Serialize};

use super::product::Product;
use super::purchase::PurchaseRecord;
use super::seller::Seller;

/// The full batch handed to the analyzer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl Dataset {
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            sellers,
            products,
            purchase_records,
        }
    }
}
