use std::collections::HashMap;

use tracing::debug;

use crate::domain::{Product, Seller, SellerStats};

/// Seller id -> stats, in order of first appearance
///
/// Duplicate ids: the later record replaces the earlier one but keeps its
/// position.
#[derive(Debug, Clone, Default)]
pub struct SellerIndex {
    stats: Vec<SellerStats>,
    positions: HashMap<String, usize>,
}

impl SellerIndex {
    pub fn build(sellers: &[Seller]) -> Self {
        let mut index = Self::default();

        for seller in sellers {
            match index.positions.get(seller.id.as_str()) {
                Some(&pos) => {
                    debug!(seller_id = %seller.id, "Duplicate seller id, keeping latest record");
                    index.stats[pos] = SellerStats::from_seller(seller);
                }
                None => {
                    index.positions.insert(seller.id.clone(), index.stats.len());
                    index.stats.push(SellerStats::from_seller(seller));
                }
            }
        }

        index
    }

    pub fn get(&self, seller_id: &str) -> Option<&SellerStats> {
        self.positions.get(seller_id).map(|&pos| &self.stats[pos])
    }

    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerStats> {
        self.positions
            .get(seller_id)
            .map(|&pos| &mut self.stats[pos])
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Stats in index order, consuming the index
    pub fn into_stats(self) -> Vec<SellerStats> {
        self.stats
    }
}

/// SKU -> catalog entry, borrowed from the dataset
///
/// Duplicate SKUs: last write wins.
#[derive(Debug, Clone, Default)]
pub struct ProductIndex<'a> {
    products: HashMap<&'a str, &'a Product>,
}

impl<'a> ProductIndex<'a> {
    pub fn build(products: &'a [Product]) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        for product in products {
            if index.insert(product.sku.as_str(), product).is_some() {
                debug!(sku = %product.sku, "Duplicate SKU, keeping latest record");
            }
        }
        Self { products: index }
    }

    pub fn get(&self, sku: &str) -> Option<&'a Product> {
        self.products.get(sku).copied()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
