use tracing::warn;

use super::config::AnalysisConfig;
use super::index::ProductIndex;
use super::rank::RankedSeller;
use super::strategy::RevenueStrategy;
use crate::domain::{
    LineItem, ProductSales, PurchaseRecord, SellerResult, SellerStats, TopProduct, round_to_cents,
};

/// Turns ranked sellers into rounded result records
pub struct Projector<'a> {
    config: &'a AnalysisConfig,
    products: &'a ProductIndex<'a>,
    revenue: &'a dyn RevenueStrategy,
}

impl<'a> Projector<'a> {
    pub fn new(
        config: &'a AnalysisConfig,
        products: &'a ProductIndex<'a>,
        revenue: &'a dyn RevenueStrategy,
    ) -> Self {
        Self {
            config,
            products,
            revenue,
        }
    }

    pub fn project(&self, ranked: &RankedSeller) -> SellerResult {
        let stats = &ranked.stats;

        SellerResult {
            seller_id: stats.seller_id().to_string(),
            name: stats.name().to_string(),
            revenue: cents(stats.seller_id(), "revenue", stats.total_revenue()),
            profit: cents(stats.seller_id(), "profit", stats.total_profit()),
            sales_count: stats.sales_count(),
            bonus: cents(stats.seller_id(), "bonus", ranked.bonus),
            top_products: self.top_products(stats),
        }
    }

    /// Best sellers by units, ties in order of first appearance
    pub fn top_products(&self, stats: &SellerStats) -> Vec<TopProduct> {
        let mut sold: Vec<(&str, &ProductSales)> = stats.products_sold().collect();
        sold.sort_by(|a, b| b.1.quantity.cmp(&a.1.quantity));

        sold.into_iter()
            .take(self.config.top_products_limit)
            .map(|(sku, sales)| TopProduct {
                sku: sku.to_string(),
                quantity: sales.quantity,
                name: sales.name.clone(),
                revenue: self
                    .config
                    .include_product_revenue
                    .then(|| self.product_revenue(stats, sku, sales.quantity))
                    .flatten(),
            })
            .collect()
    }

    /// Revenue strategy applied to one synthetic purchase of all units sold
    /// at catalog price
    fn product_revenue(&self, stats: &SellerStats, sku: &str, quantity: u64) -> Option<f64> {
        let product = self.products.get(sku)?;
        let item = LineItem {
            sku: sku.to_string(),
            quantity: quantity as f64,
            sale_price: product.sale_price,
            discount: None,
        };
        let purchase = PurchaseRecord::new(stats.seller_id(), vec![item]);

        Some(cents(
            stats.seller_id(),
            "product_revenue",
            self.revenue.calculate(&purchase, product),
        ))
    }
}

fn cents(seller_id: &str, field: &'static str, value: f64) -> f64 {
    round_to_cents(value).unwrap_or_else(|err| {
        warn!(seller_id, field, value, %err, "Non-finite total, reporting zero");
        0.0
    })
}
