use std::fmt;

use crate::domain::{Product, PurchaseRecord, SellerStats, discount_factor};

/// Computes the profit contribution of one product within a purchase
///
/// The accumulator does not assume any formula; whatever this returns is
/// added to the seller's total profit.
pub trait RevenueStrategy {
    fn calculate(&self, purchase: &PurchaseRecord, product: &Product) -> f64;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&PurchaseRecord, &Product) -> f64,
{
    fn calculate(&self, purchase: &PurchaseRecord, product: &Product) -> f64 {
        self(purchase, product)
    }
}

/// Computes a seller's bonus from its rank
///
/// `index` is the 0-based position after sorting by profit, `total` the
/// number of ranked sellers.
pub trait BonusStrategy {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> f64;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStats) -> f64,
{
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        self(index, total, seller)
    }
}

/// Margin of the first line item selling the product:
/// `(sale_price * (1 - discount/100) - purchase_price) * quantity`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn calculate(&self, purchase: &PurchaseRecord, product: &Product) -> f64 {
        let Some(item) = purchase.item_for(&product.sku) else {
            return 0.0;
        };

        let discounted_price = item.sale_price * discount_factor(item.discount_percent());
        (discounted_price - product.purchase_price) * item.quantity
    }
}

/// Share of total profit by rank: the leader gets `leader_rate`, ranks 1
/// and 2 get `runner_up_rate`, the last seller nothing, everyone else
/// `base_rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitRankBonus {
    pub leader_rate: f64,
    pub runner_up_rate: f64,
    pub base_rate: f64,
}

impl Default for ProfitRankBonus {
    fn default() -> Self {
        Self {
            leader_rate: 0.15,
            runner_up_rate: 0.10,
            base_rate: 0.05,
        }
    }
}

impl ProfitRankBonus {
    fn rate_for(&self, index: usize, total: usize) -> f64 {
        match index {
            0 => self.leader_rate,
            i if i + 1 == total => 0.0,
            1 | 2 => self.runner_up_rate,
            _ => self.base_rate,
        }
    }
}

impl BonusStrategy for ProfitRankBonus {
    fn calculate(&self, index: usize, total: usize, seller: &SellerStats) -> f64 {
        let profit = seller.total_profit();
        if profit == 0.0 || !profit.is_finite() {
            return 0.0;
        }

        profit * self.rate_for(index, total)
    }
}

/// Strategy slots handed to the analyzer
///
/// Either slot may be left empty; the validator rejects such options
/// before any data is touched.
#[derive(Default)]
pub struct AnalysisOptions {
    calculate_revenue: Option<Box<dyn RevenueStrategy>>,
    calculate_bonus: Option<Box<dyn BonusStrategy>>,
}

impl AnalysisOptions {
    /// Options with both slots empty
    pub fn new() -> Self {
        Self::default()
    }

    /// `SimpleRevenue` + `ProfitRankBonus`
    pub fn standard() -> Self {
        Self::new()
            .with_revenue(SimpleRevenue)
            .with_bonus(ProfitRankBonus::default())
    }

    pub fn with_revenue(mut self, strategy: impl RevenueStrategy + 'static) -> Self {
        self.calculate_revenue = Some(Box::new(strategy));
        self
    }

    pub fn with_bonus(mut self, strategy: impl BonusStrategy + 'static) -> Self {
        self.calculate_bonus = Some(Box::new(strategy));
        self
    }

    pub fn revenue_strategy(&self) -> Option<&dyn RevenueStrategy> {
        self.calculate_revenue.as_deref()
    }

    pub fn bonus_strategy(&self) -> Option<&dyn BonusStrategy> {
        self.calculate_bonus.as_deref()
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineItem;

    fn stats_with_profit(profit: f64) -> SellerStats {
        let mut stats = SellerStats::new("seller_1", "A B");
        stats.add_profit(profit);
        stats
    }

    #[test]
    fn simple_revenue_computes_margin() {
        let purchase = PurchaseRecord::new("seller_1", vec![LineItem::new("SKU_001", 2, 100.0)]);
        let product = Product::new("SKU_001", 30.0, 100.0);

        assert_eq!(SimpleRevenue.calculate(&purchase, &product), 140.0);
    }

    #[test]
    fn simple_revenue_applies_discount() {
        let purchase = PurchaseRecord::new(
            "seller_1",
            vec![LineItem::new("SKU_001", 3, 25.0).with_discount(20.0)],
        );
        let product = Product::new("SKU_001", 10.0, 25.0);

        assert_eq!(SimpleRevenue.calculate(&purchase, &product), 30.0);
    }

    #[test]
    fn simple_revenue_does_not_round() {
        let purchase = PurchaseRecord::new("seller_1", vec![LineItem::new("SKU_001", 1, 10.005)]);
        let product = Product::new("SKU_001", 10.0, 10.005);

        let profit = SimpleRevenue.calculate(&purchase, &product);
        assert!((profit - 0.005).abs() < 1e-9);
    }

    #[test]
    fn simple_revenue_is_zero_when_sku_not_in_purchase() {
        let purchase = PurchaseRecord::new("seller_1", vec![LineItem::new("SKU_001", 2, 100.0)]);
        let product = Product::new("SKU_002", 30.0, 100.0);

        assert_eq!(SimpleRevenue.calculate(&purchase, &product), 0.0);
    }

    #[test]
    fn simple_revenue_can_be_negative() {
        let purchase = PurchaseRecord::new("seller_1", vec![LineItem::new("SKU_001", 1, 20.0)]);
        let product = Product::new("SKU_001", 30.0, 20.0);

        assert_eq!(SimpleRevenue.calculate(&purchase, &product), -10.0);
    }

    #[test]
    fn bonus_by_rank() {
        let policy = ProfitRankBonus::default();
        let stats = stats_with_profit(1000.0);

        assert_eq!(policy.calculate(0, 5, &stats), 150.0);
        assert_eq!(policy.calculate(1, 5, &stats), 100.0);
        assert_eq!(policy.calculate(2, 5, &stats), 100.0);
        assert_eq!(policy.calculate(3, 5, &stats), 50.0);
        assert_eq!(policy.calculate(4, 5, &stats), 0.0);
    }

    #[test]
    fn last_rank_wins_over_runner_up() {
        let policy = ProfitRankBonus::default();
        let stats = stats_with_profit(100.0);

        assert_eq!(policy.calculate(2, 3, &stats), 0.0);
        assert_eq!(policy.calculate(1, 2, &stats), 0.0);
    }

    #[test]
    fn single_seller_gets_leader_bonus() {
        let policy = ProfitRankBonus::default();
        let stats = stats_with_profit(200.0);

        assert!((policy.calculate(0, 1, &stats) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn zero_or_undefined_profit_yields_no_bonus() {
        let policy = ProfitRankBonus::default();

        assert_eq!(policy.calculate(0, 3, &stats_with_profit(0.0)), 0.0);
        assert_eq!(policy.calculate(0, 3, &stats_with_profit(f64::NAN)), 0.0);
        assert_eq!(policy.calculate(1, 3, &stats_with_profit(f64::INFINITY)), 0.0);
    }

    #[test]
    fn closures_are_strategies() {
        let revenue = |_: &PurchaseRecord, product: &Product| product.sale_price;
        let bonus = |index: usize, total: usize, _: &SellerStats| (total - index) as f64;

        let purchase = PurchaseRecord::new("seller_1", vec![]);
        let product = Product::new("SKU_001", 1.0, 7.0);

        assert_eq!(RevenueStrategy::calculate(&revenue, &purchase, &product), 7.0);
        assert_eq!(
            BonusStrategy::calculate(&bonus, 1, 4, &stats_with_profit(0.0)),
            3.0
        );
    }

    #[test]
    fn options_slots() {
        let empty = AnalysisOptions::new();
        assert!(empty.revenue_strategy().is_none());
        assert!(empty.bonus_strategy().is_none());

        let standard = AnalysisOptions::standard();
        assert!(standard.revenue_strategy().is_some());
        assert!(standard.bonus_strategy().is_some());
    }

    #[test]
    fn options_debug_shows_filled_slots() {
        let options = AnalysisOptions::new().with_revenue(SimpleRevenue);
        assert_eq!(
            format!("{options:?}"),
            "AnalysisOptions { calculate_revenue: true, calculate_bonus: false }"
        );
    }
}
