use super::strategy::BonusStrategy;
use crate::domain::SellerStats;

/// A seller's final stats together with its unrounded bonus
#[derive(Debug, Clone, PartialEq)]
pub struct RankedSeller {
    pub stats: SellerStats,
    pub bonus: f64,
}

/// Sort by total profit, highest first; equal profits keep input order.
pub fn rank_sellers(mut sellers: Vec<SellerStats>) -> Vec<SellerStats> {
    // sort_by is stable
    sellers.sort_by(|a, b| ranking_key(b.total_profit()).total_cmp(&ranking_key(a.total_profit())));
    sellers
}

/// Ask the bonus strategy for each seller's bonus at its rank
pub fn assign_bonuses(ranked: Vec<SellerStats>, bonus: &dyn BonusStrategy) -> Vec<RankedSeller> {
    let total = ranked.len();

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, stats)| {
            let bonus = bonus.calculate(index, total, &stats);
            RankedSeller { stats, bonus }
        })
        .collect()
}

/// NaN ranks as zero and -0.0 equals 0.0, so the ordering is total
fn ranking_key(profit: f64) -> f64 {
    if profit.is_nan() { 0.0 } else { profit + 0.0 }
}
