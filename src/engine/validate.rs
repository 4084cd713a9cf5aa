use tracing::warn;

use super::error::AnalysisError;
use super::strategy::{AnalysisOptions, BonusStrategy, RevenueStrategy};
use crate::domain::Dataset;

/// Both strategies, guaranteed present
#[derive(Clone, Copy)]
pub struct Strategies<'a> {
    pub revenue: &'a dyn RevenueStrategy,
    pub bonus: &'a dyn BonusStrategy,
}

/// Reject datasets with an empty required collection
pub fn validate_dataset(dataset: &Dataset) -> Result<(), AnalysisError> {
    ensure_not_empty("sellers", dataset.sellers.len())?;
    ensure_not_empty("products", dataset.products.len())?;
    ensure_not_empty("purchase_records", dataset.purchase_records.len())?;
    Ok(())
}

/// Reject options missing either strategy
pub fn validate_options(options: &AnalysisOptions) -> Result<Strategies<'_>, AnalysisError> {
    let revenue = options
        .revenue_strategy()
        .ok_or(AnalysisError::InvalidOptions("calculate_revenue"))?;
    let bonus = options
        .bonus_strategy()
        .ok_or(AnalysisError::InvalidOptions("calculate_bonus"))?;

    Ok(Strategies { revenue, bonus })
}

fn ensure_not_empty(collection: &'static str, len: usize) -> Result<(), AnalysisError> {
    if len == 0 {
        warn!(collection, "Rejecting dataset with empty collection");
        return Err(AnalysisError::empty(collection));
    }
    Ok(())
}
