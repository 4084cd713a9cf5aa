use tracing::{debug, info};

use super::accumulate::{AccumulationSummary, Accumulator};
use super::config::AnalysisConfig;
use super::error::AnalysisError;
use super::index::{ProductIndex, SellerIndex};
use super::project::Projector;
use super::rank::{assign_bonuses, rank_sellers};
use super::strategy::AnalysisOptions;
use super::validate::{validate_dataset, validate_options};
use crate::domain::{Dataset, SellerResult};

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    /// Sellers ordered by profit, highest first
    pub results: Vec<SellerResult>,
    pub summary: AccumulationSummary,
}

/// Runs validation, indexing, accumulation, ranking and projection over a
/// dataset. Holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct SalesAnalyzer {
    config: AnalysisConfig,
}

impl SalesAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(
        &self,
        dataset: &Dataset,
        options: &AnalysisOptions,
    ) -> Result<SalesReport, AnalysisError> {
        validate_dataset(dataset)?;
        let strategies = validate_options(options)?;

        let sellers = SellerIndex::build(&dataset.sellers);
        let products = ProductIndex::build(&dataset.products);
        debug!(
            sellers = sellers.len(),
            products = products.len(),
            purchase_records = dataset.purchase_records.len(),
            "Indexed dataset"
        );

        let mut accumulator = Accumulator::new(sellers, &products, strategies.revenue);
        accumulator.process_all(&dataset.purchase_records);
        let (sellers, summary) = accumulator.finish();

        let ranked = assign_bonuses(rank_sellers(sellers.into_stats()), strategies.bonus);

        let projector = Projector::new(&self.config, &products, strategies.revenue);
        let results: Vec<_> = ranked.iter().map(|seller| projector.project(seller)).collect();

        info!(
            sellers = results.len(),
            records_processed = summary.records_processed,
            records_skipped = summary.records_skipped,
            items_skipped = summary.items_skipped,
            "Sales analysis complete"
        );

        Ok(SalesReport { results, summary })
    }
}

/// Analyze with the default configuration, returning only the ranked results
pub fn analyze_sales_data(
    dataset: &Dataset,
    options: &AnalysisOptions,
) -> Result<Vec<SellerResult>, AnalysisError> {
    SalesAnalyzer::default()
        .analyze(dataset, options)
        .map(|report| report.results)
}
