pub mod accumulate;
pub mod analyzer;
pub mod config;
pub mod error;
pub mod index;
pub mod project;
pub mod rank;
pub mod strategy;
pub mod validate;

// Re-export commonly used types
pub use accumulate::{AccumulationSummary, Accumulator};
pub use analyzer::{SalesAnalyzer, SalesReport, analyze_sales_data};
pub use config::{AnalysisConfig, DEFAULT_TOP_PRODUCTS};
pub use error::{AnalysisError, InputProblem};
pub use index::{ProductIndex, SellerIndex};
pub use project::Projector;
pub use rank::{RankedSeller, assign_bonuses, rank_sellers};
pub use strategy::{AnalysisOptions, BonusStrategy, ProfitRankBonus, RevenueStrategy, SimpleRevenue};
pub use validate::{Strategies, validate_dataset, validate_options};
