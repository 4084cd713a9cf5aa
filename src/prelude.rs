//! Prelude module for convenient imports
//!
//! Import everything you need with: `use sales::prelude::*;`

// Domain types
pub use crate::domain::{
    Dataset, DomainError, LineItem, Product, ProductSales, PurchaseRecord, Seller, SellerResult,
    SellerStats, TopProduct, round_to_cents,
};

// Engine types
pub use crate::engine::{
    AccumulationSummary, AnalysisConfig, AnalysisError, AnalysisOptions, BonusStrategy,
    InputProblem, ProfitRankBonus, RevenueStrategy, SalesAnalyzer, SalesReport, SimpleRevenue,
    analyze_sales_data,
};

// IO types
pub use crate::io::{IoError, OutputFormat, load_dataset_file, load_dataset_str, write_csv, write_json};

// App types
pub use crate::app::{
    AppError, CliApp, ReportArgs, ReportConfig, Writers, log_filter, parse_args,
};
