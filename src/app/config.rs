use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::engine::{AnalysisConfig, DEFAULT_TOP_PRODUCTS};
use crate::io::OutputFormat;

/// Environment variable holding `tracing` filter directives,
/// e.g. `info` or `warn,sales::engine=debug`
pub const LOG_ENV_VAR: &str = "SALES_LOG";

const DEFAULT_LOG_DIRECTIVE: &str = "warn";

/// Rank sellers by profit and report revenue, bonuses and top products
#[derive(Parser, Debug)]
#[command(name = "sales", version)]
pub struct ReportArgs {
    /// Dataset JSON file with sellers, products and purchase_records
    pub input: PathBuf,

    /// Report encoding written to stdout
    #[arg(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Number of top products listed per seller
    #[arg(long, default_value_t = DEFAULT_TOP_PRODUCTS)]
    pub top: usize,

    /// Include each top product's revenue
    #[arg(long)]
    pub product_revenue: bool,
}

impl ReportArgs {
    pub fn into_config(self) -> ReportConfig {
        ReportConfig {
            input: self.input,
            format: self.format,
            analysis: AnalysisConfig::default()
                .with_top_products_limit(self.top)
                .with_product_revenue(self.product_revenue),
        }
    }
}

/// Everything the CLI needs for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub format: OutputFormat,
    pub analysis: AnalysisConfig,
}

/// Parse command-line arguments (including the program name at index 0)
///
/// Help and version requests also come back as errors; check
/// `clap::Error::use_stderr` to tell them apart.
pub fn parse_args<I, T>(args: I) -> Result<ReportConfig, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Ok(ReportArgs::try_parse_from(args)?.into_config())
}

/// Log filter from `SALES_LOG`, `warn` when unset or unparsable
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE))
}
