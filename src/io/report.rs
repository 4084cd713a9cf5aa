use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use super::error::IoError;
use crate::domain::{SellerResult, TopProduct};

/// Header row of the CSV report
pub const CSV_HEADER: [&str; 8] = [
    "rank",
    "seller_id",
    "name",
    "revenue",
    "profit",
    "sales_count",
    "bonus",
    "top_products",
];

/// Report encodings supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Csv,
}

impl OutputFormat {
    /// Encode results in this format
    pub fn render(&self, results: &[SellerResult]) -> Result<String, IoError> {
        match self {
            Self::Json => write_json(results),
            Self::Csv => write_csv(results),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// One CSV row; money is printed with exactly two decimals
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    rank: usize,
    seller_id: &'a str,
    name: &'a str,
    revenue: String,
    profit: String,
    sales_count: u64,
    bonus: String,
    top_products: String,
}

impl<'a> CsvRow<'a> {
    fn new(rank: usize, result: &'a SellerResult) -> Self {
        Self {
            rank,
            seller_id: &result.seller_id,
            name: &result.name,
            revenue: format!("{:.2}", result.revenue),
            profit: format!("{:.2}", result.profit),
            sales_count: result.sales_count,
            bonus: format!("{:.2}", result.bonus),
            top_products: join_top_products(&result.top_products),
        }
    }
}

/// `sku:quantity` pairs joined by `;`
fn join_top_products(products: &[TopProduct]) -> String {
    products
        .iter()
        .map(|p| format!("{}:{}", p.sku, p.quantity))
        .collect::<Vec<_>>()
        .join(";")
}

/// Pretty-printed JSON array of results
pub fn write_json(results: &[SellerResult]) -> Result<String, IoError> {
    let mut json = serde_json::to_string_pretty(results)?;
    json.push('\n');
    Ok(json)
}

/// CSV report with a header row and one row per seller, ranks starting at 1
pub fn write_csv(results: &[SellerResult]) -> Result<String, IoError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for (index, result) in results.iter().enumerate() {
        writer.serialize(CsvRow::new(index + 1, result))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| IoError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
