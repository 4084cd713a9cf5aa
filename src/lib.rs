//! Per-seller sales performance analytics.
//!
//! A dataset of sellers, products and purchase records goes through one
//! synchronous pass: validation, indexing, accumulation, ranking by profit
//! and projection into rounded [`SellerResult`](domain::SellerResult)s.
//! Profit and bonus formulas are injected through
//! [`AnalysisOptions`](engine::AnalysisOptions).

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod prelude;
