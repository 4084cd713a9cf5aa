pub mod cli;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use cli::{CliApp, Writers};
pub use config::{LOG_ENV_VAR, ReportArgs, ReportConfig, log_filter, parse_args};
pub use error::AppError;
