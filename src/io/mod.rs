pub mod dataset;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use dataset::{load_dataset_file, load_dataset_str};
pub use error::IoError;
pub use report::{CSV_HEADER, OutputFormat, write_csv, write_json};
