use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::error::IoError;
use crate::domain::Dataset;
use crate::engine::AnalysisError;

const REQUIRED_COLLECTIONS: [&str; 3] = ["sellers", "products", "purchase_records"];

impl Dataset {
    /// Build a dataset from parsed JSON, checking its shape first
    ///
    /// Fails with a structure error if the value is not an object, if a
    /// required collection is missing or not an array, or if an element
    /// does not match the expected record shape. Empty collections are left
    /// for the validator.
    pub fn from_json_value(value: Value) -> Result<Self, AnalysisError> {
        let Value::Object(fields) = &value else {
            return Err(AnalysisError::structure("dataset must be a JSON object"));
        };

        for name in REQUIRED_COLLECTIONS {
            match fields.get(name) {
                Some(Value::Array(_)) => {}
                Some(_) => {
                    return Err(AnalysisError::structure(format!(
                        "`{name}` must be an array"
                    )));
                }
                None => {
                    return Err(AnalysisError::structure(format!("`{name}` is missing")));
                }
            }
        }

        serde_json::from_value(value).map_err(|err| AnalysisError::structure(err.to_string()))
    }
}

/// Parse a dataset from JSON text
pub fn load_dataset_str(input: &str) -> Result<Dataset, IoError> {
    let value: Value = serde_json::from_str(input)?;
    Ok(Dataset::from_json_value(value)?)
}

/// Read and parse a dataset from a JSON file
pub async fn load_dataset_file(path: impl AsRef<Path>) -> Result<Dataset, IoError> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await?;
    let dataset = load_dataset_str(&contents)?;

    debug!(
        path = %path.display(),
        sellers = dataset.sellers.len(),
        products = dataset.products.len(),
        purchase_records = dataset.purchase_records.len(),
        "Loaded dataset"
    );

    Ok(dataset)
}
