pub mod dataset;
pub mod error;
pub mod money;
pub mod product;
pub mod purchase;
pub mod report;
pub mod seller;

// Re-export commonly used types
pub use dataset::Dataset;
pub use error::DomainError;
pub use money::{discount_factor, line_revenue, round_to_cents};
pub use product::Product;
pub use purchase::{LineItem, PurchaseRecord};
pub use report::{SellerResult, TopProduct};
pub use seller::{ProductSales, Seller, SellerStats};
