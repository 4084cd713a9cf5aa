/// Default length of a seller's best-selling product list
pub const DEFAULT_TOP_PRODUCTS: usize = 10;

/// Tunables for projecting results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Maximum number of entries in each seller's top product list
    pub top_products_limit: usize,
    /// Attach a per-SKU revenue figure to each top product entry
    pub include_product_revenue: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_products_limit: DEFAULT_TOP_PRODUCTS,
            include_product_revenue: false,
        }
    }
}

impl AnalysisConfig {
    pub fn with_top_products_limit(mut self, limit: usize) -> Self {
        self.top_products_limit = limit;
        self
    }

    pub fn with_product_revenue(mut self, enabled: bool) -> Self {
        self.include_product_revenue = enabled;
        self
    }
}
