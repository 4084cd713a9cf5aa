use tracing::debug;

use super::index::{ProductIndex, SellerIndex};
use super::strategy::RevenueStrategy;
use crate::domain::PurchaseRecord;

/// Counts of what the accumulator used and what it skipped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccumulationSummary {
    pub records_processed: usize,
    pub records_skipped: usize,
    pub items_processed: usize,
    pub items_skipped: usize,
}

/// Folds purchase records into per-seller running totals
///
/// Records for unknown sellers are skipped without error, as are line items
/// for unknown SKUs or with a quantity that is not a whole, non-negative
/// number. Nothing is rounded here.
pub struct Accumulator<'a> {
    sellers: SellerIndex,
    products: &'a ProductIndex<'a>,
    revenue: &'a dyn RevenueStrategy,
    summary: AccumulationSummary,
}

impl<'a> Accumulator<'a> {
    pub fn new(
        sellers: SellerIndex,
        products: &'a ProductIndex<'a>,
        revenue: &'a dyn RevenueStrategy,
    ) -> Self {
        Self {
            sellers,
            products,
            revenue,
            summary: AccumulationSummary::default(),
        }
    }

    /// Apply a single purchase record
    pub fn process_record(&mut self, record: &PurchaseRecord) {
        let Some(stats) = self.sellers.get_mut(&record.seller_id) else {
            debug!(seller_id = %record.seller_id, "Skipping purchase for unknown seller");
            self.summary.records_skipped += 1;
            return;
        };

        stats.record_sale();
        self.summary.records_processed += 1;

        for item in &record.items {
            let Some(product) = self.products.get(&item.sku) else {
                debug!(
                    seller_id = %record.seller_id,
                    sku = %item.sku,
                    "Skipping line item for unknown product"
                );
                self.summary.items_skipped += 1;
                continue;
            };
            let Some(units) = item.whole_units() else {
                debug!(
                    seller_id = %record.seller_id,
                    sku = %item.sku,
                    quantity = item.quantity,
                    "Skipping line item without a whole, non-negative quantity"
                );
                self.summary.items_skipped += 1;
                continue;
            };

            stats.add_profit(self.revenue.calculate(record, product));
            stats.add_revenue(item.revenue());
            stats.add_units(&item.sku, units, product.name.as_deref());
            self.summary.items_processed += 1;
        }
    }

    /// Apply every record in order
    pub fn process_all<'r>(&mut self, records: impl IntoIterator<Item = &'r PurchaseRecord>) {
        for record in records {
            self.process_record(record);
        }
    }

    /// Hand back the accumulated index together with the skip counts
    pub fn finish(self) -> (SellerIndex, AccumulationSummary) {
        (self.sellers, self.summary)
    }
}
