use sales::prelude::*;

/// Generate a deterministic dataset with the specified parameters
///
/// `unknown_ratio` of the records point at a seller that is not in the
/// seller list, so the skip path is exercised too.
pub fn generate_dataset(
    num_records: usize,
    num_sellers: usize,
    num_products: usize,
    items_per_record: usize,
    unknown_ratio: f64,
) -> Dataset {
    let sellers = (0..num_sellers)
        .map(|i| Seller::new(format!("seller_{i}"), "Seller", i.to_string()))
        .collect();

    let products = (0..num_products)
        .map(|i| {
            let cost = ((i % 200) + 1) as f64;
            Product::new(format!("SKU_{i:05}"), cost, cost * 1.5).with_name(format!("Product {i}"))
        })
        .collect();

    let unknown_every = if unknown_ratio > 0.0 {
        (1.0 / unknown_ratio).round() as usize
    } else {
        usize::MAX
    };

    let records = (0..num_records)
        .map(|i| {
            let seller_id = if i % unknown_every == unknown_every - 1 {
                "seller_unknown".to_string()
            } else {
                format!("seller_{}", i % num_sellers)
            };

            let items = (0..items_per_record)
                .map(|j| {
                    let p = (i * 7 + j * 13) % num_products;
                    let cost = ((p % 200) + 1) as f64;
                    LineItem::new(format!("SKU_{p:05}"), ((i + j) % 5 + 1) as u32, cost * 1.5)
                        .with_discount(((i + j) % 4 * 5) as f64)
                })
                .collect();

            PurchaseRecord::new(seller_id, items)
        })
        .collect();

    Dataset::new(sellers, products, records)
}
