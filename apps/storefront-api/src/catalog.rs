//! Built-in product catalogue served by `GET /api/products`.

use storefront_core::ProductRecord;

const ENTRIES: [(u64, &str, f64); 10] = [
    (1, "High-performance laptop", 35000.0),
    (2, "Ergonomic wireless mouse", 800.0),
    (3, "RGB mechanical keyboard", 2500.0),
    (4, "27\" 4K UHD monitor", 7000.0),
    (5, "USB-C multiport adapter", 1200.0),
    (6, "Noise-cancelling headphones", 4000.0),
    (7, "Smartwatch", 9500.0),
    (8, "Power bank", 600.0),
    (9, "External hard drive (2TB)", 2800.0),
    (10, "Webcam", 1500.0),
];

/// The catalogue, in id order.
pub fn default_catalog() -> Vec<ProductRecord> {
    ENTRIES
        .iter()
        .map(|&(id, name, price)| ProductRecord {
            id: Some(id),
            name: name.to_string(),
            price,
        })
        .collect()
}
