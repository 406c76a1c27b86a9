//! Synthetic e-commerce order data for demos.

use insight_model::{Record, Scalar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Default number of generated rows.
pub const DEFAULT_SAMPLE_ROWS: usize = 150;

const CATEGORIES: [&str; 5] = ["Electronics", "Apparel", "Groceries", "Books", "Home Goods"];

/// Options for [`generate_sample_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    pub rows: usize,
    /// Fixed seed for reproducible output; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SAMPLE_ROWS,
            seed: None,
        }
    }
}

/// Generates order rows with a mix of numeric, categorical, date, and
/// partially missing columns.
pub fn generate_sample_records(options: &SampleOptions) -> Vec<Record> {
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    (0..options.rows)
        .map(|index| sample_order(&mut rng, index))
        .collect()
}

fn sample_order<R: Rng>(rng: &mut R, index: usize) -> Record {
    let mut record = Record::with_capacity(7);
    record.insert("order_id", format!("ORD-{}", 1001 + index));
    record.insert(
        "product_category",
        CATEGORIES[rng.random_range(0..CATEGORIES.len())],
    );
    record.insert("price", format!("{:.2}", rng.random::<f64>() * 200.0 + 10.0));
    record.insert("quantity", Scalar::Number(f64::from(rng.random_range(1..=5u32))));

    // Roughly one rating in ten is left blank.
    let rating = if rng.random_bool(0.9) {
        Scalar::Text(format!("{:.1}", rng.random::<f64>() * 4.0 + 1.0))
    } else {
        Scalar::Missing
    };
    record.insert("customer_rating", rating);

    let month = rng.random_range(1..=12u32);
    let day = rng.random_range(1..=28u32);
    record.insert("order_date", format!("2023-{month:02}-{day:02}"));
    record.insert(
        "is_returned",
        if rng.random_bool(0.15) { "Yes" } else { "No" },
    );
    record
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(rows: usize, seed: u64) -> Vec<Record> {
        generate_sample_records(&SampleOptions {
            rows,
            seed: Some(seed),
        })
    }

    #[test]
    fn shape_and_ids() {
        let records = seeded(DEFAULT_SAMPLE_ROWS, 7);
        assert_eq!(records.len(), 150);
        assert_eq!(
            records[0].keys().collect::<Vec<_>>(),
            vec![
                "order_id",
                "product_category",
                "price",
                "quantity",
                "customer_rating",
                "order_date",
                "is_returned"
            ]
        );
        assert_eq!(records[0].get("order_id"), Some(&Scalar::from("ORD-1001")));
        assert_eq!(records[149].get("order_id"), Some(&Scalar::from("ORD-1150")));
    }

    #[test]
    fn values_stay_in_range() {
        for record in seeded(300, 11) {
            let price: f64 = record.get("price").unwrap().to_string().parse().unwrap();
            assert!((10.0..=210.0).contains(&price));

            let quantity = record.get("quantity").unwrap().as_number().unwrap();
            assert!((1.0..=5.0).contains(&quantity));

            if let Some(Scalar::Text(rating)) = record.get("customer_rating") {
                let rating: f64 = rating.parse().unwrap();
                assert!((1.0..=5.0).contains(&rating));
            }

            let date = record.get("order_date").unwrap().to_string();
            assert!(date.starts_with("2023-") && date.len() == 10);

            let category = record.get("product_category").unwrap().to_string();
            assert!(CATEGORIES.contains(&category.as_str()));
        }
    }

    #[test]
    fn seed_makes_output_reproducible() {
        assert_eq!(seeded(20, 42), seeded(20, 42));
        assert_ne!(seeded(20, 42), seeded(20, 43));
    }

    #[test]
    fn zero_rows() {
        assert!(seeded(0, 1).is_empty());
    }
}
