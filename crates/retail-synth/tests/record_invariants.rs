use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use retail_synth::catalog::builtin::builtin_catalog;
use retail_synth::config::{QuantityRange, SessionConfig};
use retail_synth::record::round_cents;
use retail_synth::session::GenerationSession;

#[test]
fn every_record_satisfies_the_core_invariants() {
    let mut catalog_rng = ChaCha8Rng::seed_from_u64(11);
    let catalog = builtin_catalog(30, &mut catalog_rng).expect("builtin catalog");
    let config = SessionConfig {
        count: 20_000,
        seed: Some(11),
        ..SessionConfig::default()
    };

    let product_names: HashSet<&str> =
        catalog.products.iter().map(|p| p.name.as_str()).collect();
    let store_names: HashSet<&str> = catalog.stores.iter().map(|s| s.name.as_str()).collect();

    let records = GenerationSession::new(&catalog, &config)
        .expect("session")
        .run()
        .expect("run");
    assert_eq!(records.len(), 20_000);

    for record in &records {
        assert!(record.quantity >= 1);
        assert!(record.unit_price > 0.0);
        assert_eq!(
            record.revenue,
            round_cents(record.unit_price * f64::from(record.quantity)),
            "revenue mismatch for {record:?}"
        );
        assert!(
            product_names.contains(record.product_name.as_str()),
            "unknown product '{}'",
            record.product_name
        );
        assert!(
            store_names.contains(record.store_name.as_str()),
            "unknown store '{}'",
            record.store_name
        );
        assert!(record.date >= config.start_date && record.date <= config.end_date);
    }
}

#[test]
fn prices_stay_inside_the_product_range_without_campaigns() {
    let mut catalog_rng = ChaCha8Rng::seed_from_u64(23);
    let mut catalog = builtin_catalog(10, &mut catalog_rng).expect("builtin catalog");
    catalog.campaigns.clear();
    let config = SessionConfig {
        count: 10_000,
        seed: Some(23),
        ..SessionConfig::default()
    };

    let records = GenerationSession::new(&catalog, &config)
        .expect("session")
        .run()
        .expect("run");

    for record in &records {
        let product = catalog
            .products
            .iter()
            .find(|p| p.name == record.product_name)
            .expect("product resolves");
        assert!(
            record.unit_price >= product.min_price && record.unit_price <= product.max_price,
            "price {} outside [{}, {}] for '{}'",
            record.unit_price,
            product.min_price,
            product.max_price,
            product.name
        );
        assert!(record.campaign.is_empty());
    }
}

#[test]
fn quantity_overrides_bind_per_category() {
    let mut catalog_rng = ChaCha8Rng::seed_from_u64(31);
    let catalog = builtin_catalog(10, &mut catalog_rng).expect("builtin catalog");
    // Grocery is category 9 in the seed catalog; give it a wider band.
    let config = SessionConfig {
        count: 20_000,
        seed: Some(31),
        quantity: QuantityRange { min: 1, max: 3 },
        quantity_overrides: [(9u32, QuantityRange { min: 5, max: 12 })].into_iter().collect(),
        ..SessionConfig::default()
    };

    let grocery_products: HashSet<&str> = catalog
        .products
        .iter()
        .filter(|p| p.category_id == 9)
        .map(|p| p.name.as_str())
        .collect();

    let records = GenerationSession::new(&catalog, &config)
        .expect("session")
        .run()
        .expect("run");

    for record in &records {
        if grocery_products.contains(record.product_name.as_str()) {
            assert!((5..=12).contains(&record.quantity), "grocery qty {}", record.quantity);
        } else {
            assert!((1..=3).contains(&record.quantity), "default qty {}", record.quantity);
        }
    }
}

#[test]
fn hours_window_bounds_the_drawn_time() {
    let mut catalog_rng = ChaCha8Rng::seed_from_u64(41);
    let catalog = builtin_catalog(10, &mut catalog_rng).expect("builtin catalog");
    let config = SessionConfig {
        count: 5_000,
        seed: Some(41),
        hours: retail_synth::config::HoursWindow { open: 8, close: 20 },
        ..SessionConfig::default()
    };

    let records = GenerationSession::new(&catalog, &config)
        .expect("session")
        .run()
        .expect("run");

    for record in &records {
        let hour = record.time.format("%H").to_string().parse::<u32>().expect("hour");
        assert!((8..=20).contains(&hour), "hour {hour} outside open hours");
    }
}
