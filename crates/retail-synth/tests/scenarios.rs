use chrono::NaiveDate;

use retail_synth::catalog::{Catalog, Category, Product, Store};
use retail_synth::config::SessionConfig;
use retail_synth::error::SynthError;
use retail_synth::record::round_cents;
use retail_synth::session::GenerationSession;

fn single_item_catalog() -> Catalog {
    Catalog {
        categories: vec![Category {
            id: 1,
            name: "Summer Goods".to_string(),
            peak_months: vec![6],
            seasonal_multiplier: 3.0,
        }],
        products: vec![Product {
            id: 1,
            name: "Beach Ball".to_string(),
            category_id: 1,
            min_price: 10.0,
            max_price: 10.0,
            base_popularity: 1.0,
        }],
        stores: vec![Store {
            name: "Boardwalk Store".to_string(),
            city: "Los Angeles".to_string(),
            state: "CA".to_string(),
            country: "USA".to_string(),
            continent: "North America".to_string(),
            economic_weight: 1.0,
        }],
        campaigns: vec![],
    }
}

#[test]
fn degenerate_catalog_pins_every_field_but_quantity() {
    let catalog = single_item_catalog();
    let june_first = NaiveDate::from_ymd_opt(2024, 6, 1).expect("date");
    let config = SessionConfig {
        count: 5,
        seed: Some(1337),
        start_date: june_first,
        end_date: june_first,
        ..SessionConfig::default()
    };

    let records = GenerationSession::new(&catalog, &config)
        .expect("session")
        .run()
        .expect("run");

    assert_eq!(records.len(), 5);
    for record in &records {
        assert_eq!(record.date, june_first);
        assert_eq!(record.product_name, "Beach Ball");
        assert_eq!(record.store_name, "Boardwalk Store");
        assert_eq!(record.unit_price, 10.0);
        assert!(record.campaign.is_empty());
        assert_eq!(record.revenue, round_cents(10.0 * f64::from(record.quantity)));
    }
}

#[test]
fn min_price_equal_to_max_price_has_no_variance() {
    let catalog = single_item_catalog();
    let config = SessionConfig {
        count: 1_000,
        seed: Some(2),
        ..SessionConfig::default()
    };
    let records = GenerationSession::new(&catalog, &config)
        .expect("session")
        .run()
        .expect("run");
    assert!(records.iter().all(|r| r.unit_price == 10.0));
}

#[test]
fn empty_product_catalog_fails_before_any_record() {
    let mut catalog = single_item_catalog();
    catalog.products.clear();
    let config = SessionConfig {
        count: 1,
        seed: Some(1),
        ..SessionConfig::default()
    };
    let err = GenerationSession::new(&catalog, &config).err().expect("must fail");
    assert!(matches!(err, SynthError::EmptyCatalog(_)), "unexpected error: {err}");
}

#[test]
fn empty_store_catalog_fails_before_any_record() {
    let mut catalog = single_item_catalog();
    catalog.stores.clear();
    let config = SessionConfig {
        count: 1,
        seed: Some(1),
        ..SessionConfig::default()
    };
    let err = GenerationSession::new(&catalog, &config).err().expect("must fail");
    assert!(matches!(err, SynthError::EmptyCatalog(_)), "unexpected error: {err}");
}
