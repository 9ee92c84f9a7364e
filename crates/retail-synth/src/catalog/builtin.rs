//! Built-in seed catalog: ten retail categories, their products, a pool of
//! world cities weighted by country GDP, and a default campaign calendar.
//! The figures are illustrative, not calibrated to real market data.

use chrono::NaiveDate;
use rand::Rng;

use super::{Campaign, Catalog, Category, Product, Store};
use crate::error::SynthResult;
use crate::sampler::weighted_draw;

pub const DEFAULT_STORE_COUNT: usize = 45;

/// Economic weight applied to stores in countries missing from the GDP table.
pub const DEFAULT_ECONOMIC_WEIGHT: f64 = 1.0;

// Approximate GDP in trillions, used as the store-selection bias.
const COUNTRY_WEIGHTS: [(&str, f64); 15] = [
    ("USA", 21.4),
    ("China", 14.3),
    ("Japan", 5.0),
    ("Germany", 3.8),
    ("India", 2.9),
    ("UK", 2.7),
    ("France", 2.6),
    ("Italy", 2.0),
    ("Canada", 1.6),
    ("South Korea", 1.6),
    ("Russia", 1.5),
    ("Brazil", 1.4),
    ("Australia", 1.4),
    ("Spain", 1.3),
    ("Mexico", 1.2),
];

const COUNTRY_CONTINENTS: [(&str, &str); 15] = [
    ("USA", "North America"),
    ("China", "Asia"),
    ("Japan", "Asia"),
    ("Germany", "Europe"),
    ("India", "Asia"),
    ("UK", "Europe"),
    ("France", "Europe"),
    ("Italy", "Europe"),
    ("Canada", "North America"),
    ("South Korea", "Asia"),
    ("Russia", "Europe"),
    ("Brazil", "South America"),
    ("Australia", "Australia"),
    ("Spain", "Europe"),
    ("Mexico", "North America"),
];

const CITY_POOL: [(&str, &[(&str, &str)]); 15] = [
    (
        "USA",
        &[
            ("New York", "NY"),
            ("Los Angeles", "CA"),
            ("Chicago", "IL"),
            ("Houston", "TX"),
            ("Phoenix", "AZ"),
        ],
    ),
    (
        "China",
        &[
            ("Beijing", "Beijing"),
            ("Shanghai", "Shanghai"),
            ("Guangzhou", "Guangdong"),
            ("Shenzhen", "Guangdong"),
            ("Chengdu", "Sichuan"),
        ],
    ),
    (
        "Japan",
        &[
            ("Tokyo", "Tokyo"),
            ("Osaka", "Osaka"),
            ("Nagoya", "Aichi"),
            ("Fukuoka", "Fukuoka"),
        ],
    ),
    (
        "Germany",
        &[
            ("Berlin", "Berlin"),
            ("Munich", "Bavaria"),
            ("Frankfurt", "Hesse"),
        ],
    ),
    (
        "India",
        &[
            ("Mumbai", "Maharashtra"),
            ("New Delhi", "Delhi"),
            ("Bengaluru", "Karnataka"),
            ("Chennai", "Tamil Nadu"),
        ],
    ),
    (
        "UK",
        &[
            ("London", "England"),
            ("Manchester", "England"),
            ("Edinburgh", "Scotland"),
        ],
    ),
    (
        "France",
        &[
            ("Paris", "Ile-de-France"),
            ("Lyon", "Auvergne-Rhone-Alpes"),
            ("Marseille", "Provence-Alpes-Cote d'Azur"),
        ],
    ),
    (
        "Italy",
        &[("Rome", "Lazio"), ("Milan", "Lombardy"), ("Naples", "Campania")],
    ),
    (
        "Canada",
        &[("Toronto", "ON"), ("Vancouver", "BC"), ("Montreal", "QC")],
    ),
    (
        "South Korea",
        &[("Seoul", "Seoul"), ("Busan", "Busan"), ("Incheon", "Incheon")],
    ),
    (
        "Russia",
        &[("Moscow", "Moscow"), ("Saint Petersburg", "Northwestern")],
    ),
    (
        "Brazil",
        &[
            ("Sao Paulo", "Sao Paulo"),
            ("Rio de Janeiro", "Rio de Janeiro"),
            ("Brasilia", "Federal District"),
        ],
    ),
    (
        "Australia",
        &[("Sydney", "NSW"), ("Melbourne", "VIC"), ("Brisbane", "QLD")],
    ),
    (
        "Spain",
        &[
            ("Madrid", "Community of Madrid"),
            ("Barcelona", "Catalonia"),
            ("Valencia", "Valencia"),
        ],
    ),
    (
        "Mexico",
        &[
            ("Mexico City", "Distrito Federal"),
            ("Guadalajara", "Jalisco"),
            ("Monterrey", "Nuevo Leon"),
        ],
    ),
];

// (name, peak months, multiplier)
const CATEGORY_ROWS: [(&str, &[u32], f64); 10] = [
    ("Electronics", &[11, 12], 2.0),
    ("Home & Kitchen", &[4, 5], 1.5),
    ("Clothing", &[6, 7, 12], 1.8),
    ("Sports & Outdoors", &[5, 6, 7], 1.6),
    ("Beauty & Personal Care", &[11, 12], 1.7),
    ("Books", &[11, 12], 1.4),
    ("Toys & Games", &[11, 12], 2.2),
    ("Automotive", &[7, 8], 1.3),
    ("Grocery", &[], 1.0),
    ("Office Products", &[8, 9], 1.2),
];

// (name, category index into CATEGORY_ROWS, min price, max price, popularity)
const PRODUCT_ROWS: [(&str, usize, f64, f64, f64); 50] = [
    ("Smartphone", 0, 300.0, 1200.0, 85.0),
    ("Laptop", 0, 500.0, 2000.0, 70.0),
    ("Wireless Headphones", 0, 50.0, 300.0, 90.0),
    ("Smartwatch", 0, 80.0, 400.0, 55.0),
    ("Gaming Console", 0, 200.0, 600.0, 60.0),
    ("Blender", 1, 20.0, 100.0, 40.0),
    ("Microwave Oven", 1, 50.0, 200.0, 35.0),
    ("Vacuum Cleaner", 1, 60.0, 300.0, 45.0),
    ("Air Purifier", 1, 50.0, 400.0, 25.0),
    ("Coffee Maker", 1, 20.0, 200.0, 65.0),
    ("T-Shirt", 2, 5.0, 30.0, 95.0),
    ("Jeans", 2, 20.0, 80.0, 75.0),
    ("Jacket", 2, 40.0, 200.0, 50.0),
    ("Sneakers", 2, 30.0, 150.0, 80.0),
    ("Dress", 2, 25.0, 150.0, 55.0),
    ("Running Shoes", 3, 40.0, 120.0, 70.0),
    ("Yoga Mat", 3, 15.0, 60.0, 50.0),
    ("Tennis Racket", 3, 50.0, 250.0, 20.0),
    ("Football", 3, 10.0, 60.0, 45.0),
    ("Camping Tent", 3, 50.0, 300.0, 25.0),
    ("Shampoo", 4, 5.0, 20.0, 90.0),
    ("Facial Cleanser", 4, 5.0, 30.0, 60.0),
    ("Perfume", 4, 20.0, 150.0, 40.0),
    ("Makeup Palette", 4, 10.0, 80.0, 55.0),
    ("Electric Toothbrush", 4, 30.0, 150.0, 35.0),
    ("Mystery Novel", 5, 5.0, 30.0, 65.0),
    ("Science Fiction Novel", 5, 5.0, 35.0, 55.0),
    ("Cookbook", 5, 10.0, 40.0, 40.0),
    ("Self-Help Book", 5, 5.0, 25.0, 50.0),
    ("Biography", 5, 8.0, 45.0, 30.0),
    ("Board Game", 6, 15.0, 70.0, 60.0),
    ("Action Figure", 6, 10.0, 40.0, 70.0),
    ("Doll", 6, 8.0, 40.0, 55.0),
    ("Building Blocks", 6, 15.0, 60.0, 65.0),
    ("Card Game", 6, 5.0, 30.0, 45.0),
    ("Car Air Freshener", 7, 2.0, 10.0, 50.0),
    ("Motor Oil", 7, 10.0, 40.0, 45.0),
    ("Car Battery", 7, 40.0, 120.0, 20.0),
    ("Windshield Wipers", 7, 5.0, 25.0, 35.0),
    ("Car Tires", 7, 50.0, 200.0, 25.0),
    ("Milk", 8, 1.0, 3.0, 95.0),
    ("Bread", 8, 1.0, 4.0, 95.0),
    ("Organic Eggs", 8, 2.0, 6.0, 85.0),
    ("Cheese", 8, 2.0, 10.0, 75.0),
    ("Cereal", 8, 2.0, 6.0, 70.0),
    ("Printer Paper", 9, 3.0, 10.0, 45.0),
    ("Ballpoint Pens", 9, 1.0, 8.0, 60.0),
    ("Notebook", 9, 2.0, 10.0, 65.0),
    ("Stapler", 9, 4.0, 15.0, 25.0),
    ("Desk Organizer", 9, 5.0, 25.0, 30.0),
];

pub fn builtin_categories() -> Vec<Category> {
    CATEGORY_ROWS
        .iter()
        .enumerate()
        .map(|(idx, (name, peaks, multiplier))| Category {
            id: idx as u32 + 1,
            name: (*name).to_string(),
            peak_months: peaks.to_vec(),
            seasonal_multiplier: *multiplier,
        })
        .collect()
}

pub fn builtin_products() -> Vec<Product> {
    PRODUCT_ROWS
        .iter()
        .enumerate()
        .map(|(idx, (name, cat_idx, min, max, popularity))| Product {
            id: idx as u32 + 1,
            name: (*name).to_string(),
            category_id: *cat_idx as u32 + 1,
            min_price: *min,
            max_price: *max,
            base_popularity: *popularity,
        })
        .collect()
}

pub fn builtin_campaigns() -> Vec<Campaign> {
    fn date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day)
    }

    vec![
        Campaign {
            name: "10% off Black Friday".to_string(),
            discount: 0.10,
            weight: 2.0,
            starts: date(2024, 11, 24),
            ends: date(2024, 12, 2),
        },
        Campaign {
            name: "Summer Sale".to_string(),
            discount: 0.15,
            weight: 1.0,
            starts: date(2024, 6, 1),
            ends: date(2024, 6, 30),
        },
        Campaign {
            name: "Buy One Get One".to_string(),
            discount: 0.0,
            weight: 1.0,
            starts: None,
            ends: None,
        },
        Campaign {
            name: "Holiday Discount".to_string(),
            discount: 0.20,
            weight: 1.5,
            starts: date(2024, 12, 15),
            ends: date(2024, 12, 31),
        },
        Campaign {
            name: "Clearance Sale".to_string(),
            discount: 0.30,
            weight: 0.5,
            starts: None,
            ends: None,
        },
    ]
}

pub fn country_weight(country: &str) -> f64 {
    COUNTRY_WEIGHTS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, weight)| *weight)
        .unwrap_or(DEFAULT_ECONOMIC_WEIGHT)
}

fn continent_of(country: &str) -> &'static str {
    COUNTRY_CONTINENTS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, continent)| *continent)
        .unwrap_or("Unknown")
}

/// Places `count` stores across the city pool, biased toward larger economies.
/// Store names are minted as "<city> Store #<n>" and kept unique.
pub fn synthesize_stores<R: Rng>(count: usize, rng: &mut R) -> SynthResult<Vec<Store>> {
    let mut stores: Vec<Store> = Vec::with_capacity(count);

    while stores.len() < count {
        let (country, _) = weighted_draw(&COUNTRY_WEIGHTS, |(_, w)| *w, rng)?;
        let cities = CITY_POOL
            .iter()
            .find(|(name, _)| name == country)
            .map(|(_, cities)| *cities)
            .unwrap_or(&[("Unknown City", "Unknown State")]);
        let (city, state) = cities[rng.gen_range(0..cities.len())];

        let name = loop {
            let candidate = format!("{city} Store #{}", rng.gen_range(1..10_000));
            if !stores.iter().any(|s| s.name == candidate) {
                break candidate;
            }
        };

        stores.push(Store {
            name,
            city: city.to_string(),
            state: state.to_string(),
            country: (*country).to_string(),
            continent: continent_of(country).to_string(),
            economic_weight: country_weight(country),
        });
    }

    Ok(stores)
}

/// Full seed catalog; store placement consumes RNG state, so callers that need
/// a reproducible catalog pass a seeded generator.
pub fn builtin_catalog<R: Rng>(store_count: usize, rng: &mut R) -> SynthResult<Catalog> {
    let catalog = Catalog {
        categories: builtin_categories(),
        products: builtin_products(),
        stores: synthesize_stores(store_count, rng)?,
        campaigns: builtin_campaigns(),
    };
    catalog.validate()?;
    Ok(catalog)
}
