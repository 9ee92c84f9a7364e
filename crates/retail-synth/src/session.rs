use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::SessionConfig;
use crate::error::SynthResult;
use crate::generator::RecordGenerator;
use crate::record::{round_cents, SalesRecord};

/// One end-to-end generation run: validates its inputs up front, then yields
/// exactly `config.count` records lazily so callers can stream them to a
/// writer without materializing the dataset. The first error fuses the
/// iterator; there is no partial-failure recovery in synthetic generation.
pub struct GenerationSession<'a> {
    generator: RecordGenerator<'a>,
    rng: ChaCha8Rng,
    remaining: u64,
}

impl<'a> GenerationSession<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a SessionConfig) -> SynthResult<Self> {
        catalog.validate()?;
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            generator: RecordGenerator::new(catalog, config)?,
            rng,
            remaining: config.count,
        })
    }

    /// Drains the session into a vector. Tests and small runs use this; the
    /// CLI streams through the iterator instead.
    pub fn run(self) -> SynthResult<Vec<SalesRecord>> {
        self.collect()
    }
}

impl Iterator for GenerationSession<'_> {
    type Item = SynthResult<SalesRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let drawn = self.generator.generate_one(&mut self.rng);
        self.remaining = if drawn.is_ok() { self.remaining - 1 } else { 0 };
        Some(drawn)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

/// Summary counts for one completed session, written alongside the dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub schema_version: u32,
    pub seed: Option<u64>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub categories: usize,
    pub products: usize,
    pub stores: usize,
    pub records: u64,
    pub campaign_records: u64,
    pub total_revenue: f64,
}

impl GenerationSummary {
    pub fn new(catalog: &Catalog, config: &SessionConfig) -> Self {
        Self {
            schema_version: 1,
            seed: config.seed,
            start_date: config.start_date,
            end_date: config.end_date,
            categories: catalog.categories.len(),
            products: catalog.products.len(),
            stores: catalog.stores.len(),
            records: 0,
            campaign_records: 0,
            total_revenue: 0.0,
        }
    }

    pub fn observe(&mut self, record: &SalesRecord) {
        self.records += 1;
        if !record.campaign.is_empty() {
            self.campaign_records += 1;
        }
        self.total_revenue = round_cents(self.total_revenue + record.revenue);
    }
}
