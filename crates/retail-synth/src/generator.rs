use chrono::{Datelike, NaiveTime};
use rand::Rng;

use crate::campaign::CampaignAssigner;
use crate::catalog::Catalog;
use crate::config::SessionConfig;
use crate::error::{SynthError, SynthResult};
use crate::record::{round_cents, SalesRecord};
use crate::sampler::weighted_draw;
use crate::seasonality::SeasonalityModel;

/// Draws one fully-assembled sale per call. All randomness for a record is
/// consumed in a fixed order (date, time, product, store, price, quantity,
/// campaign), so a seeded RNG replays the same sequence bit for bit.
pub struct RecordGenerator<'a> {
    catalog: &'a Catalog,
    config: &'a SessionConfig,
    seasonality: SeasonalityModel,
    assigner: CampaignAssigner<'a>,
    span_days: i64,
}

impl<'a> RecordGenerator<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a SessionConfig) -> SynthResult<Self> {
        if catalog.products.is_empty() {
            return Err(SynthError::EmptyCatalog(
                "no products to draw from".to_string(),
            ));
        }
        if catalog.stores.is_empty() {
            return Err(SynthError::EmptyCatalog(
                "no stores to draw from".to_string(),
            ));
        }
        Ok(Self {
            catalog,
            config,
            seasonality: SeasonalityModel::from_catalog(catalog),
            assigner: CampaignAssigner::new(&catalog.campaigns, &config.campaigns),
            span_days: (config.end_date - config.start_date).num_days(),
        })
    }

    pub fn generate_one<R: Rng>(&self, rng: &mut R) -> SynthResult<SalesRecord> {
        let date = self.config.start_date + chrono::Duration::days(rng.gen_range(0..=self.span_days));
        let hours = self.config.hours;
        let (hour, minute, second) = (
            rng.gen_range(hours.open..=hours.close),
            rng.gen_range(0..60u32),
            rng.gen_range(0..60u32),
        );
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            SynthError::InvalidRange(format!("time {hour}:{minute}:{second} out of range"))
        })?;

        // Product weights fold the month's seasonality into base popularity,
        // so they cannot be cached across records; store weights are fixed.
        let month = date.month();
        let product = weighted_draw(
            &self.catalog.products,
            |p| p.base_popularity * self.seasonality.multiplier(p.category_id, month),
            rng,
        )?;
        let store = weighted_draw(&self.catalog.stores, |s| s.economic_weight, rng)?;

        let mut unit_price = round_cents(rng.gen_range(product.min_price..=product.max_price));

        let quantity_range = self.config.quantity_for_category(product.category_id);
        let quantity = rng.gen_range(quantity_range.min..=quantity_range.max);

        let campaign = self.assigner.maybe_apply(date, rng)?;
        if let Some(campaign) = campaign {
            // A discount may push the price below the product's floor, but
            // never to zero.
            unit_price = round_cents(unit_price * (1.0 - campaign.discount)).max(0.01);
        }

        let revenue = round_cents(unit_price * f64::from(quantity));

        Ok(SalesRecord {
            date,
            time,
            product_name: product.name.clone(),
            unit_price,
            quantity,
            revenue,
            store_name: store.name.clone(),
            campaign: campaign.map(|c| c.name.clone()).unwrap_or_default(),
        })
    }
}
