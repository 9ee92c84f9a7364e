use chrono::{Datelike, NaiveDate};
use rand::Rng;

use crate::catalog::Campaign;
use crate::config::CampaignConfig;
use crate::error::SynthResult;
use crate::sampler::weighted_draw;

/// Decides per record whether a promotional campaign applies.
#[derive(Clone, Debug)]
pub struct CampaignAssigner<'a> {
    campaigns: &'a [Campaign],
    config: &'a CampaignConfig,
}

impl<'a> CampaignAssigner<'a> {
    pub fn new(campaigns: &'a [Campaign], config: &'a CampaignConfig) -> Self {
        Self { campaigns, config }
    }

    /// Bernoulli draw at the date's effective probability, then a weighted
    /// selection among campaigns whose window contains the date. The draw
    /// order is fixed so seeded replays stay stable. The probability event
    /// can fire on a date where no campaign is eligible; that is a normal
    /// no-campaign outcome, not an error.
    pub fn maybe_apply<R: Rng>(
        &self,
        date: NaiveDate,
        rng: &mut R,
    ) -> SynthResult<Option<&'a Campaign>> {
        let probability = self.config.probability_for_month(date.month());
        if !rng.gen_bool(probability) {
            return Ok(None);
        }

        let eligible: Vec<&Campaign> = self
            .campaigns
            .iter()
            .filter(|c| c.is_active(date))
            .collect();
        if eligible.is_empty() {
            return Ok(None);
        }

        let picked = weighted_draw(&eligible, |c| c.weight, rng)?;
        Ok(Some(*picked))
    }
}
