use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl Default for QuantityRange {
    fn default() -> Self {
        Self { min: 1, max: 10 }
    }
}

/// Hour-of-day window for drawn timestamps, inclusive on both ends. The
/// default covers the full day; a retail profile would narrow it to store
/// opening hours.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HoursWindow {
    pub open: u32,
    pub close: u32,
}

impl Default for HoursWindow {
    fn default() -> Self {
        Self { open: 0, close: 23 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Probability that any given record carries a campaign.
    pub base_probability: f64,
    /// Per-month overrides of the base probability, keyed by month 1..=12.
    #[serde(default)]
    pub monthly: HashMap<u32, f64>,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            base_probability: 0.10,
            monthly: HashMap::new(),
        }
    }
}

impl CampaignConfig {
    pub fn probability_for_month(&self, month: u32) -> f64 {
        self.monthly
            .get(&month)
            .copied()
            .unwrap_or(self.base_probability)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub count: u64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Absent seed means fresh entropy per run, i.e. non-reproducible output.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub campaigns: CampaignConfig,
    #[serde(default)]
    pub quantity: QuantityRange,
    /// Per-category quantity ranges, keyed by category id.
    #[serde(default)]
    pub quantity_overrides: HashMap<u32, QuantityRange>,
    #[serde(default)]
    pub hours: HoursWindow,
    #[serde(default = "default_progress_interval")]
    pub progress_interval: u64,
}

const fn default_progress_interval() -> u64 {
    10_000
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            count: 50_000,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or(NaiveDate::MIN),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MIN),
            seed: None,
            campaigns: CampaignConfig::default(),
            quantity: QuantityRange::default(),
            quantity_overrides: HashMap::new(),
            hours: HoursWindow::default(),
            progress_interval: default_progress_interval(),
        }
    }
}

impl SessionConfig {
    pub fn load(path: impl AsRef<Path>) -> SynthResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let config: SessionConfig = serde_yaml::from_slice(&bytes).map_err(|error| {
            SynthError::InvalidArgument(format!("invalid config '{}': {error}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn quantity_for_category(&self, category_id: u32) -> QuantityRange {
        self.quantity_overrides
            .get(&category_id)
            .copied()
            .unwrap_or(self.quantity)
    }

    pub fn validate(&self) -> SynthResult<()> {
        if self.count == 0 {
            return Err(SynthError::InvalidArgument(
                "record count must be positive".to_string(),
            ));
        }
        if self.start_date > self.end_date {
            return Err(SynthError::InvalidRange(format!(
                "date range starts {} after it ends {}",
                self.start_date, self.end_date
            )));
        }
        if !(0.0..=1.0).contains(&self.campaigns.base_probability) {
            return Err(SynthError::InvalidRange(format!(
                "campaign probability {} outside [0, 1]",
                self.campaigns.base_probability
            )));
        }
        for (month, probability) in &self.campaigns.monthly {
            if !(1..=12).contains(month) {
                return Err(SynthError::InvalidRange(format!(
                    "campaign probability override for month {month} outside 1..=12"
                )));
            }
            if !(0.0..=1.0).contains(probability) {
                return Err(SynthError::InvalidRange(format!(
                    "campaign probability {probability} for month {month} outside [0, 1]"
                )));
            }
        }
        validate_quantity_range("quantity", self.quantity)?;
        for (category_id, range) in &self.quantity_overrides {
            validate_quantity_range(&format!("quantity override for category {category_id}"), *range)?;
        }
        if self.hours.open > self.hours.close || self.hours.close > 23 {
            return Err(SynthError::InvalidRange(format!(
                "hours window {}..={} is not within 0..=23",
                self.hours.open, self.hours.close
            )));
        }
        if self.progress_interval == 0 {
            return Err(SynthError::InvalidArgument(
                "progress interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_quantity_range(label: &str, range: QuantityRange) -> SynthResult<()> {
    if range.min < 1 || range.min > range.max {
        return Err(SynthError::InvalidRange(format!(
            "{label} range {}..={} must satisfy 1 <= min <= max",
            range.min, range.max
        )));
    }
    Ok(())
}
