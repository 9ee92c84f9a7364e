use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SynthError, SynthResult};

pub mod builtin;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    /// Calendar months (1..=12) in which demand for this category peaks.
    #[serde(default)]
    pub peak_months: Vec<u32>,
    /// Multiplier applied to product popularity during peak months.
    #[serde(default = "default_multiplier")]
    pub seasonal_multiplier: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category_id: u32,
    pub min_price: f64,
    pub max_price: f64,
    pub base_popularity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub name: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub continent: String,
    pub economic_weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub name: String,
    /// Fraction taken off the unit price; 0 means the campaign only tags the
    /// record without changing the price.
    #[serde(default)]
    pub discount: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(default)]
    pub starts: Option<NaiveDate>,
    #[serde(default)]
    pub ends: Option<NaiveDate>,
}

const fn default_multiplier() -> f64 {
    1.0
}

const fn default_weight() -> f64 {
    1.0
}

impl Campaign {
    /// A campaign with no window is always eligible; a half-open window bounds
    /// only the side it names.
    pub fn is_active(&self, date: NaiveDate) -> bool {
        if let Some(starts) = self.starts {
            if date < starts {
                return false;
            }
        }
        if let Some(ends) = self.ends {
            if date > ends {
                return false;
            }
        }
        true
    }
}

/// The static inputs for one generation session. Built (or loaded) once,
/// validated once, then read-only for the session's lifetime.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub stores: Vec<Store>,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> SynthResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let catalog: Catalog = serde_yaml::from_slice(&bytes).map_err(|error| {
            SynthError::InvalidArgument(format!("invalid catalog '{}': {error}", path.display()))
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn to_yaml(&self) -> SynthResult<String> {
        serde_yaml::to_string(self).map_err(|error| {
            SynthError::InvalidArgument(format!("failed to serialize catalog: {error}"))
        })
    }

    /// Structural checks that must hold before any record is drawn. A catalog
    /// that fails here would fail identically on every retry, so generation
    /// never starts.
    pub fn validate(&self) -> SynthResult<()> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id) {
                return Err(SynthError::InvalidArgument(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
            if category.seasonal_multiplier <= 0.0 {
                return Err(SynthError::InvalidRange(format!(
                    "category '{}' has non-positive seasonal multiplier {}",
                    category.name, category.seasonal_multiplier
                )));
            }
            for month in &category.peak_months {
                if !(1..=12).contains(month) {
                    return Err(SynthError::InvalidRange(format!(
                        "category '{}' has peak month {month} outside 1..=12",
                        category.name
                    )));
                }
            }
        }

        let mut product_ids = HashSet::new();
        for product in &self.products {
            if !product_ids.insert(product.id) {
                return Err(SynthError::InvalidArgument(format!(
                    "duplicate product id {}",
                    product.id
                )));
            }
            if !category_ids.contains(&product.category_id) {
                return Err(SynthError::InvalidArgument(format!(
                    "product '{}' references unknown category {}",
                    product.name, product.category_id
                )));
            }
            if product.min_price <= 0.0 {
                return Err(SynthError::InvalidRange(format!(
                    "product '{}' has non-positive min price {}",
                    product.name, product.min_price
                )));
            }
            if product.min_price > product.max_price {
                return Err(SynthError::InvalidRange(format!(
                    "product '{}' has min price {} above max price {}",
                    product.name, product.min_price, product.max_price
                )));
            }
            if product.base_popularity <= 0.0 {
                return Err(SynthError::InvalidRange(format!(
                    "product '{}' has non-positive popularity {}",
                    product.name, product.base_popularity
                )));
            }
        }

        let mut store_names = HashSet::new();
        for store in &self.stores {
            if !store_names.insert(store.name.as_str()) {
                return Err(SynthError::InvalidArgument(format!(
                    "duplicate store name '{}'",
                    store.name
                )));
            }
            if store.economic_weight <= 0.0 {
                return Err(SynthError::InvalidRange(format!(
                    "store '{}' has non-positive economic weight {}",
                    store.name, store.economic_weight
                )));
            }
        }

        for campaign in &self.campaigns {
            if !(0.0..1.0).contains(&campaign.discount) {
                return Err(SynthError::InvalidRange(format!(
                    "campaign '{}' has discount {} outside [0, 1)",
                    campaign.name, campaign.discount
                )));
            }
            if campaign.weight <= 0.0 {
                return Err(SynthError::InvalidRange(format!(
                    "campaign '{}' has non-positive weight {}",
                    campaign.name, campaign.weight
                )));
            }
            if let (Some(starts), Some(ends)) = (campaign.starts, campaign.ends) {
                if starts > ends {
                    return Err(SynthError::InvalidRange(format!(
                        "campaign '{}' window starts {starts} after it ends {ends}",
                        campaign.name
                    )));
                }
            }
        }

        Ok(())
    }
}
