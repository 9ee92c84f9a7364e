use std::collections::HashMap;

use crate::catalog::Catalog;

/// Month-dependent demand multipliers, derived once from the catalog's
/// category definitions. Pure lookup; consumes no RNG state.
#[derive(Clone, Debug)]
pub struct SeasonalityModel {
    by_category: HashMap<u32, (Vec<u32>, f64)>,
}

impl SeasonalityModel {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let by_category = catalog
            .categories
            .iter()
            .map(|c| (c.id, (c.peak_months.clone(), c.seasonal_multiplier)))
            .collect();
        Self { by_category }
    }

    /// The category's multiplier during its peak months, 1.0 everywhere else.
    /// Unknown category ids also map to 1.0.
    pub fn multiplier(&self, category_id: u32, month: u32) -> f64 {
        match self.by_category.get(&category_id) {
            Some((peaks, multiplier)) if peaks.contains(&month) => *multiplier,
            _ => 1.0,
        }
    }
}
