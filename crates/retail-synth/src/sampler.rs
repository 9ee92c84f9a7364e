use rand::Rng;

use crate::error::{SynthError, SynthResult};

/// Draws one item with probability proportional to its weight.
///
/// Weights are recomputed through `weight_of` on every call, so callers whose
/// weights depend on per-draw state (seasonal product popularity) share this
/// path with callers whose weights are fixed (store economic weights).
/// Consumes exactly one RNG value; ties on the cumulative walk resolve to the
/// first item in input order, which keeps seeded replays stable.
pub fn weighted_draw<'a, T, R, F>(items: &'a [T], weight_of: F, rng: &mut R) -> SynthResult<&'a T>
where
    R: Rng,
    F: Fn(&T) -> f64,
{
    if items.is_empty() {
        return Err(SynthError::EmptyDistribution);
    }

    let mut weights = Vec::with_capacity(items.len());
    let mut total = 0.0;
    for item in items {
        let weight = weight_of(item);
        if !weight.is_finite() || weight < 0.0 {
            return Err(SynthError::InvalidArgument(format!(
                "weights must be finite and non-negative, got {weight}"
            )));
        }
        total += weight;
        weights.push(weight);
    }
    if total <= 0.0 {
        return Err(SynthError::EmptyDistribution);
    }

    let r = rng.gen_range(0.0..total);
    let mut cumulative = 0.0;
    for (item, weight) in items.iter().zip(&weights) {
        cumulative += weight;
        if *weight > 0.0 && r < cumulative {
            return Ok(item);
        }
    }

    // Accumulation error can push r past the last cumulative sum; fall back to
    // the last item that could have been selected.
    items
        .iter()
        .zip(&weights)
        .rev()
        .find(|(_, weight)| **weight > 0.0)
        .map(|(item, _)| item)
        .ok_or(SynthError::EmptyDistribution)
}
