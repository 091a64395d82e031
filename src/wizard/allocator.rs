use crate::error::{Result, WizardError};
use crate::models::{Cuisine, CuisineWeight};

/// Rebalance `weights` so the percentages sum to exactly 100.
///
/// Every entry gets `floor(100 / n)`; the rounding remainder goes to the last
/// entry in insertion order. No-op on an empty slice.
pub fn redistribute(weights: &mut [CuisineWeight]) {
    let count = weights.len() as u32;
    if count == 0 {
        return;
    }

    let share = 100 / count;
    let last = weights.len() - 1;
    for weight in &mut weights[..last] {
        weight.percentage = share;
    }
    weights[last].percentage = 100 - share * (count - 1);
}

/// Select or deselect a cuisine, rebalancing all remaining entries.
///
/// Selecting an already-present cuisine or deselecting an absent one still
/// triggers a redistribution, which repairs any drift left by manual edits.
pub fn toggle_cuisine(weights: &mut Vec<CuisineWeight>, cuisine: Cuisine, selected: bool) {
    if selected {
        if !weights.iter().any(|w| w.cuisine == cuisine) {
            weights.push(CuisineWeight {
                cuisine,
                percentage: 0,
            });
        }
    } else {
        weights.retain(|w| w.cuisine != cuisine);
    }

    redistribute(weights);
}

/// Overwrite one cuisine's percentage without touching its siblings.
///
/// `raw` is parsed as a non-negative integer. The sum is allowed to drift
/// from 100 until the next toggle rebalances; manual edits are taken at face
/// value.
pub fn set_cuisine_percentage(
    weights: &mut [CuisineWeight],
    cuisine: Cuisine,
    raw: &str,
) -> Result<()> {
    let value: u32 = raw
        .trim()
        .parse()
        .map_err(|_| WizardError::InvalidInput(format!("Invalid percentage: '{}'", raw)))?;

    let weight = weights
        .iter_mut()
        .find(|w| w.cuisine == cuisine)
        .ok_or_else(|| WizardError::InvalidInput(format!("{} is not selected", cuisine)))?;

    weight.percentage = value;
    Ok(())
}
