use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::MealPlan;

/// Load a previously saved meal plan from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(&path)?;
    let plan: MealPlan = serde_json::from_str(&content)?;
    debug!(path = %path.as_ref().display(), days = plan.days.len(), "plan loaded");
    Ok(plan)
}

/// Save a generated meal plan to a JSON file, pretty-printed.
pub fn save_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(&path, json)?;
    debug!(path = %path.as_ref().display(), days = plan.days.len(), "plan saved");
    Ok(())
}
