use std::collections::BTreeMap;

use crate::models::PreferenceRecord;

/// Inclusive bounds for the daily calorie target.
pub const MIN_DAILY_CALORIES: u32 = 1000;
pub const MAX_DAILY_CALORIES: u32 = 5000;

/// Fields that can fail step validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    NumberOfDays,
    DailyCalories,
    CuisinePreferences,
}

impl Field {
    /// Form field name the error is keyed by.
    pub fn key(self) -> &'static str {
        match self {
            Field::NumberOfDays => "numberOfDays",
            Field::DailyCalories => "dailyCalories",
            Field::CuisinePreferences => "cuisinePreferences",
        }
    }
}

/// Validation failures for the current step; empty means the step may advance.
pub type StepErrors = BTreeMap<Field, String>;

/// Validate one wizard step against the record.
///
/// Pure: no I/O, no mutation. Steps 2 (health conditions) and 4 (additional
/// options) are optional and always pass, as do unknown positions.
pub fn validate_step(step: usize, record: &PreferenceRecord) -> StepErrors {
    let mut errors = StepErrors::new();

    match step {
        0 => {
            if record.plan_days.is_none() {
                errors.insert(
                    Field::NumberOfDays,
                    "Please select number of days".to_string(),
                );
            }
        }
        1 => match record.daily_calories {
            None => {
                errors.insert(
                    Field::DailyCalories,
                    "Please enter daily calorie goal".to_string(),
                );
            }
            Some(calories) if !(MIN_DAILY_CALORIES..=MAX_DAILY_CALORIES).contains(&calories) => {
                errors.insert(
                    Field::DailyCalories,
                    "Calories must be between 1000 and 5000".to_string(),
                );
            }
            Some(_) => {}
        },
        3 => {
            if record.cuisine_weights.is_empty() {
                errors.insert(
                    Field::CuisinePreferences,
                    "Please select at least one cuisine".to_string(),
                );
            }
        }
        _ => {}
    }

    errors
}
