use std::fmt;

use serde::Serialize;

use crate::error::{Result, WizardError};

/// Plan length offered by the duration step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanDays {
    One,
    Five,
    Seven,
}

impl PlanDays {
    pub const ALL: [PlanDays; 3] = [PlanDays::One, PlanDays::Five, PlanDays::Seven];

    /// Number of days as sent to the generator.
    pub fn count(self) -> u32 {
        match self {
            PlanDays::One => 1,
            PlanDays::Five => 5,
            PlanDays::Seven => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlanDays::One => "1 Day",
            PlanDays::Five => "5 Days",
            PlanDays::Seven => "7 Days",
        }
    }
}

/// Health conditions the generator is asked to account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthCondition {
    Diabetes,
    HeartDisease,
    HighBloodPressure,
    GlutenFree,
    LactoseIntolerant,
}

impl HealthCondition {
    pub const ALL: [HealthCondition; 5] = [
        HealthCondition::Diabetes,
        HealthCondition::HeartDisease,
        HealthCondition::HighBloodPressure,
        HealthCondition::GlutenFree,
        HealthCondition::LactoseIntolerant,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HealthCondition::Diabetes => "Diabetes",
            HealthCondition::HeartDisease => "Heart Disease",
            HealthCondition::HighBloodPressure => "High Blood Pressure",
            HealthCondition::GlutenFree => "Gluten Free",
            HealthCondition::LactoseIntolerant => "Lactose Intolerant",
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cuisines offered by the preferences step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cuisine {
    Italian,
    Indian,
    Chinese,
    Mexican,
    Mediterranean,
    Japanese,
    American,
}

impl Cuisine {
    pub const ALL: [Cuisine; 7] = [
        Cuisine::Italian,
        Cuisine::Indian,
        Cuisine::Chinese,
        Cuisine::Mexican,
        Cuisine::Mediterranean,
        Cuisine::Japanese,
        Cuisine::American,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Cuisine::Italian => "Italian",
            Cuisine::Indian => "Indian",
            Cuisine::Chinese => "Chinese",
            Cuisine::Mexican => "Mexican",
            Cuisine::Mediterranean => "Mediterranean",
            Cuisine::Japanese => "Japanese",
            Cuisine::American => "American",
        }
    }
}

impl fmt::Display for Cuisine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A selected cuisine and its share of the plan, in whole percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuisineWeight {
    pub cuisine: Cuisine,
    pub percentage: u32,
}

/// Everything the wizard collects before submission.
///
/// `plan_days` and `daily_calories` start unset so the step validators can
/// distinguish "never answered" from an out-of-range answer. Cuisine weights
/// keep insertion order; redistribution relies on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceRecord {
    pub plan_days: Option<PlanDays>,
    pub daily_calories: Option<u32>,
    pub health_conditions: Vec<HealthCondition>,
    pub cuisine_weights: Vec<CuisineWeight>,
    pub include_cheat_meal: bool,
}

impl PreferenceRecord {
    /// Add or remove a health condition, keeping selection order.
    pub fn set_health_condition(&mut self, condition: HealthCondition, selected: bool) {
        if selected {
            if !self.health_conditions.contains(&condition) {
                self.health_conditions.push(condition);
            }
        } else {
            self.health_conditions.retain(|c| *c != condition);
        }
    }

    pub fn has_cuisine(&self, cuisine: Cuisine) -> bool {
        self.cuisine_weights.iter().any(|w| w.cuisine == cuisine)
    }

    /// Sum of all cuisine percentages (100 unless a manual edit drifted it).
    pub fn cuisine_percentage_sum(&self) -> u32 {
        self.cuisine_weights.iter().map(|w| w.percentage).sum()
    }

    /// Build the wire-format request for the generator service.
    ///
    /// Fails if a required field was never set; step validation rules this
    /// out before submission is reachable.
    pub fn to_request(&self) -> Result<PlanRequest> {
        let days = self
            .plan_days
            .ok_or_else(|| WizardError::InvalidInput("number of days is not set".to_string()))?;
        let calories = self
            .daily_calories
            .ok_or_else(|| WizardError::InvalidInput("daily calories is not set".to_string()))?;

        Ok(PlanRequest {
            number_of_days: days.count(),
            daily_calories: calories,
            health_conditions: self
                .health_conditions
                .iter()
                .map(|c| c.name().to_string())
                .collect(),
            cuisine_preferences: self
                .cuisine_weights
                .iter()
                .map(|w| CuisinePreference {
                    name: w.cuisine.name().to_string(),
                    percentage: w.percentage,
                })
                .collect(),
            include_cheat_meal: self.include_cheat_meal,
        })
    }
}

/// JSON body POSTed to the generator endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub number_of_days: u32,
    pub daily_calories: u32,
    pub health_conditions: Vec<String>,
    pub cuisine_preferences: Vec<CuisinePreference>,
    pub include_cheat_meal: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CuisinePreference {
    pub name: String,
    pub percentage: u32,
}
