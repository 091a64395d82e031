mod plan;
mod preferences;

pub use plan::{DayPlan, Ingredient, Meal, MealPlan, Nutrition};
pub use preferences::{
    Cuisine, CuisinePreference, CuisineWeight, HealthCondition, PlanDays, PlanRequest,
    PreferenceRecord,
};
