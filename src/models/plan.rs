use serde::{Deserialize, Serialize};

/// A generated meal plan as returned by the generator service.
///
/// Treated as opaque result data: rendered and exported, never validated or
/// corrected on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(rename = "meal_plan")]
    pub days: Vec<DayPlan>,

    /// Generation time in seconds, reported by the service.
    #[serde(default)]
    pub generation_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: u32,
    pub meals: Vec<Meal>,
    pub total_calories: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    /// Meal slot, e.g. "breakfast", "lunch", "dinner".
    #[serde(rename = "type")]
    pub meal_type: String,

    pub name: String,
    pub cuisine: String,
    pub calories: f64,
    pub nutrition: Nutrition,

    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub recipe_steps: Vec<String>,
}

/// Macro figures as formatted by the service ("30g" style strings).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub protein: String,
    pub carbs: String,
    pub fat: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub amount: String,
}

impl MealPlan {
    /// Sum of the per-day total-calories figures.
    pub fn total_calories(&self) -> f64 {
        self.days.iter().map(|d| d.total_calories).sum()
    }

    /// Number of meals across all days.
    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|d| d.meals.len()).sum()
    }
}
