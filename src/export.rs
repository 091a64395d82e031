//! CSV export of a generated meal plan.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, WizardError};
use crate::models::MealPlan;

/// Column order of the exported spreadsheet.
pub const CSV_HEADER: [&str; 10] = [
    "Day",
    "Meal Type",
    "Dish Name",
    "Cuisine",
    "Calories",
    "Protein",
    "Carbs",
    "Fat",
    "Ingredients",
    "Recipe Steps",
];

/// Render a plan as CSV text: the header, one row per meal, and one
/// `Daily Total` row per day carrying the day's total calories.
///
/// Ingredients are joined by `; ` as `<amount> <item>`; recipe steps are
/// joined by `; `. Quoting follows RFC 4180 (a field is quoted whenever it
/// needs escaping).
pub fn plan_to_csv(plan: &MealPlan) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        writer.write_record(CSV_HEADER)?;

        for day in &plan.days {
            for meal in &day.meals {
                let ingredients = meal
                    .ingredients
                    .iter()
                    .map(|i| format!("{} {}", i.amount, i.item))
                    .collect::<Vec<_>>()
                    .join("; ");
                let steps = meal.recipe_steps.join("; ");

                writer.write_record([
                    day.day.to_string(),
                    meal.meal_type.clone(),
                    meal.name.clone(),
                    meal.cuisine.clone(),
                    meal.calories.to_string(),
                    meal.nutrition.protein.clone(),
                    meal.nutrition.carbs.clone(),
                    meal.nutrition.fat.clone(),
                    ingredients,
                    steps,
                ])?;
            }

            writer.write_record([
                day.day.to_string(),
                "Daily Total".to_string(),
                String::new(),
                String::new(),
                day.total_calories.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
            ])?;
        }

        writer.flush()?;
    }

    String::from_utf8(buf)
        .map_err(|e| WizardError::InvalidInput(format!("CSV output was not UTF-8: {}", e)))
}

/// Write the CSV rendering of a plan to a file.
pub fn write_csv<P: AsRef<Path>>(plan: &MealPlan, path: P) -> Result<()> {
    let text = plan_to_csv(plan)?;
    fs::write(&path, text)?;
    debug!(path = %path.as_ref().display(), meals = plan.meal_count(), "plan exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_fixture() -> MealPlan {
        serde_json::from_str(
            r#"{
                "meal_plan": [
                    {
                        "day": 1,
                        "meals": [{
                            "type": "dinner",
                            "name": "Pasta, Extra Basil",
                            "cuisine": "Italian",
                            "calories": 700,
                            "nutrition": {"protein": "25g", "carbs": "90g", "fat": "20g"},
                            "ingredients": [
                                {"item": "spaghetti", "amount": "200 g"},
                                {"item": "basil", "amount": "1 bunch"}
                            ],
                            "recipe_steps": ["Boil the pasta", "Toss with sauce"]
                        }],
                        "total_calories": 700
                    }
                ],
                "generation_time": 2.0
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_header_row_column_order() {
        let plan = plan_fixture();
        let csv = plan_to_csv(&plan).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(
            header,
            "Day,Meal Type,Dish Name,Cuisine,Calories,Protein,Carbs,Fat,Ingredients,Recipe Steps"
        );
    }

    #[test]
    fn test_meal_row_joins_and_quotes() {
        let plan = plan_fixture();
        let csv = plan_to_csv(&plan).unwrap();
        let meal_row = csv.lines().nth(1).unwrap();

        // The comma in the dish name forces quoting; the joined lists do not.
        assert_eq!(
            meal_row,
            "1,dinner,\"Pasta, Extra Basil\",Italian,700,25g,90g,20g,\
             200 g spaghetti; 1 bunch basil,Boil the pasta; Toss with sauce"
        );
    }

    #[test]
    fn test_daily_total_row() {
        let plan = plan_fixture();
        let csv = plan_to_csv(&plan).unwrap();
        let total_row = csv.lines().nth(2).unwrap();
        assert_eq!(total_row, "1,Daily Total,,,700,,,,,");
    }

    #[test]
    fn test_write_csv_round_trip() {
        let plan = plan_fixture();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");

        write_csv(&plan, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, plan_to_csv(&plan).unwrap());
    }
}
