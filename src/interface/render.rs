use rand::Rng;

use crate::models::{CuisineWeight, MealPlan};
use crate::wizard::{StepErrors, STEP_COUNT, STEP_TITLES};

const LOADING_MESSAGES: [&str; 5] = [
    "Cooking up your perfect meal plan...",
    "Consulting the recipe books...",
    "Balancing calories across your days...",
    "Mixing in your cuisine preferences...",
    "Plating the final menu...",
];

/// Pick a loading line to show while the generator works. Cosmetic only.
pub fn loading_message() -> &'static str {
    let index = rand::thread_rng().gen_range(0..LOADING_MESSAGES.len());
    LOADING_MESSAGES[index]
}

/// Display the step strip with the current position highlighted.
pub fn display_stepper(position: usize) {
    let strip: Vec<String> = STEP_TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let marker = if i < position {
                "x"
            } else if i == position {
                ">"
            } else {
                " "
            };
            format!("[{}] {}", marker, title)
        })
        .collect();

    println!();
    println!("{}", strip.join("  "));
    if position < STEP_COUNT {
        println!("Step {} of {}: {}", position + 1, STEP_COUNT, STEP_TITLES[position]);
    }
    println!();
}

/// Display current validation failures, if any.
pub fn display_errors(errors: &StepErrors) {
    for message in errors.values() {
        println!("  ! {}", message);
    }
}

/// Display the selected cuisines and their shares.
pub fn display_cuisine_weights(weights: &[CuisineWeight]) {
    if weights.is_empty() {
        return;
    }

    println!();
    for weight in weights {
        println!("  {} - {}%", weight.cuisine, weight.percentage);
    }

    let sum: u32 = weights.iter().map(|w| w.percentage).sum();
    if sum != 100 {
        println!("  (percentages currently sum to {}%)", sum);
    }
    println!();
}

/// Display a generated meal plan as a per-day table with a summary block.
pub fn display_meal_plan(plan: &MealPlan) {
    if plan.days.is_empty() {
        println!("The generator returned an empty plan.");
        return;
    }

    println!();
    println!("=== Your Meal Plan ===");

    for day in &plan.days {
        println!();
        println!("--- Day {} ---", day.day);

        let max_name_len = day.meals.iter().map(|m| m.name.len()).max().unwrap_or(10);

        for meal in &day.meals {
            println!(
                "  {:<9} {:<width$} [{}] - {:>4.0} cal | P {} C {} F {}",
                meal.meal_type,
                meal.name,
                meal.cuisine,
                meal.calories,
                meal.nutrition.protein,
                meal.nutrition.carbs,
                meal.nutrition.fat,
                width = max_name_len
            );

            if !meal.ingredients.is_empty() {
                let list = meal
                    .ingredients
                    .iter()
                    .map(|i| format!("{} {}", i.amount, i.item))
                    .collect::<Vec<_>>()
                    .join("; ");
                println!("    Ingredients: {}", list);
            }

            for (i, step) in meal.recipe_steps.iter().enumerate() {
                println!("    {}. {}", i + 1, step);
            }
        }

        println!("  Daily total: {:.0} cal", day.total_calories);
    }

    println!();
    println!("--- Summary ---");
    println!("Days: {}", plan.days.len());
    println!("Meals: {}", plan.meal_count());
    println!("Total calories: {:.0}", plan.total_calories());
    println!("Generated in {:.1}s", plan.generation_time);
    println!();
}

/// Display a failed-generation view.
pub fn display_failure(message: &str) {
    println!();
    println!("=== Something went wrong ===");
    println!();
    println!("{}", message);
    println!();
}
