use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::interface::render;
use crate::models::{Cuisine, CuisineWeight, HealthCondition, PlanDays};
use crate::wizard::{FieldUpdate, Wizard, STEP_COUNT};

/// Where the user wants to go after filling in the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Back,
}

/// Run the prompt for the wizard's current step, dispatching field updates.
pub fn prompt_step(wizard: &mut Wizard) -> Result<()> {
    match wizard.position() {
        0 => prompt_plan_days(wizard),
        1 => prompt_daily_calories(wizard),
        2 => prompt_health_conditions(wizard),
        3 => prompt_cuisine_preferences(wizard),
        4 => prompt_additional_options(wizard),
        _ => Ok(()),
    }
}

fn prompt_plan_days(wizard: &mut Wizard) -> Result<()> {
    let labels: Vec<&str> = PlanDays::ALL.iter().map(|d| d.label()).collect();
    let default = wizard
        .record()
        .plan_days
        .and_then(|current| PlanDays::ALL.iter().position(|d| *d == current))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("How many days of meal plan do you want?")
        .items(&labels)
        .default(default)
        .interact()?;

    wizard.update_field(FieldUpdate::PlanDays(PlanDays::ALL[selection]))
}

fn prompt_daily_calories(wizard: &mut Wizard) -> Result<()> {
    let mut prompt = Input::<String>::new()
        .with_prompt("What's your daily calorie target? (e.g., 2000)")
        .allow_empty(true)
        .validate_with(|value: &String| -> std::result::Result<(), &str> {
            let value = value.trim();
            if value.is_empty() || value.parse::<u32>().is_ok() {
                Ok(())
            } else {
                Err("Please enter a whole number of calories")
            }
        });

    if let Some(current) = wizard.record().daily_calories {
        prompt = prompt.default(current.to_string());
    }

    let input = prompt.interact_text()?;
    wizard.update_field(FieldUpdate::DailyCalories(input.trim().parse().ok()))
}

fn prompt_health_conditions(wizard: &mut Wizard) -> Result<()> {
    let labels: Vec<&str> = HealthCondition::ALL.iter().map(|c| c.name()).collect();
    let checked: Vec<bool> = HealthCondition::ALL
        .iter()
        .map(|c| wizard.record().health_conditions.contains(c))
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Select any health conditions to consider")
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    for (index, condition) in HealthCondition::ALL.iter().enumerate() {
        let now = selected.contains(&index);
        if now != checked[index] {
            wizard.update_field(FieldUpdate::HealthCondition {
                condition: *condition,
                selected: now,
            })?;
        }
    }

    Ok(())
}

fn prompt_cuisine_preferences(wizard: &mut Wizard) -> Result<()> {
    let labels: Vec<&str> = Cuisine::ALL.iter().map(|c| c.name()).collect();
    let checked: Vec<bool> = Cuisine::ALL
        .iter()
        .map(|c| wizard.record().has_cuisine(*c))
        .collect();

    let selected = MultiSelect::new()
        .with_prompt("Select your preferred cuisines")
        .items(&labels)
        .defaults(&checked)
        .interact()?;

    for (index, cuisine) in Cuisine::ALL.iter().enumerate() {
        let now = selected.contains(&index);
        if now != checked[index] {
            wizard.update_field(FieldUpdate::CuisineSelection {
                cuisine: *cuisine,
                selected: now,
            })?;
        }
    }

    prompt_percentage_adjustments(wizard)
}

/// Optional manual override of the even split the allocator produced.
fn prompt_percentage_adjustments(wizard: &mut Wizard) -> Result<()> {
    if wizard.record().cuisine_weights.is_empty() {
        return Ok(());
    }

    render::display_cuisine_weights(&wizard.record().cuisine_weights);
    if !prompt_yes_no("Adjust cuisine percentages?", false)? {
        return Ok(());
    }

    loop {
        let input: String = Input::new()
            .with_prompt("Enter a cuisine to adjust (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            break;
        }

        let Some(cuisine) = match_cuisine(&wizard.record().cuisine_weights, input)? else {
            println!("No matching cuisine for '{}'", input);
            continue;
        };

        let raw: String = Input::new()
            .with_prompt(format!("New percentage for {}", cuisine))
            .interact_text()?;

        if let Err(e) = wizard.update_field(FieldUpdate::CuisinePercentage { cuisine, raw }) {
            println!("{}", e);
            continue;
        }

        render::display_cuisine_weights(&wizard.record().cuisine_weights);
    }

    Ok(())
}

/// Resolve user input to one of the selected cuisines.
///
/// Exact match first (case-insensitive), then Jaro-Winkler candidates above
/// 0.7 with a confirm or pick.
fn match_cuisine(weights: &[CuisineWeight], input: &str) -> Result<Option<Cuisine>> {
    if let Some(weight) = weights
        .iter()
        .find(|w| w.cuisine.name().eq_ignore_ascii_case(input))
    {
        return Ok(Some(weight.cuisine));
    }

    let mut candidates: Vec<(Cuisine, f64)> = weights
        .iter()
        .map(|w| {
            (
                w.cuisine,
                jaro_winkler(&w.cuisine.name().to_lowercase(), &input.to_lowercase()),
            )
        })
        .filter(|(_, score)| *score > 0.7)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        return Ok(None);
    }

    if candidates.len() == 1 {
        let cuisine = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", cuisine))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(cuisine));
    }

    let mut options: Vec<String> = candidates.iter().map(|(c, _)| c.name().to_string()).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < candidates.len() {
        Ok(Some(candidates[selection].0))
    } else {
        Ok(None)
    }
}

fn prompt_additional_options(wizard: &mut Wizard) -> Result<()> {
    let include = Confirm::new()
        .with_prompt("Include a cheat meal in the plan?")
        .default(wizard.record().include_cheat_meal)
        .interact()?;

    wizard.update_field(FieldUpdate::CheatMeal(include))
}

/// Ask where to go next. "Back" is only offered past the first step; the
/// last step's forward action reads "Generate Plan".
pub fn prompt_navigation(position: usize) -> Result<NavAction> {
    let forward = if position + 1 == STEP_COUNT {
        "Generate Plan"
    } else {
        "Next"
    };

    let mut items = vec![forward];
    if position > 0 {
        items.push("Back");
    }

    let selection = Select::new().items(&items).default(0).interact()?;
    Ok(if selection == 0 {
        NavAction::Next
    } else {
        NavAction::Back
    })
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for the CSV output path.
pub fn prompt_export_path(default: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt("Export path")
        .default(default.to_string())
        .interact_text()?)
}
