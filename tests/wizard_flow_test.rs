use meal_plan_wizard_rs::models::{Cuisine, HealthCondition, MealPlan, PlanDays};
use meal_plan_wizard_rs::wizard::{
    Advance, Field, FieldUpdate, PlanOutcome, Wizard, RESULTS_POSITION, STEP_COUNT,
};

fn plan_fixture() -> MealPlan {
    serde_json::from_str(
        r#"{
            "meal_plan": [
                {
                    "day": 1,
                    "meals": [{
                        "type": "dinner",
                        "name": "Miso Ramen",
                        "cuisine": "Japanese",
                        "calories": 650,
                        "nutrition": {"protein": "28g", "carbs": "80g", "fat": "18g"},
                        "ingredients": [{"item": "noodles", "amount": "120 g"}],
                        "recipe_steps": ["Simmer the broth"]
                    }],
                    "total_calories": 650
                }
            ],
            "generation_time": 8.4
        }"#,
    )
    .unwrap()
}

/// Fill every step with valid answers, advancing through each.
fn fill_valid(wizard: &mut Wizard) {
    wizard
        .update_field(FieldUpdate::PlanDays(PlanDays::Five))
        .unwrap();
    assert_eq!(wizard.advance(), Advance::Moved);

    wizard
        .update_field(FieldUpdate::DailyCalories(Some(2200)))
        .unwrap();
    assert_eq!(wizard.advance(), Advance::Moved);

    wizard
        .update_field(FieldUpdate::HealthCondition {
            condition: HealthCondition::Diabetes,
            selected: true,
        })
        .unwrap();
    assert_eq!(wizard.advance(), Advance::Moved);

    wizard
        .update_field(FieldUpdate::CuisineSelection {
            cuisine: Cuisine::Japanese,
            selected: true,
        })
        .unwrap();
    wizard
        .update_field(FieldUpdate::CuisineSelection {
            cuisine: Cuisine::Italian,
            selected: true,
        })
        .unwrap();
    assert_eq!(wizard.advance(), Advance::Moved);
}

#[test]
fn test_blocked_advance_keeps_position_and_stores_error() {
    let mut wizard = Wizard::new();

    assert_eq!(wizard.advance(), Advance::Blocked);
    assert_eq!(wizard.position(), 0);
    assert!(wizard.errors().contains_key(&Field::NumberOfDays));

    // Correcting the field clears the error and unblocks.
    wizard
        .update_field(FieldUpdate::PlanDays(PlanDays::One))
        .unwrap();
    assert!(wizard.errors().is_empty());
    assert_eq!(wizard.advance(), Advance::Moved);
}

#[test]
fn test_calorie_boundaries_drive_step_one() {
    let mut wizard = Wizard::new();
    wizard
        .update_field(FieldUpdate::PlanDays(PlanDays::One))
        .unwrap();
    wizard.advance();

    for (calories, expected) in [
        (999, Advance::Blocked),
        (1000, Advance::Moved),
        (5000, Advance::Moved),
        (5001, Advance::Blocked),
    ] {
        wizard
            .update_field(FieldUpdate::DailyCalories(Some(calories)))
            .unwrap();
        let advance = wizard.advance();
        assert_eq!(advance, expected, "calories = {}", calories);

        if advance == Advance::Moved {
            assert!(wizard.errors().is_empty());
            wizard.retreat();
        } else {
            assert!(wizard.errors().contains_key(&Field::DailyCalories));
        }
        assert_eq!(wizard.position(), 1);
    }
}

#[test]
fn test_cuisine_step_requires_selection_and_keeps_sum() {
    let mut wizard = Wizard::new();
    wizard
        .update_field(FieldUpdate::PlanDays(PlanDays::Seven))
        .unwrap();
    wizard.advance();
    wizard
        .update_field(FieldUpdate::DailyCalories(Some(1800)))
        .unwrap();
    wizard.advance();
    wizard.advance(); // health conditions are optional

    assert_eq!(wizard.position(), 3);
    assert_eq!(wizard.advance(), Advance::Blocked);
    assert!(wizard.errors().contains_key(&Field::CuisinePreferences));

    for cuisine in [Cuisine::Indian, Cuisine::Chinese, Cuisine::Mexican] {
        wizard
            .update_field(FieldUpdate::CuisineSelection {
                cuisine,
                selected: true,
            })
            .unwrap();
        assert_eq!(wizard.record().cuisine_percentage_sum(), 100);
    }
    assert!(wizard.errors().is_empty());
    assert_eq!(wizard.advance(), Advance::Moved);
}

#[test]
fn test_manual_percentage_edit_survives_until_next_toggle() {
    let mut wizard = Wizard::new();
    wizard
        .update_field(FieldUpdate::CuisineSelection {
            cuisine: Cuisine::Italian,
            selected: true,
        })
        .unwrap();
    wizard
        .update_field(FieldUpdate::CuisineSelection {
            cuisine: Cuisine::Indian,
            selected: true,
        })
        .unwrap();

    wizard
        .update_field(FieldUpdate::CuisinePercentage {
            cuisine: Cuisine::Italian,
            raw: "70".to_string(),
        })
        .unwrap();

    let weights = &wizard.record().cuisine_weights;
    assert_eq!(weights[0].percentage, 70);
    assert_eq!(weights[1].percentage, 50);

    wizard
        .update_field(FieldUpdate::CuisineSelection {
            cuisine: Cuisine::Chinese,
            selected: true,
        })
        .unwrap();
    assert_eq!(wizard.record().cuisine_percentage_sum(), 100);
}

#[test]
fn test_full_run_to_results() {
    let mut wizard = Wizard::new();
    fill_valid(&mut wizard);

    assert_eq!(wizard.position(), STEP_COUNT - 1);
    assert_eq!(wizard.advance(), Advance::Submit);
    assert_eq!(wizard.position(), STEP_COUNT - 1);

    wizard.begin_submission();
    assert!(wizard.is_loading());
    assert_eq!(wizard.advance(), Advance::Ignored);

    wizard.complete_submission(Ok(plan_fixture()));
    assert!(!wizard.is_loading());
    assert_eq!(wizard.position(), RESULTS_POSITION);

    match wizard.outcome() {
        Some(PlanOutcome::Ready(plan)) => {
            assert_eq!(plan.days.len(), 1);
            assert_eq!(plan.days[0].meals[0].name, "Miso Ramen");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_submitted_record_serializes_for_the_generator() {
    let mut wizard = Wizard::new();
    fill_valid(&mut wizard);
    wizard
        .update_field(FieldUpdate::CheatMeal(true))
        .unwrap();

    let request = wizard.record().to_request().unwrap();
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["numberOfDays"], 5);
    assert_eq!(json["dailyCalories"], 2200);
    assert_eq!(json["healthConditions"], serde_json::json!(["Diabetes"]));
    assert_eq!(json["cuisinePreferences"][0]["name"], "Japanese");
    assert_eq!(json["cuisinePreferences"][0]["percentage"], 50);
    assert_eq!(json["cuisinePreferences"][1]["percentage"], 50);
    assert_eq!(json["includeCheatMeal"], true);
}

#[test]
fn test_failed_submission_then_start_over() {
    let mut wizard = Wizard::new();
    fill_valid(&mut wizard);
    assert_eq!(wizard.advance(), Advance::Submit);

    wizard.begin_submission();
    wizard.complete_submission(Err("Failed to generate meal plan. Please try again.".to_string()));

    assert_eq!(wizard.position(), RESULTS_POSITION);
    assert!(matches!(wizard.outcome(), Some(PlanOutcome::Failed(_))));

    wizard.reset();
    assert_eq!(wizard.position(), 0);
    assert!(wizard.outcome().is_none());
    assert!(wizard.record().cuisine_weights.is_empty());
    assert_eq!(wizard.record().plan_days, None);
}

#[test]
fn test_retreat_below_zero_is_a_no_op() {
    let mut wizard = Wizard::new();
    wizard.retreat();
    wizard.retreat();
    assert_eq!(wizard.position(), 0);
}
