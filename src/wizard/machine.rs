use crate::error::Result;
use crate::models::{Cuisine, HealthCondition, MealPlan, PlanDays, PreferenceRecord};
use crate::wizard::allocator;
use crate::wizard::validate::{validate_step, Field, StepErrors};

/// Number of input steps before the terminal results position.
pub const STEP_COUNT: usize = 5;

/// Position index of the terminal results pseudo-step.
pub const RESULTS_POSITION: usize = STEP_COUNT;

/// Display titles for the five input steps.
pub const STEP_TITLES: [&str; STEP_COUNT] = [
    "Plan Duration",
    "Calorie Goal",
    "Health Conditions",
    "Cuisine Preferences",
    "Additional Options",
];

/// A typed field edit dispatched by the interface layer.
#[derive(Debug, Clone)]
pub enum FieldUpdate {
    PlanDays(PlanDays),
    DailyCalories(Option<u32>),
    HealthCondition {
        condition: HealthCondition,
        selected: bool,
    },
    CuisineSelection {
        cuisine: Cuisine,
        selected: bool,
    },
    CuisinePercentage {
        cuisine: Cuisine,
        raw: String,
    },
    CheatMeal(bool),
}

/// What an `advance` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Validation failed; position unchanged, errors stored.
    Blocked,
    /// Moved to the next step.
    Moved,
    /// Final step validated clean; the caller should submit the record.
    Submit,
    /// Navigation is currently inert (loading or terminal state).
    Ignored,
}

/// Outcome held at the terminal position.
#[derive(Debug, Clone)]
pub enum PlanOutcome {
    Ready(MealPlan),
    Failed(String),
}

/// The form wizard: five input steps, a loading sub-state, and a terminal
/// results position.
///
/// All transitions are synchronous and free of I/O. The driver performs the
/// one network operation between `begin_submission` and `complete_submission`;
/// while the submission is outstanding every navigation and edit intent is
/// inert, so a wizard instance can never have two requests in flight.
#[derive(Debug, Default)]
pub struct Wizard {
    position: usize,
    record: PreferenceRecord,
    errors: StepErrors,
    loading: bool,
    outcome: Option<PlanOutcome>,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn record(&self) -> &PreferenceRecord {
        &self.record
    }

    pub fn errors(&self) -> &StepErrors {
        &self.errors
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn at_results(&self) -> bool {
        self.position == RESULTS_POSITION
    }

    pub fn outcome(&self) -> Option<&PlanOutcome> {
        self.outcome.as_ref()
    }

    /// Validate the current step and move forward.
    ///
    /// A failing validator stores its errors and refuses the move. A clean
    /// validation on the last step yields `Advance::Submit` instead of a
    /// position change.
    pub fn advance(&mut self) -> Advance {
        if self.loading || self.at_results() {
            return Advance::Ignored;
        }

        let errors = validate_step(self.position, &self.record);
        if !errors.is_empty() {
            self.errors = errors;
            return Advance::Blocked;
        }

        self.errors.clear();
        if self.position + 1 == STEP_COUNT {
            Advance::Submit
        } else {
            self.position += 1;
            Advance::Moved
        }
    }

    /// Step back, clearing all validation errors. No-op at position 0 and
    /// while loading or at results.
    pub fn retreat(&mut self) {
        if self.loading || self.at_results() {
            return;
        }

        self.errors.clear();
        if self.position > 0 {
            self.position -= 1;
        }
    }

    /// Apply a field edit and clear the matching stored error.
    ///
    /// Cuisine selection clears only the `cuisinePreferences` error; health
    /// conditions and the cheat-meal flag have no error to clear. Inert while
    /// a submission is outstanding.
    pub fn update_field(&mut self, update: FieldUpdate) -> Result<()> {
        if self.loading {
            return Ok(());
        }

        match update {
            FieldUpdate::PlanDays(days) => {
                self.record.plan_days = Some(days);
                self.errors.remove(&Field::NumberOfDays);
            }
            FieldUpdate::DailyCalories(value) => {
                self.record.daily_calories = value;
                self.errors.remove(&Field::DailyCalories);
            }
            FieldUpdate::HealthCondition {
                condition,
                selected,
            } => {
                self.record.set_health_condition(condition, selected);
            }
            FieldUpdate::CuisineSelection { cuisine, selected } => {
                allocator::toggle_cuisine(&mut self.record.cuisine_weights, cuisine, selected);
                self.errors.remove(&Field::CuisinePreferences);
            }
            FieldUpdate::CuisinePercentage { cuisine, raw } => {
                allocator::set_cuisine_percentage(
                    &mut self.record.cuisine_weights,
                    cuisine,
                    &raw,
                )?;
            }
            FieldUpdate::CheatMeal(include) => {
                self.record.include_cheat_meal = include;
            }
        }

        Ok(())
    }

    /// Enter the loading sub-state. Position is untouched; navigation and
    /// edits are inert until `complete_submission`.
    pub fn begin_submission(&mut self) {
        self.loading = true;
    }

    /// Leave the loading sub-state and land on the terminal position with
    /// either the generated plan or a failure message.
    pub fn complete_submission(&mut self, result: std::result::Result<MealPlan, String>) {
        self.loading = false;
        self.position = RESULTS_POSITION;
        self.outcome = Some(match result {
            Ok(plan) => PlanOutcome::Ready(plan),
            Err(message) => PlanOutcome::Failed(message),
        });
    }

    /// Start over: defaults for the record, position 0, no errors, no stored
    /// outcome. Refused while a submission is outstanding.
    pub fn reset(&mut self) {
        if self.loading {
            return;
        }
        *self = Self::default();
    }
}
