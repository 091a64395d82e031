mod allocator;
mod machine;
mod validate;

pub use allocator::{redistribute, set_cuisine_percentage, toggle_cuisine};
pub use machine::{
    Advance, FieldUpdate, PlanOutcome, Wizard, RESULTS_POSITION, STEP_COUNT, STEP_TITLES,
};
pub use validate::{
    validate_step, Field, StepErrors, MAX_DAILY_CALORIES, MIN_DAILY_CALORIES,
};
