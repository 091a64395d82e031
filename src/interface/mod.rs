pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_export_path, prompt_navigation, prompt_step, prompt_yes_no, NavAction,
};
pub use render::{
    display_cuisine_weights, display_errors, display_failure, display_meal_plan,
    display_stepper, loading_message,
};
