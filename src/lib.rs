pub mod cli;
pub mod client;
pub mod error;
pub mod export;
pub mod interface;
pub mod models;
pub mod state;
pub mod wizard;

pub use error::{Result, WizardError};
pub use models::{MealPlan, PreferenceRecord};
pub use wizard::Wizard;
