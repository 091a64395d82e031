use clap::{Parser, Subcommand};

use crate::client::DEFAULT_ENDPOINT;

/// MealPlanWizard — an interactive CLI that builds custom multi-day meal plans.
#[derive(Parser, Debug)]
#[command(name = "meal_plan_wizard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// URL of the meal-plan generator endpoint.
    #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Path used for saving and loading generated plans as JSON.
    #[arg(short, long, default_value = "meal_plan.json")]
    pub plan_file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the wizard and generate a meal plan.
    Plan,

    /// Export a previously saved plan to CSV.
    Export {
        /// CSV output path.
        #[arg(short, long, default_value = "meal_plan.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
