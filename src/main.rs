use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use meal_plan_wizard_rs::cli::{Cli, Command};
use meal_plan_wizard_rs::client::PlanClient;
use meal_plan_wizard_rs::error::{Result, WizardError};
use meal_plan_wizard_rs::export::write_csv;
use meal_plan_wizard_rs::interface::{
    display_errors, display_failure, display_meal_plan, display_stepper, loading_message,
    prompt_export_path, prompt_navigation, prompt_step, prompt_yes_no, NavAction,
};
use meal_plan_wizard_rs::state::{load_plan, save_plan};
use meal_plan_wizard_rs::wizard::{Advance, PlanOutcome, Wizard};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.endpoint, &cli.plan_file),
        Command::Export { output } => cmd_export(&cli.plan_file, &output),
    }
}

/// Drive the wizard: steps, submission, results, and the start-over loop.
fn cmd_plan(endpoint: &str, plan_file: &str) -> Result<()> {
    let client = PlanClient::new(endpoint)?;
    let mut wizard = Wizard::new();

    println!("Custom Meal Plan Generator");

    loop {
        while !wizard.at_results() {
            display_stepper(wizard.position());
            display_errors(wizard.errors());

            prompt_step(&mut wizard)?;

            match prompt_navigation(wizard.position())? {
                NavAction::Back => wizard.retreat(),
                NavAction::Next => match wizard.advance() {
                    Advance::Blocked => display_errors(wizard.errors()),
                    Advance::Submit => submit(&mut wizard, &client)?,
                    Advance::Moved | Advance::Ignored => {}
                },
            }
        }

        match wizard.outcome().cloned() {
            Some(PlanOutcome::Ready(plan)) => {
                display_meal_plan(&plan);

                if prompt_yes_no("Save this plan for later?", true)? {
                    save_plan(plan_file, &plan)?;
                    println!("Plan saved to {}", plan_file);
                }

                if prompt_yes_no("Export to CSV?", false)? {
                    let path = prompt_export_path("meal_plan.csv")?;
                    write_csv(&plan, &path)?;
                    println!("Plan exported to {}", path);
                }

                if prompt_yes_no("Start a new plan?", false)? {
                    wizard.reset();
                    continue;
                }
                break;
            }
            Some(PlanOutcome::Failed(message)) => {
                display_failure(&message);

                if prompt_yes_no("Start over?", true)? {
                    wizard.reset();
                    continue;
                }
                break;
            }
            None => break,
        }
    }

    Ok(())
}

/// Submit the finished record and store the outcome on the wizard.
fn submit(wizard: &mut Wizard, client: &PlanClient) -> Result<()> {
    let request = wizard.record().to_request()?;

    wizard.begin_submission();
    println!();
    println!("{}", loading_message());

    let result = client.generate(&request).map_err(|e| match e {
        WizardError::Api(message) => message,
        other => other.to_string(),
    });
    wizard.complete_submission(result);

    Ok(())
}

/// Convert a previously saved plan to CSV without regenerating.
fn cmd_export(plan_file: &str, output: &str) -> Result<()> {
    let path = Path::new(plan_file);

    if !path.exists() {
        eprintln!("Saved plan not found: {}", plan_file);
        eprintln!("Run the wizard and save a plan first.");
        return Ok(());
    }

    let plan = load_plan(path)?;
    write_csv(&plan, output)?;
    println!(
        "Exported {} meals across {} days to {}",
        plan.meal_count(),
        plan.days.len(),
        output
    );

    Ok(())
}
