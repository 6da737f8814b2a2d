use clap::Parser;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt};

use calorie_counter_rs::cli::{Cli, Command};
use calorie_counter_rs::error::Result;
use calorie_counter_rs::form::{FormController, FormState, load_form, save_form};
use calorie_counter_rs::interface::{
    Action, display_form, prompt_action, prompt_budget, prompt_entry_values, prompt_group,
    prompt_yes_no, render_summary_html,
};
use calorie_counter_rs::models::Group;

fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let path = Path::new(&cli.file);

    match command {
        Command::Interactive => cmd_interactive(path),
        Command::Add {
            group,
            name,
            calories,
        } => cmd_add(path, &group, &name, &calories),
        Command::Budget { value } => cmd_budget(path, &value),
        Command::Calculate { html } => cmd_calculate(path, html),
        Command::Show => cmd_show(path),
        Command::Clear => cmd_clear(path),
    }
}

/// Print and drain any alerts raised on the form.
fn report_alerts(form: &mut FormState) {
    for alert in form.take_alerts() {
        eprintln!("{}", alert);
    }
}

/// Drive the form through a menu until the user quits.
fn cmd_interactive(path: &Path) -> Result<()> {
    let mut controller = FormController::new(load_form(path)?);
    let mut dirty = false;

    println!(
        "Loaded form with {} entries",
        controller.source().total_entries()
    );
    println!();

    loop {
        match prompt_action()? {
            Action::AddEntry => {
                let group = prompt_group()?;
                let entry = controller.add_entry(group);
                let index = controller.source().entries(group).len();
                let (name, calories) = prompt_entry_values(index)?;
                if let Some(added) = controller.source_mut().entry_mut(group, index) {
                    added.name = name;
                    added.calories = calories;
                }
                println!("Added {}", entry.calories_id);
                dirty = true;
            }
            Action::SetBudget => {
                let value = prompt_budget(&controller.source().budget)?;
                controller.source_mut().set_budget(&value);
                dirty = true;
            }
            Action::Calculate => {
                if controller.submit().is_some() {
                    println!();
                    println!("{}", controller.source().output);
                    println!();
                }
                report_alerts(controller.source_mut());
                dirty = true;
            }
            Action::Show => display_form(controller.source()),
            Action::Clear => {
                controller.clear_form();
                println!("Form cleared.");
                dirty = true;
            }
            Action::Quit => break,
        }
    }

    if dirty && prompt_yes_no("Save form?", true)? {
        save_form(path, controller.source())?;
        println!("Form saved.");
    }

    Ok(())
}

/// Append one entry and fill in its values.
fn cmd_add(path: &Path, group: &str, name: &str, calories: &str) -> Result<()> {
    let group: Group = group.parse()?;
    let mut controller = FormController::new(load_form(path)?);

    let entry = controller.add_entry(group);
    let index = controller.source().entries(group).len();
    if let Some(added) = controller.source_mut().entry_mut(group, index) {
        added.name = name.to_string();
        added.calories = calories.to_string();
    }

    save_form(path, controller.source())?;
    println!("Added {} and {}", entry.name_id, entry.calories_id);
    Ok(())
}

/// Set the budget field.
fn cmd_budget(path: &Path, value: &str) -> Result<()> {
    let mut form = load_form(path)?;
    form.set_budget(value);
    save_form(path, &form)?;
    println!("Budget set to {}", value);
    Ok(())
}

/// Submit the form and print the result block.
fn cmd_calculate(path: &Path, html: bool) -> Result<()> {
    let mut controller = FormController::new(load_form(path)?);

    match controller.submit() {
        Some(summary) => {
            if html {
                println!("{}", render_summary_html(&summary));
            } else {
                println!("{}", controller.source().output);
            }
            save_form(path, controller.source())?;
        }
        None => report_alerts(controller.source_mut()),
    }

    Ok(())
}

fn cmd_show(path: &Path) -> Result<()> {
    let form = load_form(path)?;
    display_form(&form);
    Ok(())
}

fn cmd_clear(path: &Path) -> Result<()> {
    let mut controller = FormController::new(load_form(path)?);
    controller.clear_form();
    save_form(path, controller.source())?;
    println!("Form cleared.");
    Ok(())
}
