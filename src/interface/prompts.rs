use dialoguer::{Confirm, Input, Select};

use crate::error::Result;
use crate::models::{Entry, Group};

/// An action offered by the interactive form menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddEntry,
    SetBudget,
    Calculate,
    Show,
    Clear,
    Quit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::AddEntry,
        Action::SetBudget,
        Action::Calculate,
        Action::Show,
        Action::Clear,
        Action::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::AddEntry => "Add entry",
            Action::SetBudget => "Set budget",
            Action::Calculate => "Calculate remaining calories",
            Action::Show => "Show form",
            Action::Clear => "Clear form",
            Action::Quit => "Quit",
        }
    }
}

/// Prompt for the next menu action.
pub fn prompt_action() -> Result<Action> {
    let labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(Action::ALL.get(selection).copied().unwrap_or(Action::Quit))
}

/// Prompt for the group a new entry goes into.
pub fn prompt_group() -> Result<Group> {
    let titles: Vec<&str> = Group::ALL.iter().map(Group::title).collect();
    let selection = Select::new()
        .with_prompt("Add the entry to which group?")
        .items(&titles)
        .default(0)
        .interact()?;

    Ok(Group::ALL.get(selection).copied().unwrap_or(Group::Breakfast))
}

/// Prompt for the name and calories of the entry at `index`.
///
/// Values are returned as typed; validation happens at calculation time.
pub fn prompt_entry_values(index: usize) -> Result<(String, String)> {
    let name: String = Input::new()
        .with_prompt(Entry::name_label(index))
        .allow_empty(true)
        .interact_text()?;

    let calories: String = Input::new()
        .with_prompt(Entry::calories_label(index))
        .allow_empty(true)
        .interact_text()?;

    Ok((name, calories))
}

/// Prompt for the calorie budget, offering the current value as default.
pub fn prompt_budget(current: &str) -> Result<String> {
    let mut input = Input::<String>::new()
        .with_prompt("Daily calorie budget")
        .allow_empty(true);
    if !current.is_empty() {
        input = input.default(current.to_string());
    }

    Ok(input.interact_text()?)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels_unique() {
        let mut labels: Vec<&str> = Action::ALL.iter().map(Action::label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
    }
}
