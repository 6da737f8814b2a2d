mod controller;
mod persistence;
mod state;

pub use controller::FormController;
pub use persistence::{load_form, save_form};
pub use state::FormState;

use crate::models::{CalorieSummary, Entry, Group};

/// The surface a form is drawn on: where values are read from and where
/// entries, results and alerts are written to.
pub trait FormSource {
    /// Raw calorie values of a group, in entry order.
    fn group_values(&self, group: Group) -> Vec<String>;

    /// Raw text of the budget field.
    fn budget_value(&self) -> String;

    /// Number of entries currently in a group.
    fn entry_count(&self, group: Group) -> usize;

    fn append_entry(&mut self, group: Group, entry: Entry);

    /// Remove every entry from a group.
    fn clear_group(&mut self, group: Group);

    fn clear_budget(&mut self);

    /// Write the result block and make the output region visible.
    fn show_result(&mut self, summary: &CalorieSummary);

    /// Clear the output text and hide the output region.
    fn hide_result(&mut self);

    /// Report a blocking message to the user.
    fn alert(&mut self, message: &str);
}
