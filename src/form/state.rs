use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::FormSource;
use crate::interface::render::render_summary_text;
use crate::models::{CalorieSummary, Entry, Group};

/// In-memory form: one entry list per group, the budget field, and the
/// output region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormState {
    #[serde(default)]
    pub budget: String,

    #[serde(default)]
    pub groups: BTreeMap<Group, Vec<Entry>>,

    #[serde(default)]
    pub output: String,

    #[serde(default)]
    pub output_visible: bool,

    /// Alerts raised since the last `take_alerts`. Never persisted.
    #[serde(skip)]
    alerts: Vec<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries of a group, in order.
    pub fn entries(&self, group: Group) -> &[Entry] {
        self.groups.get(&group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mutable access to an entry by its 1-based position.
    pub fn entry_mut(&mut self, group: Group, index: usize) -> Option<&mut Entry> {
        let position = index.checked_sub(1)?;
        self.groups.get_mut(&group)?.get_mut(position)
    }

    /// Append a filled-in entry at the next position.
    pub fn push_entry(&mut self, group: Group, name: &str, calories: &str) {
        let mut entry = Entry::blank(group, self.entry_count(group) + 1);
        entry.name = name.to_string();
        entry.calories = calories.to_string();
        self.append_entry(group, entry);
    }

    pub fn set_budget(&mut self, value: &str) {
        self.budget = value.to_string();
    }

    /// Total number of entries across all groups.
    pub fn total_entries(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Drain the alerts raised so far.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

impl FormSource for FormState {
    fn group_values(&self, group: Group) -> Vec<String> {
        self.entries(group)
            .iter()
            .map(|e| e.calories.clone())
            .collect()
    }

    fn budget_value(&self) -> String {
        self.budget.clone()
    }

    fn entry_count(&self, group: Group) -> usize {
        self.entries(group).len()
    }

    fn append_entry(&mut self, group: Group, entry: Entry) {
        self.groups.entry(group).or_default().push(entry);
    }

    fn clear_group(&mut self, group: Group) {
        self.groups.remove(&group);
    }

    fn clear_budget(&mut self) {
        self.budget.clear();
    }

    fn show_result(&mut self, summary: &CalorieSummary) {
        self.output = render_summary_text(summary);
        self.output_visible = true;
    }

    fn hide_result(&mut self) {
        self.output.clear();
        self.output_visible = false;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
