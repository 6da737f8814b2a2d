use tracing::{debug, info, warn};

use super::FormSource;
use crate::calculator::calculate;
use crate::models::{CalorieSummary, Entry, Group};

/// Wires user actions to a form surface.
pub struct FormController<S: FormSource> {
    source: S,
}

impl<S: FormSource> FormController<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Handle a form submission.
    ///
    /// On an invalid value the surface is alerted and left untouched;
    /// otherwise the result block is shown and the summary returned.
    pub fn submit(&mut self) -> Option<CalorieSummary> {
        match calculate(&self.source) {
            Ok(summary) => {
                info!(
                    remaining = summary.remaining,
                    balance = %summary.balance(),
                    "calculation complete"
                );
                self.source.show_result(&summary);
                Some(summary)
            }
            Err(e) => {
                warn!(error = %e, "calculation aborted");
                self.source.alert(&e.to_string());
                None
            }
        }
    }

    /// Append a blank name/calorie pair to a group and return it.
    pub fn add_entry(&mut self, group: Group) -> Entry {
        let index = self.source.entry_count(group) + 1;
        let entry = Entry::blank(group, index);
        debug!(%group, index, "adding entry");
        self.source.append_entry(group, entry.clone());
        entry
    }

    /// Remove every entry, clear the budget and hide the output.
    pub fn clear_form(&mut self) {
        for group in Group::ALL {
            self.source.clear_group(group);
        }
        self.source.clear_budget();
        self.source.hide_result();
        debug!("form cleared");
    }
}
