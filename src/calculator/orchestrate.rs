use tracing::debug;

use super::aggregate::sum_group;
use crate::error::Result;
use crate::form::FormSource;
use crate::models::{CalorieSummary, Group};

/// Compute the calorie summary from the current form values.
///
/// Groups are read in a fixed order: the four meals, exercise, then the
/// budget. The first invalid value aborts the whole computation and no
/// later group is read.
pub fn calculate<S: FormSource + ?Sized>(source: &S) -> Result<CalorieSummary> {
    let mut consumed = 0.0;
    for meal in Group::MEALS {
        let total = sum_group(source.group_values(meal))?;
        debug!(group = %meal, total, "summed meal group");
        consumed += total;
    }

    let burned = sum_group(source.group_values(Group::Exercise))?;
    let budgeted = sum_group([source.budget_value()])?;

    let summary = CalorieSummary::new(budgeted, consumed, burned);
    debug!(?summary, "calculated");
    Ok(summary)
}
