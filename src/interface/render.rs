use crate::form::FormState;
use crate::models::{CalorieSummary, Entry, Group};

/// Format a calorie amount the way the browser prints numbers.
///
/// Magnitudes from 1e21 up and below 1e-6 switch to exponent form (`1e+21`).
pub fn format_calories(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value != 0.0 && (value.abs() >= 1e21 || value.abs() < 1e-6) {
        exponent_form(value)
    } else {
        format!("{}", value)
    }
}

fn exponent_form(value: f64) -> String {
    let formatted = format!("{:e}", value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Headline such as `1100 Calorie Surplus`.
pub fn headline(summary: &CalorieSummary) -> String {
    format!(
        "{} Calorie {}",
        format_calories(summary.magnitude()),
        summary.balance()
    )
}

/// Plain-text result block.
pub fn render_summary_text(summary: &CalorieSummary) -> String {
    [
        headline(summary),
        "---".to_string(),
        format!("{} Calories Budgeted", format_calories(summary.budgeted)),
        format!("{} Calories Consumed", format_calories(summary.consumed)),
        format!("{} Calories Burned", format_calories(summary.burned)),
    ]
    .join("\n")
}

/// Result block as markup for an HTML output region.
pub fn render_summary_html(summary: &CalorieSummary) -> String {
    format!(
        "<span class=\"{}\">{}</span>\n<hr>\n<p>{} Calories Budgeted</p>\n<p>{} Calories Consumed</p>\n<p>{} Calories Burned</p>",
        summary.balance().class_name(),
        headline(summary),
        format_calories(summary.budgeted),
        format_calories(summary.consumed),
        format_calories(summary.burned),
    )
}

/// Print every group with its entries and field ids.
pub fn display_form(form: &FormState) {
    println!();
    println!("=== Calorie Form ===");
    println!();

    let budget = if form.budget.is_empty() {
        "(empty)"
    } else {
        form.budget.as_str()
    };
    println!("Budget: {}", budget);

    for group in Group::ALL {
        let entries = form.entries(group);
        println!();
        println!("{} ({} entries)", group.title(), entries.len());
        for (i, entry) in entries.iter().enumerate() {
            println!("  {}", entry_line(i + 1, entry));
        }
    }

    if form.output_visible {
        println!();
        println!("{}", form.output);
    }
    println!();
}

fn entry_line(index: usize, entry: &Entry) -> String {
    let name = if entry.name.is_empty() {
        "-"
    } else {
        entry.name.as_str()
    };
    format!(
        "{:>2}. {} [{}] | {} cal [{}]",
        index, name, entry.name_id, entry.calories, entry.calories_id
    )
}
