use clap::{Parser, Subcommand};

/// Calorie Counter — totals meals and exercise against a daily calorie budget.
#[derive(Parser, Debug)]
#[command(name = "calorie_counter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the form state JSON file.
    #[arg(short, long, env = "CALORIE_FORM_FILE", default_value = "calorie_form.json")]
    pub file: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Fill in the form through an interactive menu.
    #[default]
    Interactive,

    /// Append an entry to a group.
    Add {
        /// Group to add to: breakfast, lunch, dinner, snacks or exercise.
        #[arg(short, long)]
        group: String,

        /// Display name of the entry.
        #[arg(short, long, default_value = "")]
        name: String,

        /// Calorie value, as typed.
        #[arg(short, long, default_value = "", allow_hyphen_values = true)]
        calories: String,
    },

    /// Set the daily calorie budget.
    Budget {
        /// Budget value, as typed.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Calculate the calorie surplus or deficit.
    Calculate {
        /// Print the result block as HTML markup.
        #[arg(long)]
        html: bool,
    },

    /// Show every group and its entries.
    Show,

    /// Remove all entries, the budget and the result.
    Clear,
}
