pub mod prompts;
pub mod render;

pub use prompts::{
    Action, prompt_action, prompt_budget, prompt_entry_values, prompt_group, prompt_yes_no,
};
pub use render::{
    display_form, format_calories, render_summary_html, render_summary_text,
};
