pub mod aggregate;
pub mod orchestrate;
pub mod sanitize;

pub use aggregate::sum_group;
pub use orchestrate::calculate;
pub use sanitize::{clean_input_string, is_invalid_input, to_number};
