pub mod calculator;
pub mod cli;
pub mod error;
pub mod form;
pub mod interface;
pub mod models;

pub use error::{CalorieError, Result};
pub use form::{FormController, FormSource, FormState};
pub use models::{Balance, CalorieSummary, Entry, Group};
