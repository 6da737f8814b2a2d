mod entry;
mod group;
mod summary;

pub use entry::Entry;
pub use group::Group;
pub use summary::{Balance, CalorieSummary};
