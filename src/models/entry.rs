use serde::{Deserialize, Serialize};

use super::Group;

/// A name/calorie field pair inside a group.
///
/// Both values are kept as the raw text typed into the form; only the
/// calorie text takes part in the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name_id: String,
    pub calories_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub calories: String,
}

impl Entry {
    /// Create an empty entry for the given 1-based position within a group.
    pub fn blank(group: Group, index: usize) -> Self {
        Self {
            name_id: format!("{}-{}-name", group, index),
            calories_id: format!("{}-{}-calories", group, index),
            name: String::new(),
            calories: String::new(),
        }
    }

    /// Label text for the name field.
    pub fn name_label(index: usize) -> String {
        format!("Entry {} Name", index)
    }

    /// Label text for the calories field.
    pub fn calories_label(index: usize) -> String {
        format!("Entry {} Calories", index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_ids() {
        let entry = Entry::blank(Group::Lunch, 3);
        assert_eq!(entry.name_id, "lunch-3-name");
        assert_eq!(entry.calories_id, "lunch-3-calories");
        assert!(entry.name.is_empty());
        assert!(entry.calories.is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Entry::name_label(2), "Entry 2 Name");
        assert_eq!(Entry::calories_label(2), "Entry 2 Calories");
    }
}
