use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalorieError;

/// A named category of entries on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
    Exercise,
}

impl Group {
    /// Meal groups, in evaluation order.
    pub const MEALS: [Group; 4] = [Group::Breakfast, Group::Lunch, Group::Dinner, Group::Snacks];

    /// Every group, in evaluation order.
    pub const ALL: [Group; 5] = [
        Group::Breakfast,
        Group::Lunch,
        Group::Dinner,
        Group::Snacks,
        Group::Exercise,
    ];

    /// Lowercase identifier used as the field id prefix.
    pub fn as_str(&self) -> &'static str {
        match self {
            Group::Breakfast => "breakfast",
            Group::Lunch => "lunch",
            Group::Dinner => "dinner",
            Group::Snacks => "snacks",
            Group::Exercise => "exercise",
        }
    }

    /// Human-readable title for menus and listings.
    pub fn title(&self) -> &'static str {
        match self {
            Group::Breakfast => "Breakfast",
            Group::Lunch => "Lunch",
            Group::Dinner => "Dinner",
            Group::Snacks => "Snacks",
            Group::Exercise => "Exercise",
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Group {
    type Err = CalorieError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Group::ALL
            .into_iter()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| CalorieError::UnknownGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("lunch".parse::<Group>().unwrap(), Group::Lunch);
        assert_eq!("SNACKS".parse::<Group>().unwrap(), Group::Snacks);
        assert_eq!(" Exercise ".parse::<Group>().unwrap(), Group::Exercise);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "brunch".parse::<Group>().unwrap_err();
        assert!(matches!(err, CalorieError::UnknownGroup(ref g) if g == "brunch"));
    }

    #[test]
    fn test_meals_exclude_exercise() {
        assert!(!Group::MEALS.contains(&Group::Exercise));
        assert_eq!(&Group::ALL[..4], &Group::MEALS[..]);
    }
}
