use std::fmt;

/// Sign classification of the remaining calories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    Surplus,
    Deficit,
}

impl Balance {
    /// CSS class name used in the rendered markup.
    pub fn class_name(&self) -> &'static str {
        match self {
            Balance::Surplus => "surplus",
            Balance::Deficit => "deficit",
        }
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Balance::Surplus => f.write_str("Surplus"),
            Balance::Deficit => f.write_str("Deficit"),
        }
    }
}

/// Totals produced by one successful calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieSummary {
    pub budgeted: f64,
    pub consumed: f64,
    pub burned: f64,
    pub remaining: f64,
}

impl CalorieSummary {
    pub fn new(budgeted: f64, consumed: f64, burned: f64) -> Self {
        Self {
            budgeted,
            consumed,
            burned,
            remaining: budgeted - consumed + burned,
        }
    }

    /// `Surplus` when remaining is zero or positive; NaN falls to `Deficit`.
    pub fn balance(&self) -> Balance {
        if self.remaining >= 0.0 {
            Balance::Surplus
        } else {
            Balance::Deficit
        }
    }

    /// Magnitude of the remaining calories, as displayed.
    pub fn magnitude(&self) -> f64 {
        self.remaining.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining() {
        let summary = CalorieSummary::new(2000.0, 1000.0, 100.0);
        assert_eq!(summary.remaining, 1100.0);
        assert_eq!(summary.balance(), Balance::Surplus);
    }

    #[test]
    fn test_zero_is_surplus() {
        let summary = CalorieSummary::new(500.0, 500.0, 0.0);
        assert_eq!(summary.balance(), Balance::Surplus);
    }

    #[test]
    fn test_deficit_magnitude() {
        let summary = CalorieSummary::new(1500.0, 2000.0, 0.0);
        assert_eq!(summary.balance(), Balance::Deficit);
        assert_eq!(summary.magnitude(), 500.0);
    }

    #[test]
    fn test_nan_is_deficit() {
        let summary = CalorieSummary::new(f64::NAN, 0.0, 0.0);
        assert_eq!(summary.balance(), Balance::Deficit);
    }
}
