use tracing::debug;

use super::sanitize::{clean_input_string, is_invalid_input, to_number};
use crate::error::{CalorieError, Result};

/// Sum the calorie values of one group.
///
/// Stops at the first value shaped like scientific notation and returns
/// `InvalidInput` carrying the matched text; later values are not read.
pub fn sum_group<I, S>(values: I) -> Result<f64>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut total = 0.0;

    for raw in values {
        let cleaned = clean_input_string(raw.as_ref());
        if let Some(matched) = is_invalid_input(&cleaned) {
            debug!(value = raw.as_ref(), matched, "rejecting calorie value");
            return Err(CalorieError::InvalidInput(matched.to_string()));
        }
        total += to_number(&cleaned);
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_empty_group() {
        let values: [&str; 0] = [];
        assert_eq!(sum_group(values).unwrap(), 0.0);
    }

    #[test]
    fn test_sum_with_separators_and_blanks() {
        assert_eq!(sum_group(["300", " 2 00 ", "", "+50"]).unwrap(), 550.0);
    }

    #[test]
    fn test_negative_sign_is_stripped() {
        assert_eq!(sum_group(["-100"]).unwrap(), 100.0);
    }

    #[test]
    fn test_first_invalid_wins() {
        let err = sum_group(["100", "1e2", "3E4"]).unwrap_err();
        assert!(matches!(err, CalorieError::InvalidInput(ref m) if m == "1e2"));
    }

    #[test]
    fn test_invalid_after_cleaning() {
        let err = sum_group(["1 e 5"]).unwrap_err();
        assert!(matches!(err, CalorieError::InvalidInput(ref m) if m == "1e5"));
    }

    #[test]
    fn test_garbage_propagates_nan() {
        assert!(sum_group(["100", "abc"]).unwrap().is_nan());
    }
}
