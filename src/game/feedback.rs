//! Guess evaluation and input validation.

use std::{cmp::Ordering, fmt};

use thiserror::Error;

use super::target::{MAX_GUESS, MIN_GUESS};

/// How a guess compares to the target.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Feedback {
    High,
    Low,
    Correct,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Feedback::High => "High",
            Feedback::Low => "Low",
            Feedback::Correct => "Correct",
        };
        write!(f, "{}", s)
    }
}

/// Rejected guess text. Never reaches the state machine's history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no guess entered")]
    Empty,

    #[error("{0:?} is not a whole number")]
    NotANumber(String),

    #[error("{0} is outside 1..=100")]
    OutOfRange(i64),
}

/// Compare a validated guess against the target.
pub fn evaluate(guess: u8, target: u8) -> Feedback {
    match guess.cmp(&target) {
        Ordering::Greater => Feedback::High,
        Ordering::Less => Feedback::Low,
        Ordering::Equal => Feedback::Correct,
    }
}

/// Parse raw input into a guess in `MIN_GUESS..=MAX_GUESS`.
///
/// Surrounding whitespace is ignored; anything else that is not a plain
/// integer (`"4.5"`, `"12abc"`, `"+"`) is rejected.
pub fn parse_guess(input: &str) -> Result<u8, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber(trimmed.to_string()))?;

    if !(i64::from(MIN_GUESS)..=i64::from(MAX_GUESS)).contains(&value) {
        return Err(ValidationError::OutOfRange(value));
    }

    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_exhaustive() {
        for g in MIN_GUESS..=MAX_GUESS {
            for t in MIN_GUESS..=MAX_GUESS {
                let expected = if g > t {
                    Feedback::High
                } else if g < t {
                    Feedback::Low
                } else {
                    Feedback::Correct
                };
                assert_eq!(evaluate(g, t), expected, "guess {g} target {t}");
            }
        }
    }

    #[test]
    fn test_parse_guess_accepts_bounds_and_whitespace() {
        assert_eq!(parse_guess("1"), Ok(1));
        assert_eq!(parse_guess("100"), Ok(100));
        assert_eq!(parse_guess("  42 \n"), Ok(42));
    }

    #[test]
    fn test_parse_guess_rejects_out_of_range() {
        assert_eq!(parse_guess("0"), Err(ValidationError::OutOfRange(0)));
        assert_eq!(parse_guess("101"), Err(ValidationError::OutOfRange(101)));
        assert_eq!(parse_guess("-5"), Err(ValidationError::OutOfRange(-5)));
    }

    #[test]
    fn test_parse_guess_rejects_non_numeric() {
        assert_eq!(parse_guess(""), Err(ValidationError::Empty));
        assert_eq!(parse_guess("   "), Err(ValidationError::Empty));
        assert!(matches!(parse_guess("abc"), Err(ValidationError::NotANumber(_))));
        assert!(matches!(parse_guess("4.5"), Err(ValidationError::NotANumber(_))));
        assert!(matches!(parse_guess("12abc"), Err(ValidationError::NotANumber(_))));
        assert!(matches!(
            parse_guess("99999999999999999999999"),
            Err(ValidationError::NotANumber(_))
        ));
    }

    #[test]
    fn test_feedback_display() {
        assert_eq!(Feedback::High.to_string(), "High");
        assert_eq!(Feedback::Low.to_string(), "Low");
        assert_eq!(Feedback::Correct.to_string(), "Correct");
    }
}
