//! Stepper actions and quantity parsing.

use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    Increase,
    Decrease,
}

impl FromStr for StepAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "increase" => Ok(StepAction::Increase),
            "decrease" => Ok(StepAction::Decrease),
            _ => Err(()),
        }
    }
}

impl StepAction {
    /// Applies the action to `old`, never going below zero.
    pub fn apply(self, old: u64) -> u64 {
        match self {
            StepAction::Increase => old.saturating_add(1),
            StepAction::Decrease => old.saturating_sub(1),
        }
    }
}

/// Parse-or-zero: a trimmed non-negative integer. Anything else (empty,
/// text, negative, beyond `u64::MAX`) is 0.
///
/// Parses into the same type [`StepAction::apply`] writes back, so every
/// value the stepper produces reads back unchanged.
pub fn parse_quantity(raw: &str) -> u64 {
    raw.trim().parse::<u64>().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!("increase".parse(), Ok(StepAction::Increase));
        assert_eq!(" decrease ".parse(), Ok(StepAction::Decrease));
        assert!("add".parse::<StepAction>().is_err());
    }

    #[test]
    fn apply_floors_at_zero() {
        assert_eq!(StepAction::Increase.apply(0), 1);
        assert_eq!(StepAction::Decrease.apply(5), 4);
        assert_eq!(StepAction::Decrease.apply(0), 0);
    }

    #[test]
    fn parse_or_zero() {
        assert_eq!(parse_quantity("7"), 7);
        assert_eq!(parse_quantity(" 12 "), 12);
        assert_eq!(parse_quantity(""), 0);
        assert_eq!(parse_quantity("abc"), 0);
        assert_eq!(parse_quantity("2.5"), 0);
        assert_eq!(parse_quantity("-3"), 0);
        assert_eq!(parse_quantity("99999999999999999999999"), 0);
    }

    #[test]
    fn applied_values_parse_back() {
        for old in [0, 1, i64::MAX as u64, u64::MAX - 1, u64::MAX] {
            for action in [StepAction::Increase, StepAction::Decrease] {
                let new = action.apply(old);
                assert_eq!(parse_quantity(&new.to_string()), new);
            }
        }
        assert_eq!(parse_quantity("9223372036854775808"), 9_223_372_036_854_775_808);
    }
}
