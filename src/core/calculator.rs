//! Pure split computation and the text shapes handed to the sinks.
//!
//! Nothing here touches storage or performs I/O. Parse failures are reported as
//! [`SplitError::ParseError`] by the low-level parsers and degraded to
//! [`SplitResult::INVALID`] by [`compute`].

use crate::domain::model::{BillInput, PersistedSettings, SplitResult};
use crate::utils::error::{Result, SplitError};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const CURRENCY_SYMBOL: &str = "R$";

/// Parses the total as a decimal number. Empty and non-finite input is rejected.
pub fn parse_total(text: &str) -> Result<f64> {
    if text.is_empty() {
        return Err(SplitError::parse("total amount", text));
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(SplitError::parse("total amount", text)),
    }
}

pub fn parse_person_count(text: &str) -> Result<i32> {
    text.parse::<i32>()
        .map_err(|_| SplitError::parse("person count", text))
}

/// Half-up rounding to `decimals` places. Ties go away from zero, like `%.2f`.
pub fn round_half_up(value: Decimal, decimals: u32) -> Decimal {
    value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
}

/// Exact decimal for a parsed total, taken from its shortest round-trip text so
/// `4.35` stays `4.35` instead of the binary value just below it. Totals outside
/// the decimal range yield `None`.
fn total_as_decimal(total: f64) -> Option<Decimal> {
    Decimal::from_str(&total.to_string()).ok()
}

fn split_amount(total: f64, people: i32) -> Option<f64> {
    let total = total_as_decimal(total)?;
    let share = total.checked_div(Decimal::from(people))?;
    round_half_up(share, 2)
        .to_f64()
        .filter(|amount| amount.is_finite())
}

pub fn compute(input: &BillInput) -> SplitResult {
    let total = match parse_total(&input.total_amount_text) {
        Ok(total) => total,
        Err(e) => {
            tracing::trace!("{}", e);
            return SplitResult::INVALID;
        }
    };
    let people = match parse_person_count(&input.person_count_text) {
        Ok(people) if people > 0 => people,
        Ok(people) => {
            tracing::trace!("Person count {} is not positive", people);
            return SplitResult::INVALID;
        }
        Err(e) => {
            tracing::trace!("{}", e);
            return SplitResult::INVALID;
        }
    };

    match split_amount(total, people) {
        Some(per_person_amount) => SplitResult {
            per_person_amount,
            valid: true,
        },
        None => {
            tracing::trace!("Total {} is out of range", total);
            SplitResult::INVALID
        }
    }
}

/// What would be persisted for the current texts. Unparseable fields become zero,
/// so clearing a field overwrites the stored value with zero.
pub fn candidate_settings(input: &BillInput) -> PersistedSettings {
    PersistedSettings {
        total_amount: parse_total(&input.total_amount_text).unwrap_or(0.0),
        person_count: parse_person_count(&input.person_count_text).unwrap_or(0),
    }
}

/// Two decimals with a comma separator, e.g. `25,00`.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount).replace('.', ",")
}

pub fn display_text(result: &SplitResult) -> String {
    let amount = if result.valid {
        result.per_person_amount
    } else {
        0.0
    };
    format!("{} {}", CURRENCY_SYMBOL, format_amount(amount))
}

pub fn speech_text(amount: f64) -> String {
    format!("O valor por pessoa é {} reais", format_amount(amount))
}

pub fn share_text(amount: f64) -> String {
    format!("Valor por pessoa: {} {}", CURRENCY_SYMBOL, format_amount(amount))
}

/// Text used to seed an input field from a stored value. Non-positive values leave
/// the field empty.
pub fn seed_total_text(total_amount: f64) -> String {
    if total_amount > 0.0 {
        total_amount.to_string()
    } else {
        String::new()
    }
}

pub fn seed_person_count_text(person_count: i32) -> String {
    if person_count > 0 {
        person_count.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(total: &str, people: &str) -> SplitResult {
        compute(&BillInput::new(total, people))
    }

    #[test]
    fn test_even_split() {
        let result = split("100", "4");
        assert!(result.valid);
        assert_eq!(result.per_person_amount, 25.0);
    }

    #[test]
    fn test_empty_total_is_invalid() {
        assert_eq!(split("", "3"), SplitResult::INVALID);
        assert_eq!(split("120", ""), SplitResult::INVALID);
    }

    #[test]
    fn test_non_positive_people_is_invalid() {
        assert_eq!(split("50.5", "0"), SplitResult::INVALID);
        assert_eq!(split("50.5", "-2"), SplitResult::INVALID);
    }

    #[test]
    fn test_rounds_instead_of_truncating() {
        let result = split("99.99", "3");
        assert!(result.valid);
        assert_eq!(result.per_person_amount, 33.33);

        // 10 / 3 = 3.333.. and 20 / 3 = 6.666..
        assert_eq!(split("10", "3").per_person_amount, 3.33);
        assert_eq!(split("20", "3").per_person_amount, 6.67);
        assert_eq!(split("0.05", "2").per_person_amount, 0.03);
    }

    #[test]
    fn test_decimal_ties_round_up() {
        // 2.175, 1.005 and 0.285 sit just below the tie as binary floats.
        assert_eq!(split("4.35", "2").per_person_amount, 2.18);
        assert_eq!(split("2.01", "2").per_person_amount, 1.01);
        assert_eq!(split("0.285", "1").per_person_amount, 0.29);
        assert_eq!(split("-4.35", "2").per_person_amount, -2.18);
    }

    #[test]
    fn test_huge_total_is_invalid() {
        assert_eq!(split("1e308", "1"), SplitResult::INVALID);
        assert_eq!(split("1.7976931348623157e308", "3"), SplitResult::INVALID);
        assert_eq!(display_text(&split("1e308", "1")), "R$ 0,00");

        let large = split("1000000000000", "4");
        assert!(large.valid);
        assert_eq!(large.per_person_amount, 250000000000.0);
    }

    #[test]
    fn test_malformed_input_degrades() {
        assert_eq!(split("abc", "3"), SplitResult::INVALID);
        assert_eq!(split("12,50", "3"), SplitResult::INVALID);
        assert_eq!(split("100", "2.5"), SplitResult::INVALID);
        assert_eq!(split("NaN", "2"), SplitResult::INVALID);
        assert_eq!(split("inf", "2"), SplitResult::INVALID);
        assert_eq!(split("100", "99999999999"), SplitResult::INVALID);
    }

    #[test]
    fn test_zero_total_is_valid() {
        let result = split("0", "5");
        assert!(result.valid);
        assert_eq!(result.per_person_amount, 0.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        let input = BillInput::new("87.30", "7");
        assert_eq!(compute(&input), compute(&input));
    }

    #[test]
    fn test_parse_errors_are_reported() {
        assert!(matches!(
            parse_total(""),
            Err(SplitError::ParseError { .. })
        ));
        assert!(matches!(
            parse_person_count("x"),
            Err(SplitError::ParseError { .. })
        ));
        assert_eq!(parse_total("50.5").unwrap(), 50.5);
    }

    #[test]
    fn test_candidate_uses_zero_for_unparseable_fields() {
        assert_eq!(
            candidate_settings(&BillInput::new("", "4")),
            PersistedSettings::new(0.0, 4)
        );
        assert_eq!(
            candidate_settings(&BillInput::new("80", "abc")),
            PersistedSettings::new(80.0, 0)
        );
        // Person count zero is still persisted even though the split is invalid.
        assert_eq!(
            candidate_settings(&BillInput::new("50.5", "0")),
            PersistedSettings::new(50.5, 0)
        );
    }

    #[test]
    fn test_text_shapes() {
        assert_eq!(display_text(&split("100", "4")), "R$ 25,00");
        assert_eq!(display_text(&SplitResult::INVALID), "R$ 0,00");
        assert_eq!(speech_text(33.33), "O valor por pessoa é 33,33 reais");
        assert_eq!(share_text(12.5), "Valor por pessoa: R$ 12,50");
    }

    #[test]
    fn test_seed_text_round_trips() {
        let stored = PersistedSettings::new(150.75, 3);
        let input = BillInput::new(
            seed_total_text(stored.total_amount),
            seed_person_count_text(stored.person_count),
        );
        assert_eq!(input.total_amount_text, "150.75");
        assert_eq!(candidate_settings(&input), stored);

        assert_eq!(seed_total_text(0.0), "");
        assert_eq!(seed_person_count_text(0), "");
    }
}
