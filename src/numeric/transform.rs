//! Per-type conversion between a stored value and what the user sees and types.

use std::fmt;
use std::str::FromStr;

use super::error::{TransformParseError, closest_name};

/// Degrees in one full turn.
pub const FULL_TURN: f64 = 360.0;

/// The display/parse mapping applied to a widget's stored value.
///
/// Selected once when a widget is built and fixed for its lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransformType {
    /// The stored value, unchanged.
    #[default]
    Raw,
    /// The whole number of turns in an angle stored in degrees.
    WholeRotation,
    /// The signed remainder of an angle after removing whole turns.
    PartRotation,
    /// A fraction shown as a percentage.
    Percent,
}

impl TransformType {
    /// Every transform type, in declaration order.
    pub const ALL: [TransformType; 4] = [
        TransformType::Raw,
        TransformType::WholeRotation,
        TransformType::PartRotation,
        TransformType::Percent,
    ];

    const NAMES: [&'static str; 4] = ["raw", "whole-rotation", "part-rotation", "percent"];

    /// The markup name of this transform type.
    pub fn name(self) -> &'static str {
        match self {
            TransformType::Raw => Self::NAMES[0],
            TransformType::WholeRotation => Self::NAMES[1],
            TransformType::PartRotation => Self::NAMES[2],
            TransformType::Percent => Self::NAMES[3],
        }
    }

    /// Maps a stored value to the number shown to the user.
    pub fn format(self, value: f64) -> f64 {
        match self {
            TransformType::Raw => value,
            TransformType::WholeRotation => split_rotation(value).0,
            TransformType::PartRotation => split_rotation(value).1,
            TransformType::Percent => value * 100.0,
        }
    }

    /// Maps a number entered by the user back to a stored value.
    ///
    /// The rotation types split `current` at call time and keep the facet they
    /// do not display, so editing the turn count preserves the remainder and
    /// editing the remainder preserves the turn count.
    pub fn parse(self, input: f64, current: f64) -> f64 {
        match self {
            TransformType::Raw => input,
            TransformType::WholeRotation => {
                let (_, remainder) = split_rotation(current);
                input * FULL_TURN + remainder
            }
            TransformType::PartRotation => {
                let (rotations, _) = split_rotation(current);
                rotations * FULL_TURN + input
            }
            TransformType::Percent => input / 100.0,
        }
    }

    /// Step used when the bounds carry no explicit step.
    pub fn default_step(self) -> f64 {
        match self {
            TransformType::Percent => 0.01,
            _ => 1.0,
        }
    }

    /// Multiplier applied to drag-derived changes.
    pub fn drag_scale(self) -> f64 {
        match self {
            TransformType::WholeRotation => FULL_TURN,
            TransformType::Percent => 0.01,
            TransformType::Raw | TransformType::PartRotation => 1.0,
        }
    }

    /// Size of one keyboard step. A turn-count facet always steps a whole turn;
    /// every other type steps by the widget's effective step.
    pub fn key_step(self, effective_step: f64) -> f64 {
        match self {
            TransformType::WholeRotation => FULL_TURN,
            _ => effective_step,
        }
    }

    /// Renders `format(value)` as text with at most `precision` decimals.
    ///
    /// The part-rotation remainder stays inside `(-360, 360)` after rounding.
    pub fn display(self, value: f64, precision: usize) -> String {
        let mut formatted = self.format(value);
        if self == TransformType::PartRotation {
            let largest = FULL_TURN - 10f64.powi(-(precision.min(12) as i32));
            formatted = formatted.clamp(-largest, largest);
        }
        let shown = format_number(formatted, precision);
        match self {
            TransformType::PartRotation if shown.starts_with('-') => shown,
            TransformType::PartRotation => format!("+{shown}"),
            _ => shown,
        }
    }
}

impl fmt::Display for TransformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformType {
    type Err = TransformParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TransformType::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TransformParseError {
                name: trimmed.to_string(),
                suggestion: closest_name(trimmed, &Self::NAMES),
            })
    }
}

/// Splits an angle into `(whole turns, signed remainder)`, both truncated toward zero.
pub fn split_rotation(value: f64) -> (f64, f64) {
    // Adding 0.0 folds -0.0 into 0.0.
    let rotations = (value / FULL_TURN).trunc() + 0.0;
    let remainder = value - rotations * FULL_TURN + 0.0;
    (rotations, remainder)
}

/// Formats a number with at most `precision` decimals, trimming trailing zeros.
pub fn format_number(value: f64, precision: usize) -> String {
    let mut text = format!("{value:.precision$}");
    if text.contains('.') {
        let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(trimmed);
    }
    if text == "-0" {
        text.remove(0);
    }
    text
}

/// Parses text typed by the user as a plain decimal number.
///
/// Accepts an optional sign, digits, an optional fraction and an optional
/// exponent. Anything else, including `inf` and `NaN`, yields `None`.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.chars().all(is_decimal_char) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Characters that may appear in a decimal number.
pub(crate) fn is_decimal_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trips() {
        for value in [0.0, -12.5, 390.0, 1e-9, 123456.789] {
            let shown = TransformType::Raw.format(value);
            assert_eq!(TransformType::Raw.parse(shown, 0.0), value);
        }
    }

    #[test]
    fn rotation_facets_split_and_recombine() {
        assert_eq!(TransformType::WholeRotation.format(390.0), 1.0);
        assert_eq!(TransformType::PartRotation.format(390.0), 30.0);
        assert_eq!(TransformType::PartRotation.display(390.0, 3), "+30");

        let value = TransformType::WholeRotation.parse(2.0, 390.0);
        assert_eq!(value, 750.0);
        let value = TransformType::PartRotation.parse(45.0, value);
        assert_eq!(value, 765.0);
    }

    #[test]
    fn negative_rotations_truncate_toward_zero() {
        assert_eq!(split_rotation(-390.0), (-1.0, -30.0));
        assert_eq!(TransformType::WholeRotation.display(-30.0, 3), "0");
        assert_eq!(TransformType::PartRotation.display(-30.0, 3), "-30");
        assert_eq!(TransformType::PartRotation.display(0.0, 3), "+0");
    }

    #[test]
    fn rounded_remainder_never_shows_a_full_turn() {
        assert_eq!(TransformType::PartRotation.display(359.9996, 3), "+359.999");
        assert_eq!(TransformType::PartRotation.display(-359.9996, 3), "-359.999");
        assert_eq!(TransformType::PartRotation.display(359.6, 0), "+359");
        assert_eq!(TransformType::WholeRotation.display(359.9996, 3), "0");
    }

    #[test]
    fn only_turn_counts_override_the_key_step() {
        assert_eq!(TransformType::WholeRotation.key_step(15.0), FULL_TURN);
        assert_eq!(TransformType::PartRotation.key_step(15.0), 15.0);
        assert_eq!(TransformType::Percent.key_step(0.01), 0.01);
    }

    #[test]
    fn percent_scales_by_hundred() {
        assert_eq!(TransformType::Percent.format(0.5), 50.0);
        assert_eq!(TransformType::Percent.parse(75.0, 0.5), 0.75);
        assert_eq!(TransformType::Percent.display(0.07, 3), "7");
        assert_eq!(TransformType::Percent.default_step(), 0.01);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for ty in TransformType::ALL {
            assert_eq!(ty.to_string().parse::<TransformType>(), Ok(ty));
        }
        let err = "part-rotaton".parse::<TransformType>().unwrap_err();
        assert_eq!(err.suggestion, Some("part-rotation"));
    }

    #[test]
    fn number_formatting_trims_zeros() {
        assert_eq!(format_number(12.0, 3), "12");
        assert_eq!(format_number(12.5, 3), "12.5");
        assert_eq!(format_number(0.1234, 3), "0.123");
        assert_eq!(format_number(-0.0001, 3), "0");
    }

    #[test]
    fn decimal_parsing_rejects_garbage() {
        assert_eq!(parse_decimal(" 10 "), Some(10.0));
        assert_eq!(parse_decimal("+30"), Some(30.0));
        assert_eq!(parse_decimal("-1.5e2"), Some(-150.0));
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("10abc"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("1-2"), None);
    }
}
