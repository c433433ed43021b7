//! Input coercion helpers for the setup form.
//!
//! The minutes field is free-form text: anything that does not parse as a
//! non-negative integer becomes 0 rather than an error. The seconds field is
//! a fixed choice list, so its helper only defends against a tampered or
//! stale DOM value.

use flip_timer::snap_seconds;

/// The values the seconds `<select>` offers.
pub const SECONDS_CHOICES: [u32; 12] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50, 55];

/// Coerce free-form minutes input to a non-negative integer.
/// Empty, non-numeric and negative input all become 0.
pub fn coerce_minutes(input: &str) -> u32 {
    input
        .trim()
        .parse::<i64>()
        .map_or(0, |v| v.clamp(0, i64::from(u32::MAX)) as u32)
}

/// Parse the seconds `<select>` value back to a grid value.
pub fn parse_seconds_choice(input: &str) -> u32 {
    snap_seconds(input.trim().parse::<u32>().unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_coercion_never_fails() {
        assert_eq!(coerce_minutes("12"), 12);
        assert_eq!(coerce_minutes(" 7 "), 7);
        assert_eq!(coerce_minutes(""), 0);
        assert_eq!(coerce_minutes("abc"), 0);
        assert_eq!(coerce_minutes("-3"), 0);
        assert_eq!(coerce_minutes("120"), 120);
        assert_eq!(coerce_minutes("99999999999999999999"), 0);
    }

    #[test]
    fn select_values_round_trip() {
        for &choice in &SECONDS_CHOICES {
            assert_eq!(parse_seconds_choice(&choice.to_string()), choice);
        }
        assert_eq!(parse_seconds_choice("garbage"), 0);
        assert_eq!(parse_seconds_choice("17"), 15);
    }
}
