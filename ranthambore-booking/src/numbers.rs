//! Numeric helpers centralizing rounding and safe casts.

use crate::constants::BASIS_POINTS;
use num_traits::cast::cast;

/// Apply a basis-point rate to a whole-rupee amount, rounding half away from zero.
///
/// `apply_rate_bp(30_000, 1_200)` is the 12% tax on ₹30,000 (₹3,600).
#[must_use]
pub fn apply_rate_bp(amount: i64, rate_bp: u32) -> i64 {
    let scaled = i128::from(amount) * i128::from(rate_bp);
    let divisor = i128::from(BASIS_POINTS);
    let half = divisor / 2;
    let rounded = if scaled >= 0 {
        (scaled + half) / divisor
    } else {
        (scaled - half) / divisor
    };
    cast::<i128, i64>(rounded).unwrap_or(if rounded > 0 { i64::MAX } else { i64::MIN })
}

/// Multiply a whole-rupee amount, saturating instead of overflowing.
#[must_use]
pub fn scale_amount(amount: i64, factor: u32) -> i64 {
    amount.saturating_mul(i64::from(factor))
}

/// Parse the leading integer of a free-form string, the way listing pages
/// pass prices around (`"199"`, `"199.99"`, `" 8000 "`).
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a small positive count from a `<select>` value.
#[must_use]
pub fn parse_count(raw: &str) -> Option<u32> {
    parse_leading_int(raw).and_then(|value| cast::<i64, u32>(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_point_rates_round_half_away_from_zero() {
        assert_eq!(apply_rate_bp(30_000, 1_200), 3_600);
        assert_eq!(apply_rate_bp(30_000, 1_000), 3_000);
        assert_eq!(apply_rate_bp(25, 1_000), 3);
        assert_eq!(apply_rate_bp(-25, 1_000), -3);
        assert_eq!(apply_rate_bp(14_925, 13_000), 19_403);
        assert_eq!(apply_rate_bp(0, 1_500), 0);
        assert_eq!(apply_rate_bp(i64::MAX, 20_000), i64::MAX);
    }

    #[test]
    fn scaling_saturates() {
        assert_eq!(scale_amount(199, 75), 14_925);
        assert_eq!(scale_amount(i64::MAX, 2), i64::MAX);
    }

    #[test]
    fn leading_int_matches_listing_prices() {
        assert_eq!(parse_leading_int("199"), Some(199));
        assert_eq!(parse_leading_int("199.99"), Some(199));
        assert_eq!(parse_leading_int(" 8000 "), Some(8000));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn counts_reject_negatives() {
        assert_eq!(parse_count("4"), Some(4));
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count(""), None);
    }
}
