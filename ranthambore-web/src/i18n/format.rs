use crate::i18n::tr;
use ranthambore_booking::format_inr;
use ranthambore_booking::quote::parse_date;

/// Rupee amount with Indian digit grouping; identical in every locale.
#[must_use]
pub fn fmt_inr(amount: i64) -> String {
    format_inr(amount)
}

#[must_use]
pub fn fmt_nights(nights: u32) -> String {
    tr("quote.nights", &[("count", &nights.to_string())])
}

/// Long form of an ISO date; anything unparseable is shown as typed.
#[must_use]
pub fn fmt_date(iso: &str) -> String {
    parse_date(iso).map_or_else(
        |_| iso.to_string(),
        |date| date.format("%-d %B %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_amounts_dates_and_nights() {
        crate::i18n::set_lang("en");
        assert_eq!(fmt_inr(123_456), "₹1,23,456");
        assert_eq!(fmt_date("2025-09-01"), "1 September 2025");
        assert_eq!(fmt_date("soon"), "soon");
        assert_eq!(fmt_nights(1), "1 night");
        assert_eq!(fmt_nights(3), "3 nights");
    }
}
