//! Confirmation records produced by a successful (simulated) booking.
use crate::constants::BRAND_NAME;
use crate::money::format_inr;
use crate::quote::Quote;
use chrono::{DateTime, FixedOffset, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Indian Standard Time, UTC+05:30.
const IST_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;
const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowKind {
    Safari,
    Hotel,
    Chambal,
    Package,
}

crate::keyed_enum!(FlowKind, [
    Safari => "safari",
    Hotel => "hotel",
    Chambal => "chambal",
    Package => "package",
]);

impl FlowKind {
    #[must_use]
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Safari => "RTB",
            Self::Hotel => "HTL",
            Self::Chambal => "CHB",
            Self::Package => "PKG",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Safari => "Safari",
            Self::Hotel => "Hotel",
            Self::Chambal => "Chambal",
            Self::Package => "Package",
        }
    }
}

fn last_digits(epoch_ms: i64, count: usize) -> String {
    let digits = epoch_ms.unsigned_abs().to_string();
    let padded = format!("{digits:0>count$}");
    padded[padded.len() - count..].to_string()
}

/// Booking reference: flow prefix plus timestamp digits.
///
/// Hotels use the last eight digits of the epoch milliseconds; the other
/// flows use the last six followed by three random digits.
pub fn booking_id<R: Rng + ?Sized>(kind: FlowKind, epoch_ms: i64, rng: &mut R) -> String {
    match kind {
        FlowKind::Hotel => format!("{}{}", kind.id_prefix(), last_digits(epoch_ms, 8)),
        _ => {
            let suffix: u16 = rng.gen_range(0..1000);
            format!(
                "{}{}{suffix:03}",
                kind.id_prefix(),
                last_digits(epoch_ms, 6)
            )
        }
    }
}

/// `CNF` followed by eight upper-case base-36 characters.
pub fn confirmation_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut out = String::from("CNF");
    for _ in 0..8 {
        let idx = rng.gen_range(0..BASE36.len());
        out.push(char::from(BASE36[idx]));
    }
    out
}

/// Human-readable IST timestamp (`18 October 2026, 03:45 PM`).
#[must_use]
pub fn format_timestamp(epoch_ms: i64) -> String {
    let Some(offset) = FixedOffset::east_opt(IST_OFFSET_SECS) else {
        return epoch_ms.to_string();
    };
    DateTime::<Utc>::from_timestamp_millis(epoch_ms).map_or_else(
        || epoch_ms.to_string(),
        |utc| {
            utc.with_timezone(&offset)
                .format("%d %B %Y, %I:%M %p")
                .to_string()
        },
    )
}

/// One echoed draft value, grouped under a section heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    pub section: String,
    pub label: String,
    pub value: String,
}

impl Detail {
    #[must_use]
    pub fn new(section: &str, label: &str, value: impl Into<String>) -> Self {
        Self {
            section: section.to_string(),
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// What a flow hands to the gateway once its draft validates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub kind: FlowKind,
    pub details: Vec<Detail>,
    pub quote: Quote,
    pub submitted_at_ms: i64,
}

impl BookingRequest {
    #[must_use]
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationRecord {
    pub kind: FlowKind,
    pub booking_id: String,
    pub confirmation_number: String,
    pub issued_at: String,
    pub details: Vec<Detail>,
    pub quote: Quote,
    pub status: String,
    pub payment_status: String,
}

impl ConfirmationRecord {
    pub fn issue<R: Rng + ?Sized>(request: BookingRequest, rng: &mut R) -> Self {
        let booking_id = booking_id(request.kind, request.submitted_at_ms, rng);
        let confirmation_number = confirmation_number(rng);
        log::info!("{} booking confirmed as {booking_id}", request.kind.title());
        Self {
            kind: request.kind,
            booking_id,
            confirmation_number,
            issued_at: format_timestamp(request.submitted_at_ms),
            details: request.details,
            quote: request.quote,
            status: "CONFIRMED".into(),
            payment_status: "PAID".into(),
        }
    }

    #[must_use]
    pub fn total(&self) -> String {
        format_inr(self.quote.total)
    }

    #[must_use]
    pub fn detail(&self, label: &str) -> Option<&str> {
        self.details
            .iter()
            .find(|d| d.label == label)
            .map(|d| d.value.as_str())
    }

    /// Sections in first-seen order with their lines.
    #[must_use]
    pub fn sections(&self) -> Vec<(&str, Vec<&Detail>)> {
        let mut grouped: Vec<(&str, Vec<&Detail>)> = Vec::new();
        for detail in &self.details {
            match grouped.iter_mut().find(|(name, _)| *name == detail.section) {
                Some((_, lines)) => lines.push(detail),
                None => grouped.push((detail.section.as_str(), vec![detail])),
            }
        }
        grouped
    }

    #[must_use]
    pub fn download_filename(&self) -> String {
        format!("{}_Booking_{}.txt", self.kind.title(), self.booking_id)
    }

    /// Plain-text summary offered as a download.
    #[must_use]
    pub fn to_text(&self) -> String {
        PlainText(self).to_string()
    }

    /// Short message for the share sheet or clipboard.
    #[must_use]
    pub fn share_text(&self) -> String {
        ShareText(self).to_string()
    }
}

struct PlainText<'a>(&'a ConfirmationRecord);

impl fmt::Display for PlainText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        let title = format!("{} Booking Confirmation", record.kind.title());
        writeln!(f, "{title}")?;
        writeln!(f, "{}", "=".repeat(title.chars().count()))?;
        writeln!(f)?;
        writeln!(f, "Booking ID: {}", record.booking_id)?;
        writeln!(f, "Confirmation Number: {}", record.confirmation_number)?;
        writeln!(f, "Booking Date: {}", record.issued_at)?;
        for (section, lines) in record.sections() {
            writeln!(f)?;
            writeln!(f, "{section}:")?;
            for line in lines {
                writeln!(f, "- {}: {}", line.label, line.value)?;
            }
        }
        writeln!(f)?;
        writeln!(f, "Total Amount: {}", record.total())?;
        writeln!(f)?;
        writeln!(f, "Status: {}", record.status)?;
        writeln!(f, "Payment Status: {}", record.payment_status)?;
        writeln!(f)?;
        write!(f, "Thank you for booking with {BRAND_NAME}!")
    }
}

struct ShareText<'a>(&'a ConfirmationRecord);

impl fmt::Display for ShareText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        writeln!(f, "{} Booking Confirmed!", record.kind.title())?;
        writeln!(f)?;
        writeln!(f, "Booking ID: {}", record.booking_id)?;
        for detail in record.details.iter().take(4) {
            writeln!(f, "{}: {}", detail.label, detail.value)?;
        }
        write!(
            f,
            "Total: {}\n\nStatus: {}\nBooked via {BRAND_NAME}",
            record.total(),
            record.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::{LineKind, QuoteBuilder};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request(kind: FlowKind) -> BookingRequest {
        BookingRequest {
            kind,
            details: vec![
                Detail::new("Guest Information", "Name", "Asha Rao"),
                Detail::new("Guest Information", "Email", "asha@example.com"),
                Detail::new("Booking Details", "Room Type", "Deluxe Room"),
            ],
            quote: QuoteBuilder::new()
                .charge(LineKind::Room, "Deluxe", 30_000)
                .taxed()
                .build(),
            submitted_at_ms: 1_760_781_234_567,
        }
    }

    #[test]
    fn hotel_ids_use_eight_timestamp_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            booking_id(FlowKind::Hotel, 1_760_781_234_567, &mut rng),
            "HTL81234567"
        );
    }

    #[test]
    fn safari_ids_append_three_random_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let id = booking_id(FlowKind::Safari, 1_760_781_234_567, &mut rng);
        assert!(id.starts_with("RTB234567"));
        assert_eq!(id.len(), 12);
        assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn short_timestamps_are_zero_padded() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(booking_id(FlowKind::Hotel, 42, &mut rng), "HTL00000042");
    }

    #[test]
    fn confirmation_numbers_are_base36() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let cnf = confirmation_number(&mut rng);
        assert!(cnf.starts_with("CNF"));
        assert_eq!(cnf.len(), 11);
        assert!(cnf[3..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn timestamps_render_in_ist() {
        assert_eq!(format_timestamp(0), "01 January 1970, 05:30 AM");
    }

    #[test]
    fn text_summary_groups_sections() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let record = ConfirmationRecord::issue(request(FlowKind::Hotel), &mut rng);
        let text = record.to_text();
        assert!(text.starts_with("Hotel Booking Confirmation\n=========================="));
        assert!(text.contains("Guest Information:\n- Name: Asha Rao\n- Email: asha@example.com"));
        assert!(text.contains("Total Amount: ₹33,600"));
        assert!(text.contains("Payment Status: PAID"));
        assert!(text.ends_with("Thank you for booking with Ranthambore 360!"));
        assert_eq!(
            record.download_filename(),
            format!("Hotel_Booking_{}.txt", record.booking_id)
        );
    }

    #[test]
    fn share_text_mentions_total() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let record = ConfirmationRecord::issue(request(FlowKind::Package), &mut rng);
        let share = record.share_text();
        assert_eq!(
            share,
            format!(
                "Package Booking Confirmed!\n\nBooking ID: {}\nName: Asha Rao\n\
                 Email: asha@example.com\nRoom Type: Deluxe Room\nTotal: ₹33,600\n\n\
                 Status: CONFIRMED\nBooked via Ranthambore 360",
                record.booking_id
            )
        );
    }

    #[test]
    fn text_summary_lists_every_line_once() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let record = ConfirmationRecord::issue(request(FlowKind::Chambal), &mut rng);
        let text = record.to_text();
        assert_eq!(text.matches("- Name: Asha Rao\n").count(), 1);
        assert_eq!(text.matches("Booking ID: ").count(), 1);
        assert_eq!(text.lines().nth(1), Some("=".repeat(28).as_str()));
        assert_eq!(FlowKind::Chambal.to_string(), "chambal");
    }
}
