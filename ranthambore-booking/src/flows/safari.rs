//! Ranthambore jungle safari: selection page, relay, and booking page.
use super::{
    BookingFlow, FlowConfig, FlowMessages, address_field, email_field, phone_field, select_field,
    terms_field,
};
use crate::catalog::{Offered, SafariKind, SafariTiming, tier_or_default};
use crate::confirmation::{Detail, FlowKind};
use crate::constants::{SAFARI_ADDRESS_MIN_LEN, SAFARI_TOAST_MS};
use crate::passengers::{Gender, IdKind, PassengerList};
use crate::quote::{LineKind, Quote, QuoteBuilder};
use crate::relay::{RelayField, SafariRelay};
use crate::validate::{FieldRule, FieldSpec, FormValues, ValidationReport, validate};
use serde::{Deserialize, Serialize};

/// Values typed on the safari selection page.
pub type SafariSelection = SafariRelay;

/// Fields of the safari selection page, in display order.
#[must_use]
pub fn selection_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("booking-date", "Booking date", "Please select date")
            .rule(FieldRule::Required)
            .rule(FieldRule::Date),
        FieldSpec::new("name", "Full name", "Please enter your full name").rule(FieldRule::Required),
        email_field(),
        phone_field("mobile"),
        select_field("timing", "Safari timing", "Please select safari timing"),
        select_field("safari", "Safari type", "Please select safari type"),
        select_field("zone", "Safari zone", "Please select safari zone"),
    ]
}

fn selection_values(selection: &SafariSelection) -> FormValues {
    FormValues::new()
        .with_text("booking-date", &selection.booking_date)
        .with_text("name", &selection.name)
        .with_text("email", &selection.email)
        .with_text("mobile", &selection.mobile)
        .with_text("timing", &selection.timing)
        .with_text("safari", &selection.safari)
        .with_text("zone", &selection.zone)
}

/// Validate the selection page. The page shows only the first message.
#[must_use]
pub fn validate_selection(selection: &SafariSelection) -> ValidationReport {
    validate(&selection_fields(), &selection_values(selection))
}

/// Validated, sanitised relay ready to be written; the report otherwise.
///
/// # Errors
///
/// Returns the validation report when any selection field is invalid.
pub fn prepare_relay(selection: &SafariSelection) -> Result<SafariRelay, ValidationReport> {
    let report = validate_selection(selection);
    if report.is_valid() {
        Ok(selection.sanitized())
    } else {
        Err(report)
    }
}

/// Booking page draft: relayed selection plus everything typed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafariBookingDraft {
    pub relay: SafariRelay,
    pub passengers: PassengerList,
    pub state: String,
    pub address: String,
    pub terms: bool,
}

impl SafariBookingDraft {
    #[must_use]
    pub fn from_relay(relay: SafariRelay) -> Self {
        Self {
            relay,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn safari_kind(&self) -> SafariKind {
        tier_or_default(Some(self.relay.safari.as_str()))
    }

    #[must_use]
    pub fn timing_label(&self) -> &str {
        match SafariTiming::from_key(&self.relay.timing) {
            Some(timing) => timing.label(),
            None => self.relay.selection(RelayField::Timing),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafariFlow {
    config: FlowConfig,
}

impl Default for SafariFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl SafariFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FlowConfig {
                kind: FlowKind::Safari,
                rates: Vec::new(),
                fields: vec![
                    select_field("state", "State", "Please select your state"),
                    address_field(SAFARI_ADDRESS_MIN_LEN),
                    terms_field(),
                ],
                messages: FlowMessages {
                    invalid: "Please complete all passenger and contact details.",
                    processing: "Processing payment...",
                    success: "Your Safari Booking is Confirmed!",
                    toast_ms: SAFARI_TOAST_MS,
                },
            },
        }
    }
}

impl BookingFlow for SafariFlow {
    type Draft = SafariBookingDraft;

    fn config(&self) -> &FlowConfig {
        &self.config
    }

    fn form_values(&self, draft: &SafariBookingDraft) -> FormValues {
        FormValues::new()
            .with_text("state", &draft.state)
            .with_text("address", &draft.address)
            .with_flag("terms", draft.terms)
    }

    fn validate(&self, draft: &SafariBookingDraft) -> ValidationReport {
        let mut report = draft.passengers.validate();
        report.merge(validate(&self.config.fields, &self.form_values(draft)));
        report
    }

    /// One flat payment per booking; party size and nationality do not change it.
    fn quote(&self, draft: &SafariBookingDraft) -> Quote {
        let offering = draft.safari_kind().offering();
        QuoteBuilder::new()
            .charge(LineKind::Base, offering.name, offering.base_price)
            .build()
    }

    fn details(&self, draft: &SafariBookingDraft) -> Vec<Detail> {
        const GUEST: &str = "Guest Information";
        const TRIP: &str = "Safari Details";
        const PASSENGERS: &str = "Passengers";
        let relay = &draft.relay;
        let mut details = vec![
            Detail::new(GUEST, "Name", relay.guest_name()),
            Detail::new(GUEST, "Email", relay.contact_email()),
            Detail::new(GUEST, "Mobile", relay.contact_mobile()),
            Detail::new(GUEST, "State", draft.state.as_str()),
            Detail::new(TRIP, "Safari", relay.selection(RelayField::Safari)),
            Detail::new(TRIP, "Zone", relay.selection(RelayField::Zone)),
            Detail::new(TRIP, "Timing", draft.timing_label()),
            Detail::new(TRIP, "Date", relay.display(RelayField::BookingDate)),
        ];
        details.extend(draft.passengers.rows().map(|(number, row)| {
            let gender = Gender::from_key(&row.gender).map_or(row.gender.as_str(), |g| g.key());
            let nationality = row
                .nationality()
                .map_or(row.nationality.as_str(), |n| n.key());
            let id_kind = IdKind::from_key(&row.id_kind).map_or(row.id_kind.as_str(), |k| k.label());
            Detail::new(
                PASSENGERS,
                &format!("Passenger {number}"),
                format!(
                    "{}, {} yrs, {gender}, {nationality}, {id_kind} {}",
                    row.name.trim(),
                    row.age.trim(),
                    row.id_number.trim()
                ),
            )
        }));
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passengers::{PassengerField, PassengerRecord};

    fn selection() -> SafariSelection {
        SafariSelection {
            name: " Asha Rao ".into(),
            email: "Asha@Example.com".into(),
            mobile: "98765 43210".into(),
            timing: "morning".into(),
            safari: "jeep".into(),
            zone: "3".into(),
            booking_date: "2026-11-02".into(),
        }
    }

    fn passenger(nationality: &str) -> PassengerRecord {
        PassengerRecord {
            name: "Asha Rao".into(),
            age: "34".into(),
            gender: "female".into(),
            nationality: nationality.into(),
            state: "rajasthan".into(),
            id_kind: "passport".into(),
            id_number: "Z1234567".into(),
        }
    }

    fn filled_draft(nationalities: &[&str]) -> SafariBookingDraft {
        let mut draft = SafariBookingDraft::from_relay(selection().sanitized());
        draft.passengers = PassengerList::empty();
        for nationality in nationalities {
            let index = draft.passengers.len();
            draft.passengers.add().unwrap();
            let row = passenger(nationality);
            for field in PassengerField::ALL {
                draft.passengers.set_field(index, field, row.get(field));
            }
        }
        draft.state = "rajasthan".into();
        draft.address = "Hotel Tiger Den, Sawai Madhopur".into();
        draft.terms = true;
        draft
    }

    #[test]
    fn selection_reports_first_error_in_page_order() {
        let report = validate_selection(&SafariSelection {
            booking_date: String::new(),
            zone: String::new(),
            ..selection()
        });
        assert_eq!(report.first_message(), Some("Please select date"));
        assert_eq!(report.invalid_fields().collect::<Vec<_>>(), ["booking-date", "zone"]);
    }

    #[test]
    fn valid_selection_is_sanitised_for_the_relay() {
        let relay = prepare_relay(&selection()).unwrap();
        assert_eq!(relay.email, "asha@example.com");
        assert_eq!(relay.mobile, "9876543210");
    }

    #[test]
    fn booking_validation_includes_passengers() {
        let flow = SafariFlow::new();
        let mut draft = filled_draft(&["indian"]);
        assert!(flow.validate(&draft).is_valid());
        draft.passengers.set_field(0, PassengerField::Age, "0");
        draft.address = "short".into();
        let report = flow.validate(&draft);
        assert_eq!(
            report.invalid_fields().collect::<Vec<_>>(),
            ["passenger-1-age", "address"]
        );
    }

    #[test]
    fn booking_amount_is_flat() {
        let flow = SafariFlow::new();
        assert_eq!(flow.quote(&filled_draft(&["indian", "indian"])).total, 5_000);
        let mixed = flow.quote(&filled_draft(&["indian", "foreigner", "foreigner"]));
        assert_eq!(mixed.total, 5_000);
        assert_eq!(mixed.formatted_total(), "₹5,000");

        let mut canter = filled_draft(&["foreigner"]);
        canter.relay.safari = "canter".into();
        assert_eq!(flow.quote(&canter).total, 5_000);
    }

    #[test]
    fn missing_relay_renders_fallbacks() {
        let flow = SafariFlow::new();
        let draft = SafariBookingDraft::default();
        let request = flow.request(&draft, 0);
        assert_eq!(request.detail("Name"), Some("Guest"));
        assert_eq!(request.detail("Zone"), Some("Not specified"));
        assert_eq!(request.detail("Date"), Some("N/A"));
        assert_eq!(flow.quote(&draft).total, 5_000);
    }

    #[test]
    fn passenger_rows_are_echoed() {
        let flow = SafariFlow::new();
        let request = flow.request(&filled_draft(&["indian", "foreigner"]), 0);
        assert_eq!(
            request.detail("Passenger 2"),
            Some("Asha Rao, 34 yrs, female, foreigner, Passport Z1234567")
        );
        assert_eq!(request.detail("Timing"), Some("Morning (6:30 AM - 10:00 AM)"));
    }
}
