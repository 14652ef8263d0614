//! Booking flows.
//!
//! Every flow is the same workflow (quote, validate, submit, confirm)
//! parametrised by a [`FlowConfig`]: its rate tables, declared fields and
//! user-facing messages. Drafts are typed per flow and flattened into
//! [`FormValues`] for validation.
pub mod chambal;
pub mod hotel;
pub mod package;
pub mod safari;

use crate::confirmation::{BookingRequest, Detail, FlowKind};
use crate::constants::NAME_MIN_LEN;
use crate::quote::Quote;
use crate::rates::RateTable;
use crate::submission::{FlowError, SubmissionFlow, SubmitOutcome};
use crate::validate::{FieldRule, FieldSpec, FormValues, PhonePolicy, ValidationReport, validate};

pub use chambal::{ChambalDraft, ChambalFlow};
pub use hotel::{HotelDraft, HotelFlow};
pub use package::{PackageDraft, PackageFlow};
pub use safari::{SafariBookingDraft, SafariFlow, SafariSelection};

/// Messages a page shows around a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowMessages {
    pub invalid: &'static str,
    pub processing: &'static str,
    pub success: &'static str,
    /// How long toasts stay up, in milliseconds.
    pub toast_ms: u32,
}

/// Static description of one flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub kind: FlowKind,
    pub rates: Vec<(&'static str, RateTable)>,
    pub fields: Vec<FieldSpec>,
    pub messages: FlowMessages,
}

impl FlowConfig {
    #[must_use]
    pub fn rate_table(&self, name: &str) -> Option<&RateTable> {
        self.rates
            .iter()
            .find(|(table, _)| *table == name)
            .map(|(_, rates)| rates)
    }

    /// Surcharge from a named table; an unknown table charges nothing.
    #[must_use]
    pub fn surcharge(&self, name: &str, count: u32) -> i64 {
        self.rate_table(name)
            .map_or(0, |rates| rates.surcharge(count))
    }

    #[must_use]
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.id == id)
    }
}

/// A booking flow bound to its typed draft.
pub trait BookingFlow {
    type Draft;

    fn config(&self) -> &FlowConfig;

    /// Flatten the draft into form values keyed by field id.
    fn form_values(&self, draft: &Self::Draft) -> FormValues;

    /// Pure and idempotent: the same draft always yields the same quote.
    fn quote(&self, draft: &Self::Draft) -> Quote;

    /// Draft values echoed on the confirmation.
    fn details(&self, draft: &Self::Draft) -> Vec<Detail>;

    fn validate(&self, draft: &Self::Draft) -> ValidationReport {
        validate(&self.config().fields, &self.form_values(draft))
    }

    fn request(&self, draft: &Self::Draft, submitted_at_ms: i64) -> BookingRequest {
        BookingRequest {
            kind: self.config().kind,
            details: self.details(draft),
            quote: self.quote(draft),
            submitted_at_ms,
        }
    }
}

/// Run one submit attempt through the state machine.
///
/// Returns the request to hand to the gateway when the draft is valid, or
/// `None` when validation flagged errors (they are kept in `state`).
///
/// # Errors
///
/// Propagates [`FlowError::Busy`] and invalid transitions.
pub fn submit_draft<F: BookingFlow>(
    flow: &F,
    state: &mut SubmissionFlow,
    draft: &F::Draft,
    submitted_at_ms: i64,
) -> Result<Option<BookingRequest>, FlowError> {
    state.begin()?;
    match state.validated(flow.validate(draft))? {
        SubmitOutcome::Accepted => {
            log::info!("{} booking submitted", flow.config().kind.title());
            Ok(Some(flow.request(draft, submitted_at_ms)))
        }
        SubmitOutcome::Rejected => Ok(None),
    }
}

// Field declarations shared across flows.

pub(crate) fn name_field() -> FieldSpec {
    FieldSpec::new("name", "Full name", "Please enter your full name (at least 3 characters)")
        .rule(FieldRule::Required)
        .rule(FieldRule::MinLength(NAME_MIN_LEN))
}

pub(crate) fn email_field() -> FieldSpec {
    FieldSpec::new("email", "Email", "Please enter a valid email address")
        .rule(FieldRule::Required)
        .rule(FieldRule::Email)
}

pub(crate) fn phone_field(id: &str) -> FieldSpec {
    FieldSpec::new(id, "Mobile number", "Please enter a valid 10-digit mobile number")
        .rule(FieldRule::Required)
        .rule(FieldRule::Phone(PhonePolicy::default()))
}

pub(crate) fn select_field(id: &str, label: &str, message: &str) -> FieldSpec {
    FieldSpec::new(id, label, message).rule(FieldRule::Select)
}

pub(crate) fn date_field(id: &str, label: &str, message: &str) -> FieldSpec {
    FieldSpec::new(id, label, message)
        .rule(FieldRule::Required)
        .rule(FieldRule::Date)
}

pub(crate) fn address_field(min_len: usize) -> FieldSpec {
    let message = format!("Please enter your complete address (at least {min_len} characters)");
    FieldSpec::new("address", "Address", message)
        .rule(FieldRule::Required)
        .rule(FieldRule::MinLength(min_len))
}

pub(crate) fn terms_field() -> FieldSpec {
    FieldSpec::new("terms", "Terms", "Please accept the terms and conditions").rule(FieldRule::Checked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_rate_table_charges_nothing() {
        let config = FlowConfig {
            kind: FlowKind::Package,
            rates: vec![("travellers", RateTable::from_bands(&[(2, 4_500)]))],
            fields: vec![name_field()],
            messages: FlowMessages {
                invalid: "x",
                processing: "y",
                success: "z",
                toast_ms: 1,
            },
        };
        assert_eq!(config.surcharge("travellers", 2), 4_500);
        assert_eq!(config.surcharge("travellers", 9), 0);
        assert_eq!(config.surcharge("unknown", 2), 0);
        assert!(config.field("name").is_some());
        assert!(config.field("email").is_none());
    }

    #[test]
    fn address_message_names_its_minimum() {
        for min_len in [10, 15, 20] {
            let spec = address_field(min_len);
            assert_eq!(
                spec.message,
                format!("Please enter your complete address (at least {min_len} characters)")
            );
            assert!(spec.rules.contains(&FieldRule::MinLength(min_len)));
        }
    }
}
