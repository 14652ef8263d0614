//! Chambal river boat safari.
use super::{
    BookingFlow, FlowConfig, FlowMessages, address_field, date_field, email_field, name_field,
    phone_field, select_field, terms_field,
};
use crate::catalog::{
    ChambalPackage, Offered, chambal_foreign_rates, chambal_indian_rates, tier_or_default,
};
use crate::confirmation::{Detail, FlowKind};
use crate::constants::{ADDRESS_MIN_LEN, CHAMBAL_TOAST_MS};
use crate::links::booking_desk_whatsapp;
use crate::numbers::parse_count;
use crate::quote::{LineKind, Quote, QuoteBuilder};
use crate::validate::{FieldRule, FieldSpec, FormValues, normalize_phone};
use serde::{Deserialize, Serialize};

const INDIAN: &str = "indian";
const FOREIGN: &str = "foreign";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChambalDraft {
    pub package: ChambalPackage,
    pub name: String,
    pub mobile: String,
    pub email: String,
    pub id_proof_type: String,
    pub id_proof: String,
    pub state: String,
    /// Raw `<select>` values; unparseable counts price as zero.
    pub indian_persons: String,
    pub foreign_persons: String,
    pub booking_date: String,
    pub safari_timing: String,
    pub address: String,
    pub terms: bool,
}

impl ChambalDraft {
    /// Empty draft for the package named in the `package` query parameter.
    #[must_use]
    pub fn for_package(param: Option<&str>) -> Self {
        Self {
            package: tier_or_default(param),
            foreign_persons: "0".into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn indian_count(&self) -> u32 {
        parse_count(&self.indian_persons).unwrap_or(0)
    }

    #[must_use]
    pub fn foreign_count(&self) -> u32 {
        parse_count(&self.foreign_persons).unwrap_or(0)
    }

    /// Clear the form but stay on the selected package.
    pub fn reset(&mut self) {
        *self = Self {
            package: self.package,
            foreign_persons: "0".into(),
            ..Self::default()
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChambalFlow {
    config: FlowConfig,
}

impl Default for ChambalFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ChambalFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FlowConfig {
                kind: FlowKind::Chambal,
                rates: vec![
                    (INDIAN, chambal_indian_rates()),
                    (FOREIGN, chambal_foreign_rates()),
                ],
                fields: fields(),
                messages: FlowMessages {
                    invalid: "Please fill in all required fields correctly.",
                    processing: "Please wait while we process your payment...",
                    success: "Payment successful! Thank you for booking.",
                    toast_ms: CHAMBAL_TOAST_MS,
                },
            },
        }
    }

    /// Plain-text booking request for the WhatsApp handoff.
    #[must_use]
    pub fn whatsapp_message(&self, draft: &ChambalDraft) -> String {
        let offering = draft.package.offering();
        [
            "🌊 Chambal Safari Booking Request".to_string(),
            String::new(),
            format!("📦 Package: {}", offering.name),
            format!("👤 Name: {}", draft.name.trim()),
            format!("📱 Mobile: +91{}", normalize_phone(&draft.mobile)),
            format!("📧 Email: {}", draft.email.trim()),
            format!("👥 Indian Visitors: {}", draft.indian_count()),
            format!("🌍 Foreign Visitors: {}", draft.foreign_count()),
            format!("📅 Date: {}", draft.booking_date),
            format!("⏰ Time: {}", draft.safari_timing),
            format!("📍 Address: {}", draft.address.trim()),
            String::new(),
            format!("💰 Estimated Total: {}", self.quote(draft).formatted_total()),
        ]
        .join("\n")
    }

    #[must_use]
    pub fn whatsapp_url(&self, draft: &ChambalDraft) -> String {
        booking_desk_whatsapp(&self.whatsapp_message(draft))
    }
}

fn fields() -> Vec<FieldSpec> {
    vec![
        name_field(),
        phone_field("mobile"),
        email_field(),
        select_field("id-proof-type", "ID proof type", "Please select an ID proof type"),
        FieldSpec::new("id-proof", "ID proof number", "Please enter your ID proof number")
            .rule(FieldRule::Required),
        select_field("state", "State", "Please select your state"),
        select_field(
            "indian-persons",
            "Indian visitors",
            "Please select the number of Indian visitors",
        ),
        date_field("booking-date", "Booking date", "Please select a booking date"),
        select_field("safari-timing", "Safari timing", "Please select a safari timing"),
        address_field(ADDRESS_MIN_LEN),
        terms_field(),
    ]
}

impl BookingFlow for ChambalFlow {
    type Draft = ChambalDraft;

    fn config(&self) -> &FlowConfig {
        &self.config
    }

    fn form_values(&self, draft: &ChambalDraft) -> FormValues {
        FormValues::new()
            .with_text("name", &draft.name)
            .with_text("mobile", &draft.mobile)
            .with_text("email", &draft.email)
            .with_text("id-proof-type", &draft.id_proof_type)
            .with_text("id-proof", &draft.id_proof)
            .with_text("state", &draft.state)
            .with_text("indian-persons", &draft.indian_persons)
            .with_text("foreigner-persons", &draft.foreign_persons)
            .with_text("booking-date", &draft.booking_date)
            .with_text("safari-timing", &draft.safari_timing)
            .with_text("address", &draft.address)
            .with_flag("terms", draft.terms)
    }

    fn quote(&self, draft: &ChambalDraft) -> Quote {
        let offering = draft.package.offering();
        let indian = draft.indian_count();
        let foreign = draft.foreign_count();
        QuoteBuilder::new()
            .charge(LineKind::Base, offering.name, offering.base_price)
            .charge(
                LineKind::Surcharge,
                format!("Indian visitors ({indian})"),
                self.config.surcharge(INDIAN, indian),
            )
            .charge(
                LineKind::Surcharge,
                format!("Foreign visitors ({foreign})"),
                self.config.surcharge(FOREIGN, foreign),
            )
            .build()
    }

    fn details(&self, draft: &ChambalDraft) -> Vec<Detail> {
        const GUEST: &str = "Guest Information";
        const TRIP: &str = "Safari Details";
        let offering = draft.package.offering();
        vec![
            Detail::new(GUEST, "Name", draft.name.trim()),
            Detail::new(GUEST, "Mobile", format!("+91{}", normalize_phone(&draft.mobile))),
            Detail::new(GUEST, "Email", draft.email.trim()),
            Detail::new(GUEST, "State", draft.state.as_str()),
            Detail::new(TRIP, "Package", offering.name),
            Detail::new(TRIP, "Duration", offering.duration),
            Detail::new(TRIP, "Date", draft.booking_date.as_str()),
            Detail::new(TRIP, "Timing", draft.safari_timing.as_str()),
            Detail::new(TRIP, "Indian Visitors", draft.indian_count().to_string()),
            Detail::new(TRIP, "Foreign Visitors", draft.foreign_count().to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ChambalDraft {
        ChambalDraft {
            package: ChambalPackage::Deluxe,
            name: "Asha Rao".into(),
            mobile: "9876543210".into(),
            email: "asha@example.com".into(),
            id_proof_type: "aadhar".into(),
            id_proof: "1234 5678 9012".into(),
            state: "rajasthan".into(),
            indian_persons: "2".into(),
            foreign_persons: "1".into(),
            booking_date: "2026-11-02".into(),
            safari_timing: "morning".into(),
            address: "12 Ranthambore Road, Sawai Madhopur".into(),
            terms: true,
        }
    }

    #[test]
    fn quote_adds_both_visitor_bands() {
        let flow = ChambalFlow::new();
        let quote = flow.quote(&complete_draft());
        assert_eq!(quote.total, 3_499 + 900 + 1_250);
        assert_eq!(quote.amount(LineKind::Surcharge), 2_150);
    }

    #[test]
    fn counts_outside_the_tables_cost_nothing() {
        let flow = ChambalFlow::new();
        let draft = ChambalDraft {
            indian_persons: "9".into(),
            foreign_persons: "abc".into(),
            ..ChambalDraft::for_package(Some("standard"))
        };
        assert_eq!(flow.quote(&draft).total, 2_499);
    }

    #[test]
    fn unknown_package_uses_standard() {
        assert_eq!(
            ChambalDraft::for_package(Some("platinum")).package,
            ChambalPackage::Standard
        );
    }

    #[test]
    fn complete_draft_validates() {
        let flow = ChambalFlow::new();
        assert!(flow.validate(&complete_draft()).is_valid());
    }

    #[test]
    fn short_address_and_unchecked_terms_fail_together() {
        let flow = ChambalFlow::new();
        let draft = ChambalDraft {
            address: "Short road".into(),
            terms: false,
            ..complete_draft()
        };
        let report = flow.validate(&draft);
        assert_eq!(report.invalid_fields().collect::<Vec<_>>(), ["address", "terms"]);
    }

    #[test]
    fn whatsapp_message_carries_the_estimate() {
        let flow = ChambalFlow::new();
        let draft = complete_draft();
        let message = flow.whatsapp_message(&draft);
        assert!(message.contains("📦 Package: Deluxe Safari"));
        assert!(message.contains("📱 Mobile: +919876543210"));
        assert!(message.ends_with("💰 Estimated Total: ₹5,649"));
        assert!(flow.whatsapp_url(&draft).starts_with("https://wa.me/918076438491?text=%F0%9F%8C%8A"));
    }

    #[test]
    fn reset_keeps_the_package() {
        let mut draft = complete_draft();
        draft.reset();
        assert_eq!(draft.package, ChambalPackage::Deluxe);
        assert!(draft.name.is_empty());
        assert!(!draft.terms);
    }
}
