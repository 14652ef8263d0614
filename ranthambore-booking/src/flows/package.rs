//! Multi-day tour packages.
use super::{
    BookingFlow, FlowConfig, FlowMessages, date_field, email_field, name_field, phone_field,
    select_field, terms_field,
};
use crate::catalog::{Offered, PackageTier, package_traveller_rates, tier_or_default};
use crate::confirmation::{Detail, FlowKind};
use crate::constants::TOAST_MS;
use crate::numbers::parse_count;
use crate::promo::PromoCode;
use crate::quote::{LineKind, Quote, QuoteBuilder};
use crate::validate::{FormValues, normalize_phone};
use serde::{Deserialize, Serialize};

const TRAVELLERS: &str = "travellers";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDraft {
    pub tier: PackageTier,
    pub travellers: String,
    pub travel_date: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub promo_code: String,
    pub terms: bool,
}

impl Default for PackageDraft {
    fn default() -> Self {
        Self {
            tier: PackageTier::default(),
            travellers: "1".into(),
            travel_date: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            promo_code: String::new(),
            terms: false,
        }
    }
}

impl PackageDraft {
    #[must_use]
    pub fn for_tier(param: Option<&str>) -> Self {
        Self {
            tier: tier_or_default(param),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn traveller_count(&self) -> u32 {
        parse_count(&self.travellers).unwrap_or(1)
    }

    pub fn reset(&mut self) {
        *self = Self {
            tier: self.tier,
            ..Self::default()
        };
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageFlow {
    config: FlowConfig,
}

impl Default for PackageFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageFlow {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: FlowConfig {
                kind: FlowKind::Package,
                rates: vec![(TRAVELLERS, package_traveller_rates())],
                fields: vec![
                    select_field("travellers", "Travellers", "Please select the number of travellers"),
                    date_field("travel-date", "Travel date", "Please select a travel date"),
                    name_field(),
                    email_field(),
                    phone_field("phone"),
                    terms_field(),
                ],
                messages: FlowMessages {
                    invalid: "Please fill in all required fields correctly.",
                    processing: "Processing...",
                    success: "Your package booking is confirmed!",
                    toast_ms: TOAST_MS,
                },
            },
        }
    }
}

impl BookingFlow for PackageFlow {
    type Draft = PackageDraft;

    fn config(&self) -> &FlowConfig {
        &self.config
    }

    fn form_values(&self, draft: &PackageDraft) -> FormValues {
        FormValues::new()
            .with_text("travellers", &draft.travellers)
            .with_text("travel-date", &draft.travel_date)
            .with_text("name", &draft.name)
            .with_text("email", &draft.email)
            .with_text("phone", &draft.phone)
            .with_text("promo-code", &draft.promo_code)
            .with_flag("terms", draft.terms)
    }

    fn quote(&self, draft: &PackageDraft) -> Quote {
        let offering = draft.tier.offering();
        let travellers = draft.traveller_count();
        QuoteBuilder::new()
            .charge(LineKind::Base, offering.name, offering.base_price)
            .charge(
                LineKind::Surcharge,
                format!("Travellers ({travellers})"),
                self.config.surcharge(TRAVELLERS, travellers),
            )
            .discounted(PromoCode::parse(&draft.promo_code))
            .build()
    }

    fn details(&self, draft: &PackageDraft) -> Vec<Detail> {
        const GUEST: &str = "Guest Information";
        const TRIP: &str = "Package Details";
        let offering = draft.tier.offering();
        let mut details = vec![
            Detail::new(GUEST, "Name", draft.name.trim()),
            Detail::new(GUEST, "Email", draft.email.trim()),
            Detail::new(GUEST, "Phone", normalize_phone(&draft.phone)),
            Detail::new(TRIP, "Package", offering.name),
            Detail::new(TRIP, "Duration", offering.duration),
            Detail::new(TRIP, "Location", draft.tier.location()),
            Detail::new(TRIP, "Travel Date", draft.travel_date.as_str()),
            Detail::new(TRIP, "Travellers", draft.traveller_count().to_string()),
        ];
        if let Some(promo) = PromoCode::parse(&draft.promo_code) {
            details.push(Detail::new(TRIP, "Promo Code", promo.code()));
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn travellers_band_and_promo() {
        let flow = PackageFlow::new();
        let draft = PackageDraft {
            travellers: "3".into(),
            promo_code: "WELCOME5".into(),
            ..PackageDraft::for_tier(Some("premium"))
        };
        let quote = flow.quote(&draft);
        assert_eq!(quote.pre_tax(), 18_999 + 8_500);
        assert_eq!(quote.savings(), 1_375);
        assert_eq!(quote.total, 27_499 - 1_375);
    }

    #[test]
    fn unknown_promo_is_ignored() {
        let flow = PackageFlow::new();
        let draft = PackageDraft {
            promo_code: "FREE100".into(),
            ..PackageDraft::default()
        };
        assert_eq!(flow.quote(&draft).total, 12_999);
        assert_eq!(flow.quote(&draft).savings(), 0);
    }

    #[test]
    fn reset_keeps_tier() {
        let mut draft = PackageDraft {
            name: "Asha".into(),
            ..PackageDraft::for_tier(Some("luxury"))
        };
        draft.reset();
        assert_eq!(draft.tier, PackageTier::Luxury);
        assert!(draft.name.is_empty());
    }

    #[test]
    fn required_fields_are_declared() {
        let flow = PackageFlow::new();
        let report = flow.validate(&PackageDraft::default());
        let invalid: Vec<&str> = report.invalid_fields().collect();
        assert_eq!(invalid, ["travel-date", "name", "email", "phone", "terms"]);
    }
}
