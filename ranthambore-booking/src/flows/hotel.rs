//! Hotel stays: listing resolution, nightly pricing and guest details.
use super::{BookingFlow, FlowConfig, FlowMessages, date_field, email_field, phone_field};
use crate::catalog::{
    HotelListing, RoomRates, RoomTier, default_hotel, find_hotel, hotel_date_unavailable,
    tier_or_default,
};
use crate::confirmation::{Detail, FlowKind};
use crate::constants::{
    DELUXE_MULTIPLIER_BP, DYNAMIC_HOTEL_USD_DEFAULT, HOTEL_EXTRA_GUEST_NIGHTLY,
    HOTEL_INCLUDED_GUESTS, HOTEL_MAX_GUESTS, SUITE_MULTIPLIER_BP, TOAST_MS, USD_TO_INR,
};
use crate::numbers::{apply_rate_bp, parse_count, parse_leading_int, scale_amount};
use crate::promo::PromoCode;
use crate::query::HotelQuery;
use crate::quote::{LineKind, Quote, QuoteBuilder, StayRange, parse_date};
use crate::validate::{
    FieldError, FieldRule, FieldSpec, FormValues, ValidationReport, normalize_phone, validate,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const DEFAULT_AMENITIES: [&str; 4] = ["Free Wi-Fi", "Business Center", "Fitness Center", "Spa & Wellness"];

/// Resolve the listing a booking page was opened for.
///
/// A dynamic listing (name or image present) wins over a built-in id, and
/// anything unresolvable lands on the default lodge. Explicit per-room
/// prices override whatever was resolved.
#[must_use]
pub fn resolve_hotel(query: &HotelQuery) -> HotelListing {
    let mut listing = if query.is_dynamic() {
        dynamic_listing(query)
    } else if let Some(id) = query.hotel_id.as_deref() {
        find_hotel(id).unwrap_or_else(|| {
            log::warn!("unknown hotel id {id:?}, showing the default lodge");
            default_hotel()
        })
    } else {
        default_hotel()
    };
    apply_price_overrides(&mut listing.rates, query);
    listing
}

/// Nightly INR rates derived from a listing's USD price.
#[must_use]
pub fn dynamic_rates(price_usd: Option<&str>) -> RoomRates {
    let usd = price_usd
        .and_then(parse_leading_int)
        .filter(|usd| *usd > 0)
        .unwrap_or(DYNAMIC_HOTEL_USD_DEFAULT);
    let standard = usd.saturating_mul(USD_TO_INR);
    RoomRates {
        standard,
        deluxe: apply_rate_bp(standard, DELUXE_MULTIPLIER_BP),
        suite: apply_rate_bp(standard, SUITE_MULTIPLIER_BP),
    }
}

fn dynamic_listing(query: &HotelQuery) -> HotelListing {
    let image = |fallback: &str| query.image.clone().unwrap_or_else(|| fallback.to_string());
    let amenities: Vec<String> = query
        .amenities
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default();
    HotelListing {
        id: "dynamic-hotel".into(),
        name: query.name.clone().unwrap_or_else(|| "Selected Hotel".into()),
        location: query
            .location
            .clone()
            .unwrap_or_else(|| "Prime Location".into()),
        description: query.description.clone().unwrap_or_else(|| {
            "A premium hotel offering comfortable accommodation with excellent amenities.".into()
        }),
        images: vec![
            image("/Images/default-hotel-1.jpg"),
            image("/Images/default-hotel-2.jpg"),
            image("/Images/default-hotel-3.jpg"),
        ],
        amenities: if amenities.is_empty() {
            DEFAULT_AMENITIES.iter().map(ToString::to_string).collect()
        } else {
            amenities
        },
        rates: dynamic_rates(query.price_usd.as_deref()),
    }
}

fn apply_price_overrides(rates: &mut RoomRates, query: &HotelQuery) {
    let price = |raw: Option<&str>| raw.and_then(parse_leading_int).filter(|p| *p > 0);
    if let Some(standard) = price(query.standard_price.as_deref()) {
        rates.standard = standard;
    }
    if let Some(deluxe) = price(query.deluxe_price.as_deref()) {
        rates.deluxe = deluxe;
    }
    if let Some(suite) = price(query.suite_price.as_deref()) {
        rates.suite = suite;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelDraft {
    pub room: RoomTier,
    pub check_in: String,
    pub check_out: String,
    /// Raw `<select>` value.
    pub guests: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub promo_code: String,
    /// One name per guest, in order.
    pub guest_names: Vec<String>,
}

impl Default for HotelDraft {
    fn default() -> Self {
        Self {
            room: RoomTier::default(),
            check_in: String::new(),
            check_out: String::new(),
            guests: HOTEL_INCLUDED_GUESTS.to_string(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            promo_code: String::new(),
            guest_names: vec![String::new(); HOTEL_INCLUDED_GUESTS as usize],
        }
    }
}

impl HotelDraft {
    /// Draft with the room tier from a `<select>` value.
    #[must_use]
    pub fn with_room(room: Option<&str>) -> Self {
        Self {
            room: tier_or_default(room),
            ..Self::default()
        }
    }

    /// Guest count clamped to `1..=6`; unparseable input counts as one.
    #[must_use]
    pub fn guest_count(&self) -> u32 {
        parse_count(&self.guests)
            .unwrap_or(1)
            .clamp(1, HOTEL_MAX_GUESTS)
    }

    /// Change the guest count and resize the per-guest name list to match.
    pub fn set_guests(&mut self, raw: &str) {
        self.guests = raw.to_string();
        let count = self.guest_count() as usize;
        self.guest_names.resize(count, String::new());
    }

    #[must_use]
    pub fn stay(&self) -> Option<StayRange> {
        StayRange::parse(&self.check_in, &self.check_out).ok()
    }

    #[must_use]
    pub fn promo(&self) -> Option<PromoCode> {
        PromoCode::parse(&self.promo_code)
    }

    pub fn reset(&mut self) {
        *self = Self {
            room: self.room,
            ..Self::default()
        };
    }
}

/// Field id of the n-th (zero-based) guest name input.
#[must_use]
pub fn guest_name_id(index: usize) -> String {
    format!("guest-name-{}", index + 1)
}

fn guest_name_spec(index: usize) -> FieldSpec {
    FieldSpec::new(guest_name_id(index), format!("Guest {} name", index + 1), "Please enter a valid name")
        .rule(FieldRule::Required)
        .rule(FieldRule::Letters)
}

fn fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::new("name", "Full name", "Please enter a valid name")
            .rule(FieldRule::Required)
            .rule(FieldRule::Letters),
        email_field(),
        phone_field("phone"),
        date_field("check-in", "Check-in", "Please select a check-in date"),
        date_field("check-out", "Check-out", "Please select a check-out date"),
    ]
}

fn date_error(field: &str, message: String) -> FieldError {
    FieldError {
        field: field.into(),
        rule: FieldRule::Date,
        message,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelFlow {
    listing: HotelListing,
    config: FlowConfig,
    today: Option<NaiveDate>,
}

impl HotelFlow {
    #[must_use]
    pub fn for_listing(listing: HotelListing) -> Self {
        Self {
            listing,
            config: FlowConfig {
                kind: FlowKind::Hotel,
                rates: Vec::new(),
                fields: fields(),
                messages: FlowMessages {
                    invalid: "Please fill in all required fields correctly.",
                    processing: "Processing...",
                    success: "Booking confirmed! Check your email for details.",
                    toast_ms: TOAST_MS,
                },
            },
            today: None,
        }
    }

    /// Reject stays that begin before `today`; `None` skips the check.
    #[must_use]
    pub const fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        self.today = today;
        self
    }

    #[must_use]
    pub fn from_query(query: &HotelQuery) -> Self {
        Self::for_listing(resolve_hotel(query))
    }

    #[must_use]
    pub const fn listing(&self) -> &HotelListing {
        &self.listing
    }

    #[must_use]
    pub const fn nightly(&self, room: RoomTier) -> i64 {
        self.listing.rates.nightly(room)
    }
}

impl BookingFlow for HotelFlow {
    type Draft = HotelDraft;

    fn config(&self) -> &FlowConfig {
        &self.config
    }

    fn form_values(&self, draft: &HotelDraft) -> FormValues {
        let mut values = FormValues::new()
            .with_text("name", &draft.name)
            .with_text("email", &draft.email)
            .with_text("phone", &draft.phone)
            .with_text("check-in", &draft.check_in)
            .with_text("check-out", &draft.check_out)
            .with_text("room-type", draft.room.key())
            .with_text("guests", &draft.guests)
            .with_text("promo-code", &draft.promo_code);
        for (index, guest) in draft.guest_names.iter().enumerate() {
            values.set_text(&guest_name_id(index), guest);
        }
        values
    }

    /// Room for every night, extra guests beyond two, 12% tax, then promo.
    /// An invalid or empty stay prices as zero.
    fn quote(&self, draft: &HotelDraft) -> Quote {
        let Some(stay) = draft.stay() else {
            return Quote::zero();
        };
        let nights = stay.nights();
        let room = scale_amount(self.nightly(draft.room), nights);
        let mut builder = QuoteBuilder::new().charge(
            LineKind::Room,
            format!("{} × {nights} night(s)", draft.room.label()),
            room,
        );
        let extra = draft.guest_count().saturating_sub(HOTEL_INCLUDED_GUESTS);
        if extra > 0 {
            builder = builder.charge(
                LineKind::ExtraGuests,
                format!("Extra guests ({extra})"),
                scale_amount(
                    scale_amount(HOTEL_EXTRA_GUEST_NIGHTLY, extra),
                    nights,
                ),
            );
        }
        builder.taxed().discounted(draft.promo()).build()
    }

    fn validate(&self, draft: &HotelDraft) -> ValidationReport {
        let mut report = validate(&self.config.fields, &self.form_values(draft));
        let guest_specs: Vec<FieldSpec> = (0..draft.guest_count() as usize)
            .map(guest_name_spec)
            .collect();
        report.merge(validate(&guest_specs, &self.form_values(draft)));
        let both_dates = parse_date(&draft.check_in).is_ok() && parse_date(&draft.check_out).is_ok();
        if both_dates && draft.stay().is_none() {
            report.errors.push(date_error("check-out", "Check-out must be after check-in".into()));
        }
        if let (Some(today), Ok(check_in)) = (self.today, parse_date(&draft.check_in)) {
            if check_in < today {
                report.errors.push(date_error("check-in", "Check-in cannot be in the past".into()));
            }
        }
        if let Some(stay) = draft.stay() {
            if let Some(blocked) = stay.days().find(|day| hotel_date_unavailable(*day)) {
                let field = if blocked == stay.check_out() { "check-out" } else { "check-in" };
                report.errors.push(date_error(
                    field,
                    format!("{} is unavailable, please choose other dates", blocked.format("%-d %B %Y")),
                ));
            }
        }
        report
    }

    fn details(&self, draft: &HotelDraft) -> Vec<Detail> {
        const HOTEL: &str = "Hotel Information";
        const GUEST: &str = "Guest Information";
        const STAY: &str = "Booking Details";
        let long_date = |raw: &str| {
            parse_date(raw).map_or_else(
                |_| raw.to_string(),
                |date| date.format("%A, %-d %B %Y").to_string(),
            )
        };
        let mut details = vec![
            Detail::new(HOTEL, "Hotel", self.listing.name.as_str()),
            Detail::new(HOTEL, "Address", self.listing.location.as_str()),
            Detail::new(GUEST, "Name", draft.name.trim()),
            Detail::new(GUEST, "Email", draft.email.trim()),
            Detail::new(GUEST, "Phone", normalize_phone(&draft.phone)),
            Detail::new(GUEST, "Guests", format!("{} Person(s)", draft.guest_count())),
        ];
        details.extend(
            draft
                .guest_names
                .iter()
                .enumerate()
                .filter(|(_, guest)| !guest.trim().is_empty())
                .map(|(index, guest)| {
                    Detail::new(GUEST, &format!("Guest {}", index + 1), guest.trim())
                }),
        );
        details.push(Detail::new(STAY, "Check-in", long_date(&draft.check_in)));
        details.push(Detail::new(STAY, "Check-out", long_date(&draft.check_out)));
        if let Some(stay) = draft.stay() {
            details.push(Detail::new(STAY, "Nights", stay.nights().to_string()));
        }
        details.push(Detail::new(STAY, "Room Type", draft.room.label()));
        if let Some(promo) = draft.promo() {
            details.push(Detail::new(STAY, "Promo Code", promo.code()));
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryParams;

    fn stay_draft(check_in: &str, check_out: &str) -> HotelDraft {
        HotelDraft {
            check_in: check_in.into(),
            check_out: check_out.into(),
            ..HotelDraft::default()
        }
    }

    #[test]
    fn default_lodge_prices_three_nights_with_tax() {
        let flow = HotelFlow::from_query(&HotelQuery::default());
        let quote = flow.quote(&stay_draft("2025-09-01", "2025-09-04"));
        assert_eq!(quote.pre_tax(), 30_000);
        assert_eq!(quote.amount(LineKind::Tax), 3_600);
        assert_eq!(quote.total, 33_600);
    }

    #[test]
    fn promo_discounts_pre_tax_amount() {
        let flow = HotelFlow::from_query(&HotelQuery::default());
        let draft = HotelDraft {
            promo_code: "SAVE10".into(),
            ..stay_draft("2025-09-01", "2025-09-04")
        };
        let quote = flow.quote(&draft);
        assert_eq!(quote.savings(), 3_000);
        assert_eq!(quote.total, 30_600);

        let lowered = HotelDraft {
            promo_code: "save10".into(),
            ..draft
        };
        assert_eq!(flow.quote(&lowered).savings(), 0);
        assert_eq!(flow.quote(&lowered).total, 33_600);
    }

    #[test]
    fn backwards_stay_prices_as_zero() {
        let flow = HotelFlow::from_query(&HotelQuery::default());
        assert!(flow.quote(&stay_draft("2025-09-04", "2025-09-04")).is_zero());
        assert!(flow.quote(&stay_draft("2025-09-04", "2025-09-01")).is_zero());
        assert!(flow.quote(&stay_draft("", "")).is_zero());
    }

    #[test]
    fn extra_guests_pay_per_night() {
        let flow = HotelFlow::from_query(&HotelQuery::default());
        let mut draft = stay_draft("2025-09-01", "2025-09-03");
        draft.set_guests("4");
        assert_eq!(draft.guest_names.len(), 4);
        let quote = flow.quote(&draft);
        assert_eq!(quote.amount(LineKind::ExtraGuests), 2 * 500 * 2);
        assert_eq!(quote.total, 22_000 + 2_640);
    }

    #[test]
    fn dynamic_listing_converts_usd() {
        let params = QueryParams::parse("hotelName=River%20View&hotelPrice=150&hotelAmenities=Pool,%20Spa");
        let listing = resolve_hotel(&HotelQuery::from_params(&params));
        assert_eq!(listing.name, "River View");
        assert_eq!(listing.location, "Prime Location");
        assert_eq!(listing.amenities, vec!["Pool", "Spa"]);
        assert_eq!(listing.rates.standard, 11_250);
        assert_eq!(listing.rates.deluxe, 14_625);
        assert_eq!(listing.rates.suite, 22_500);
    }

    #[test]
    fn dynamic_listing_defaults_to_199_usd() {
        assert_eq!(dynamic_rates(None).standard, 14_925);
        assert_eq!(dynamic_rates(Some("0")).standard, 14_925);
        assert_eq!(dynamic_rates(Some("abc")).deluxe, 19_403);
    }

    #[test]
    fn built_in_and_unknown_ids() {
        let regency = resolve_hotel(&HotelQuery::for_hotel("ranthambhore-regency"));
        assert_eq!(regency.name, "Ranthambhore Regency");
        let unknown = resolve_hotel(&HotelQuery::for_hotel("nowhere"));
        assert_eq!(unknown.name, "Luxury Safari Lodge");
    }

    #[test]
    fn explicit_prices_override() {
        let query = HotelQuery {
            deluxe_price: Some("12500".into()),
            ..HotelQuery::default()
        };
        let listing = resolve_hotel(&query);
        assert_eq!(listing.rates.deluxe, 12_500);
        assert_eq!(listing.rates.standard, 8_000);
    }

    #[test]
    fn validation_covers_guest_names_and_stay_order() {
        let flow = HotelFlow::from_query(&HotelQuery::default());
        let draft = HotelDraft {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            guest_names: vec!["Asha Rao".into(), "R2D2".into()],
            ..stay_draft("2025-09-04", "2025-09-02")
        };
        let report = flow.validate(&draft);
        assert_eq!(
            report.invalid_fields().collect::<Vec<_>>(),
            ["guest-name-2", "check-out"]
        );
        assert_eq!(
            report.error_for("check-out").map(|e| e.message.as_str()),
            Some("Check-out must be after check-in")
        );
    }

    fn contact_draft(check_in: &str, check_out: &str) -> HotelDraft {
        HotelDraft {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            guest_names: vec!["Asha Rao".into(), "Ravi Rao".into()],
            ..stay_draft(check_in, check_out)
        }
    }

    #[test]
    fn stays_over_unavailable_dates_are_rejected() {
        let flow = HotelFlow::from_query(&HotelQuery::default());
        assert!(flow.validate(&contact_draft("2025-08-11", "2025-08-14")).is_valid());

        let through = flow.validate(&contact_draft("2025-08-09", "2025-08-12"));
        assert_eq!(through.invalid_fields().collect::<Vec<_>>(), ["check-in"]);
        assert_eq!(
            through.error_for("check-in").map(|e| e.message.as_str()),
            Some("10 August 2025 is unavailable, please choose other dates")
        );

        let ending = flow.validate(&contact_draft("2025-08-12", "2025-08-15"));
        assert_eq!(ending.invalid_fields().collect::<Vec<_>>(), ["check-out"]);

        let starting = flow.validate(&contact_draft("2025-08-20", "2025-08-22"));
        assert_eq!(starting.invalid_fields().collect::<Vec<_>>(), ["check-in"]);
    }

    #[test]
    fn past_check_in_is_rejected_once_today_is_known() {
        let today = parse_date("2026-03-10").ok();
        let flow = HotelFlow::from_query(&HotelQuery::default()).with_today(today);
        let report = flow.validate(&contact_draft("2026-03-09", "2026-03-12"));
        assert_eq!(report.invalid_fields().collect::<Vec<_>>(), ["check-in"]);
        assert_eq!(
            report.error_for("check-in").map(|e| e.message.as_str()),
            Some("Check-in cannot be in the past")
        );
        assert!(flow.validate(&contact_draft("2026-03-10", "2026-03-12")).is_valid());

        let undated = HotelFlow::from_query(&HotelQuery::default());
        assert!(undated.validate(&contact_draft("2026-03-09", "2026-03-12")).is_valid());
    }

    #[test]
    fn details_echo_the_stay() {
        let flow = HotelFlow::from_query(&HotelQuery::default());
        let draft = HotelDraft {
            name: "Asha Rao".into(),
            promo_code: "FIRST15".into(),
            ..stay_draft("2025-09-01", "2025-09-04")
        };
        let request = flow.request(&draft, 0);
        assert_eq!(request.detail("Hotel"), Some("Luxury Safari Lodge"));
        assert_eq!(request.detail("Check-in"), Some("Monday, 1 September 2025"));
        assert_eq!(request.detail("Nights"), Some("3"));
        assert_eq!(request.detail("Room Type"), Some("Deluxe Room"));
        assert_eq!(request.detail("Promo Code"), Some("FIRST15"));
    }
}
