//! Static product catalog.
//!
//! Every bookable grade is an enumerated tier with an exhaustive mapping to
//! its [`ProductOffering`], so a tier without a price cannot be expressed.
//! Unknown selections resolve through [`tier_or_default`].
use crate::Keyed;
use crate::constants::SAFARI_BOOKING_AMOUNT;
use crate::rates::RateTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An immutable, bookable product grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductOffering {
    pub id: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    /// Whole rupees.
    pub base_price: i64,
    pub features: &'static [&'static str],
}

/// Tiers whose price and features come straight from the catalog.
pub trait Offered: Keyed {
    fn offering(self) -> &'static ProductOffering;
}

/// Resolve an untyped selection, falling back to the tier's default.
///
/// Absent input falls back quietly; unrecognised input is logged.
#[must_use]
pub fn tier_or_default<T: Keyed + Default>(raw: Option<&str>) -> T {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => T::default(),
        Some(value) => T::from_key(value).unwrap_or_else(|| {
            let fallback = T::default();
            log::warn!("unknown tier {value:?}, using {fallback:?}");
            fallback
        }),
    }
}

// ---------------------------------------------------------------------------
// Chambal river safari

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChambalPackage {
    #[default]
    Standard,
    Deluxe,
    Premium,
    Luxury,
}

crate::keyed_enum!(ChambalPackage, [
    Standard => "standard",
    Deluxe => "deluxe",
    Premium => "premium",
    Luxury => "luxury",
]);

const CHAMBAL_STANDARD: ProductOffering = ProductOffering {
    id: "standard",
    name: "Standard Safari",
    duration: "2 hours",
    base_price: 2_499,
    features: &[
        "2-hour boat safari with guide",
        "Life jacket and safety equipment",
        "Pickup & drop from nearby hotels",
    ],
};

const CHAMBAL_DELUXE: ProductOffering = ProductOffering {
    id: "deluxe",
    name: "Deluxe Safari",
    duration: "3 hours",
    base_price: 3_499,
    features: &[
        "3-hour extended boat safari",
        "Pickup & drop from nearby hotels",
        "Complimentary bottled water",
        "Premium life jacket provided",
    ],
};

const CHAMBAL_PREMIUM: ProductOffering = ProductOffering {
    id: "premium",
    name: "Premium Safari",
    duration: "4 hours",
    base_price: 4_499,
    features: &[
        "4-hour private boat safari",
        "Pickup & drop from any hotel in city",
        "Lunch at riverside restaurant",
        "Expert wildlife naturalist guide",
    ],
};

const CHAMBAL_LUXURY: ProductOffering = ProductOffering {
    id: "luxury",
    name: "Luxury Safari",
    duration: "Full day",
    base_price: 5_999,
    features: &[
        "Full day private boat safari",
        "Luxury vehicle pickup & drop",
        "Gourmet lunch with river view",
        "Senior naturalist guide",
        "Binoculars and field guide included",
    ],
};

impl Offered for ChambalPackage {
    fn offering(self) -> &'static ProductOffering {
        match self {
            Self::Standard => &CHAMBAL_STANDARD,
            Self::Deluxe => &CHAMBAL_DELUXE,
            Self::Premium => &CHAMBAL_PREMIUM,
            Self::Luxury => &CHAMBAL_LUXURY,
        }
    }
}

#[must_use]
pub fn chambal_indian_rates() -> RateTable {
    RateTable::from_bands(&[
        (1, 500),
        (2, 900),
        (3, 1_200),
        (4, 1_500),
        (5, 1_800),
        (6, 2_100),
    ])
}

#[must_use]
pub fn chambal_foreign_rates() -> RateTable {
    RateTable::from_bands(&[(0, 0), (1, 1_250), (2, 2_100), (3, 2_900), (4, 3_750)])
}

// ---------------------------------------------------------------------------
// Ranthambore jungle safari

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafariKind {
    #[default]
    Jeep,
    Canter,
}

crate::keyed_enum!(SafariKind, [
    Jeep => "jeep",
    Canter => "canter",
]);

const SAFARI_JEEP: ProductOffering = ProductOffering {
    id: "jeep",
    name: "Jeep Safari",
    duration: "3.5 hours",
    base_price: SAFARI_BOOKING_AMOUNT,
    features: &[
        "Six-seat open gypsy",
        "Forest department guide",
        "Hotel pickup & drop",
    ],
};

const SAFARI_CANTER: ProductOffering = ProductOffering {
    id: "canter",
    name: "Canter Safari",
    duration: "3.5 hours",
    base_price: SAFARI_BOOKING_AMOUNT,
    features: &[
        "Shared twenty-seat canter",
        "Forest department guide",
        "Pickup from Sawai Madhopur",
    ],
};

impl Offered for SafariKind {
    fn offering(self) -> &'static ProductOffering {
        match self {
            Self::Jeep => &SAFARI_JEEP,
            Self::Canter => &SAFARI_CANTER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafariTiming {
    Morning,
    Evening,
}

crate::keyed_enum!(SafariTiming, [
    Morning => "morning",
    Evening => "evening",
]);

impl SafariTiming {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning (6:30 AM - 10:00 AM)",
            Self::Evening => "Evening (2:30 PM - 6:00 PM)",
        }
    }
}

pub const SAFARI_ZONES: std::ops::RangeInclusive<u8> = 1..=10;

// ---------------------------------------------------------------------------
// Tour packages

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageTier {
    #[default]
    Standard,
    Premium,
    Luxury,
}

crate::keyed_enum!(PackageTier, [
    Standard => "standard",
    Premium => "premium",
    Luxury => "luxury",
]);

const PACKAGE_STANDARD: ProductOffering = ProductOffering {
    id: "standard",
    name: "Tiger Trails Getaway",
    duration: "2 Nights / 3 Days",
    base_price: 12_999,
    features: &[
        "Two jeep safaris in core zones",
        "Stay at a heritage resort",
        "Daily breakfast and dinner",
        "Railway station transfers",
    ],
};

const PACKAGE_PREMIUM: ProductOffering = ProductOffering {
    id: "premium",
    name: "Ranthambore & Chambal Explorer",
    duration: "3 Nights / 4 Days",
    base_price: 18_999,
    features: &[
        "Three jeep safaris in core zones",
        "Chambal river boat safari",
        "All meals included",
        "Ranthambore Fort excursion",
    ],
};

const PACKAGE_LUXURY: ProductOffering = ProductOffering {
    id: "luxury",
    name: "Royal Wilderness Retreat",
    duration: "4 Nights / 5 Days",
    base_price: 27_999,
    features: &[
        "Four private jeep safaris",
        "Luxury tented suite",
        "Private naturalist throughout",
        "Spa session and candle-light dinner",
        "Airport transfers from Jaipur",
    ],
};

impl Offered for PackageTier {
    fn offering(self) -> &'static ProductOffering {
        match self {
            Self::Standard => &PACKAGE_STANDARD,
            Self::Premium => &PACKAGE_PREMIUM,
            Self::Luxury => &PACKAGE_LUXURY,
        }
    }
}

impl PackageTier {
    #[must_use]
    pub const fn location(self) -> &'static str {
        match self {
            Self::Standard | Self::Luxury => "Ranthambore, Rajasthan",
            Self::Premium => "Ranthambore & Chambal, Rajasthan",
        }
    }
}

/// Additional travellers beyond the first, priced as fixed bands.
#[must_use]
pub fn package_traveller_rates() -> RateTable {
    RateTable::from_bands(&[
        (1, 0),
        (2, 4_500),
        (3, 8_500),
        (4, 12_000),
        (5, 15_500),
        (6, 19_000),
    ])
}

// ---------------------------------------------------------------------------
// Hotels

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomTier {
    Standard,
    #[default]
    Deluxe,
    Suite,
}

crate::keyed_enum!(RoomTier, [
    Standard => "standard",
    Deluxe => "deluxe",
    Suite => "suite",
]);

impl RoomTier {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Room",
            Self::Deluxe => "Deluxe Room",
            Self::Suite => "Suite",
        }
    }
}

/// Nightly rates in whole rupees, one per room tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRates {
    pub standard: i64,
    pub deluxe: i64,
    pub suite: i64,
}

impl RoomRates {
    #[must_use]
    pub const fn nightly(&self, tier: RoomTier) -> i64 {
        match tier {
            RoomTier::Standard => self.standard,
            RoomTier::Deluxe => self.deluxe,
            RoomTier::Suite => self.suite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelListing {
    pub id: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub images: Vec<String>,
    pub amenities: Vec<String>,
    pub rates: RoomRates,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Hotels bookable without any listing parameters.
#[must_use]
pub fn built_in_hotels() -> Vec<HotelListing> {
    vec![
        HotelListing {
            id: "tiger-safari-resort".into(),
            name: "Tiger Safari Resort".into(),
            location: "Ranthambhore Road, Sawai Madhopur, Rajasthan 322001".into(),
            description: "A luxury wildlife resort offering premium accommodations with stunning views of Ranthambhore National Park.".into(),
            images: strings(&["/Images/hotel1-1.jpg", "/Images/hotel1-2.jpg", "/Images/hotel1-3.jpg"]),
            amenities: strings(&[
                "Free Wi-Fi",
                "Swimming Pool",
                "Wildlife Safari",
                "Spa & Wellness",
                "Multi-Cuisine Restaurant",
                "Room Service",
                "Parking",
            ]),
            rates: RoomRates { standard: 8_500, deluxe: 12_000, suite: 18_000 },
        },
        HotelListing {
            id: "ranthambhore-regency".into(),
            name: "Ranthambhore Regency".into(),
            location: "Ranthambhore National Park, Sawai Madhopur, Rajasthan 322001".into(),
            description: "An elegant heritage hotel blending traditional Rajasthani architecture with modern luxury.".into(),
            images: strings(&["/Images/hotel2-1.jpg", "/Images/hotel2-2.jpg", "/Images/hotel2-3.jpg"]),
            amenities: strings(&[
                "Heritage Architecture",
                "Cultural Programs",
                "Wildlife Library",
                "Ayurvedic Spa",
                "Organic Garden",
                "Butler Service",
                "Conference Hall",
            ]),
            rates: RoomRates { standard: 9_500, deluxe: 14_000, suite: 22_000 },
        },
        HotelListing {
            id: "grand-plaza-hotel".into(),
            name: "Grand Plaza Hotel".into(),
            location: "New York, USA".into(),
            description: "A luxury hotel in the heart of New York with stunning city views and world-class amenities".into(),
            images: strings(&["/Images/hotel3-1.jpg", "/Images/hotel3-2.jpg", "/Images/hotel3-3.jpg"]),
            amenities: strings(&[
                "Free Wi-Fi",
                "Business Center",
                "Fitness Center",
                "Spa & Wellness",
                "Fine Dining",
                "Room Service",
                "Concierge",
                "Valet Parking",
            ]),
            rates: RoomRates { standard: 14_950, deluxe: 19_900, suite: 29_850 },
        },
    ]
}

#[must_use]
pub fn find_hotel(id: &str) -> Option<HotelListing> {
    built_in_hotels().into_iter().find(|hotel| hotel.id == id)
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => NaiveDate::MIN,
    }
}

/// Days on which no hotel stay may begin, end or run through.
pub const HOTEL_UNAVAILABLE_DATES: [NaiveDate; 3] = [ymd(2025, 8, 10), ymd(2025, 8, 15), ymd(2025, 8, 20)];

#[must_use]
pub fn hotel_date_unavailable(date: NaiveDate) -> bool {
    HOTEL_UNAVAILABLE_DATES.contains(&date)
}

/// Property shown when a booking page is opened without any selection.
#[must_use]
pub fn default_hotel() -> HotelListing {
    HotelListing {
        id: "luxury-safari-lodge".into(),
        name: "Luxury Safari Lodge".into(),
        location: "Ranthambhore National Park, Rajasthan".into(),
        description: "A premium hotel offering comfortable accommodation with excellent amenities.".into(),
        images: strings(&["/Images/lodge-1.jpg", "/Images/lodge-2.jpg", "/Images/lodge-3.jpg"]),
        amenities: strings(&["Free Wi-Fi", "Business Center", "Fitness Center", "Spa & Wellness"]),
        rates: RoomRates {
            standard: 8_000,
            deluxe: 10_000,
            suite: 15_000,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_parse_case_insensitively() {
        assert_eq!(ChambalPackage::from_key("Deluxe"), Some(ChambalPackage::Deluxe));
        assert_eq!(RoomTier::from_key(" suite "), Some(RoomTier::Suite));
        assert_eq!(PackageTier::from_key("platinum"), None);
        assert_eq!(SafariKind::from_key(""), None);
    }

    #[test]
    fn every_tier_has_a_priced_offering() {
        for tier in ChambalPackage::ALL {
            assert!(tier.offering().base_price > 0);
            assert_eq!(tier.offering().id, tier.key());
        }
        for tier in PackageTier::ALL {
            assert!(!tier.offering().features.is_empty());
        }
        for kind in SafariKind::ALL {
            assert_eq!(kind.offering().base_price, SAFARI_BOOKING_AMOUNT);
        }
    }

    #[test]
    fn chambal_prices_match_brochure() {
        assert_eq!(ChambalPackage::Standard.offering().base_price, 2_499);
        assert_eq!(ChambalPackage::Luxury.offering().duration, "Full day");
        assert_eq!(chambal_indian_rates().surcharge(2), 900);
        assert_eq!(chambal_foreign_rates().surcharge(0), 0);
    }

    #[test]
    fn published_rate_tables_never_decrease() {
        for table in [
            chambal_indian_rates(),
            chambal_foreign_rates(),
            package_traveller_rates(),
        ] {
            assert!(table.is_non_decreasing());
        }
    }

    #[test]
    fn hotels_resolve_by_id() {
        let regency = find_hotel("ranthambhore-regency").expect("regency listed");
        assert_eq!(regency.rates.nightly(RoomTier::Suite), 22_000);
        assert!(find_hotel("missing").is_none());
        assert_eq!(default_hotel().rates.nightly(RoomTier::Deluxe), 10_000);
    }

    #[test]
    fn blocked_hotel_dates_are_listed() {
        assert!(hotel_date_unavailable(ymd(2025, 8, 15)));
        assert!(!hotel_date_unavailable(ymd(2025, 8, 16)));
        assert_eq!(HOTEL_UNAVAILABLE_DATES[0].to_string(), "2025-08-10");
    }

    #[test]
    fn unknown_selection_falls_back_to_default_tier() {
        assert_eq!(tier_or_default::<ChambalPackage>(None), ChambalPackage::Standard);
        assert_eq!(tier_or_default::<ChambalPackage>(Some("gold")), ChambalPackage::Standard);
        assert_eq!(tier_or_default::<PackageTier>(Some("LUXURY")), PackageTier::Luxury);
        assert_eq!(tier_or_default::<RoomTier>(Some("  ")), RoomTier::Deluxe);
    }
}
