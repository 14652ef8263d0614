//! URL query schema shared by listing and booking pages.
//!
//! Values are percent-decoded on read and re-encoded on write. Empty values
//! read as absent so every booking page can fall back to its defaults.
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

pub const PACKAGE_PARAM: &str = "package";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `?a=1&b=2` or `a=1&b=2`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.strip_prefix('?').unwrap_or(raw);
        Self {
            pairs: form_urlencoded::parse(trimmed.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    /// First non-blank value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, v)| k == key && !v.trim().is_empty())
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: &str, value: impl Into<String>) {
        self.pairs.push((key.to_string(), value.into()));
    }

    pub fn push_opt(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.push(key, value);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

/// `path` with the encoded query appended, if any.
#[must_use]
pub fn with_query(path: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{}", params.encode())
    }
}

/// Hotel selection passed from the listing page to the booking page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelQuery {
    pub hotel_id: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Comma-separated on the wire.
    pub amenities: Option<String>,
    /// Nightly USD price of a dynamic listing.
    pub price_usd: Option<String>,
    pub standard_price: Option<String>,
    pub deluxe_price: Option<String>,
    pub suite_price: Option<String>,
}

const HOTEL_KEYS: [&str; 10] = [
    "hotelId",
    "hotelName",
    "hotelImage",
    "hotelLocation",
    "hotelDescription",
    "hotelAmenities",
    "hotelPrice",
    "standardPrice",
    "deluxePrice",
    "suitePrice",
];

impl HotelQuery {
    #[must_use]
    pub fn from_params(params: &QueryParams) -> Self {
        let get = |key: &str| params.get(key).map(ToString::to_string);
        Self {
            hotel_id: get("hotelId"),
            name: get("hotelName"),
            image: get("hotelImage"),
            location: get("hotelLocation"),
            description: get("hotelDescription"),
            amenities: get("hotelAmenities"),
            price_usd: get("hotelPrice"),
            standard_price: get("standardPrice"),
            deluxe_price: get("deluxePrice"),
            suite_price: get("suitePrice"),
        }
    }

    /// Query for a built-in hotel, which only needs its id.
    #[must_use]
    pub fn for_hotel(id: &str) -> Self {
        Self {
            hotel_id: Some(id.to_string()),
            ..Self::default()
        }
    }

    /// A listing that is not in the built-in catalog.
    #[must_use]
    pub const fn is_dynamic(&self) -> bool {
        self.name.is_some() || self.image.is_some()
    }

    fn values(&self) -> [Option<&str>; 10] {
        [
            self.hotel_id.as_deref(),
            self.name.as_deref(),
            self.image.as_deref(),
            self.location.as_deref(),
            self.description.as_deref(),
            self.amenities.as_deref(),
            self.price_usd.as_deref(),
            self.standard_price.as_deref(),
            self.deluxe_price.as_deref(),
            self.suite_price.as_deref(),
        ]
    }

    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        for (key, value) in HOTEL_KEYS.iter().zip(self.values()) {
            params.push_opt(key, value);
        }
        params
    }
}

/// `?package=<key>` used by both the Chambal and tour package pages.
#[must_use]
pub fn package_query(key: &str) -> QueryParams {
    QueryParams::new().with(PACKAGE_PARAM, key)
}
