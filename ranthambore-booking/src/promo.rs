//! Promo codes redeemable for a fractional discount on the pre-tax amount.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromoCode {
    #[serde(rename = "SAVE10")]
    Save10,
    #[serde(rename = "WELCOME5")]
    Welcome5,
    #[serde(rename = "FIRST15")]
    First15,
}

impl PromoCode {
    pub const ALL: [Self; 3] = [Self::Save10, Self::Welcome5, Self::First15];

    /// Exact, case-sensitive lookup of the code as typed.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|promo| promo.code() == raw)
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Save10 => "SAVE10",
            Self::Welcome5 => "WELCOME5",
            Self::First15 => "FIRST15",
        }
    }

    #[must_use]
    pub const fn rate_bp(self) -> u32 {
        match self {
            Self::Save10 => 1_000,
            Self::Welcome5 => 500,
            Self::First15 => 1_500,
        }
    }

    #[must_use]
    pub const fn percent(self) -> u32 {
        self.rate_bp() / 100
    }
}

/// Discount rate for free-form input; unknown or empty codes yield 0.
#[must_use]
pub fn promo_rate_bp(raw: &str) -> u32 {
    PromoCode::parse(raw).map_or(0, PromoCode::rate_bp)
}
