//! Quote assembly shared by every booking flow.
//!
//! A quote is derived state: recomputed from the current draft on every
//! relevant input and never persisted. Tax and discount are both taken from
//! the pre-tax charges, and the total never drops below zero.
use crate::constants::TAX_RATE_BP;
use crate::money::format_inr;
use crate::numbers::apply_rate_bp;
use crate::promo::PromoCode;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Base,
    Room,
    ExtraGuests,
    Surcharge,
    Tax,
    Discount,
}

impl LineKind {
    const fn is_pre_tax(self) -> bool {
        matches!(
            self,
            Self::Base | Self::Room | Self::ExtraGuests | Self::Surcharge
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub kind: LineKind,
    pub label: String,
    /// Whole rupees; discounts are negative.
    pub amount: i64,
}

impl LineItem {
    #[must_use]
    pub fn formatted(&self) -> String {
        format_inr(self.amount)
    }
}

pub type LineItems = SmallVec<[LineItem; 6]>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub line_items: LineItems,
    pub total: i64,
}

impl Quote {
    /// The quote rendered for incomplete or inconsistent input.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.line_items.is_empty() && self.total == 0
    }

    /// Sum of every line of `kind`.
    #[must_use]
    pub fn amount(&self, kind: LineKind) -> i64 {
        self.line_items
            .iter()
            .filter(|line| line.kind == kind)
            .map(|line| line.amount)
            .sum()
    }

    #[must_use]
    pub fn pre_tax(&self) -> i64 {
        pre_tax_of(&self.line_items)
    }

    /// Positive amount saved through a promo code.
    #[must_use]
    pub fn savings(&self) -> i64 {
        -self.amount(LineKind::Discount)
    }

    #[must_use]
    pub fn formatted_total(&self) -> String {
        format_inr(self.total)
    }
}

fn pre_tax_of(lines: &[LineItem]) -> i64 {
    lines
        .iter()
        .filter(|line| line.kind.is_pre_tax())
        .map(|line| line.amount)
        .sum()
}

/// Accumulates charges, then derives tax and discount from the pre-tax sum.
#[derive(Debug, Clone, Default)]
pub struct QuoteBuilder {
    lines: LineItems,
}

impl QuoteBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pre-tax charge. `kind` must be one of the pre-tax kinds.
    #[must_use]
    pub fn charge(mut self, kind: LineKind, label: impl Into<String>, amount: i64) -> Self {
        debug_assert!(kind.is_pre_tax());
        self.lines.push(LineItem {
            kind,
            label: label.into(),
            amount,
        });
        self
    }

    #[must_use]
    pub fn pre_tax(&self) -> i64 {
        pre_tax_of(&self.lines)
    }

    /// Apply the flat 12% tax on pre-tax charges.
    #[must_use]
    pub fn taxed(self) -> Self {
        self.tax_at(TAX_RATE_BP)
    }

    #[must_use]
    pub fn tax_at(mut self, rate_bp: u32) -> Self {
        let amount = apply_rate_bp(self.pre_tax(), rate_bp);
        self.lines.push(LineItem {
            kind: LineKind::Tax,
            label: "Taxes & fees".into(),
            amount,
        });
        self
    }

    /// Apply a promo discount on pre-tax charges; no line for `None`.
    #[must_use]
    pub fn discounted(mut self, promo: Option<PromoCode>) -> Self {
        if let Some(code) = promo {
            let amount = apply_rate_bp(self.pre_tax(), code.rate_bp());
            if amount != 0 {
                self.lines.push(LineItem {
                    kind: LineKind::Discount,
                    label: format!("Promo {} ({}% off)", code.code(), code.percent()),
                    amount: -amount,
                });
            }
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Quote {
        let total = self.lines.iter().map(|line| line.amount).sum::<i64>().max(0);
        log::debug!("quote recomputed: {} lines, total {total}", self.lines.len());
        Quote {
            line_items: self.lines,
            total,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StayError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
}

/// A check-in/check-out pair spanning at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayRange {
    /// # Errors
    ///
    /// Returns [`StayError::CheckOutNotAfterCheckIn`] when check-out is on or before check-in.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, StayError> {
        if check_out <= check_in {
            return Err(StayError::CheckOutNotAfterCheckIn);
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Parse `YYYY-MM-DD` values as produced by date inputs.
    ///
    /// # Errors
    ///
    /// Returns an error when either date is malformed or the range is empty.
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, StayError> {
        Self::new(parse_date(check_in)?, parse_date(check_out)?)
    }

    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Every calendar day the stay touches, check-out included.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let check_out = self.check_out;
        self.check_in.iter_days().take_while(move |day| *day <= check_out)
    }

    #[must_use]
    pub fn nights(&self) -> u32 {
        let days = (self.check_out - self.check_in).num_days();
        u32::try_from(days).unwrap_or(u32::MAX).max(1)
    }
}

/// Parse a `YYYY-MM-DD` date input value.
///
/// # Errors
///
/// Returns [`StayError::InvalidDate`] for anything else.
pub fn parse_date(raw: &str) -> Result<NaiveDate, StayError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| StayError::InvalidDate(raw.to_string()))
}

/// Earliest allowed check-out for a given check-in.
#[must_use]
pub fn min_check_out(check_in: NaiveDate) -> NaiveDate {
    check_in.checked_add_days(Days::new(1)).unwrap_or(check_in)
}
