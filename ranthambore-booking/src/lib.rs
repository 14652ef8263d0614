//! Ranthambore 360 booking core
//!
//! Platform-agnostic logic for the Ranthambore 360 booking site: catalog,
//! quotes, form validation, passenger lists, submission lifecycle and
//! cross-page relay state. This crate has no DOM or browser dependencies.

/// A closed set of variants, each with a stable lowercase key.
///
/// Untyped input (URL parameters, `<select>` values) goes through
/// [`Keyed::from_key`] and the caller decides the fallback.
pub trait Keyed: Copy + Eq + std::fmt::Debug + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    /// Trimmed, case-insensitive lookup; `None` for anything unrecognised.
    fn from_key(raw: &str) -> Option<Self> {
        let needle = raw.trim().to_ascii_lowercase();
        Self::ALL.iter().copied().find(|item| item.key() == needle)
    }
}

/// Implements [`Keyed`] and `Display`, and mirrors `ALL`, `key()` and
/// `from_key()` as inherent items so callers need no trait import.
macro_rules! keyed_enum {
    ($ty:ident, [$($variant:ident => $key:literal),+ $(,)?]) => {
        impl $crate::Keyed for $ty {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn key(self) -> &'static str {
                match self {
                    $(Self::$variant => $key),+
                }
            }
        }

        impl $ty {
            pub const ALL: &'static [Self] = <Self as $crate::Keyed>::ALL;

            #[must_use]
            pub fn key(self) -> &'static str {
                <Self as $crate::Keyed>::key(self)
            }

            #[must_use]
            pub fn from_key(raw: &str) -> Option<Self> {
                <Self as $crate::Keyed>::from_key(raw)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }
    };
}
pub(crate) use keyed_enum;

pub mod catalog;
pub mod confirmation;
pub mod constants;
pub mod flows;
pub mod links;
pub mod money;
pub mod numbers;
pub mod passengers;
pub mod promo;
pub mod query;
pub mod quote;
pub mod rates;
pub mod relay;
pub mod submission;
pub mod validate;

// Re-export commonly used types
pub use catalog::{
    ChambalPackage, HotelListing, Offered, PackageTier, ProductOffering, RoomRates, RoomTier,
    SafariKind, SafariTiming, tier_or_default,
};
pub use confirmation::{BookingRequest, ConfirmationRecord, Detail, FlowKind};
pub use flows::{
    BookingFlow, ChambalDraft, ChambalFlow, FlowConfig, FlowMessages, HotelDraft, HotelFlow,
    PackageDraft, PackageFlow, SafariBookingDraft, SafariFlow, SafariSelection, submit_draft,
};
pub use money::format_inr;
pub use passengers::{PassengerError, PassengerField, PassengerList, PassengerRecord};
pub use promo::PromoCode;
pub use query::{HotelQuery, QueryParams};
pub use quote::{LineItem, LineKind, Quote, QuoteBuilder, StayRange};
pub use relay::{MemoryRelay, RelayError, RelayField, SafariRelay};
pub use submission::{
    FlowError, GatewayError, SimulatedGateway, SubmissionFlow, SubmissionState, SubmitOutcome,
};
pub use validate::{
    FieldRule, FieldSpec, FieldTouch, FieldValue, FieldVisual, FormValues, PhonePolicy,
    ValidationReport,
};
pub use tokio_util::sync::{CancellationToken, DropGuard};

/// Trait for abstracting the booking backend
/// Platform-specific implementations should provide this
pub trait BookingGateway {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Turn a validated request into a confirmation
    ///
    /// # Errors
    ///
    /// Returns an error if the booking is declined or the backend is unavailable.
    fn confirm(&mut self, request: BookingRequest) -> Result<ConfirmationRecord, Self::Error>;
}

/// Trait for abstracting the browser-local key-value store
/// Platform-specific implementations should provide this
pub trait RelayStorage {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a value
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove a value
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be removed.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// Booking desk tying a gateway to the local store
pub struct BookingDesk<G, S>
where
    G: BookingGateway,
    S: RelayStorage,
{
    gateway: G,
    storage: S,
}

impl<G, S> BookingDesk<G, S>
where
    G: BookingGateway,
    S: RelayStorage,
{
    /// Create a new desk with the provided gateway and storage
    pub const fn new(gateway: G, storage: S) -> Self {
        Self { gateway, storage }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Last confirmation mirrored to the store
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or the payload is malformed.
    pub fn last_confirmation(&self) -> Result<Option<ConfirmationRecord>, anyhow::Error> {
        Ok(relay::last_confirmation(&self.storage)?)
    }
}

/// Confirms through the inner gateway and mirrors the record to the store.
/// A failed mirror is logged; the booking itself still stands.
impl<G, S> BookingGateway for BookingDesk<G, S>
where
    G: BookingGateway,
    S: RelayStorage,
{
    type Error = G::Error;

    fn confirm(&mut self, request: BookingRequest) -> Result<ConfirmationRecord, Self::Error> {
        let record = self.gateway.confirm(request)?;
        if let Err(err) = relay::remember_confirmation(&self.storage, &record) {
            log::error!("could not store confirmation {}: {err}", record.booking_id);
        }
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Debug, thiserror::Error)]
    #[error("quota exceeded")]
    struct QuotaExceeded;

    #[derive(Clone, Default)]
    struct FullStorage {
        attempts: Rc<RefCell<HashMap<String, usize>>>,
    }

    impl RelayStorage for FullStorage {
        type Error = QuotaExceeded;

        fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
            Ok(None)
        }

        fn write(&self, key: &str, _value: &str) -> Result<(), Self::Error> {
            *self.attempts.borrow_mut().entry(key.to_string()).or_default() += 1;
            Err(QuotaExceeded)
        }

        fn remove(&self, _key: &str) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn chambal_request() -> BookingRequest {
        ChambalFlow::new().request(
            &ChambalDraft {
                indian_persons: "2".into(),
                ..ChambalDraft::for_package(None)
            },
            1_760_781_234_567,
        )
    }

    #[test]
    fn desk_mirrors_confirmations() {
        let mut desk = BookingDesk::new(SimulatedGateway::seeded(5), MemoryRelay::new());
        let record = desk.confirm(chambal_request()).unwrap();
        assert_eq!(record.total(), "₹3,399");
        let stored = desk.last_confirmation().unwrap().expect("mirrored");
        assert_eq!(stored, record);
        assert_eq!(desk.storage().len(), 1);
    }

    #[test]
    fn storage_failure_does_not_undo_booking() {
        let storage = FullStorage::default();
        let mut desk = BookingDesk::new(SimulatedGateway::seeded(5), storage.clone());
        let record = desk.confirm(chambal_request()).unwrap();
        assert!(record.booking_id.starts_with("CHB"));
        assert_eq!(storage.attempts.borrow().get("rb360.confirmation"), Some(&1));
    }

    #[test]
    fn desk_drives_a_round_trip() {
        let mut desk = BookingDesk::new(SimulatedGateway::seeded(9), MemoryRelay::new());
        let token = CancellationToken::new();
        let record =
            submission::complete_round_trip(&mut desk, chambal_request(), &token).unwrap();
        assert_eq!(desk.last_confirmation().unwrap(), Some(record));

        token.cancel();
        let stale = submission::complete_round_trip(&mut desk, chambal_request(), &token);
        assert_eq!(stale, Err(GatewayError::Cancelled));
    }

    #[test]
    fn gateway_failure_surfaces() {
        let mut desk = BookingDesk::new(
            SimulatedGateway::seeded(5).failing(GatewayError::Declined("card expired".into())),
            MemoryRelay::new(),
        );
        let err = desk.confirm(chambal_request()).unwrap_err();
        assert_eq!(err.to_string(), "Payment declined: card expired");
        assert!(desk.last_confirmation().unwrap().is_none());
    }
}
