//! Cross-page relay state.
//!
//! The safari selection page hands its values to the booking page through
//! the browser-local store. Values are written wholesale under namespaced
//! keys and read back with a fallback for anything missing; last write wins.
use crate::RelayStorage;
use crate::confirmation::ConfirmationRecord;
use crate::constants::{
    DEFAULT_GUEST_NAME, MISSING_VALUE, NOT_PROVIDED, NOT_SPECIFIED, STORAGE_NAMESPACE,
};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;

/// Full storage key for a name inside the site namespace.
#[must_use]
pub fn namespaced(key: &str) -> String {
    format!("{STORAGE_NAMESPACE}.{key}")
}

pub const LOCALE_KEY: &str = "locale";
pub const CONFIRMATION_KEY: &str = "confirmation";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("Failed to write {key}: {message}")]
    Write { key: String, message: String },
    #[error("Failed to read {key}: {message}")]
    Read { key: String, message: String },
    #[error("Stored {key} is malformed: {message}")]
    Malformed { key: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelayField {
    Name,
    Email,
    Mobile,
    Timing,
    Safari,
    Zone,
    BookingDate,
}

impl RelayField {
    pub const ALL: [Self; 7] = [
        Self::Name,
        Self::Email,
        Self::Mobile,
        Self::Timing,
        Self::Safari,
        Self::Zone,
        Self::BookingDate,
    ];

    /// Last segment of the `rb360.relay.*` store key.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Name => "username",
            Self::Email => "email",
            Self::Mobile => "number",
            Self::Timing => "timing",
            Self::Safari => "safari",
            Self::Zone => "zone",
            Self::BookingDate => "bookingdate",
        }
    }

    #[must_use]
    pub fn storage_key(self) -> String {
        namespaced(&format!("relay.{}", self.suffix()))
    }
}

/// Safari selection carried from the selection page to the booking page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafariRelay {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub timing: String,
    pub safari: String,
    pub zone: String,
    pub booking_date: String,
}

impl SafariRelay {
    #[must_use]
    pub fn get(&self, field: RelayField) -> &str {
        match field {
            RelayField::Name => &self.name,
            RelayField::Email => &self.email,
            RelayField::Mobile => &self.mobile,
            RelayField::Timing => &self.timing,
            RelayField::Safari => &self.safari,
            RelayField::Zone => &self.zone,
            RelayField::BookingDate => &self.booking_date,
        }
    }

    fn slot(&mut self, field: RelayField) -> &mut String {
        match field {
            RelayField::Name => &mut self.name,
            RelayField::Email => &mut self.email,
            RelayField::Mobile => &mut self.mobile,
            RelayField::Timing => &mut self.timing,
            RelayField::Safari => &mut self.safari,
            RelayField::Zone => &mut self.zone,
            RelayField::BookingDate => &mut self.booking_date,
        }
    }

    /// Trimmed values, lower-case email, mobile without spaces.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            mobile: self.mobile.chars().filter(|c| !c.is_whitespace()).collect(),
            timing: self.timing.trim().to_string(),
            safari: self.safari.trim().to_string(),
            zone: self.zone.trim().to_string(),
            booking_date: self.booking_date.trim().to_string(),
        }
    }

    /// Value for display; empty fields render as `N/A`.
    #[must_use]
    pub fn display(&self, field: RelayField) -> &str {
        let value = self.get(field);
        if value.trim().is_empty() {
            MISSING_VALUE
        } else {
            value
        }
    }

    /// Name used on confirmations when the relay was never written.
    #[must_use]
    pub fn guest_name(&self) -> &str {
        non_empty_or(&self.name, DEFAULT_GUEST_NAME)
    }

    #[must_use]
    pub fn contact_email(&self) -> &str {
        non_empty_or(&self.email, NOT_PROVIDED)
    }

    #[must_use]
    pub fn contact_mobile(&self) -> &str {
        non_empty_or(&self.mobile, NOT_PROVIDED)
    }

    #[must_use]
    pub fn selection(&self, field: RelayField) -> &str {
        non_empty_or(self.get(field), NOT_SPECIFIED)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        RelayField::ALL
            .iter()
            .all(|field| self.get(*field).trim().is_empty())
    }

    /// Write every field, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Write`] naming the first key the store rejected.
    pub fn store<S: RelayStorage>(&self, storage: &S) -> Result<(), RelayError> {
        for field in RelayField::ALL {
            let key = field.storage_key();
            storage
                .write(&key, self.get(field))
                .map_err(|err| RelayError::Write {
                    key: key.clone(),
                    message: err.to_string(),
                })?;
        }
        log::debug!("safari relay written ({} keys)", RelayField::ALL.len());
        Ok(())
    }

    /// Read every field; missing keys come back empty.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Read`] when the store itself fails.
    pub fn load<S: RelayStorage>(storage: &S) -> Result<Self, RelayError> {
        let mut relay = Self::default();
        let mut missing = 0_usize;
        for field in RelayField::ALL {
            let key = field.storage_key();
            match storage.read(&key).map_err(|err| RelayError::Read {
                key: key.clone(),
                message: err.to_string(),
            })? {
                Some(value) => *relay.slot(field) = value,
                None => missing += 1,
            }
        }
        if missing > 0 {
            log::warn!("safari relay missing {missing} keys");
        }
        Ok(relay)
    }

    /// Drop every relay key.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::Write`] when a key cannot be removed.
    pub fn clear<S: RelayStorage>(storage: &S) -> Result<(), RelayError> {
        for field in RelayField::ALL {
            let key = field.storage_key();
            storage.remove(&key).map_err(|err| RelayError::Write {
                key: key.clone(),
                message: err.to_string(),
            })?;
        }
        Ok(())
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Mirror the latest confirmation so a reload can show it again.
///
/// # Errors
///
/// Fails when the record cannot be encoded or the store rejects it.
pub fn remember_confirmation<S: RelayStorage>(
    storage: &S,
    record: &ConfirmationRecord,
) -> Result<(), RelayError> {
    let key = namespaced(CONFIRMATION_KEY);
    let payload = serde_json::to_string(record).map_err(|err| RelayError::Malformed {
        key: key.clone(),
        message: err.to_string(),
    })?;
    storage.write(&key, &payload).map_err(|err| RelayError::Write {
        key,
        message: err.to_string(),
    })
}

/// Last mirrored confirmation, if any.
///
/// # Errors
///
/// Fails when the store errors or the stored payload does not decode.
pub fn last_confirmation<S: RelayStorage>(
    storage: &S,
) -> Result<Option<ConfirmationRecord>, RelayError> {
    let key = namespaced(CONFIRMATION_KEY);
    let Some(raw) = storage.read(&key).map_err(|err| RelayError::Read {
        key: key.clone(),
        message: err.to_string(),
    })?
    else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|err| RelayError::Malformed {
            key,
            message: err.to_string(),
        })
}

/// In-process store used by the CLI and tests.
#[derive(Debug, Default)]
pub struct MemoryRelay {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryRelay {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl RelayStorage for MemoryRelay {
    type Error = Infallible;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SafariRelay {
        SafariRelay {
            name: "  Asha Rao ".into(),
            email: " Asha@Example.COM".into(),
            mobile: "98765 43210".into(),
            timing: "morning".into(),
            safari: "jeep".into(),
            zone: "3".into(),
            booking_date: "2026-11-02".into(),
        }
    }

    #[test]
    fn keys_are_namespaced() {
        assert_eq!(RelayField::Name.storage_key(), "rb360.relay.username");
        assert_eq!(RelayField::BookingDate.storage_key(), "rb360.relay.bookingdate");
        assert_eq!(namespaced(LOCALE_KEY), "rb360.locale");
    }

    #[test]
    fn sanitizing_normalizes_contact_fields() {
        let clean = sample().sanitized();
        assert_eq!(clean.name, "Asha Rao");
        assert_eq!(clean.email, "asha@example.com");
        assert_eq!(clean.mobile, "9876543210");
    }

    #[test]
    fn store_then_load_returns_same_values() {
        let storage = MemoryRelay::new();
        let relay = sample().sanitized();
        relay.store(&storage).unwrap();
        assert_eq!(storage.len(), RelayField::ALL.len());
        assert_eq!(SafariRelay::load(&storage).unwrap(), relay);
    }

    #[test]
    fn later_write_replaces_everything() {
        let storage = MemoryRelay::new();
        sample().store(&storage).unwrap();
        let second = SafariRelay {
            name: "Ravi".into(),
            ..SafariRelay::default()
        };
        second.store(&storage).unwrap();
        let loaded = SafariRelay::load(&storage).unwrap();
        assert_eq!(loaded.name, "Ravi");
        assert_eq!(loaded.display(RelayField::Zone), "N/A");
    }

    #[test]
    fn missing_relay_uses_fallbacks() {
        let storage = MemoryRelay::new();
        let relay = SafariRelay::load(&storage).unwrap();
        assert!(relay.is_blank());
        assert_eq!(relay.display(RelayField::Email), "N/A");
        assert_eq!(relay.guest_name(), "Guest");
        assert_eq!(relay.contact_mobile(), "Not provided");
        assert_eq!(relay.selection(RelayField::Safari), "Not specified");
    }

    #[test]
    fn clear_removes_all_keys() {
        let storage = MemoryRelay::new();
        sample().store(&storage).unwrap();
        SafariRelay::clear(&storage).unwrap();
        assert!(storage.is_empty());
    }

    #[test]
    fn malformed_confirmation_is_reported() {
        let storage = MemoryRelay::new();
        storage.write("rb360.confirmation", "{not json").unwrap();
        let err = last_confirmation(&storage).unwrap_err();
        assert!(matches!(err, RelayError::Malformed { .. }));
        storage.remove("rb360.confirmation").unwrap();
        assert_eq!(last_confirmation(&storage), Ok(None));
    }
}
