//! `localStorage` adapter for the relay store.
//!
//! Values go through `gloo`'s JSON encoding. Off the browser (host-side
//! render tests) the store is empty and writes are dropped.
use ranthambore_booking::RelayStorage;

#[derive(Debug, thiserror::Error)]
#[error("local storage: {0}")]
pub struct WebStorageError(String);

/// Zero-sized handle; every call goes straight to `window.localStorage`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WebRelayStorage;

#[cfg(target_arch = "wasm32")]
impl RelayStorage for WebRelayStorage {
    type Error = WebStorageError;

    fn read(&self, key: &str) -> Result<Option<String>, Self::Error> {
        use gloo::storage::errors::StorageError;
        use gloo::storage::{LocalStorage, Storage};

        match LocalStorage::get::<String>(key) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(WebStorageError(err.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::set(key, value).map_err(|err| WebStorageError(err.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        use gloo::storage::{LocalStorage, Storage};

        LocalStorage::delete(key);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RelayStorage for WebRelayStorage {
    type Error = WebStorageError;

    fn read(&self, _key: &str) -> Result<Option<String>, Self::Error> {
        Ok(None)
    }

    fn write(&self, key: &str, _value: &str) -> Result<(), Self::Error> {
        log::debug!("no local storage; dropping write to {key}");
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ranthambore_booking::SafariRelay;

    #[test]
    fn host_store_reads_as_empty() {
        let relay = SafariRelay {
            name: "Asha Rao".into(),
            ..SafariRelay::default()
        };
        relay.store(&WebRelayStorage).unwrap();
        let loaded = SafariRelay::load(&WebRelayStorage).unwrap();
        assert!(loaded.is_blank());
    }
}
