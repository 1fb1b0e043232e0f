//! Config Repository
//!
//! Typed access to the JSON blobs kept in the key/value store.

use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::keys::StorageKeys;
use super::traits::KeyValueStore;
use crate::config::SpeechSettings;
use crate::domain::{BrandingConfig, ResponseEntry, StorageError};

#[derive(Clone)]
pub struct ConfigRepository {
    store: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl ConfigRepository {
    pub fn new(store: Rc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// Read and parse a slot; corrupt JSON is treated as missing
    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("[STORAGE] ignoring corrupt value in {}: {}", key, e);
                None
            }
        }
    }

    fn write_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &json)
    }

    // ========================
    // Branding
    // ========================

    pub fn load_branding(&self, identity: &str) -> Option<BrandingConfig> {
        self.read_json(&self.keys.identity_config(identity))
    }

    pub fn save_branding(&self, identity: &str, config: &BrandingConfig) -> Result<(), StorageError> {
        self.write_json(&self.keys.identity_config(identity), config)
    }

    // ========================
    // Legacy responses
    // ========================

    pub fn load_legacy_responses(&self) -> Option<Vec<ResponseEntry>> {
        self.read_json(&self.keys.custom_responses())
    }

    pub fn save_legacy_responses(&self, responses: &[ResponseEntry]) -> Result<(), StorageError> {
        self.write_json(&self.keys.custom_responses(), &responses)
    }

    // ========================
    // Current identity pointer
    // ========================

    pub fn current_identity(&self) -> Option<String> {
        self.store
            .get(&self.keys.current_identity())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    pub fn set_current_identity(&self, identity: &str) -> Result<(), StorageError> {
        self.store.set(&self.keys.current_identity(), identity)
    }

    pub fn clear_current_identity(&self) -> Result<(), StorageError> {
        self.store.remove(&self.keys.current_identity())
    }

    // ========================
    // Speech settings
    // ========================

    pub fn load_speech_settings(&self) -> Option<SpeechSettings> {
        self.read_json::<SpeechSettings>(&self.keys.speech_settings())
            .map(SpeechSettings::clamped)
    }

    pub fn save_speech_settings(&self, settings: &SpeechSettings) -> Result<(), StorageError> {
        self.write_json(&self.keys.speech_settings(), settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MemoryStore;

    fn repo() -> (Rc<MemoryStore>, ConfigRepository) {
        let store = Rc::new(MemoryStore::new());
        let repo = ConfigRepository::new(store.clone(), StorageKeys::new("dental"));
        (store, repo)
    }

    #[test]
    fn test_corrupt_branding_is_missing() {
        let (store, repo) = repo();
        store.set("dentalConfig_acme", "{not json").unwrap();
        assert!(repo.load_branding("acme").is_none());
    }

    #[test]
    fn test_corrupt_legacy_is_missing() {
        let (store, repo) = repo();
        store.set("dentalCustomResponses", r#"{"text":"not an array"}"#).unwrap();
        assert!(repo.load_legacy_responses().is_none());
    }

    #[test]
    fn test_branding_round_trip() {
        let (_store, repo) = repo();
        let config = BrandingConfig::with_color("#123456");
        repo.save_branding("acme", &config).unwrap();
        assert_eq!(repo.load_branding("acme"), Some(config));
        assert!(repo.load_branding("other").is_none());
    }

    #[test]
    fn test_identity_pointer() {
        let (store, repo) = repo();
        assert!(repo.current_identity().is_none());
        repo.set_current_identity("acme-dental").unwrap();
        assert_eq!(store.get("dentalCurrentDentist").as_deref(), Some("acme-dental"));
        assert_eq!(repo.current_identity().as_deref(), Some("acme-dental"));
        repo.clear_current_identity().unwrap();
        assert!(repo.current_identity().is_none());
    }

    #[test]
    fn test_speech_settings_clamped_on_load() {
        let (store, repo) = repo();
        store.set("dentalSettings", r#"{"rate": 0.0, "volume": 3.0}"#).unwrap();
        let settings = repo.load_speech_settings().unwrap();
        assert_eq!(settings.rate, SpeechSettings::MIN_RATE);
        assert_eq!(settings.volume, 1.0);
    }
}
