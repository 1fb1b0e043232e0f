//! Response Persistence Ports
//!
//! The session hands one of these to the response store. The full list is
//! always written; defaults are filtered when it is read back.

use super::config_repo::ConfigRepository;
use super::traits::ResponsePersistence;
use crate::domain::{ResponseEntry, StorageError};

/// Used before login: nothing is written
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPersistence;

impl ResponsePersistence for NoopPersistence {
    fn save(&self, _responses: &[ResponseEntry]) -> Result<(), StorageError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "none".to_string()
    }
}

/// Anonymous mode: the `<app>CustomResponses` slot
#[derive(Clone)]
pub struct LegacyPersistence {
    repo: ConfigRepository,
}

impl LegacyPersistence {
    pub fn new(repo: ConfigRepository) -> Self {
        Self { repo }
    }
}

impl ResponsePersistence for LegacyPersistence {
    fn save(&self, responses: &[ResponseEntry]) -> Result<(), StorageError> {
        self.repo.save_legacy_responses(responses)
    }

    fn describe(&self) -> String {
        self.repo.keys().custom_responses()
    }
}

/// Authenticated: the `responses` field of the identity's branding config.
/// Colour and logo already stored there are preserved.
#[derive(Clone)]
pub struct IdentityPersistence {
    repo: ConfigRepository,
    identity: String,
}

impl IdentityPersistence {
    pub fn new(repo: ConfigRepository, identity: impl Into<String>) -> Self {
        Self {
            repo,
            identity: identity.into(),
        }
    }
}

impl ResponsePersistence for IdentityPersistence {
    fn save(&self, responses: &[ResponseEntry]) -> Result<(), StorageError> {
        let mut config = self.repo.load_branding(&self.identity).unwrap_or_default();
        config.responses = Some(responses.to_vec());
        self.repo.save_branding(&self.identity, &config)
    }

    fn describe(&self) -> String {
        self.repo.keys().identity_config(&self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BrandingConfig;
    use crate::repository::{MemoryStore, StorageKeys};
    use std::rc::Rc;

    fn entries() -> Vec<ResponseEntry> {
        vec![
            ResponseEntry::default_entry(1, "Yes"),
            ResponseEntry::default_entry(2, "No"),
            ResponseEntry::new(3, "Maybe"),
        ]
    }

    #[test]
    fn test_identity_save_preserves_color() {
        let store = Rc::new(MemoryStore::new());
        let repo = ConfigRepository::new(store.clone(), StorageKeys::new("dental"));
        repo.save_branding("acme", &BrandingConfig::with_color("#00ff00")).unwrap();

        IdentityPersistence::new(repo.clone(), "acme").save(&entries()).unwrap();

        let config = repo.load_branding("acme").unwrap();
        assert_eq!(config.brand_color.as_deref(), Some("#00ff00"));
        assert_eq!(config.responses.unwrap().len(), 3);
    }

    #[test]
    fn test_legacy_save_writes_full_list() {
        let store = Rc::new(MemoryStore::new());
        let repo = ConfigRepository::new(store.clone(), StorageKeys::new("dental"));
        LegacyPersistence::new(repo.clone()).save(&entries()).unwrap();
        assert_eq!(repo.load_legacy_responses().unwrap(), entries());
    }
}
