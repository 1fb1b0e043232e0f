//! Identity Session
//!
//! Anonymous until a practitioner identifier is given; the identifier is
//! remembered across reloads through the current-identity pointer.

use crate::domain::{BrandingConfig, SessionError, StorageError};
use crate::repository::{
    ConfigRepository, IdentityPersistence, LegacyPersistence, NoopPersistence, ResponsePersistence,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    Authenticated { identity: String },
}

pub struct Session {
    repo: ConfigRepository,
    state: SessionState,
}

impl Session {
    /// Resume whatever identity the pointer names
    pub fn restore(repo: ConfigRepository) -> Self {
        let state = match repo.current_identity() {
            Some(identity) => {
                log::info!("[SESSION] restored session for {}", identity);
                SessionState::Authenticated { identity }
            }
            None => SessionState::Anonymous,
        };
        Self { repo, state }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn identity(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { identity } => Some(identity),
            SessionState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity().is_some()
    }

    pub fn repository(&self) -> &ConfigRepository {
        &self.repo
    }

    /// Authenticate and return the identity's branding config
    pub fn login(&mut self, identifier: &str) -> Result<BrandingConfig, SessionError> {
        let identity = identifier.trim();
        if identity.is_empty() {
            return Err(SessionError::MissingIdentifier);
        }
        self.repo.set_current_identity(identity)?;
        self.state = SessionState::Authenticated {
            identity: identity.to_string(),
        };
        log::info!("[SESSION] logged in as {}", identity);
        Ok(self.branding())
    }

    /// Forget the identity. The UI reloads afterwards to reset memory.
    pub fn logout(&mut self) -> Result<(), StorageError> {
        self.repo.clear_current_identity()?;
        if let Some(identity) = self.identity() {
            log::info!("[SESSION] logged out {}", identity);
        }
        self.state = SessionState::Anonymous;
        Ok(())
    }

    /// Branding config for the current identity.
    ///
    /// An identity without stored responses inherits the legacy anonymous
    /// list, if any.
    pub fn branding(&self) -> BrandingConfig {
        let Some(identity) = self.identity() else {
            return BrandingConfig::default();
        };
        let mut config = self.repo.load_branding(identity).unwrap_or_default();
        if config.responses.is_none() {
            if let Some(legacy) = self.repo.load_legacy_responses() {
                log::info!("[SESSION] seeding {} from {} legacy responses", identity, legacy.len());
                config.responses = Some(legacy);
            }
        }
        config
    }

    /// Apply `change` to the stored branding config and save it
    pub fn update_branding<F>(&self, change: F) -> Result<BrandingConfig, StorageError>
    where
        F: FnOnce(&mut BrandingConfig),
    {
        let Some(identity) = self.identity() else {
            let mut config = BrandingConfig::default();
            change(&mut config);
            return Ok(config);
        };
        let mut config = self.repo.load_branding(identity).unwrap_or_default();
        change(&mut config);
        self.repo.save_branding(identity, &config)?;
        Ok(config)
    }

    /// Persistence port for the response store
    pub fn persistence(&self, anonymous_board: bool) -> Box<dyn ResponsePersistence> {
        match &self.state {
            SessionState::Authenticated { identity } => {
                Box::new(IdentityPersistence::new(self.repo.clone(), identity.clone()))
            }
            SessionState::Anonymous if anonymous_board => Box::new(LegacyPersistence::new(self.repo.clone())),
            SessionState::Anonymous => Box::new(NoopPersistence),
        }
    }
}
