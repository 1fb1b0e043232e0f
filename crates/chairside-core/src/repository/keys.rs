//! Storage key layout

/// Key names derived from the configured prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    prefix: String,
}

impl StorageKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// Legacy anonymous-mode response list
    pub fn custom_responses(&self) -> String {
        format!("{}CustomResponses", self.prefix)
    }

    /// Branding config for one practitioner
    pub fn identity_config(&self, identity: &str) -> String {
        format!("{}Config_{}", self.prefix, identity)
    }

    /// Last authenticated practitioner
    pub fn current_identity(&self) -> String {
        format!("{}CurrentDentist", self.prefix)
    }

    pub fn speech_settings(&self) -> String {
        format!("{}Settings", self.prefix)
    }
}
