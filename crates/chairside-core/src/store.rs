//! Response Store
//!
//! Wraps the response list with its persistence port: every successful
//! mutation writes the full list. Rendering is the caller's job.

use crate::domain::{BoardError, BrandingConfig, ResponseEntry, ResponseList};
use crate::repository::{NoopPersistence, ResponsePersistence};

pub struct ResponseStore {
    list: ResponseList,
    persistence: Box<dyn ResponsePersistence>,
}

impl ResponseStore {
    pub fn new(list: ResponseList, persistence: Box<dyn ResponsePersistence>) -> Self {
        Self { list, persistence }
    }

    /// Store that never writes, used before login
    pub fn detached(list: ResponseList) -> Self {
        Self::new(list, Box::new(NoopPersistence))
    }

    pub fn list(&self) -> &ResponseList {
        &self.list
    }

    pub fn set_persistence(&mut self, persistence: Box<dyn ResponsePersistence>) {
        log::info!("[STORE] persisting responses to {}", persistence.describe());
        self.persistence = persistence;
    }

    fn persist(&self) {
        if let Err(e) = self.persistence.save(self.list.entries()) {
            log::warn!("[STORE] failed to persist responses: {}", e);
        }
    }

    pub fn select(&mut self, index: isize) -> usize {
        self.list.select(index)
    }

    pub fn next(&mut self) -> usize {
        self.list.next()
    }

    pub fn prev(&mut self) -> usize {
        self.list.prev()
    }

    pub fn add(&mut self, text: &str) -> Result<ResponseEntry, BoardError> {
        let entry = self.list.add(text)?.clone();
        log::debug!("[STORE] added response {} '{}'", entry.id, entry.text);
        self.persist();
        Ok(entry)
    }

    pub fn remove(&mut self, index: usize) -> Result<ResponseEntry, BoardError> {
        let removed = self.list.remove(index)?;
        log::debug!("[STORE] removed response {} '{}'", removed.id, removed.text);
        self.persist();
        Ok(removed)
    }

    /// Replace custom entries from a branding config, if it carries any.
    /// Returns whether the list changed.
    pub fn set_branding(&mut self, config: &BrandingConfig) -> bool {
        match &config.responses {
            Some(responses) => {
                self.list.replace_custom(responses.iter().cloned());
                true
            }
            None => false,
        }
    }

    /// Load entries read back from storage (defaults filtered)
    pub fn load(&mut self, entries: Vec<ResponseEntry>) {
        self.list.replace_custom(entries);
    }
}
