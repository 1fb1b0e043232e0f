//! Branding Entity
//!
//! Per-practitioner configuration. Every field is optional; a partial
//! config only overrides what it carries.

use serde::{Deserialize, Serialize};

use super::response::ResponseEntry;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    /// Full response list, defaults included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<ResponseEntry>>,
    /// CSS color (e.g., "#2a9d8f")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_color: Option<String>,
    /// Logo as a data URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_logo: Option<String>,
}

impl BrandingConfig {
    pub fn with_color(color: impl Into<String>) -> Self {
        Self {
            brand_color: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.responses.is_none() && self.brand_color.is_none() && self.brand_logo.is_none()
    }
}
