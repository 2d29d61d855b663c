//! Resolver configuration
//!
//! Configuration is a small JSON document. Every field has a default, so an
//! empty object (`{}`) yields [`ResolverConfig::default`].

use crate::error::{EmbedError, Result};
use crate::providers::ProviderKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Height used when the caller passes `0`
pub const DEFAULT_HEIGHT: u32 = 315;

/// Configuration for [`crate::MediaEmbedResolver`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolverConfig {
    /// Height written into markup when the caller asks for height 0
    #[serde(default = "default_height")]
    pub default_height: u32,

    /// Serve YouTube players from youtube-nocookie.com
    #[serde(default)]
    pub privacy_enhanced_youtube: bool,

    /// Emit `allowfullscreen` on provider iframes
    #[serde(default = "default_true")]
    pub allow_fullscreen: bool,

    /// Built-in providers to try, in priority order
    #[serde(default = "default_providers")]
    pub providers: Vec<ProviderKind>,
}

fn default_height() -> u32 {
    DEFAULT_HEIGHT
}

fn default_true() -> bool {
    true
}

fn default_providers() -> Vec<ProviderKind> {
    vec![ProviderKind::YouTube, ProviderKind::Vimeo, ProviderKind::Dailymotion]
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_height: DEFAULT_HEIGHT,
            privacy_enhanced_youtube: false,
            allow_fullscreen: true,
            providers: default_providers(),
        }
    }
}

impl ResolverConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ResolverConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        tracing::debug!("Loading resolver configuration from {}", path.display());
        Self::from_json(&contents)
    }

    /// Check the configuration for values the resolver cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.default_height == 0 {
            return Err(EmbedError::InvalidConfig(
                "defaultHeight must be greater than zero".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for kind in &self.providers {
            if !seen.insert(kind) {
                return Err(EmbedError::InvalidConfig(format!(
                    "provider '{}' listed more than once",
                    kind
                )));
            }
        }

        Ok(())
    }

    /// Enable or disable privacy-enhanced YouTube players
    pub fn with_privacy_enhanced_youtube(mut self, enabled: bool) -> Self {
        self.privacy_enhanced_youtube = enabled;
        self
    }

    /// Replace the provider priority list
    pub fn with_providers(mut self, providers: Vec<ProviderKind>) -> Self {
        self.providers = providers;
        self
    }
}
