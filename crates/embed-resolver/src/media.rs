//! Value types passed into and out of the resolver

use crate::providers::ProviderKind;
use serde::{Deserialize, Serialize};

/// A stored media value together with the requested display size
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    /// Raw value, usually a URL entered by a user
    pub url: String,
    /// Requested width in pixels (0 = provider default)
    #[serde(default)]
    pub width: u32,
    /// Requested height in pixels (0 = configured default)
    #[serde(default)]
    pub height: u32,
}

impl MediaReference {
    /// Create a new media reference
    pub fn new(url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            url: url.into(),
            width,
            height,
        }
    }

    /// Check if there is anything to embed
    pub fn is_blank(&self) -> bool {
        self.url.trim().is_empty()
    }
}

/// Concrete size written into a fragment's markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    /// Substitute defaults for zero-valued requests
    pub fn resolve(width: u32, height: u32, default_width: u32, default_height: u32) -> Self {
        Self {
            width: if width == 0 { default_width } else { width },
            height: if height == 0 { default_height } else { height },
        }
    }
}

/// Outcome of resolving a [`MediaReference`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedResult {
    /// Rendered fragment; empty when there was nothing to embed
    pub html: String,
    /// Rule that produced the fragment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderKind>,
}

impl EmbedResult {
    /// Result for blank input
    pub fn empty() -> Self {
        Self {
            html: String::new(),
            provider: None,
        }
    }

    /// Check if no fragment was produced
    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }

    /// Check if a known provider (not the generic fallback) matched
    pub fn is_provider_match(&self) -> bool {
        matches!(self.provider, Some(kind) if kind != ProviderKind::Generic)
    }

    /// Consume the result, keeping only the markup
    pub fn into_html(self) -> String {
        self.html
    }
}
