//! Provider rules for known video hosts
//!
//! A [`ProviderRule`] pairs a URL matcher with a renderer. The resolver walks
//! an ordered list of rules and the first one whose matcher extracts a video
//! id wins, so rules must be listed from most to least specific. The
//! [`generic`] fallback is not part of the list; it always runs last.

pub mod dailymotion;
pub mod generic;
pub mod vimeo;
pub mod youtube;

use crate::config::ResolverConfig;
use crate::error::{EmbedError, Result};
use crate::media::Dimensions;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use url::Url;

/// Kind of rule that produced an embed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// YouTube video
    YouTube,
    /// Vimeo video
    Vimeo,
    /// Dailymotion video
    Dailymotion,
    /// Fallback for values no provider recognized
    Generic,
}

impl ProviderKind {
    /// Get the provider as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::YouTube => "youtube",
            ProviderKind::Vimeo => "vimeo",
            ProviderKind::Dailymotion => "dailymotion",
            ProviderKind::Generic => "generic",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = EmbedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "youtube" => Ok(ProviderKind::YouTube),
            "vimeo" => Ok(ProviderKind::Vimeo),
            "dailymotion" => Ok(ProviderKind::Dailymotion),
            "generic" => Ok(ProviderKind::Generic),
            _ => Err(EmbedError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// Video identified by a provider matcher
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoMatch {
    /// Provider-specific video identifier
    pub video_id: String,
    /// Playback offset in seconds
    pub start_time: Option<u32>,
    /// Access token for unlisted videos (Vimeo `h=`)
    pub hash: Option<String>,
}

impl VideoMatch {
    /// Create a match without a start offset
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            start_time: None,
            hash: None,
        }
    }

    /// Set the playback offset
    pub fn with_start_time(mut self, start_time: Option<u32>) -> Self {
        self.start_time = start_time;
        self
    }

    /// Set the unlisted-video hash
    pub fn with_hash(mut self, hash: Option<String>) -> Self {
        self.hash = hash;
        self
    }
}

/// Extracts a video from a parsed URL
pub type Matcher = fn(&Url) -> Option<VideoMatch>;

/// Renders a matched video at a concrete size
pub type Renderer = fn(&VideoMatch, Dimensions, &ResolverConfig) -> String;

/// A URL matcher paired with the markup it produces
#[derive(Debug, Clone, Copy)]
pub struct ProviderRule {
    /// Provider this rule stands for
    pub kind: ProviderKind,
    /// Width used when the caller asks for width 0
    pub default_width: u32,
    /// Video extractor
    pub matcher: Matcher,
    /// Fragment renderer
    pub renderer: Renderer,
}

impl ProviderRule {
    /// Built-in rule for a provider; `None` for [`ProviderKind::Generic`]
    pub fn builtin(kind: ProviderKind) -> Option<Self> {
        match kind {
            ProviderKind::YouTube => Some(youtube::rule()),
            ProviderKind::Vimeo => Some(vimeo::rule()),
            ProviderKind::Dailymotion => Some(dailymotion::rule()),
            ProviderKind::Generic => None,
        }
    }

    /// Run the matcher, ignoring matches with an empty id
    pub fn apply(&self, url: &Url) -> Option<VideoMatch> {
        (self.matcher)(url).filter(|m| !m.video_id.is_empty())
    }

    /// Render a match, substituting defaults for zero dimensions
    pub fn render(
        &self,
        video: &VideoMatch,
        width: u32,
        height: u32,
        config: &ResolverConfig,
    ) -> String {
        let dimensions =
            Dimensions::resolve(width, height, self.default_width, config.default_height);
        (self.renderer)(video, dimensions, config)
    }
}

/// Built-in rules in default priority order
pub fn default_rules() -> Vec<ProviderRule> {
    vec![youtube::rule(), vimeo::rule(), dailymotion::rule()]
}

/// Check that the URL host is one of `hosts`
pub(crate) fn require_host(url: &Url, hosts: &[&str], provider: &'static str) -> Result<()> {
    let host = url.host_str().unwrap_or_default();
    if hosts.iter().any(|h| h.eq_ignore_ascii_case(host)) {
        Ok(())
    } else {
        Err(EmbedError::HostMismatch {
            provider,
            url: url.to_string(),
        })
    }
}

/// Non-empty path segments of a URL
pub(crate) fn path_segments(url: &Url) -> Vec<&str> {
    url.path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default()
}

/// First value of a query parameter
pub(crate) fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Value of a `name=value` pair inside the URL fragment (`#t=30s`)
pub(crate) fn fragment_param(url: &Url, name: &str) -> Option<String> {
    url.fragment()?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

/// Parse a playback offset such as `42`, `42s`, `1m30s` or `1h2m3s`
pub(crate) fn parse_timestamp(value: &str) -> Option<u32> {
    static TIMESTAMP_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = TIMESTAMP_REGEX.get_or_init(|| {
        Regex::new(r"^(?:(\d+)h)?(?:(\d+)m)?(?:(\d+)s?)?$").unwrap()
    });

    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let caps = re.captures(value)?;
    let component = |index: usize, scale: u32| -> Option<u32> {
        match caps.get(index) {
            Some(m) => m.as_str().parse::<u32>().ok()?.checked_mul(scale),
            None => Some(0),
        }
    };

    let seconds = component(1, 3600)?
        .checked_add(component(2, 60)?)?
        .checked_add(component(3, 1)?)?;

    // An offset of zero is the same as no offset
    (seconds > 0).then_some(seconds)
}
