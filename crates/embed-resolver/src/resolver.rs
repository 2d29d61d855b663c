//! Media embed resolver
//!
//! [`MediaEmbedResolver`] walks its rule table in order and renders the
//! first match. Values no rule recognizes go to the generic fallback, and
//! blank values produce an empty fragment. Resolution never fails.

use crate::config::ResolverConfig;
use crate::media::{EmbedResult, MediaReference};
use crate::providers::{generic, ProviderKind, ProviderRule, VideoMatch};
use std::sync::OnceLock;
use url::Url;

/// Resolves media URLs into embeddable HTML fragments
#[derive(Debug, Clone)]
pub struct MediaEmbedResolver {
    config: ResolverConfig,
    rules: Vec<ProviderRule>,
}

impl Default for MediaEmbedResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl MediaEmbedResolver {
    /// Create a resolver using the built-in rules listed in `config.providers`
    pub fn new(config: ResolverConfig) -> Self {
        let rules = config
            .providers
            .iter()
            .filter_map(|kind| {
                let rule = ProviderRule::builtin(*kind);
                if rule.is_none() {
                    tracing::warn!(
                        "Ignoring provider '{}': the generic fallback always runs last",
                        kind
                    );
                }
                rule
            })
            .collect();

        Self { config, rules }
    }

    /// Create a resolver with an explicit, ordered rule table
    pub fn with_rules(config: ResolverConfig, rules: Vec<ProviderRule>) -> Self {
        Self { config, rules }
    }

    /// Get the configuration
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Get the rule table in priority order
    pub fn rules(&self) -> &[ProviderRule] {
        &self.rules
    }

    /// Render `url` as an HTML fragment sized `width` x `height`
    ///
    /// A zero width or height is replaced by the matching rule's default.
    /// Blank input yields an empty string.
    pub fn resolve(&self, url: &str, width: u32, height: u32) -> String {
        self.resolve_parts(url, width, height).into_html()
    }

    /// Resolve a media reference, reporting which rule rendered it
    pub fn resolve_reference(&self, reference: &MediaReference) -> EmbedResult {
        self.resolve_parts(&reference.url, reference.width, reference.height)
    }

    /// Identify the provider and video for `url` without rendering
    pub fn classify(&self, url: &str) -> Option<(ProviderKind, VideoMatch)> {
        let parsed = parse_candidate(url.trim())?;
        self.rules
            .iter()
            .find_map(|rule| rule.apply(&parsed).map(|video| (rule.kind, video)))
    }

    fn resolve_parts(&self, url: &str, width: u32, height: u32) -> EmbedResult {
        let value = url.trim();
        if value.is_empty() {
            return EmbedResult::empty();
        }

        let parsed = parse_candidate(value);

        if let Some(parsed_url) = parsed.as_ref() {
            for rule in &self.rules {
                if let Some(video) = rule.apply(parsed_url) {
                    tracing::trace!("Matched {} video {}", rule.kind, video.video_id);
                    return EmbedResult {
                        html: rule.render(&video, width, height, &self.config),
                        provider: Some(rule.kind),
                    };
                }
            }
        }

        tracing::debug!("No provider matched {:?}, using generic fallback", value);
        EmbedResult {
            html: generic::render(value, parsed.as_ref(), width, height, &self.config),
            provider: Some(ProviderKind::Generic),
        }
    }
}

/// Resolve with the default configuration
///
/// Shorthand for [`MediaEmbedResolver::resolve`] on a shared default
/// resolver.
pub fn resolve(url: &str, width: u32, height: u32) -> String {
    static DEFAULT_RESOLVER: OnceLock<MediaEmbedResolver> = OnceLock::new();
    DEFAULT_RESOLVER
        .get_or_init(MediaEmbedResolver::default)
        .resolve(url, width, height)
}

/// Interpret a trimmed value as a URL
///
/// Values typed without a scheme (`youtu.be/abc`, `youtube.com?v=abc`) are
/// retried as https.
fn parse_candidate(value: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(value) {
        return Some(url);
    }

    if looks_like_host_path(value) {
        return Url::parse(&format!("https://{}", value)).ok();
    }

    None
}

/// A dotted host followed by a path or query
///
/// A bare dotted name (`clip.mp4`) is left alone: it reads as a file name as
/// easily as a host.
fn looks_like_host_path(value: &str) -> bool {
    !value.starts_with('/')
        && !value.contains(char::is_whitespace)
        && value
            .find(&['/', '?'][..])
            .is_some_and(|end| value[..end].contains('.'))
}
