//! Fallback rendering for values no provider recognized
//!
//! Directly playable files become a native `<video>` element, other web
//! URLs become a plain link, and anything else is shown as inert text.

use crate::config::ResolverConfig;
use crate::markup;
use crate::media::Dimensions;
use url::Url;

/// Width used when the caller does not request one
pub const DEFAULT_WIDTH: u32 = 560;

/// File extensions a browser can play natively, with their MIME types
const PLAYABLE_EXTENSIONS: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("webm", "video/webm"),
    ("ogv", "video/ogg"),
    ("ogg", "video/ogg"),
    ("mov", "video/quicktime"),
];

/// Render `raw` without provider knowledge
///
/// `parsed` is the resolver's URL interpretation of `raw`, if it had one.
pub fn render(
    raw: &str,
    parsed: Option<&Url>,
    width: u32,
    height: u32,
    config: &ResolverConfig,
) -> String {
    let dimensions = Dimensions::resolve(width, height, DEFAULT_WIDTH, config.default_height);

    match parsed {
        Some(url) if is_web_url(url) => match playable_mime_type(url.path()) {
            Some(mime_type) => markup::video(url.as_str(), mime_type, dimensions),
            None => markup::link(url.as_str()),
        },
        // Other schemes (javascript:, data:, mailto:) are never made live
        Some(_) => markup::text(raw),
        None if is_relative_path(raw) => match playable_mime_type(strip_query(raw)) {
            Some(mime_type) => markup::video(raw, mime_type, dimensions),
            None => markup::text(raw),
        },
        None => markup::text(raw),
    }
}

fn is_web_url(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// A site-relative file reference such as `/uploads/clip.mp4`
fn is_relative_path(raw: &str) -> bool {
    !raw.is_empty() && !raw.contains(char::is_whitespace) && !raw.contains(':')
}

fn strip_query(raw: &str) -> &str {
    raw.split(&['?', '#'][..]).next().unwrap_or(raw)
}

/// MIME type for a path ending in a playable extension
pub fn playable_mime_type(path: &str) -> Option<&'static str> {
    let (_, extension) = path.rsplit_once('.')?;
    if extension.contains('/') {
        return None;
    }

    PLAYABLE_EXTENSIONS
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map(|(_, mime_type)| *mime_type)
}
