//! Vimeo videos

use super::{
    fragment_param, parse_timestamp, path_segments, query_param, require_host, ProviderKind,
    ProviderRule, VideoMatch,
};
use crate::config::ResolverConfig;
use crate::error::{EmbedError, Result};
use crate::markup;
use crate::media::Dimensions;
use url::Url;

/// Width used when the caller does not request one
pub const DEFAULT_WIDTH: u32 = 640;

const HOSTS: &[&str] = &["vimeo.com", "www.vimeo.com", PLAYER_HOST];

const PLAYER_HOST: &str = "player.vimeo.com";

/// The Vimeo rule
pub fn rule() -> ProviderRule {
    ProviderRule {
        kind: ProviderKind::Vimeo,
        default_width: DEFAULT_WIDTH,
        matcher: match_url,
        renderer: render,
    }
}

fn match_url(url: &Url) -> Option<VideoMatch> {
    parse(url).ok()
}

/// Parse a Vimeo URL into a video match
///
/// Accepts `vimeo.com/ID`, `vimeo.com/channels/NAME/ID`,
/// `vimeo.com/groups/NAME/videos/ID`, `vimeo.com/album/N/video/ID` and
/// `player.vimeo.com/video/ID`. Video ids are numeric.
///
/// Unlisted videos carry a hex hash either as a second path segment
/// (`vimeo.com/ID/HASH`) or as the `h` query parameter of a player URL.
pub fn parse(url: &Url) -> Result<VideoMatch> {
    require_host(url, HOSTS, "vimeo")?;

    let segments = path_segments(url);
    let (candidate, path_hash) = if url.host_str() == Some(PLAYER_HOST) {
        match segments.as_slice() {
            ["video", id, ..] => (Some(*id), None),
            _ => (None, None),
        }
    } else {
        match segments.as_slice() {
            ["channels", _, id, ..] => (Some(*id), None),
            ["groups", _, "videos", id, ..] => (Some(*id), None),
            ["album", _, "video", id, ..] => (Some(*id), None),
            ["video", id, ..] => (Some(*id), None),
            [id, hash, ..] => (Some(*id), Some(*hash)),
            [id] => (Some(*id), None),
            [] => (None, None),
        }
    };

    let id = candidate.ok_or(EmbedError::MissingId)?;
    if !is_numeric(id) {
        return Err(EmbedError::MissingId);
    }

    let hash = path_hash
        .map(str::to_string)
        .or_else(|| query_param(url, "h"))
        .filter(|hash| is_hash(hash));
    let start_time = fragment_param(url, "t").and_then(|value| parse_timestamp(&value));
    Ok(VideoMatch::new(id)
        .with_start_time(start_time)
        .with_hash(hash))
}

fn is_numeric(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

fn is_hash(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

/// Player URL for a match
pub fn embed_url(video: &VideoMatch) -> String {
    let mut url = format!("https://player.vimeo.com/video/{}", video.video_id);
    if let Some(hash) = &video.hash {
        url.push_str(&format!("?h={}", hash));
    }
    if let Some(start) = video.start_time {
        url.push_str(&format!("#t={}s", start));
    }
    url
}

fn render(video: &VideoMatch, dimensions: Dimensions, config: &ResolverConfig) -> String {
    markup::iframe(&embed_url(video), dimensions, config.allow_fullscreen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(url: &str) -> Result<VideoMatch> {
        parse(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_parse_vimeo_url() {
        assert_eq!(parse_str("https://vimeo.com/123456789").unwrap().video_id, "123456789");
        assert_eq!(
            parse_str("https://www.vimeo.com/123456789/").unwrap().video_id,
            "123456789"
        );
    }

    #[test]
    fn test_parse_vimeo_unlisted_hash() {
        let video = parse_str("https://vimeo.com/123456789/abcdef0123").unwrap();
        assert_eq!(video.video_id, "123456789");
        assert_eq!(video.hash.as_deref(), Some("abcdef0123"));
        assert_eq!(embed_url(&video), "https://player.vimeo.com/video/123456789?h=abcdef0123");
    }

    #[test]
    fn test_parse_vimeo_player_url() {
        let video = parse_str("https://player.vimeo.com/video/76979871?h=8272103f6e").unwrap();
        assert_eq!(video.video_id, "76979871");
        assert_eq!(video.hash.as_deref(), Some("8272103f6e"));
        assert_eq!(embed_url(&video), "https://player.vimeo.com/video/76979871?h=8272103f6e");
    }

    #[test]
    fn test_parse_vimeo_hash_with_timestamp() {
        let video = parse_str("https://vimeo.com/76979871/8272103f6e#t=1m5s").unwrap();
        assert_eq!(
            embed_url(&video),
            "https://player.vimeo.com/video/76979871?h=8272103f6e#t=65s"
        );
    }

    #[test]
    fn test_parse_vimeo_ignores_non_hex_hash() {
        let video = parse_str("https://vimeo.com/76979871/description").unwrap();
        assert_eq!(video.video_id, "76979871");
        assert_eq!(video.hash, None);

        let video = parse_str("https://player.vimeo.com/video/76979871?h=%22onload").unwrap();
        assert_eq!(video.hash, None);
        assert_eq!(embed_url(&video), "https://player.vimeo.com/video/76979871");
    }

    #[test]
    fn test_parse_vimeo_channel_and_group() {
        assert_eq!(
            parse_str("https://vimeo.com/channels/staffpicks/76979871").unwrap().video_id,
            "76979871"
        );
        assert_eq!(
            parse_str("https://vimeo.com/groups/shortfilms/videos/76979871").unwrap().video_id,
            "76979871"
        );
        assert_eq!(
            parse_str("https://vimeo.com/album/2222/video/76979871").unwrap().video_id,
            "76979871"
        );
    }

    #[test]
    fn test_parse_vimeo_timestamp() {
        let video = parse_str("https://vimeo.com/76979871#t=30s").unwrap();
        assert_eq!(video.start_time, Some(30));
        assert_eq!(embed_url(&video), "https://player.vimeo.com/video/76979871#t=30s");
    }

    #[test]
    fn test_parse_vimeo_non_video_pages() {
        assert!(matches!(parse_str("https://vimeo.com/"), Err(EmbedError::MissingId)));
        assert!(matches!(
            parse_str("https://vimeo.com/staffpicks"),
            Err(EmbedError::MissingId)
        ));
        assert!(matches!(
            parse_str("https://player.vimeo.com/api/player.js"),
            Err(EmbedError::MissingId)
        ));
    }

    #[test]
    fn test_parse_vimeo_rejects_other_hosts() {
        assert!(matches!(
            parse_str("https://fakevimeo.com/12345"),
            Err(EmbedError::HostMismatch { .. })
        ));
    }

    #[test]
    fn test_rule_renders_player_iframe() {
        let html = rule().render(&VideoMatch::new("123"), 0, 315, &ResolverConfig::default());
        assert!(html.contains("width=\"640\""));
        assert!(html.contains("height=\"315\""));
        assert!(html.contains("src=\"https://player.vimeo.com/video/123\""));
    }
}
