//! YouTube videos
//!
//! Recognizes watch pages, `/embed/`, `/shorts/`, `/live/` and `/v/` paths on
//! the youtube.com family of hosts, plus youtu.be short links.

use super::{
    fragment_param, parse_timestamp, path_segments, query_param, require_host, ProviderKind,
    ProviderRule, VideoMatch,
};
use crate::config::ResolverConfig;
use crate::error::{EmbedError, Result};
use crate::markup;
use crate::media::Dimensions;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Width used when the caller does not request one
pub const DEFAULT_WIDTH: u32 = 560;

const HOSTS: &[&str] = &[
    "youtube.com",
    "www.youtube.com",
    "m.youtube.com",
    "music.youtube.com",
    "youtube-nocookie.com",
    "www.youtube-nocookie.com",
    SHORT_HOST,
];

const SHORT_HOST: &str = "youtu.be";

/// The YouTube rule
pub fn rule() -> ProviderRule {
    ProviderRule {
        kind: ProviderKind::YouTube,
        default_width: DEFAULT_WIDTH,
        matcher: match_url,
        renderer: render,
    }
}

fn match_url(url: &Url) -> Option<VideoMatch> {
    parse(url).ok()
}

/// Parse a YouTube URL into a video match
pub fn parse(url: &Url) -> Result<VideoMatch> {
    require_host(url, HOSTS, "youtube")?;

    let video_id = extract_id(url)?;
    if !is_valid_id(&video_id) {
        return Err(EmbedError::InvalidUrl(url.to_string()));
    }

    Ok(VideoMatch::new(video_id).with_start_time(extract_start_time(url)))
}

fn extract_id(url: &Url) -> Result<String> {
    let segments = path_segments(url);

    // Handle youtu.be short URLs
    if url.host_str() == Some(SHORT_HOST) {
        return segments
            .first()
            .map(|id| id.to_string())
            .ok_or(EmbedError::MissingId);
    }

    match segments.as_slice() {
        ["watch", ..] => query_param(url, "v")
            .filter(|v| !v.is_empty())
            .ok_or(EmbedError::MissingId),
        ["embed" | "shorts" | "live" | "v", id, ..] => Ok(id.to_string()),
        _ => Err(EmbedError::MissingId),
    }
}

fn is_valid_id(id: &str) -> bool {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ID_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());
    re.is_match(id)
}

/// Look for `t=` or `start=` in the query, then `#t=` in the fragment
fn extract_start_time(url: &Url) -> Option<u32> {
    ["t", "start"]
        .iter()
        .find_map(|name| query_param(url, name))
        .or_else(|| fragment_param(url, "t"))
        .and_then(|value| parse_timestamp(&value))
}

/// Player URL for a match
pub fn embed_url(video: &VideoMatch, config: &ResolverConfig) -> String {
    let host = if config.privacy_enhanced_youtube {
        "www.youtube-nocookie.com"
    } else {
        "www.youtube.com"
    };

    let mut url = format!("https://{}/embed/{}", host, video.video_id);
    if let Some(start) = video.start_time {
        url.push_str(&format!("?start={}", start));
    }
    url
}

fn render(video: &VideoMatch, dimensions: Dimensions, config: &ResolverConfig) -> String {
    markup::iframe(&embed_url(video, config), dimensions, config.allow_fullscreen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(url: &str) -> Result<VideoMatch> {
        parse(&Url::parse(url).unwrap())
    }

    #[test]
    fn test_parse_youtube_standard_url() {
        let video = parse_str("https://www.youtube.com/watch?v=dQw4w9WgXcQ").unwrap();
        assert_eq!(video.video_id, "dQw4w9WgXcQ");
        assert!(video.start_time.is_none());
    }

    #[test]
    fn test_parse_youtube_watch_with_extra_params() {
        let video =
            parse_str("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&list=PL1").unwrap();
        assert_eq!(video.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_parse_youtube_short_url() {
        let video = parse_str("https://youtu.be/dQw4w9WgXcQ?si=abc").unwrap();
        assert_eq!(video.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_parse_youtube_embed_url() {
        let video = parse_str("https://www.youtube.com/embed/dQw4w9WgXcQ").unwrap();
        assert_eq!(video.video_id, "dQw4w9WgXcQ");
    }

    #[test]
    fn test_parse_youtube_shorts_and_mobile() {
        assert_eq!(
            parse_str("https://youtube.com/shorts/abc_DEF-123").unwrap().video_id,
            "abc_DEF-123"
        );
        assert_eq!(
            parse_str("https://m.youtube.com/watch?v=abc123").unwrap().video_id,
            "abc123"
        );
        assert_eq!(
            parse_str("https://www.youtube-nocookie.com/embed/abc123").unwrap().video_id,
            "abc123"
        );
    }

    #[test]
    fn test_parse_youtube_with_timestamp() {
        let video = parse_str("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s").unwrap();
        assert_eq!(video.start_time, Some(42));

        let video = parse_str("https://youtu.be/dQw4w9WgXcQ?t=1m30s").unwrap();
        assert_eq!(video.start_time, Some(90));

        let video = parse_str("https://www.youtube.com/watch?v=dQw4w9WgXcQ#t=15").unwrap();
        assert_eq!(video.start_time, Some(15));
    }

    #[test]
    fn test_parse_youtube_with_start_param() {
        let video =
            parse_str("https://www.youtube.com/watch?v=dQw4w9WgXcQ&start=100").unwrap();
        assert_eq!(video.start_time, Some(100));
    }

    #[test]
    fn test_parse_youtube_rejects_other_hosts() {
        assert!(matches!(
            parse_str("https://notyoutube.com/watch?v=abc"),
            Err(EmbedError::HostMismatch { .. })
        ));
        assert!(parse_str("https://youtube.com.evil.com/watch?v=abc").is_err());
    }

    #[test]
    fn test_parse_youtube_missing_id() {
        assert!(matches!(
            parse_str("https://www.youtube.com/watch"),
            Err(EmbedError::MissingId)
        ));
        assert!(matches!(
            parse_str("https://www.youtube.com/feed/trending"),
            Err(EmbedError::MissingId)
        ));
        assert!(matches!(parse_str("https://youtu.be/"), Err(EmbedError::MissingId)));
    }

    #[test]
    fn test_parse_youtube_rejects_bad_id() {
        assert!(matches!(
            parse_str("https://www.youtube.com/watch?v=%3Cscript%3E"),
            Err(EmbedError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_embed_url() {
        let config = ResolverConfig::default();
        let video = VideoMatch::new("dQw4w9WgXcQ");
        assert_eq!(embed_url(&video, &config), "https://www.youtube.com/embed/dQw4w9WgXcQ");

        let video = video.with_start_time(Some(42));
        assert_eq!(
            embed_url(&video, &config),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?start=42"
        );
    }

    #[test]
    fn test_embed_url_privacy_enhanced() {
        let config = ResolverConfig::default().with_privacy_enhanced_youtube(true);
        let video = VideoMatch::new("dQw4w9WgXcQ");
        assert_eq!(
            embed_url(&video, &config),
            "https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ"
        );
    }

    #[test]
    fn test_rule_renders_iframe() {
        let rule = rule();
        let html = rule.render(&VideoMatch::new("abc123"), 0, 0, &ResolverConfig::default());
        assert!(html.starts_with("<iframe width=\"560\" height=\"315\""));
        assert!(html.contains("src=\"https://www.youtube.com/embed/abc123\""));
    }
}
