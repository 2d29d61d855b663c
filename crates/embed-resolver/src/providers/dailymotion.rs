//! Dailymotion videos

use super::{path_segments, query_param, require_host, ProviderKind, ProviderRule, VideoMatch};
use crate::config::ResolverConfig;
use crate::error::{EmbedError, Result};
use crate::markup;
use crate::media::Dimensions;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Width used when the caller does not request one
pub const DEFAULT_WIDTH: u32 = 480;

const HOSTS: &[&str] = &["dailymotion.com", "www.dailymotion.com", SHORT_HOST];

const SHORT_HOST: &str = "dai.ly";

/// The Dailymotion rule
pub fn rule() -> ProviderRule {
    ProviderRule {
        kind: ProviderKind::Dailymotion,
        default_width: DEFAULT_WIDTH,
        matcher: match_url,
        renderer: render,
    }
}

fn match_url(url: &Url) -> Option<VideoMatch> {
    parse(url).ok()
}

/// Parse a Dailymotion URL into a video match
///
/// Video pages carry a slug after the id (`/video/x7tgad0_title`); only the
/// leading alphanumeric run is the id.
pub fn parse(url: &Url) -> Result<VideoMatch> {
    require_host(url, HOSTS, "dailymotion")?;

    let segments = path_segments(url);
    let candidate = if url.host_str() == Some(SHORT_HOST) {
        segments.first().copied()
    } else {
        match segments.as_slice() {
            ["video", slug, ..] | ["embed", "video", slug, ..] => Some(*slug),
            _ => None,
        }
    };

    let id = candidate
        .and_then(leading_id)
        .ok_or(EmbedError::MissingId)?;

    let start_time = query_param(url, "start")
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|start| *start > 0);

    Ok(VideoMatch::new(id).with_start_time(start_time))
}

fn leading_id(slug: &str) -> Option<&str> {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = ID_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9]+").unwrap());
    re.find(slug).map(|m| m.as_str())
}

/// Player URL for a match
pub fn embed_url(video: &VideoMatch) -> String {
    let mut url = format!("https://www.dailymotion.com/embed/video/{}", video.video_id);
    if let Some(start) = video.start_time {
        url.push_str(&format!("?start={}", start));
    }
    url
}

fn render(video: &VideoMatch, dimensions: Dimensions, config: &ResolverConfig) -> String {
    markup::iframe(&embed_url(video), dimensions, config.allow_fullscreen)
}
