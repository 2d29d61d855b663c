//! HTML builders shared by the provider renderers
//!
//! Every value that can originate from user input goes through
//! `html_escape` before it is written into markup.

use crate::media::Dimensions;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Render a player iframe
pub fn iframe(src: &str, dimensions: Dimensions, allow_fullscreen: bool) -> String {
    format!(
        "<iframe width=\"{}\" height=\"{}\" src=\"{}\" frameborder=\"0\"{}></iframe>",
        dimensions.width,
        dimensions.height,
        encode_double_quoted_attribute(src),
        if allow_fullscreen { " allowfullscreen" } else { "" }
    )
}

/// Render a native `<video>` element for a directly playable file
pub fn video(src: &str, mime_type: &str, dimensions: Dimensions) -> String {
    format!(
        "<video width=\"{}\" height=\"{}\" controls><source src=\"{}\" type=\"{}\"></video>",
        dimensions.width,
        dimensions.height,
        encode_double_quoted_attribute(src),
        mime_type
    )
}

/// Render a plain link to the value
pub fn link(href: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        encode_double_quoted_attribute(href),
        encode_text(href)
    )
}

/// Render the value as inert text
pub fn text(value: &str) -> String {
    format!("<span>{}</span>", encode_text(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: Dimensions = Dimensions { width: 640, height: 360 };

    #[test]
    fn test_iframe() {
        assert_eq!(
            iframe("https://player.vimeo.com/video/1", SIZE, true),
            "<iframe width=\"640\" height=\"360\" src=\"https://player.vimeo.com/video/1\" frameborder=\"0\" allowfullscreen></iframe>"
        );
    }

    #[test]
    fn test_iframe_without_fullscreen() {
        let html = iframe("https://player.vimeo.com/video/1", SIZE, false);
        assert!(!html.contains("allowfullscreen"));
        assert!(html.ends_with("frameborder=\"0\"></iframe>"));
    }

    #[test]
    fn test_video() {
        assert_eq!(
            video("https://example.com/a.mp4", "video/mp4", SIZE),
            "<video width=\"640\" height=\"360\" controls><source src=\"https://example.com/a.mp4\" type=\"video/mp4\"></video>"
        );
    }

    #[test]
    fn test_link_escapes_attribute() {
        let html = link("https://example.com/?a=1&b=\"2\"");
        assert!(html.starts_with("<a href=\"https://example.com/?a=1&amp;b=&quot;2&quot;\">"));
        assert!(!html.contains("b=\"2\""));
    }

    #[test]
    fn test_text_escapes_markup() {
        let html = text("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
