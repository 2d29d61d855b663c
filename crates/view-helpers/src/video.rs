//! Video player controls

use crate::controls::text_editor;
use crate::field::FieldBinding;
use embed_resolver::MediaEmbedResolver;

/// Player for the field's current value, framed as a thumbnail
pub fn video_player(
    field: &FieldBinding,
    resolver: &MediaEmbedResolver,
    width: u32,
    height: u32,
) -> String {
    // Not an anchor: the fallback fragment may itself be a link
    let mut html = String::from("<div class=\"thumbnail\">\n");
    html.push_str(&resolver.resolve(field.value(), width, height));
    html.push('\n');
    html.push_str("</div>\n");
    html
}

/// URL text box followed by a preview player once a value is set
pub fn video_player_editor(
    field: &FieldBinding,
    resolver: &MediaEmbedResolver,
    width: u32,
    height: u32,
) -> String {
    let mut html = text_editor(field);
    html.push('\n');

    if field.has_value() {
        html.push_str(&video_player(field, resolver, width, height));
    } else {
        tracing::trace!("No video set for field {}, skipping preview", field.id());
    }

    html
}
