//! File upload and thumbnail controls

use crate::field::FieldBinding;
use html_escape::encode_double_quoted_attribute;

/// Extensions rendered with an image preview
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Check if a stored value names an image
pub fn is_image_path(value: &str) -> bool {
    let value = value.to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| value.ends_with(ext))
}

/// Linked thumbnail for an image URL
pub fn thumbnail(src: &str) -> String {
    format!(
        "<a href=\"#\" class=\"thumbnail\"><img src=\"{}\" /></a>",
        encode_double_quoted_attribute(src)
    )
}

/// Thumbnail of the field's current value
pub fn thumbnail_for(field: &FieldBinding) -> String {
    thumbnail(field.value())
}

/// File input for `field`
///
/// When the field already holds a value it is carried in a hidden input so
/// that submitting without choosing a new file keeps it. Image values also
/// get a thumbnail preview.
pub fn file_upload(field: &FieldBinding) -> String {
    let id = field.id();
    let mut html = format!(
        "<div class=\"file-upload\" id=\"{id}\"><div><input name=\"{id}\" type=\"file\" /></div></div>",
        id = id
    );

    if field.has_value() {
        html.push_str(&format!(
            "<input type=\"hidden\" name=\"{}\" value=\"{}\" />",
            id,
            encode_double_quoted_attribute(field.value())
        ));
    }
    html.push('\n');

    if field.has_value() && is_image_path(field.value()) {
        html.push_str(&thumbnail(field.value()));
    }
    html.push('\n');

    html
}
