//! Basic input controls

use crate::field::FieldBinding;
use html_escape::{encode_double_quoted_attribute, encode_text};

/// Render an `<input>` bound to `field`
fn input(field: &FieldBinding, input_type: &str, class: &str) -> String {
    format!(
        "<input id=\"{id}\" name=\"{id}\" type=\"{}\" class=\"{}\" value=\"{}\" />",
        input_type,
        class,
        encode_double_quoted_attribute(field.value()),
        id = field.id()
    )
}

/// Single-line text box
pub fn text_editor(field: &FieldBinding) -> String {
    input(field, "text", "form-control")
}

/// Multi-line text area
pub fn multiline_text_editor(field: &FieldBinding) -> String {
    format!(
        "<textarea id=\"{id}\" name=\"{id}\" class=\"form-control\">{}</textarea>",
        encode_text(field.value()),
        id = field.id()
    )
}

/// Text box with an `@` addon, for email addresses
pub fn email_editor(field: &FieldBinding) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"input-group\">\n");
    html.push_str("<span class=\"input-group-addon\">@</span>\n");
    html.push_str(&text_editor(field));
    html.push('\n');
    html.push_str("</div>\n");
    html
}

/// Date/time text box picked up by the page's date picker script
pub fn date_picker(field: &FieldBinding) -> String {
    input(field, "datetime", "droplist date form-control")
}
