//! Rich-text editor (CKEditor) bootstrap
//!
//! Renders a plain textarea followed by the script that upgrades it to a
//! CKEditor instance. The editor's contents are copied back into the
//! textarea when an element with class `save` is clicked.

use crate::controls::multiline_text_editor;
use crate::error::{HelperError, Result};
use crate::field::FieldBinding;
use html_escape::encode_double_quoted_attribute;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Settings for [`html_editor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichEditorConfig {
    /// Application root URL; the editor script is served below it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Editor UI language, chosen by the caller
    #[serde(default = "default_language")]
    pub language: String,

    /// Endpoint receiving files from the editor's upload dialog
    #[serde(default = "default_upload_url")]
    pub upload_url: String,

    /// Toolbar groups, in CKEditor's `toolbar_Full` format
    #[serde(default = "default_toolbar")]
    pub toolbar: Value,

    /// Comma-separated buttons hidden from the toolbar
    #[serde(default = "default_remove_buttons")]
    pub remove_buttons: String,
}

fn default_base_url() -> String {
    "/".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_upload_url() -> String {
    "/system/CKEditorFileUpload".to_string()
}

fn default_remove_buttons() -> String {
    "Save,NewPage,Templates,Flash".to_string()
}

fn default_toolbar() -> Value {
    json!([
        { "name": "document", "items": ["Source", "-", "Save", "NewPage", "DocProps", "Preview", "Print", "-", "Templates"] },
        { "name": "clipboard", "items": ["Cut", "Copy", "Paste", "PasteText", "PasteFromWord", "-", "Undo", "Redo"] },
        { "name": "editing", "items": ["Find", "Replace", "-", "SelectAll", "-", "SpellChecker", "Scayt"] },
        "/",
        { "name": "basicstyles", "items": ["Bold", "Italic", "Underline", "Strike", "Subscript", "Superscript", "-", "RemoveFormat"] },
        { "name": "paragraph", "items": ["NumberedList", "BulletedList", "-", "Outdent", "Indent", "-", "Blockquote", "CreateDiv", "-", "JustifyLeft", "JustifyCenter", "JustifyRight", "JustifyBlock", "-", "BidiLtr", "BidiRtl"] },
        { "name": "links", "items": ["Link", "Unlink", "Anchor"] },
        { "name": "insert", "items": ["Image", "Flash", "Table", "HorizontalRule", "Smiley", "SpecialChar", "PageBreak", "Iframe"] },
        "/",
        { "name": "styles", "items": ["Styles", "Format", "Font", "FontSize"] },
        { "name": "colors", "items": ["TextColor", "BGColor"] },
        { "name": "tools", "items": ["Maximize", "ShowBlocks", "-", "About"] }
    ])
}

impl Default for RichEditorConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            language: default_language(),
            upload_url: default_upload_url(),
            toolbar: default_toolbar(),
            remove_buttons: default_remove_buttons(),
        }
    }
}

impl RichEditorConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RichEditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the editor cannot use
    pub fn validate(&self) -> Result<()> {
        let language_ok = !self.language.is_empty()
            && self
                .language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !language_ok {
            return Err(HelperError::InvalidConfig(format!(
                "language '{}' is not a language tag",
                self.language
            )));
        }

        if !self.toolbar.is_array() {
            return Err(HelperError::InvalidConfig(
                "toolbar must be an array of groups".to_string(),
            ));
        }

        Ok(())
    }

    /// Set the editor language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the application root URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// URL of the CKEditor script
    pub fn script_url(&self) -> String {
        let base = self.base_url.trim();
        if base.is_empty() || base.ends_with('/') {
            format!("{}Scripts/ckeditor/ckeditor.js", base)
        } else {
            format!("{}/Scripts/ckeditor/ckeditor.js", base)
        }
    }

    /// Options object passed to `CKEDITOR.replace`
    fn editor_options(&self) -> Value {
        json!({
            "language": self.language,
            "filebrowserUploadUrl": self.upload_url,
            "toolbar": "Full",
            "toolbar_Full": self.toolbar,
            "removeButtons": self.remove_buttons,
        })
    }
}

/// Encode a value for inline `<script>` use
fn script_literal(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Textarea upgraded to a CKEditor instance
pub fn html_editor(field: &FieldBinding, config: &RichEditorConfig) -> String {
    let id = script_literal(&Value::from(field.id()));

    let mut html = multiline_text_editor(field);
    html.push('\n');
    html.push_str(&format!(
        "<script src=\"{}\"></script>\n",
        encode_double_quoted_attribute(&config.script_url())
    ));
    html.push_str("<script>\n");
    html.push_str(&format!(
        "var editor = CKEDITOR.replace({}, {});\n",
        id,
        script_literal(&config.editor_options())
    ));
    html.push_str("$('.save').click(function() {\n");
    html.push_str(&format!(
        "    $(document.getElementById({id})).val(CKEDITOR.instances[{id}].getData());\n",
        id = id
    ));
    html.push_str("});\n");
    html.push_str("</script>\n");

    tracing::trace!("Rendered rich-text editor for field {}", field.id());
    html
}
