//! Form-control helpers for server-rendered views
//!
//! Each helper renders one control bound to a field as an HTML fragment.
//! Callers supply a [`FieldBinding`] (the field's id and current value);
//! how that binding is obtained from a model is up to the web layer.
//!
//! # Modules
//!
//! - [`field`] - Field bindings
//! - [`controls`] - Text, multiline, email and date inputs
//! - [`upload`] - File upload and thumbnail previews
//! - [`video`] - Video player controls backed by `embed-resolver`
//! - [`rich_text`] - CKEditor bootstrap
//!
//! # Example
//!
//! ```rust
//! use embed_resolver::MediaEmbedResolver;
//! use view_helpers::{video_player_editor, FieldBinding};
//!
//! let resolver = MediaEmbedResolver::default();
//! let field = FieldBinding::new("Trailer", "https://youtu.be/abc123").unwrap();
//!
//! let html = video_player_editor(&field, &resolver, 0, 315);
//! assert!(html.contains("name=\"Trailer\""));
//! assert!(html.contains("https://www.youtube.com/embed/abc123"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controls;
pub mod error;
pub mod field;
pub mod rich_text;
pub mod upload;
pub mod video;

pub use controls::{date_picker, email_editor, multiline_text_editor, text_editor};
pub use error::{HelperError, Result};
pub use field::FieldBinding;
pub use rich_text::{html_editor, RichEditorConfig};
pub use upload::{file_upload, is_image_path, thumbnail, thumbnail_for};
pub use video::{video_player, video_player_editor};
