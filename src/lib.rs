//! Media embeds and form-control helpers
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`embed_resolver`] - Media URL to embeddable player resolution
//! - [`view_helpers`] - Field-bound form controls, including the video player

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use embed_resolver;
pub use view_helpers;

pub use embed_resolver::{resolve, MediaEmbedResolver, ResolverConfig};
