//! Media embed resolution
//!
//! This crate turns a stored media URL into an embeddable HTML player
//! fragment. Known video hosts (YouTube, Vimeo, Dailymotion) are recognized
//! by an ordered table of [`providers::ProviderRule`]s; anything else falls
//! back to a generic rendering that never fails.
//!
//! # Example
//!
//! ```rust
//! use embed_resolver::resolve;
//!
//! let html = resolve("https://www.youtube.com/watch?v=abc123", 640, 360);
//! assert!(html.contains("https://www.youtube.com/embed/abc123"));
//! assert!(html.contains("width=\"640\""));
//!
//! assert_eq!(resolve("   ", 0, 315), "");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod markup;
pub mod media;
pub mod providers;
pub mod resolver;

pub use config::{ResolverConfig, DEFAULT_HEIGHT};
pub use error::{EmbedError, Result};
pub use media::{Dimensions, EmbedResult, MediaReference};
pub use providers::{ProviderKind, ProviderRule, VideoMatch};
pub use resolver::{resolve, MediaEmbedResolver};
pub use url::Url;
