//! Building blocks of the AI Engineering Academy website.
//!
//! The landing page is rendered from a [`ContentRegistry`](content::ContentRegistry) of course and
//! feature records, inside a [`layout`](layout::layout) configured by a [`ThemeConfig`](theme::ThemeConfig).
//! Pages are built by [Maudit](https://maudit.org), this crate only provides the markup and the
//! build-time checks of the content.

pub mod base_url;
pub mod config;
pub mod content;
pub mod errors;
pub mod layout;
pub mod logging;
pub mod render;
pub mod site;
pub mod text;
pub mod theme;
pub mod validate;

pub use config::{SiteConfig, SiteMetadata};
pub use site::Site;

/// Returns whether the site is being built in development mode (through `maudit dev`).
///
/// Content problems are only reported as warnings in development, so a half-written course doesn't stop the dev server.
pub fn is_dev() -> bool {
    maudit::is_dev()
}
