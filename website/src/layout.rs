use academy::Site;
use academy::layout::{SeoMeta, layout};
use maud::Markup;
use maudit::assets::StyleOptions;
use maudit::route::PageContext;

/// Bundled and hashed by Maudit, the link is added to the page's `<head>` at build time.
pub const STYLESHEET: &str = "assets/academy.css";

/// Wraps `main` in the academy layout and includes the site stylesheet.
pub fn page(main: Markup, site: &Site, ctx: &mut PageContext, seo: Option<SeoMeta>) -> Markup {
    ctx.assets
        .include_style_with_options(STYLESHEET, StyleOptions { tailwind: false });

    layout(main, site, seo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_stylesheet_exists() {
        assert!(Path::new(env!("CARGO_MANIFEST_DIR")).join(STYLESHEET).is_file());
    }
}
