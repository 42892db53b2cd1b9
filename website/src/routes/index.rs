use std::sync::Arc;

use academy::Site;
use academy::layout::SeoMeta;
use academy::render::home;
use maudit::route::prelude::*;

use crate::layout::page;

#[route("/")]
pub struct Index {
    pub site: Arc<Site>,
}

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let site = &self.site;

        let seo = SeoMeta {
            canonical_url: ctx.canonical_url(),
            ..SeoMeta::for_site(&site.metadata)
        };

        page(
            home(&site.metadata, &site.registry, &site.base_url),
            site,
            ctx,
            Some(seo),
        )
    }
}
