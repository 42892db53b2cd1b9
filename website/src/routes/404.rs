use std::sync::Arc;

use academy::Site;
use academy::base_url::ResolveUrl;
use academy::layout::SeoMeta;
use maud::html;
use maudit::route::prelude::*;

use crate::layout::page;

#[route("404.html")]
pub struct NotFound {
    pub site: Arc<Site>,
}

impl Route for NotFound {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let site = &self.site;

        page(
            html! {
                main.container.not-found {
                    h1 { "404 - Not Found" }
                    p { "This page is not part of the curriculum." }
                    a href=(site.base_url.resolve("")) {
                        button.button-101 { "Back to the courses" }
                    }
                }
            },
            site,
            ctx,
            Some(SeoMeta {
                title: "404 - Page Not Found".to_string(),
                description: Some("This page is not part of the curriculum.".to_string()),
                canonical_url: None,
            }),
        )
    }
}
