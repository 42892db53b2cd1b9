use std::sync::Arc;

use academy::Site;
use academy::base_url::ResolveUrl;
use academy::content::CourseRecord;
use academy::layout::SeoMeta;
use maud::{Markup, html};
use maudit::route::prelude::*;

use crate::layout::page;

/// Route of the course hosted on this site rather than on the course platform.
pub const RESPONSIBLE_AI_ROUTE: &str = "/course3";

#[route(RESPONSIBLE_AI_ROUTE)]
pub struct ResponsibleAiCourse {
    pub site: Arc<Site>,
}

impl Route for ResponsibleAiCourse {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let site = &self.site;

        let Some(course) = site
            .registry
            .courses()
            .iter()
            .find(|course| course.link == RESPONSIBLE_AI_ROUTE)
        else {
            return RenderResult::Err(
                format!("no course in the registry links to {}", RESPONSIBLE_AI_ROUTE).into(),
            );
        };

        let seo = SeoMeta {
            title: course.title.clone(),
            description: Some(course.description.clone()),
            canonical_url: ctx.canonical_url(),
        };

        RenderResult::from(page(course_overview(course, site), site, ctx, Some(seo)))
    }
}

fn course_overview(course: &CourseRecord, site: &Site) -> Markup {
    html! {
        main.container.course-overview {
            img.course-image src=(site.base_url.resolve(&course.image_url)) alt=(course.title);
            h1 { (course.title) }
            p { (course.description) }
            p.course-status { "This course is being prepared. Join the community chat to hear when it opens." }
            a href=(site.theme.chat.link) {
                button.button-101 { "Join the chat" }
            }
        }
    }
}
