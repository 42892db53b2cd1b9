//! Rendering of the landing page from the content registry.
//!
//! Every function here is pure: the same records and resolver always produce the same markup.
//! Optional fields that are missing are left out of the output rather than reported.
use maud::{Markup, html};

use crate::base_url::ResolveUrl;
use crate::config::SiteMetadata;
use crate::content::{ContentRegistry, CourseRecord, FeatureRecord};
use crate::text::Text;

/// A catalog card: image, title, description and a button navigating to the course.
pub fn course_card(course: &CourseRecord, resolver: &impl ResolveUrl) -> Markup {
    html! {
        div.col."col--4" {
            div.course-card {
                img.course-image src=(resolver.resolve(&course.image_url)) alt=(course.title);
                h3 { (course.title) }
                p { (course.description) }
                a href=(course.link) {
                    button.button-101 { "Visit Course" }
                }
            }
        }
    }
}

pub fn feature_panel(feature: &FeatureRecord, resolver: &impl ResolveUrl) -> Markup {
    html! {
        div.col."col--4".feature {
            @if let Some(image_url) = &feature.image_url {
                div.image-container {
                    img.feature-image src=(resolver.resolve(image_url)) alt=(feature.title.to_string());
                }
            }
            h3 { (feature.title) }
            (paragraph("description", &feature.description))
            @if let Some(second_paragraph) = &feature.second_paragraph {
                (paragraph("second-paragraph", second_paragraph))
            }
        }
    }
}

// Lists can't live inside a <p>, fall back to a <div> for them.
fn paragraph(class: &str, text: &Text) -> Markup {
    html! {
        @if text.is_inline() {
            p class=(class) { (text) }
        } @else {
            div class=(class) { (text) }
        }
    }
}

pub fn hero(site: &SiteMetadata) -> Markup {
    html! {
        header.hero."hero--primary".hero-banner {
            div.container {
                h1.hero-title { (site.title) }
                p.hero-subtitle { (site.tagline) }
            }
        }
    }
}

/// The landing page body: hero header, then every course and every feature in registry order.
pub fn home(
    site: &SiteMetadata,
    registry: &ContentRegistry,
    resolver: &impl ResolveUrl,
) -> Markup {
    html! {
        (hero(site))
        main {
            section.courses-section id="courses" {
                div.container {
                    h1 { "Courses" }
                    div.row {
                        @for course in registry.courses() {
                            (course_card(course, resolver))
                        }
                    }
                }
            }
            section.features id="features" {
                div.container {
                    h1 { "Features" }
                    div.row {
                        @for feature in registry.features() {
                            (feature_panel(feature, resolver))
                        }
                    }
                }
            }
        }
    }
}
