use maud::{DOCTYPE, Markup, PreEscaped, html};
use maudit::maud::generator;

use crate::base_url::ResolveUrl;
use crate::config::SiteMetadata;
use crate::site::Site;
use crate::theme::ThemeConfig;

const FAVICON: &str = "img/favicon.svg";
const SOCIAL_IMAGE: &str = "img/social-card.png";

/// Route of the page redirecting to the community chat.
pub const CHAT_ROUTE: &str = "chat/";

pub struct SeoMeta {
    pub title: String,
    pub description: Option<String>,
    pub canonical_url: Option<String>,
}

impl SeoMeta {
    /// Metadata for a page titled after the site itself.
    pub fn for_site(site: &SiteMetadata) -> Self {
        Self {
            title: site.title.clone(),
            description: None,
            canonical_url: None,
        }
    }

    pub fn render(&self, site: &Site) -> Markup {
        let formatted_title = if self.title == site.metadata.title {
            self.title.clone()
        } else {
            format!("{} - {}", self.title, site.metadata.title)
        };

        let description = self
            .description
            .as_ref()
            .unwrap_or(&site.metadata.description);

        let social_image_url = site.base_url.absolute(SOCIAL_IMAGE);

        html! {
            title { (formatted_title) }
            meta name="description" content=(description);

            // Open Graph meta tags
            meta property="og:title" content=(formatted_title);
            meta property="og:description" content=(description);
            meta property="og:type" content="website";
            @if let Some(social_image_url) = &social_image_url {
                meta property="og:image" content=(social_image_url);
            }
            @if let Some(canonical_url) = &self.canonical_url {
                meta property="og:url" content=(canonical_url);
                link rel="canonical" href=(canonical_url);
            }

            // Twitter Card meta tags
            meta name="twitter:card" content="summary";
            meta name="twitter:title" content=(formatted_title);
            meta name="twitter:description" content=(description);
            @if let Some(social_image_url) = &social_image_url {
                meta name="twitter:image" content=(social_image_url);
            }
        }
    }
}

pub fn navbar(theme: &ThemeConfig, resolver: &impl ResolveUrl) -> Markup {
    html! {
        nav.navbar {
            div.container.navbar-inner {
                a.navbar-brand href=(resolver.resolve("")) {
                    (theme.logo)
                }
                div.navbar-links {
                    @for link in &theme.nav {
                        a href=(resolver.resolve(&link.href)) { (link.label) }
                    }
                }
                div.navbar-icons {
                    a href=(theme.project.link) {
                        span.sr-only { "View the project on GitHub" }
                        (PreEscaped(include_str!("../assets/github.svg")))
                    }
                    a href=(theme.chat.link) {
                        span.sr-only { "Join the community chat" }
                        (PreEscaped(include_str!("../assets/discord.svg")))
                    }
                }
            }
        }
    }
}

fn footer(site: &Site) -> Markup {
    html! {
        footer.footer {
            div.container.footer-inner {
                a.footer-brand href=(site.base_url.resolve("")) {
                    "Copyright © " (site.metadata.title) "."
                }
                div.footer-links {
                    a href=(site.theme.project.link) { "GitHub" }
                    a href=(site.base_url.resolve(CHAT_ROUTE)) { "Community chat" }
                }
            }
        }
    }
}

/// Wraps a page body in the full HTML document: head, navbar and footer.
///
/// Stylesheets are not linked here, routes include them through Maudit's asset pipeline.
pub fn layout(main: Markup, site: &Site, seo: Option<SeoMeta>) -> Markup {
    let seo_data = seo.unwrap_or_else(|| SeoMeta::for_site(&site.metadata));

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                link rel="icon" href=(site.base_url.resolve(FAVICON));
                (seo_data.render(site))
            }
            body {
                (navbar(&site.theme, &site.base_url))
                (main)
                (footer(site))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base_url::BaseUrl;
    use crate::content::ContentRegistry;
    use crate::theme::{ChatLink, Logo, NavLink, ProjectLink};
    use scraper::{Html, Selector};

    fn site(base_url: BaseUrl) -> Site {
        Site {
            metadata: SiteMetadata {
                title: "Academy".to_string(),
                tagline: "Learn".to_string(),
                description: "Default description".to_string(),
            },
            registry: ContentRegistry::default(),
            theme: ThemeConfig {
                logo: Logo {
                    icon: None,
                    text: "Academy".to_string(),
                },
                project: ProjectLink {
                    link: "https://github.com/example/academy".to_string(),
                },
                chat: ChatLink {
                    link: "https://discord.com".to_string(),
                },
                nav: vec![
                    NavLink::new("Courses", "#courses"),
                    NavLink::new("Docs", "docs/"),
                ],
            },
            base_url,
        }
    }

    fn attrs(document: &Html, selector: &str, attr: &str) -> Vec<String> {
        let selector = Selector::parse(selector).unwrap();
        document
            .select(&selector)
            .filter_map(|element| element.value().attr(attr).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_navbar_uses_theme_links() {
        let site = site(BaseUrl::new("/academy"));
        let document =
            Html::parse_fragment(&navbar(&site.theme, &site.base_url).into_string());

        assert_eq!(attrs(&document, ".navbar-brand", "href"), ["/academy/"]);
        assert_eq!(
            attrs(&document, ".navbar-links a", "href"),
            ["#courses", "/academy/docs/"]
        );
        assert_eq!(
            attrs(&document, ".navbar-icons a", "href"),
            ["https://github.com/example/academy", "https://discord.com"]
        );
    }

    #[test]
    fn test_layout_head() {
        let site = site(BaseUrl::default());
        let document = Html::parse_document(
            &layout(html! { p { "body" } }, &site, None).into_string(),
        );

        assert_eq!(attrs(&document, "link[rel=icon]", "href"), ["/img/favicon.svg"]);
        assert_eq!(
            attrs(&document, "meta[name=description]", "content"),
            ["Default description"]
        );
        assert_eq!(attrs(&document, "meta[name=generator]", "content").len(), 1);
        // No origin, no absolute URLs
        assert!(attrs(&document, "meta[property='og:image']", "content").is_empty());
        assert!(attrs(&document, "link[rel=canonical]", "href").is_empty());
        assert_eq!(
            attrs(&document, "footer a", "href"),
            ["/", "https://github.com/example/academy", "/chat/"]
        );

        let brand = Selector::parse(".footer-brand").unwrap();
        let brand: String = document.select(&brand).next().unwrap().text().collect();
        assert_eq!(brand, "Copyright © Academy.");
    }

    #[test]
    fn test_seo_meta_with_origin() {
        let site = site(BaseUrl::new("/").with_origin("https://example.com"));
        let seo = SeoMeta {
            title: "404 - Not Found".to_string(),
            description: Some("Nothing here".to_string()),
            canonical_url: Some("https://example.com/404.html".to_string()),
        };
        let document = Html::parse_fragment(&seo.render(&site).into_string());

        let title = Selector::parse("title").unwrap();
        let title: String = document.select(&title).next().unwrap().text().collect();
        assert_eq!(title, "404 - Not Found - Academy");

        assert_eq!(
            attrs(&document, "meta[property='og:image']", "content"),
            ["https://example.com/img/social-card.png"]
        );
        assert_eq!(
            attrs(&document, "link[rel=canonical]", "href"),
            ["https://example.com/404.html"]
        );
        assert_eq!(
            attrs(&document, "meta[name=description]", "content"),
            ["Nothing here"]
        );
    }
}
