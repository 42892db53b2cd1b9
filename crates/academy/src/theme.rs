//! Configuration of the site chrome: logo, navigation and the external project and chat links.
use maud::{Markup, PreEscaped, Render, html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeConfig {
    pub logo: Logo,
    pub project: ProjectLink,
    pub chat: ChatLink,
    /// Links shown in the navbar, in display order.
    pub nav: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    /// Inline SVG markup. Trusted, as it is rendered without escaping.
    pub icon: Option<String>,
    pub text: String,
}

/// Where the project's source code lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLink {
    pub link: String,
}

/// Where the community chat lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatLink {
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

impl Render for Logo {
    fn render(&self) -> Markup {
        html! {
            @if let Some(icon) = &self.icon {
                (PreEscaped(icon))
            }
            span.logo-text { (self.text) }
        }
    }
}
