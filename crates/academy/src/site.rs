use crate::base_url::BaseUrl;
use crate::config::{SiteConfig, SiteMetadata};
use crate::content::ContentRegistry;
use crate::theme::ThemeConfig;

/// Everything pages need to render, shared by all routes.
#[derive(Debug, Clone)]
pub struct Site {
    pub metadata: SiteMetadata,
    pub registry: ContentRegistry,
    pub theme: ThemeConfig,
    pub base_url: BaseUrl,
}

impl Site {
    pub fn new(config: &SiteConfig, registry: ContentRegistry, theme: ThemeConfig) -> Self {
        Self {
            metadata: config.metadata(),
            registry,
            theme,
            base_url: config.base_url(),
        }
    }
}
