//! Resolution of static asset paths and internal links against the site's base URL.
use url::Url;

/// Turns a path from the content registry into the URL a browser should request.
pub trait ResolveUrl {
    fn resolve(&self, path: &str) -> String;
}

/// The location the site is deployed at, e.g. `/` or `https://example.com/academy/`.
///
/// Paths are joined onto the base path, while absolute URLs and in-page references are left
/// untouched.
///
/// ## Example
/// ```rust
/// use academy::base_url::{BaseUrl, ResolveUrl};
///
/// let base = BaseUrl::new("/academy");
/// assert_eq!(base.resolve("img/logo.svg"), "/academy/img/logo.svg");
/// assert_eq!(base.resolve("https://example.com"), "https://example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    origin: Option<String>,
    path: String,
}

impl BaseUrl {
    /// Create a base URL from a root-relative base path. Missing leading or trailing slashes are added.
    pub fn new(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        let path = if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        };

        Self { origin: None, path }
    }

    /// Set the scheme and host the site is served from, e.g. `https://example.com`.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        let origin = origin.into();
        self.origin = Some(origin.trim_end_matches('/').to_string());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    /// The full URL of the site root, if the origin is known.
    pub fn site_url(&self) -> Option<String> {
        self.origin
            .as_ref()
            .map(|origin| format!("{}{}", origin, self.path.trim_end_matches('/')))
    }

    /// Like [`ResolveUrl::resolve`], but prefixes the origin so the URL can be used outside of the site,
    /// e.g. in Open Graph tags. Returns `None` if no origin is configured and the path is not already absolute.
    pub fn absolute(&self, path: &str) -> Option<String> {
        if is_absolute_url(path) {
            return Some(path.to_string());
        }

        self.origin
            .as_ref()
            .map(|origin| format!("{}{}", origin, self.resolve(path)))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        BaseUrl::new("/")
    }
}

impl ResolveUrl for BaseUrl {
    fn resolve(&self, path: &str) -> String {
        if is_absolute_url(path) || path.starts_with('#') || path.starts_with('?') {
            return path.to_string();
        }

        // Already prefixed with a non-root base path
        if self.path != "/" && path.starts_with(&self.path) {
            return path.to_string();
        }

        format!("{}{}", self.path, path.trim_start_matches('/'))
    }
}

/// Returns whether `url` carries its own scheme (`https:`, `mailto:`, ...) or is protocol-relative (`//cdn.example.com`).
pub fn is_absolute_url(url: &str) -> bool {
    url.starts_with("//") || Url::parse(url).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_path_normalization() {
        assert_eq!(BaseUrl::new("/").path(), "/");
        assert_eq!(BaseUrl::new("").path(), "/");
        assert_eq!(BaseUrl::new("academy").path(), "/academy/");
        assert_eq!(BaseUrl::new("/academy/").path(), "/academy/");
        assert_eq!(BaseUrl::new("/docs/academy").path(), "/docs/academy/");
    }

    #[test]
    fn test_resolve_relative_paths() {
        let root = BaseUrl::default();
        assert_eq!(root.resolve("img/x.png"), "/img/x.png");
        assert_eq!(root.resolve("/img/x.png"), "/img/x.png");
        assert_eq!(root.resolve(""), "/");

        let nested = BaseUrl::new("/academy/");
        assert_eq!(nested.resolve("img/x.png"), "/academy/img/x.png");
        assert_eq!(nested.resolve("/img/x.png"), "/academy/img/x.png");
        assert_eq!(nested.resolve(""), "/academy/");
    }

    #[test]
    fn test_resolve_leaves_absolute_urls_alone() {
        let base = BaseUrl::new("/academy/");
        assert_eq!(base.resolve("https://example.com"), "https://example.com");
        assert_eq!(
            base.resolve("//cdn.example.com/x.png"),
            "//cdn.example.com/x.png"
        );
        assert_eq!(base.resolve("mailto:hi@example.com"), "mailto:hi@example.com");
        assert_eq!(base.resolve("#features"), "#features");
        assert_eq!(base.resolve("/academy/img/x.png"), "/academy/img/x.png");
    }

    #[test]
    fn test_absolute_requires_origin() {
        let base = BaseUrl::new("/academy");
        assert_eq!(base.absolute("img/card.svg"), None);
        assert_eq!(
            base.absolute("https://example.com/x"),
            Some("https://example.com/x".to_string())
        );

        let base = base.with_origin("https://example.com/");
        assert_eq!(base.origin(), Some("https://example.com"));
        assert_eq!(
            base.absolute("img/card.svg"),
            Some("https://example.com/academy/img/card.svg".to_string())
        );
        assert_eq!(
            base.site_url(),
            Some("https://example.com/academy".to_string())
        );
    }

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://courses.example.com/a"));
        assert!(is_absolute_url("//example.com"));
        assert!(!is_absolute_url("/course3"));
        assert!(!is_absolute_url("img/course1.png"));
        assert!(!is_absolute_url(""));
    }
}
