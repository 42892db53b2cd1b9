//! Build-time checks of the content registry and theme.
//!
//! Rendering never fails on bad content, a missing image simply shows up as a broken card. These
//! checks run as part of the build instead, and collect every problem rather than stopping at the first.
use std::path::{Component, Path};

use log::debug;
use rustc_hash::FxHashSet;

use crate::base_url::{BaseUrl, is_absolute_url};
use crate::content::ContentRegistry;
use crate::errors::{RecordKind, ValidationError, ValidationErrors};
use crate::site::Site;
use crate::theme::ThemeConfig;

/// Check that every record has a title, every course link is well-formed and every image exists in `static_dir`.
pub fn validate_registry(
    registry: &ContentRegistry,
    static_dir: &Path,
) -> Result<(), ValidationErrors> {
    ValidationErrors::into_result(registry_problems(registry, static_dir))
}

/// Check that the project and chat links are absolute URLs.
pub fn validate_theme(theme: &ThemeConfig) -> Result<(), ValidationErrors> {
    ValidationErrors::into_result(theme_problems(theme))
}

/// Check that every root-relative course link points to one of the generated `pages`.
///
/// `pages` are the routes of the pages produced by the build, e.g. `/` or `/chat/`, without the base path.
/// Course links are emitted as they are, so a root-relative link must include the base path to reach a page.
pub fn check_internal_links<'a>(
    registry: &ContentRegistry,
    base_url: &BaseUrl,
    pages: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationErrors> {
    ValidationErrors::into_result(link_problems(registry, base_url, pages))
}

/// Run every check against a built site.
pub fn check_site<'a>(
    site: &Site,
    static_dir: &Path,
    pages: impl IntoIterator<Item = &'a str>,
) -> Result<(), ValidationErrors> {
    let mut problems = registry_problems(&site.registry, static_dir);
    problems.extend(theme_problems(&site.theme));
    problems.extend(link_problems(&site.registry, &site.base_url, pages));

    ValidationErrors::into_result(problems)
}

fn registry_problems(registry: &ContentRegistry, static_dir: &Path) -> Vec<ValidationError> {
    let mut problems = Vec::new();

    for (index, course) in registry.courses().iter().enumerate() {
        if course.title.trim().is_empty() {
            problems.push(ValidationError::EmptyTitle {
                kind: RecordKind::Course,
                position: index + 1,
            });
        }

        let link = course.link.trim();
        if link.is_empty() {
            problems.push(ValidationError::EmptyLink {
                title: course.title.clone(),
            });
        } else if link.contains(char::is_whitespace)
            || !(is_absolute_url(link) || link.starts_with('/'))
        {
            problems.push(ValidationError::MalformedLink {
                title: course.title.clone(),
                link: course.link.clone(),
            });
        }

        if let Some(problem) =
            missing_asset(RecordKind::Course, &course.title, &course.image_url, static_dir)
        {
            problems.push(problem);
        }
    }

    for (index, feature) in registry.features().iter().enumerate() {
        if feature.title.is_blank() {
            problems.push(ValidationError::EmptyTitle {
                kind: RecordKind::Feature,
                position: index + 1,
            });
        }

        if let Some(image_url) = &feature.image_url
            && let Some(problem) = missing_asset(
                RecordKind::Feature,
                &feature.title.to_string(),
                image_url,
                static_dir,
            )
        {
            problems.push(problem);
        }
    }

    debug!(target: "validate", "Checked {} courses and {} features, {} problems", registry.courses().len(), registry.features().len(), problems.len());

    problems
}

fn missing_asset(
    kind: RecordKind,
    title: &str,
    image_url: &str,
    static_dir: &Path,
) -> Option<ValidationError> {
    // Remote images are not ours to check
    if is_absolute_url(image_url) {
        return None;
    }

    // Only files inside the static directory are copied to the output
    let relative = Path::new(image_url.trim_start_matches('/'));
    let inside_static_dir = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));

    if inside_static_dir
        && !relative.as_os_str().is_empty()
        && static_dir.join(relative).is_file()
    {
        return None;
    }

    Some(ValidationError::MissingAsset {
        kind,
        title: title.to_string(),
        path: image_url.to_string(),
        static_dir: static_dir.to_path_buf(),
    })
}

fn theme_problems(theme: &ThemeConfig) -> Vec<ValidationError> {
    [("project", &theme.project.link), ("chat", &theme.chat.link)]
        .into_iter()
        .filter(|(_, link)| !is_http_url(link))
        .map(|(field, link)| ValidationError::ThemeLink {
            field,
            link: link.clone(),
        })
        .collect()
}

fn is_http_url(link: &str) -> bool {
    (link.starts_with("https://") || link.starts_with("http://")) && is_absolute_url(link)
}

fn link_problems<'a>(
    registry: &ContentRegistry,
    base_url: &BaseUrl,
    pages: impl IntoIterator<Item = &'a str>,
) -> Vec<ValidationError> {
    let pages: FxHashSet<String> = pages.into_iter().map(normalize_route).collect();

    registry
        .courses()
        .iter()
        .filter(|course| course.link.starts_with('/') && !is_absolute_url(&course.link))
        .filter_map(|course| {
            let Some(route) = strip_base_path(&course.link, base_url.path()) else {
                return Some(ValidationError::OutsideBasePath {
                    title: course.title.clone(),
                    link: course.link.clone(),
                    base_path: base_url.path().to_string(),
                });
            };

            (!pages.contains(&normalize_route(route))).then(|| ValidationError::BrokenLink {
                title: course.title.clone(),
                link: course.link.clone(),
            })
        })
        .collect()
}

/// The route a root-relative `link` points to once the site is served under `base_path`.
fn strip_base_path<'a>(link: &'a str, base_path: &str) -> Option<&'a str> {
    if base_path == "/" {
        return Some(link);
    }

    let base = base_path.trim_end_matches('/');
    let rest = link.strip_prefix(base)?;
    match rest.chars().next() {
        None => Some("/"),
        Some('/' | '#' | '?') => Some(rest),
        Some(_) => None,
    }
}

/// `/course3`, `course3/` and `/course3/#intro` all name the same page.
fn normalize_route(route: &str) -> String {
    let path = route.split(['#', '?']).next().unwrap_or_default();
    let path = path.trim_matches('/');
    let path = path.strip_suffix("index.html").unwrap_or(path).trim_end_matches('/');

    format!("/{}", path)
}
