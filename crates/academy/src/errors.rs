//! Error types for the academy website.
use std::fmt::{self, Debug, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

macro_rules! impl_debug_for_error {
    ($($t:ty),*) => {
        $(
            impl Debug for $t {
                fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                    // Errors returned from main are printed with Debug, show the readable message instead.
                    write!(f, "{}", self)
                }
            }
        )*
    };
}

#[derive(Error)]
pub enum ConfigError {
    #[error("Failed to read site config: {path}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse site config from {origin}")]
    ParseFailed {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Invalid site URL `{0}`, expected an absolute URL such as `https://example.com`")]
    InvalidUrl(String),
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Course,
    Feature,
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Course => f.write_str("course"),
            RecordKind::Feature => f.write_str("feature"),
        }
    }
}

impl Debug for RecordKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

/// A single problem found while checking the content registry or the theme.
#[derive(Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{kind} #{position} has an empty title")]
    EmptyTitle { kind: RecordKind, position: usize },

    #[error("course `{title}` has an empty link")]
    EmptyLink { title: String },

    #[error(
        "course `{title}` links to `{link}`, which is neither an absolute URL nor a root-relative path"
    )]
    MalformedLink { title: String, link: String },

    #[error("{kind} `{title}` uses image `{path}`, which does not exist in `{static_dir}`")]
    MissingAsset {
        kind: RecordKind,
        title: String,
        path: String,
        static_dir: PathBuf,
    },

    #[error("course `{title}` links to `{link}`, but no page is generated at that path")]
    BrokenLink { title: String, link: String },

    #[error("course `{title}` links to `{link}`, which is outside the base path `{base_path}`")]
    OutsideBasePath {
        title: String,
        link: String,
        base_path: String,
    },

    #[error("theme {field} link `{link}` must be an absolute URL")]
    ThemeLink { field: &'static str, link: String },
}

/// Every problem found by a check. Never empty.
#[derive(PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Turns the collected problems into a result, `Ok` if there are none.
    pub fn into_result(errors: Vec<ValidationError>) -> Result<(), ValidationErrors> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<ValidationError> {
        self.0
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let plural = if self.0.len() == 1 { "" } else { "s" };
        write!(f, "Found {} content problem{}:", self.0.len(), plural)?;
        for error in &self.0 {
            write!(f, "\n  - {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl_debug_for_error!(ConfigError, ValidationError, ValidationErrors);
