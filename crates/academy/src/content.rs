//! The records shown on the landing page.
//!
//! Records are defined in code, never mutated after construction, and always read in the order
//! they were inserted, which is also the order they are displayed in.
use crate::text::Text;

/// A course card in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    pub title: String,
    /// Path to an image in the static directory, resolved against the site's base URL when rendered.
    pub image_url: String,
    pub description: String,
    /// Either an absolute URL (an external course platform) or a root-relative path on this site.
    pub link: String,
}

impl CourseRecord {
    pub fn new(
        title: impl Into<String>,
        image_url: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            image_url: image_url.into(),
            description: description.into(),
            link: link.into(),
        }
    }
}

/// A feature highlight panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    pub title: Text,
    pub image_url: Option<String>,
    pub description: Text,
    pub second_paragraph: Option<Text>,
}

impl FeatureRecord {
    pub fn new(title: impl Into<Text>, description: impl Into<Text>) -> Self {
        Self {
            title: title.into(),
            image_url: None,
            description: description.into(),
            second_paragraph: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_second_paragraph(mut self, paragraph: impl Into<Text>) -> Self {
        self.second_paragraph = Some(paragraph.into());
        self
    }
}

/// Every record the landing page displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentRegistry {
    courses: Vec<CourseRecord>,
    features: Vec<FeatureRecord>,
}

impl ContentRegistry {
    pub fn new(courses: Vec<CourseRecord>, features: Vec<FeatureRecord>) -> Self {
        Self { courses, features }
    }

    pub fn courses(&self) -> &[CourseRecord] {
        &self.courses
    }

    pub fn features(&self) -> &[FeatureRecord] {
        &self.features
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_keeps_insertion_order() {
        let registry = ContentRegistry::new(
            vec![
                CourseRecord::new("A", "img/a.png", "a", "/a"),
                CourseRecord::new("B", "img/b.png", "b", "/b"),
                CourseRecord::new("C", "img/c.png", "c", "/c"),
            ],
            vec![FeatureRecord::new("Z", "z"), FeatureRecord::new("Y", "y")],
        );

        let course_titles: Vec<_> = registry.courses().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(course_titles, ["A", "B", "C"]);

        let feature_titles: Vec<_> = registry
            .features()
            .iter()
            .map(|f| f.title.to_string())
            .collect();
        assert_eq!(feature_titles, ["Z", "Y"]);
    }

    #[test]
    fn test_feature_builder() {
        let feature = FeatureRecord::new("Chatbot", "Ask anything")
            .with_image("img/chatbot.svg")
            .with_second_paragraph("Available around the clock.");

        assert_eq!(feature.image_url.as_deref(), Some("img/chatbot.svg"));
        assert_eq!(
            feature.second_paragraph,
            Some(Text::plain("Available around the clock."))
        );

        let bare = FeatureRecord::new("Bare", "No image");
        assert_eq!(bare.image_url, None);
        assert_eq!(bare.second_paragraph, None);
    }
}
