use academy::content::{ContentRegistry, CourseRecord, FeatureRecord};

pub fn registry() -> ContentRegistry {
    ContentRegistry::new(courses(), features())
}

fn courses() -> Vec<CourseRecord> {
    vec![
        CourseRecord::new(
            "Introduction to Generative AI",
            "img/course1.png",
            "Get started with generative AI and explore its applications in creating new content, from images to text.",
            "https://courses.aiengineering.academy/courses/0623338c-2ffe-4a84-965e-50a5e20a9e77/chapters/f7dae533-02d8-4406-96e4-edaa0dcdd19a",
        ),
        CourseRecord::new(
            "Introduction to LLMs",
            "img/course2.png",
            "Dive deep into large language models  and learn how to harness their power for various natural language processing tasks.",
            "https://courses.aiengineering.academy/courses/801ca512-0928-4309-8c64-551f88ef3b03/chapters/947d7440-71b7-4144-98e1-0fd51a300706",
        ),
        CourseRecord::new(
            "Responsible AI Practices",
            "img/course3.png",
            "Gain insights into responsible AI practices, including fairness, bias mitigation, and ethics in AI development.",
            "/course3",
        ),
    ]
}

fn features() -> Vec<FeatureRecord> {
    vec![
        FeatureRecord::new(
            "Comprehensive Course Catalog",
            "Access an exclusive documentation of everything related to generative AI. Explore our extensive course catalog, covering various aspects of generative AI, deep learning, large language models, and more. Tailor your learning journey to your specific interests and goals.",
        )
        .with_image("img/tools.svg"),
        FeatureRecord::new(
            "Inbuilt Smart Chatbot",
            "Enjoy an interactive learning experience with our inbuilt chatbot, equipped with domain knowledge about generative AI. Its there to assist you, answer questions, and provide insights into the world of generative AI.",
        )
        .with_image("img/chatbot.svg"),
        FeatureRecord::new(
            "Interactive Learning Experience",
            "Immerse yourself in an interactive learning experience with video content, hands-on exercises, and relevant resources. Our platform ensures an engaging and effective learning journey.",
        )
        .with_image("img/academic.svg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy::validate::validate_registry;
    use std::path::Path;

    #[test]
    fn test_registry_assets_exist() {
        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");
        assert_eq!(validate_registry(&registry(), &static_dir), Ok(()));
    }

    #[test]
    fn test_display_order() {
        let registry = registry();

        let courses: Vec<_> = registry.courses().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            courses,
            [
                "Introduction to Generative AI",
                "Introduction to LLMs",
                "Responsible AI Practices"
            ]
        );

        let features: Vec<_> = registry.features().iter().map(|f| f.title.to_string()).collect();
        assert_eq!(
            features,
            [
                "Comprehensive Course Catalog",
                "Inbuilt Smart Chatbot",
                "Interactive Learning Experience"
            ]
        );
    }
}
