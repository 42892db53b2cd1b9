use academy::theme::{ChatLink, Logo, NavLink, ProjectLink, ThemeConfig};

pub const PROJECT_LINK: &str = "https://github.com/CognitiveLab-tech/aiengineering.academy";
pub const CHAT_LINK: &str = "https://discord.com";

pub fn theme() -> ThemeConfig {
    ThemeConfig {
        logo: Logo {
            icon: Some(include_str!("../assets/logo.svg").to_string()),
            text: "AI Engineering Academy".to_string(),
        },
        project: ProjectLink {
            link: PROJECT_LINK.to_string(),
        },
        chat: ChatLink {
            link: CHAT_LINK.to_string(),
        },
        nav: vec![
            NavLink::new("Courses", "/#courses"),
            NavLink::new("Features", "/#features"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy::validate::validate_theme;

    #[test]
    fn test_theme_is_valid() {
        assert_eq!(validate_theme(&theme()), Ok(()));
    }
}
