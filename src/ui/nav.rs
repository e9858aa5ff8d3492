use dashboard_shell::components::{NavItem, NavSection};

pub const SECTION_MAIN: &str = "main";
pub const SECTION_OPERATIONS: &str = "operations";
pub const SECTION_DOCS_GUIDES: &str = "docs-guides";
pub const SECTION_DOCS_REFERENCE: &str = "docs-reference";

fn item(id: &str, label: &str, route: &str, icon: &str, active: &str) -> NavItem {
    NavItem {
        id: id.to_string(),
        label: label.to_string(),
        route: route.to_string(),
        icon: Some(icon.to_string()),
        selected: active == route,
    }
}

/// Ordinary navigation menu, shown on every non-documentation route.
pub fn main_sections(active: &str) -> Vec<NavSection> {
    vec![
        NavSection {
            id: SECTION_MAIN.to_string(),
            title: None,
            items: vec![
                item("home", "Overview", "/", "🏠", active),
                item("reports", "Reports", "/reports", "📊", active),
                item("live", "Live wall", "/live", "📺", active),
            ],
        },
        NavSection {
            id: SECTION_OPERATIONS.to_string(),
            title: Some("Operations".to_string()),
            items: vec![item(
                "diagnostics",
                "Diagnostics",
                "/diagnostics",
                "🩺",
                active,
            )],
        },
    ]
}

/// Documentation index, shown while the route is under the docs prefix.
pub fn docs_sections(active: &str) -> Vec<NavSection> {
    vec![
        NavSection {
            id: SECTION_DOCS_GUIDES.to_string(),
            title: Some("Guides".to_string()),
            items: vec![
                item("docs-home", "Documentation", "/docs", "📖", active),
                item(
                    "docs-getting-started",
                    "Getting started",
                    "/docs/getting-started",
                    "🚀",
                    active,
                ),
            ],
        },
        NavSection {
            id: SECTION_DOCS_REFERENCE.to_string(),
            title: Some("Reference".to_string()),
            items: vec![
                item("docs-shell", "The shell", "/docs/shell", "🧭", active),
                item("docs-theming", "Theming", "/docs/theming", "🎨", active),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_sections_are_stable() {
        let ids: Vec<String> = main_sections("/")
            .into_iter()
            .map(|section| section.id)
            .collect();
        assert_eq!(
            ids,
            vec![SECTION_MAIN.to_string(), SECTION_OPERATIONS.to_string()]
        );
    }

    #[test]
    fn docs_sections_are_stable() {
        let ids: Vec<String> = docs_sections("/docs")
            .into_iter()
            .map(|section| section.id)
            .collect();
        assert_eq!(
            ids,
            vec![
                SECTION_DOCS_GUIDES.to_string(),
                SECTION_DOCS_REFERENCE.to_string()
            ]
        );
    }

    #[test]
    fn selection_follows_route() {
        let sections = main_sections("/reports");
        let selected: Vec<&str> = sections
            .iter()
            .flat_map(|section| section.items.iter())
            .filter(|item| item.selected)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(selected, vec!["reports"]);
    }
}
