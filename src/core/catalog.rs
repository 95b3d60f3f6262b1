use crate::models::{Category, NavItem, WorkItem};

fn work_item(slug: &str, title: &str, description: &str, category: Category, link: Option<&str>) -> WorkItem {
    WorkItem {
        slug: slug.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category,
        link: link.map(str::to_string),
    }
}

/// Portfolio entries in display order
pub fn work_items() -> Vec<WorkItem> {
    vec![
        work_item(
            "breakout",
            "Breakout",
            "A screen time app that helps you break free from your phone.",
            Category::Labs,
            Some("https://letsbreakout.com"),
        ),
        work_item(
            "client-project",
            "Client project",
            "Brand identity and website design for a sustainable fashion brand.",
            Category::ClientWork,
            None,
        ),
        work_item(
            "saas-dashboard",
            "SaaS dashboard",
            "UI/UX design for an analytics platform.",
            Category::ClientWork,
            None,
        ),
        work_item(
            "mobile-app",
            "Mobile app",
            "iOS app design for a wellness startup.",
            Category::ClientWork,
            None,
        ),
    ]
}

fn nav(href: &str, label: &str) -> NavItem {
    NavItem {
        href: href.to_string(),
        label: label.to_string(),
    }
}

pub fn nav_items() -> Vec<NavItem> {
    vec![
        nav("/", "Home"),
        nav("/services", "Services"),
        nav("/work", "Work"),
        nav("/industries", "Industries"),
        nav("/about", "About"),
        nav("/lab", "Lab"),
    ]
}

pub fn call_to_action() -> NavItem {
    nav("/contact", "Contact")
}
