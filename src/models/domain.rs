use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Portfolio category a work item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    ClientWork,
    Labs,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::ClientWork, Category::Labs];

    /// Tag used in query strings and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::ClientWork => "client-work",
            Category::Labs => "labs",
        }
    }

    /// Label printed above the item title
    pub fn label(&self) -> &'static str {
        match self {
            Category::ClientWork => "Client Work",
            Category::Labs => "Our Product",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "client-work" => Ok(Category::ClientWork),
            "labs" => Ok(Category::Labs),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Static portfolio entry rendered in the work grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl WorkItem {
    /// Items without a link are shown as "coming soon"
    pub fn is_coming_soon(&self) -> bool {
        self.link.is_none()
    }
}

/// A validated contact form payload. Lives only for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Email handed to the transactional email provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub reply_to: String,
    pub text: String,
    pub html: String,
}

/// Entry in the primary navigation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub label: String,
}
