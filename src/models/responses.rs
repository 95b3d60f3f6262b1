use serde::{Deserialize, Serialize};
use crate::models::domain::{Category, NavItem, WorkItem};

/// Response for a relayed contact submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(rename = "emailId", default, skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "mailConfigured")]
    pub mail_configured: bool,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Work item as rendered in the grid, with its printed category label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkEntry {
    #[serde(flatten)]
    pub item: WorkItem,
    #[serde(rename = "categoryLabel")]
    pub category_label: String,
}

impl From<WorkItem> for WorkEntry {
    fn from(item: WorkItem) -> Self {
        Self {
            category_label: item.category.label().to_string(),
            item,
        }
    }
}

/// Filtered work listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkListResponse {
    pub items: Vec<WorkEntry>,
    #[serde(rename = "activeCategories")]
    pub active_categories: Vec<Category>,
    pub total: usize,
}

/// Studio contact details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetails {
    pub email: String,
    pub phone: String,
    #[serde(rename = "phoneHref")]
    pub phone_href: String,
    pub address: String,
    #[serde(rename = "mapsUrl")]
    pub maps_url: String,
}

/// Navigation and contact details for the page shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteResponse {
    pub navigation: Vec<NavItem>,
    #[serde(rename = "callToAction")]
    pub call_to_action: NavItem,
    pub contact: ContactDetails,
}
