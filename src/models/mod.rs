// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Category, ContactSubmission, NavItem, OutboundEmail, UnknownCategory, WorkItem};
pub use requests::ContactRequest;
pub use responses::{ContactDetails, ContactResponse, ErrorResponse, HealthResponse, SiteResponse, WorkEntry, WorkListResponse};
