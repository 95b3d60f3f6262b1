//! Studio Return - contact relay and work catalogue for the studio website
//!
//! Validates contact form submissions and forwards each one as a single
//! transactional email. It also holds the small pieces of client logic
//! (category filter, grid-line layout, form and icon state) as plain Rust.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use config::Settings;
pub use self::core::{compose_contact_email, compute_line_positions, CategoryFilter, GridLayout, Rect};
pub use models::{Category, ContactRequest, ContactResponse, ErrorResponse, WorkItem};
pub use routes::AppState;
pub use services::{MailClient, MailError};
