// Service exports
pub mod mail;

pub use mail::{MailClient, MailError, SentEmail};
