// Core logic exports
pub mod animation;
pub mod catalog;
pub mod email;
pub mod filters;
pub mod form;
pub mod grid;

pub use animation::{scaled_duration, IconAnimation, IconSegments, Segment, ICON_DURATION_MULTIPLIER};
pub use email::{compose_contact_email, escape_html};
pub use filters::CategoryFilter;
pub use form::{ContactForm, Field, FormStatus, Notification};
pub use grid::{compute_line_positions, GridLayout, GridLines, HorizontalLine, Rect};
