//! View module - investor selection and display policy.

mod redaction;
mod view_filter;
mod view_model;

pub use redaction::Redact;
pub use view_filter::select_view;
pub use view_model::*;
