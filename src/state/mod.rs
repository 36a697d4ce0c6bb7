//! State management module
//!
//! - content: static page copy (projects, services, links)
//! - contact: contact form fields and submit status

pub mod content;
mod contact;

pub use contact::*;
