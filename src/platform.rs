//! Platform abstraction layer
//!
//! - `links.rs` - Opening URLs with the system handler

pub mod links;
