//! UI Components module - business-specific composite components
//!
//! Components combine widgets with application logic and are the only layer
//! that imports from `crate::app`.

pub mod booking_dialog;
pub mod floating_contact;
pub mod gallery;
pub mod header;
pub mod hero_carousel;
pub mod notice_dialog;
pub mod services;
