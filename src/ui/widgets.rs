//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets must not import `crate::app::Message`; they are generic over the
//! message type.

pub mod media_track;
pub mod toast;

pub use toast::{Toast, view_toast};
