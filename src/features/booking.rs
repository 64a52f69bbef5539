//! Booking flow: intent state, message composition and the dialog controller

pub mod composer;
pub mod intent;
pub mod modal;

pub use composer::FormField;
pub use intent::BookingTab;
pub use modal::{BookingModal, BusinessContact};
