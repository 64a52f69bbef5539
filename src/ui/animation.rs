//! Overlay animations

mod fade;

pub use fade::FadeAnimation;
