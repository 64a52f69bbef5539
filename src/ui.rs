//! UI module for the kennel showcase
//!
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Business-specific UI with Message handling
//! - **Pages** (`pages`): The scrolling page assembled from components

pub mod animation;
pub mod components;
pub mod pages;
pub mod theme;
pub mod widgets;
