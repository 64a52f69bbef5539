//! Dog Tales Kennels - desktop showcase with media carousels and WhatsApp booking

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod platform;
mod ui;

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    // Daemon mode so the close request can be handled before exiting
    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()
}
