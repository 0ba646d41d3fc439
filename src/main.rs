// Only macOS exposes native title bar buttons to reposition.
#![cfg_attr(not(target_os = "macos"), allow(dead_code))]

#[cfg(target_os = "macos")]
mod app;
mod config;
mod controls;

use config::Config;

#[cfg(target_os = "macos")]
fn main() {
    use tao::event_loop::EventLoopBuilder;

    // Initialize logging
    env_logger::init();

    let config = Config::load_or_default();
    let event_loop = EventLoopBuilder::<app::AppEvent>::with_user_event().build();

    let window = match app::build_window(&event_loop, &config.window) {
        Ok(window) => window,
        Err(e) => {
            log::error!("Failed to create window: {}", e);
            return;
        }
    };

    let app = app::App::new(window, event_loop.create_proxy(), &config.buttons);
    log::info!("H: hover mode, M: margin, V: visibility, F: fullscreen");

    app::run(app, event_loop);
}

#[cfg(not(target_os = "macos"))]
fn main() {
    env_logger::init();

    let config = Config::load_or_default();
    log::error!(
        "'{}' drives the native macOS title bar buttons and has nothing to do on this platform",
        config.window.title
    );
}
