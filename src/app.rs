//! Demo window: a hidden title bar with the native buttons under our control

use frameless_buttons::{ButtonCluster, ClusterConfig, NativeWindow, OverlayEvent, WindowHandle};
use tao::{
    dpi::LogicalSize,
    error::OsError,
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopProxy},
    platform::macos::WindowBuilderExtMacOS,
    window::{Fullscreen, Window, WindowBuilder},
};

use crate::config::WindowConfig;
use crate::controls::{Command, MarginCycle};

/// Events posted back into the event loop
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    Overlay(OverlayEvent),
}

/// Create a window whose content extends under a transparent, untitled
/// title bar, leaving only the native buttons.
pub fn build_window(
    event_loop: &EventLoop<AppEvent>,
    config: &WindowConfig,
) -> Result<Window, OsError> {
    WindowBuilder::new()
        .with_title(&config.title)
        .with_inner_size(LogicalSize::new(config.width, config.height))
        .with_titlebar_transparent(true)
        .with_title_hidden(true)
        .with_fullsize_content_view(true)
        .build(event_loop)
}

/// Main application state
pub struct App {
    // Declared before `window`: the cluster borrows the NSWindow and must
    // be dropped first.
    cluster: ButtonCluster<NativeWindow>,
    window: Window,
    margins: MarginCycle,
    visible: bool,
    fullscreen: bool,
}

impl App {
    pub fn new(window: Window, proxy: EventLoopProxy<AppEvent>, config: &ClusterConfig) -> Self {
        let native = NativeWindow::new(&window, move |event: OverlayEvent| {
            if proxy.send_event(AppEvent::Overlay(event)).is_err() {
                log::debug!("Event loop closed, dropping {:?}", event);
            }
        });

        let mut cluster = ButtonCluster::new(native);
        if cluster.is_degraded() {
            log::warn!("Title bar buttons keep their stock layout");
        }
        cluster.apply_config(config);
        let fullscreen = cluster.window().is_fullscreen();

        log::info!(
            "Buttons ready: margin {:?}, show on hover {}",
            cluster.margin(),
            cluster.show_on_hover()
        );

        Self {
            cluster,
            window,
            margins: MarginCycle::new(config.margin()),
            visible: config.visible,
            fullscreen,
        }
    }

    pub fn run_command(&mut self, command: Command) {
        match command {
            Command::ToggleHover => {
                let enabled = !self.cluster.show_on_hover();
                self.cluster.set_show_on_hover(enabled);
                log::info!("Show on hover: {}", enabled);
            }
            Command::CycleMargin => {
                self.cluster.set_margin(self.margins.advance());
                log::info!("Margin: {:?}", self.cluster.margin());
            }
            Command::ToggleVisible => {
                self.visible = !self.visible;
                self.cluster.set_visible(self.visible);
                log::info!("Buttons visible: {}", self.visible);
            }
            Command::ToggleFullscreen => {
                let fullscreen = match self.window.fullscreen() {
                    Some(_) => None,
                    None => Some(Fullscreen::Borderless(None)),
                };
                self.window.set_fullscreen(fullscreen);
            }
        }
    }

    pub fn handle_overlay_event(&mut self, event: OverlayEvent) {
        self.cluster.handle_overlay_event(event);
    }

    /// Window size changed; fullscreen transitions arrive this way too.
    pub fn handle_resize(&mut self) {
        let fullscreen = self.cluster.window().is_fullscreen();
        if fullscreen != self.fullscreen {
            self.fullscreen = fullscreen;
            log::info!("Fullscreen: {}", fullscreen);
            self.cluster.handle_fullscreen_changed();
        }
        self.cluster.handle_resize();
    }
}

/// Run the demo event loop until the window is closed.
pub fn run(mut app: App, event_loop: EventLoop<AppEvent>) -> ! {
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(AppEvent::Overlay(event)) => {
                app.handle_overlay_event(event);
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => {
                app.handle_resize();
            }

            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    if let Some(command) = Command::from_key(event.physical_key) {
                        app.run_command(command);
                    }
                }
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                *control_flow = ControlFlow::Exit;
            }

            _ => (),
        }
    })
}
