//! # frameless-buttons
//!
//! Keeps a window's native close/minimize/zoom buttons usable when the title
//! bar is hidden or custom-drawn.
//!
//! ## Features
//! - Configurable margin around the button cluster, mirrored for RTL title bars
//! - Host-native button spacing is preserved
//! - Optional show-on-hover mode backed by an invisible, click-through overlay
//! - Buttons always visible in fullscreen
//! - Degrades to a no-op if the platform's view hierarchy is not as expected
//!
//! ## Example
//!
//! ```no_run
//! # #[cfg(target_os = "macos")]
//! # fn demo(window: &tao::window::Window) {
//! use frameless_buttons::{ButtonCluster, Margin, NativeWindow, OverlayEvent};
//!
//! let native = NativeWindow::new(window, |event: OverlayEvent| {
//!     log::debug!("overlay: {:?}", event)
//! });
//! let mut cluster = ButtonCluster::new(native);
//! cluster.set_margin(Some(Margin::new(18.0, 14.0)));
//! cluster.set_show_on_hover(true);
//! # }
//! ```

pub mod cluster;
pub mod config;
pub mod geometry;
pub mod host;
mod hover;
pub mod layout;
mod visibility;

#[cfg(target_os = "macos")]
mod platform;

#[cfg(test)]
mod scene;

pub use cluster::ButtonCluster;
pub use config::ClusterConfig;
pub use geometry::{Margin, Point, Rect, Size};
pub use host::{
    ButtonsContainer, HoverOverlay, LayoutDirection, OverlayEvent, OverlayEventSink, ProbeError,
    TrackingOptions, WindowButton, WindowHandle,
};
pub use hover::HoverCaptureView;
pub use visibility::buttons_hidden;

#[cfg(target_os = "macos")]
pub use platform::{NativeContainer, NativeOverlay, NativeWindow};
