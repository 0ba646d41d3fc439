//! Host window collaborators
//!
//! The cluster never talks to a windowing toolkit directly. A host backend
//! (AppKit on macOS, an in-memory scene in tests) implements these traits.

use bitflags::bitflags;
use thiserror::Error;

use crate::geometry::{Point, Rect};

/// One of the three native title bar buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowButton {
    Close,
    Minimize,
    /// Maximize / zoom.
    Zoom,
}

impl WindowButton {
    /// Layout order, leading edge first.
    pub const ALL: [WindowButton; 3] = [Self::Close, Self::Minimize, Self::Zoom];

    pub fn index(self) -> usize {
        match self {
            Self::Close => 0,
            Self::Minimize => 1,
            Self::Zoom => 2,
        }
    }
}

/// Text direction of the window's title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        self == Self::RightToLeft
    }
}

/// The button hierarchy did not look the way the cluster expects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProbeError {
    #[error("window has no {0:?} button")]
    MissingButton(WindowButton),
    #[error("{button:?} button has no ancestor view {depth} levels up")]
    MissingAncestor { button: WindowButton, depth: usize },
}

bitflags! {
    /// Behaviour of a pointer tracking registration.
    ///
    /// Bit values match AppKit's `NSTrackingAreaOptions`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrackingOptions: u64 {
        /// Report pointer enter and exit.
        const ENTERED_AND_EXITED = 0x01;
        /// Track even when the window is not key.
        const ACTIVE_ALWAYS = 0x80;
        /// Follow the view's visible rect instead of a fixed rect.
        const IN_VISIBLE_RECT = 0x200;
    }
}

impl TrackingOptions {
    /// Registration used by the hover overlay.
    pub const HOVER: Self = Self::ENTERED_AND_EXITED
        .union(Self::ACTIVE_ALWAYS)
        .union(Self::IN_VISIBLE_RECT);
}

/// Notification delivered by a hover overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    PointerEntered,
    PointerExited,
    /// The overlay's tracking registrations need reinstalling.
    TrackingInvalidated,
}

/// Receiver for overlay notifications.
///
/// Backends hold one of these and call it from the UI thread; the host event
/// loop then hands the event to `ButtonCluster::handle_overlay_event`.
pub trait OverlayEventSink {
    fn send(&self, event: OverlayEvent);
}

impl<F: Fn(OverlayEvent)> OverlayEventSink for F {
    fn send(&self, event: OverlayEvent) {
        self(event)
    }
}

/// A pass-through overlay view placed above the buttons.
///
/// Implementations must never claim hit-test ownership: clicks inside the
/// overlay reach whatever lies beneath it.
pub trait HoverOverlay {
    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);
    /// Portion of the overlay not clipped by its ancestors.
    fn visible_rect(&self) -> Rect;
    /// Drop any previous tracking registration and install a new one.
    fn replace_tracking_region(&mut self, rect: Rect, options: TrackingOptions);
    /// Remove the overlay from the view hierarchy.
    fn detach(&mut self);
}

/// The view that hosts the title bar buttons.
pub trait ButtonsContainer {
    type Overlay: HoverOverlay;

    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);
    fn is_hidden(&self) -> bool;
    fn set_hidden(&mut self, hidden: bool);
    /// Insert a new overlay above the buttons.
    fn attach_overlay(&mut self, frame: Rect) -> Self::Overlay;
}

/// Native window exposing its title bar buttons.
pub trait WindowHandle {
    type Container: ButtonsContainer;

    fn layout_direction(&self) -> LayoutDirection;
    fn is_fullscreen(&self) -> bool;
    /// The window's own frame.
    fn frame(&self) -> Rect;

    fn button_frame(&self, button: WindowButton) -> Rect;
    fn set_button_origin(&mut self, button: WindowButton, origin: Point);
    fn is_button_hidden(&self, button: WindowButton) -> bool;
    fn set_button_hidden(&mut self, button: WindowButton, hidden: bool);
    fn request_button_redraw(&mut self, button: WindowButton);

    /// Walk `depth` ancestor levels up from the close button.
    fn buttons_container(&self, depth: usize) -> Result<Self::Container, ProbeError>;
}
