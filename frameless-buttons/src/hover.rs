//! Invisible overlay that reports when the pointer is over the buttons

use crate::geometry::Rect;
use crate::host::{ButtonsContainer, HoverOverlay, TrackingOptions};

/// A pass-through view sitting above the button cluster.
///
/// It draws nothing and never takes clicks. Its only job is to own the
/// pointer tracking region whose enter/exit notifications drive hover mode.
/// Dropping it removes the host view.
pub struct HoverCaptureView<O: HoverOverlay> {
    overlay: O,
}

impl<O: HoverOverlay> HoverCaptureView<O> {
    /// Insert a new overlay into `container` and start tracking.
    pub fn attach<C>(container: &mut C, frame: Rect) -> Self
    where
        C: ButtonsContainer<Overlay = O>,
    {
        let mut view = Self {
            overlay: container.attach_overlay(frame),
        };
        view.refresh_tracking();
        view
    }

    pub fn frame(&self) -> Rect {
        self.overlay.frame()
    }

    pub fn set_frame(&mut self, frame: Rect) {
        if self.overlay.frame() == frame {
            return;
        }
        self.overlay.set_frame(frame);
        self.refresh_tracking();
    }

    /// Reinstall the tracking region over the currently visible area.
    pub fn refresh_tracking(&mut self) {
        let visible = self.overlay.visible_rect();
        self.overlay
            .replace_tracking_region(visible, TrackingOptions::HOVER);
    }
}

impl<O: HoverOverlay> Drop for HoverCaptureView<O> {
    fn drop(&mut self) {
        self.overlay.detach();
    }
}
