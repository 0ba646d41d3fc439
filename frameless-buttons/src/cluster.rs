//! Layout and visibility control for the native title bar buttons

use crate::config::ClusterConfig;
use crate::geometry::{Margin, Rect};
use crate::host::{
    ButtonsContainer, LayoutDirection, OverlayEvent, ProbeError, WindowButton, WindowHandle,
};
use crate::hover::HoverCaptureView;
use crate::layout::{self, ButtonFrames};
use crate::visibility::buttons_hidden;

/// Ancestor levels between the close button and the buttons container.
const CONTAINER_DEPTH: usize = 2;

type OverlayOf<W> = <<W as WindowHandle>::Container as ButtonsContainer>::Overlay;

/// Outcome of looking up the buttons container once at construction.
enum ContainerProbe<C> {
    Ready(C),
    /// The view hierarchy is not what we expect. Nothing is touched.
    Degraded(ProbeError),
}

/// Keeps a window's close/minimize/zoom buttons laid out inside a custom
/// title bar, optionally revealing them only while the pointer is over them.
///
/// All methods run on the UI thread and apply their effects before returning.
pub struct ButtonCluster<W: WindowHandle> {
    window: W,
    probe: ContainerProbe<W::Container>,
    direction: LayoutDirection,
    margin: Margin,
    default_margin: Margin,
    show_on_hover: bool,
    pointer_inside: bool,
    hover_view: Option<HoverCaptureView<OverlayOf<W>>>,
}

impl<W: WindowHandle> ButtonCluster<W> {
    /// Take control of the buttons of `window`.
    ///
    /// If the buttons are not nested inside a container two levels up, the
    /// cluster stays degraded for its whole life and every operation becomes
    /// a no-op.
    pub fn new(window: W) -> Self {
        let direction = window.layout_direction();
        let probe = match window.buttons_container(CONTAINER_DEPTH) {
            Ok(container) => ContainerProbe::Ready(container),
            Err(e) => {
                log::warn!("Window button hierarchy changed, leaving buttons untouched: {}", e);
                ContainerProbe::Degraded(e)
            }
        };

        let mut cluster = Self {
            window,
            probe,
            direction,
            margin: Margin::ZERO,
            default_margin: Margin::ZERO,
            show_on_hover: false,
            pointer_inside: false,
            hover_view: None,
        };

        let margin = cluster.infer_margin();
        cluster.margin = margin;
        cluster.default_margin = margin;
        log::debug!("Window buttons: {:?}, default margin {:?}", direction, margin);

        cluster
    }

    /// Show or hide the whole container. Hover state is left alone.
    pub fn set_visible(&mut self, visible: bool) {
        if let ContainerProbe::Ready(container) = &mut self.probe {
            container.set_hidden(!visible);
        }
    }

    /// Turn hover mode on or off.
    ///
    /// Enabling always builds a fresh overlay, replacing any previous one.
    pub fn set_show_on_hover(&mut self, enabled: bool) {
        let ContainerProbe::Ready(container) = &mut self.probe else {
            return;
        };

        self.show_on_hover = enabled;
        // At most one overlay is ever attached. Pointer state belonged to the
        // old one.
        self.hover_view = None;
        self.pointer_inside = false;

        if enabled {
            let frames = ButtonFrames::read(&self.window);
            let bounds = layout::hover_bounds(&frames, self.margin, self.direction);
            self.hover_view = Some(HoverCaptureView::attach(container, bounds));
        }
        log::debug!("Window buttons show-on-hover: {}", enabled);

        self.update_buttons_visibility();
    }

    /// Use `margin`, or go back to the platform's own inset with `None`.
    pub fn set_margin(&mut self, margin: Option<Margin>) {
        if self.is_degraded() {
            return;
        }
        self.margin = margin.unwrap_or(self.default_margin);
        self.redraw();
    }

    /// Bounds of the cluster including its margin.
    pub fn buttons_container_bounds(&self) -> Rect {
        match &self.probe {
            ContainerProbe::Ready(_) => {
                let frames = ButtonFrames::read(&self.window);
                layout::container_bounds(&frames, self.margin, self.direction)
            }
            ContainerProbe::Degraded(_) => Rect::ZERO,
        }
    }

    /// Bounds the hover overlay should cover.
    pub fn hover_view_bounds(&self) -> Rect {
        match &self.probe {
            ContainerProbe::Ready(_) => {
                let frames = ButtonFrames::read(&self.window);
                layout::hover_bounds(&frames, self.margin, self.direction)
            }
            ContainerProbe::Degraded(_) => Rect::ZERO,
        }
    }

    /// Recompute the container frame and button positions for the current
    /// margin.
    pub fn redraw(&mut self) {
        let ContainerProbe::Ready(container) = &mut self.probe else {
            return;
        };

        let frames = ButtonFrames::read(&self.window);
        let frame = layout::container_frame(
            container.frame(),
            self.window.frame(),
            frames.close,
            self.margin,
        );
        container.set_frame(frame);

        let origins = layout::button_origins(&frames, frame, self.margin, self.direction);
        for (button, origin) in WindowButton::ALL.into_iter().zip(origins) {
            self.window.set_button_origin(button, origin);
        }

        if let Some(view) = &mut self.hover_view {
            let frames = ButtonFrames::read(&self.window);
            view.set_frame(layout::hover_bounds(&frames, self.margin, self.direction));
        }
    }

    /// Apply the hover/fullscreen visibility policy to all three buttons.
    pub fn update_buttons_visibility(&mut self) {
        if self.is_degraded() {
            return;
        }

        let fullscreen = self.window.is_fullscreen();
        let hidden = buttons_hidden(self.show_on_hover, self.pointer_inside, fullscreen);
        if !fullscreen {
            log::trace!(
                "Window buttons hidden: {} (hover {}, pointer inside {})",
                hidden,
                self.show_on_hover,
                self.pointer_inside
            );
        }
        for button in WindowButton::ALL {
            self.window.set_button_hidden(button, hidden);
            self.window.request_button_redraw(button);
        }
    }

    /// Pointer entered the overlay. Ignored without one, since the event
    /// may have been queued before hover mode was turned off.
    pub fn on_pointer_enter(&mut self) {
        if self.hover_view.is_none() {
            return;
        }
        self.pointer_inside = true;
        self.update_buttons_visibility();
    }

    pub fn on_pointer_exit(&mut self) {
        if self.hover_view.is_none() {
            return;
        }
        self.pointer_inside = false;
        self.update_buttons_visibility();
    }

    /// Reinstall the overlay's pointer tracking region.
    pub fn update_tracking_areas(&mut self) {
        if let Some(view) = &mut self.hover_view {
            view.refresh_tracking();
        }
    }

    /// Dispatch a notification coming from the hover overlay.
    pub fn handle_overlay_event(&mut self, event: OverlayEvent) {
        match event {
            OverlayEvent::PointerEntered => self.on_pointer_enter(),
            OverlayEvent::PointerExited => self.on_pointer_exit(),
            OverlayEvent::TrackingInvalidated => self.update_tracking_areas(),
        }
    }

    /// The window entered or left fullscreen.
    pub fn handle_fullscreen_changed(&mut self) {
        self.update_buttons_visibility();
        // Leaving fullscreen puts the buttons back at their stock position.
        if !self.window.is_fullscreen() {
            self.redraw();
        }
    }

    /// The window was resized.
    pub fn handle_resize(&mut self) {
        self.redraw();
        self.update_tracking_areas();
    }

    pub fn apply_config(&mut self, config: &ClusterConfig) {
        self.set_margin(config.margin());
        self.set_show_on_hover(config.show_on_hover);
        self.set_visible(config.visible);
    }

    /// Margin implied by the buttons' current positions.
    pub fn infer_margin(&self) -> Margin {
        match &self.probe {
            ContainerProbe::Ready(container) => {
                let frames = ButtonFrames::read(&self.window);
                layout::infer_margin(container.frame(), &frames, self.direction)
            }
            ContainerProbe::Degraded(_) => Margin::ZERO,
        }
    }

    /// Margin currently in effect.
    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn default_margin(&self) -> Margin {
        self.default_margin
    }

    pub fn layout_direction(&self) -> LayoutDirection {
        self.direction
    }

    pub fn show_on_hover(&self) -> bool {
        self.show_on_hover
    }

    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    pub fn has_overlay(&self) -> bool {
        self.hover_view.is_some()
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self.probe, ContainerProbe::Degraded(_))
    }

    /// Why the cluster is degraded, if it is.
    pub fn probe_error(&self) -> Option<&ProbeError> {
        match &self.probe {
            ContainerProbe::Degraded(e) => Some(e),
            ContainerProbe::Ready(_) => None,
        }
    }

    pub fn window(&self) -> &W {
        &self.window
    }
}
