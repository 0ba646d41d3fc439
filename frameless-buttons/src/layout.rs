//! Button cluster layout math
//!
//! Everything here is a pure function of a snapshot of the three button
//! frames, so the same code serves queries, redraws and tests.

use crate::geometry::{Margin, Point, Rect};
use crate::host::{LayoutDirection, WindowButton, WindowHandle};

/// Frames of the three buttons, in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonFrames {
    pub close: Rect,
    pub minimize: Rect,
    pub zoom: Rect,
}

impl ButtonFrames {
    /// Snapshot the current frames from a window.
    pub fn read<W: WindowHandle>(window: &W) -> Self {
        Self {
            close: window.button_frame(WindowButton::Close),
            minimize: window.button_frame(WindowButton::Minimize),
            zoom: window.button_frame(WindowButton::Zoom),
        }
    }

    pub fn get(&self, button: WindowButton) -> Rect {
        match button {
            WindowButton::Close => self.close,
            WindowButton::Minimize => self.minimize,
            WindowButton::Zoom => self.zoom,
        }
    }

    /// Outermost button on the left edge.
    pub fn left(&self, direction: LayoutDirection) -> Rect {
        match direction {
            LayoutDirection::LeftToRight => self.close,
            LayoutDirection::RightToLeft => self.zoom,
        }
    }

    /// Outermost button on the right edge.
    pub fn right(&self, direction: LayoutDirection) -> Rect {
        match direction {
            LayoutDirection::LeftToRight => self.zoom,
            LayoutDirection::RightToLeft => self.close,
        }
    }

    /// Distance between neighbouring buttons as the host laid them out.
    /// Negative under RTL, where buttons run leftwards.
    pub fn spacing(&self) -> f64 {
        self.minimize.min_x() - self.close.min_x()
    }
}

/// Rectangle covering the button cluster plus its margin.
pub fn container_bounds(frames: &ButtonFrames, margin: Margin, direction: LayoutDirection) -> Rect {
    let left = frames.left(direction);
    let right = frames.right(direction);
    let x = if direction.is_rtl() { left.min_x() } else { 0.0 };

    Rect::new(
        x,
        left.min_y() - margin.y,
        right.max_x() - left.min_x() + margin.x,
        left.height() + 2.0 * margin.y,
    )
}

/// Region the hover overlay covers: the container bounds without the margin,
/// so only the buttons themselves reveal the cluster.
pub fn hover_bounds(frames: &ButtonFrames, margin: Margin, direction: LayoutDirection) -> Rect {
    let bounds = container_bounds(frames, margin, direction);
    let x = if direction.is_rtl() { bounds.min_x() } else { margin.x };

    Rect::new(
        x,
        margin.y,
        bounds.width() - margin.x,
        bounds.height() - 2.0 * margin.y,
    )
}

/// Margin implied by where the host placed the buttons.
///
/// Under RTL the right-edge control (close) sits at the leading edge, so its
/// distance to the container's right edge is the inset `button_origins` uses.
pub fn infer_margin(container: Rect, frames: &ButtonFrames, direction: LayoutDirection) -> Margin {
    let y = (container.height() - frames.close.height()) / 2.0;
    let x = match direction {
        LayoutDirection::LeftToRight => frames.close.min_x(),
        LayoutDirection::RightToLeft => container.width() - frames.right(direction).max_x(),
    };
    Margin::new(x, y)
}

/// Container frame sized to the buttons plus vertical margin, flush with the
/// top edge of the window.
pub fn container_frame(current: Rect, window: Rect, close: Rect, margin: Margin) -> Rect {
    let height = close.height() + 2.0 * margin.y;
    Rect::new(
        current.min_x(),
        window.height() - height,
        current.width(),
        height,
    )
}

/// New origins for `[Close, Minimize, Zoom]` inside `container`.
///
/// Keeps the host's own spacing between buttons; only the leading inset
/// changes.
pub fn button_origins(
    frames: &ButtonFrames,
    container: Rect,
    margin: Margin,
    direction: LayoutDirection,
) -> [Point; 3] {
    let spacing = frames.spacing();

    WindowButton::ALL.map(|button| {
        let frame = frames.get(button);
        let offset = button.index() as f64 * spacing;
        let x = match direction {
            LayoutDirection::LeftToRight => margin.x + offset,
            LayoutDirection::RightToLeft => {
                container.width() - margin.x + offset - frame.width()
            }
        };
        let y = (container.height() - frame.height()) / 2.0;
        Point::new(x, y)
    })
}
