//! In-memory host used by the unit tests
//!
//! Models a window whose close button sits two views below the buttons
//! container, like AppKit's title bar. Handles share one `Scene` so tests can
//! inspect what the cluster did.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geometry::{Point, Rect};
use crate::host::{
    ButtonsContainer, HoverOverlay, LayoutDirection, ProbeError, TrackingOptions, WindowButton,
    WindowHandle,
};

/// Depth of the container above the close button in stock scenes.
const CONTAINER_DEPTH: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct ButtonState {
    pub frame: Rect,
    pub hidden: bool,
    pub redraws: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerState {
    pub frame: Rect,
    pub hidden: bool,
    pub writes: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct OverlayState {
    pub frame: Rect,
    pub attached: bool,
    pub tracking: Option<(Rect, TrackingOptions)>,
    pub tracking_installs: usize,
}

#[derive(Debug)]
struct SceneState {
    direction: LayoutDirection,
    fullscreen: bool,
    window_frame: Rect,
    buttons: [ButtonState; 3],
    container: Option<ContainerState>,
    container_depth: usize,
    overlays: Vec<OverlayState>,
}

#[derive(Clone)]
pub struct Scene(Rc<RefCell<SceneState>>);

impl Scene {
    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 600.0;

    fn new(direction: LayoutDirection, frames: [Rect; 3], container_depth: Option<usize>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        let buttons = frames.map(|frame| ButtonState {
            frame,
            hidden: false,
            redraws: 0,
        });
        let container = container_depth.map(|_| ContainerState {
            frame: Rect::new(0.0, Self::HEIGHT - 28.0, Self::WIDTH, 28.0),
            hidden: false,
            writes: 0,
        });

        Self(Rc::new(RefCell::new(SceneState {
            direction,
            fullscreen: false,
            window_frame: Rect::new(240.0, 180.0, Self::WIDTH, Self::HEIGHT),
            buttons,
            container,
            container_depth: container_depth.unwrap_or(CONTAINER_DEPTH),
            overlays: Vec::new(),
        })))
    }

    /// Stock 28pt title bar: 14x16 buttons at x = 7, 27, 47.
    pub fn stock_frames() -> [Rect; 3] {
        [
            Rect::new(7.0, 6.0, 14.0, 16.0),
            Rect::new(27.0, 6.0, 14.0, 16.0),
            Rect::new(47.0, 6.0, 14.0, 16.0),
        ]
    }

    pub fn stock_ltr() -> Self {
        Self::new(LayoutDirection::LeftToRight, Self::stock_frames(), Some(CONTAINER_DEPTH))
    }

    /// Mirror image of `stock_ltr`.
    pub fn stock_rtl() -> Self {
        let frames = Self::stock_frames().map(|frame| frame.mirrored(Self::WIDTH));
        Self::new(LayoutDirection::RightToLeft, frames, Some(CONTAINER_DEPTH))
    }

    pub fn with_frames(direction: LayoutDirection, frames: [Rect; 3]) -> Self {
        Self::new(direction, frames, Some(CONTAINER_DEPTH))
    }

    /// A window with no buttons container at all.
    pub fn without_container() -> Self {
        Self::new(LayoutDirection::LeftToRight, Self::stock_frames(), None)
    }

    /// A window whose container sits `depth` levels above the close button.
    pub fn container_at_depth(depth: usize) -> Self {
        Self::new(LayoutDirection::LeftToRight, Self::stock_frames(), Some(depth))
    }

    pub fn window(&self) -> SceneWindow {
        SceneWindow(self.0.clone())
    }

    pub fn set_fullscreen(&self, fullscreen: bool) {
        self.0.borrow_mut().fullscreen = fullscreen;
    }

    pub fn button(&self, button: WindowButton) -> ButtonState {
        self.0.borrow().buttons[button.index()]
    }

    pub fn button_frames(&self) -> [Rect; 3] {
        self.0.borrow().buttons.map(|b| b.frame)
    }

    pub fn all_hidden(&self) -> bool {
        self.0.borrow().buttons.iter().all(|b| b.hidden)
    }

    pub fn none_hidden(&self) -> bool {
        self.0.borrow().buttons.iter().all(|b| !b.hidden)
    }

    pub fn container(&self) -> Option<ContainerState> {
        self.0.borrow().container
    }

    pub fn overlays(&self) -> Vec<OverlayState> {
        self.0.borrow().overlays.clone()
    }

    pub fn attached_overlays(&self) -> usize {
        self.0.borrow().overlays.iter().filter(|o| o.attached).count()
    }
}

pub struct SceneWindow(Rc<RefCell<SceneState>>);

impl WindowHandle for SceneWindow {
    type Container = SceneContainer;

    fn layout_direction(&self) -> LayoutDirection {
        self.0.borrow().direction
    }

    fn is_fullscreen(&self) -> bool {
        self.0.borrow().fullscreen
    }

    fn frame(&self) -> Rect {
        self.0.borrow().window_frame
    }

    fn button_frame(&self, button: WindowButton) -> Rect {
        self.0.borrow().buttons[button.index()].frame
    }

    fn set_button_origin(&mut self, button: WindowButton, origin: Point) {
        let mut state = self.0.borrow_mut();
        let frame = &mut state.buttons[button.index()].frame;
        *frame = frame.with_origin(origin);
    }

    fn is_button_hidden(&self, button: WindowButton) -> bool {
        self.0.borrow().buttons[button.index()].hidden
    }

    fn set_button_hidden(&mut self, button: WindowButton, hidden: bool) {
        self.0.borrow_mut().buttons[button.index()].hidden = hidden;
    }

    fn request_button_redraw(&mut self, button: WindowButton) {
        self.0.borrow_mut().buttons[button.index()].redraws += 1;
    }

    fn buttons_container(&self, depth: usize) -> Result<SceneContainer, ProbeError> {
        let state = self.0.borrow();
        match state.container {
            Some(_) if depth == state.container_depth => Ok(SceneContainer(self.0.clone())),
            _ => Err(ProbeError::MissingAncestor {
                button: WindowButton::Close,
                depth,
            }),
        }
    }
}

pub struct SceneContainer(Rc<RefCell<SceneState>>);

impl SceneContainer {
    fn with_state<T>(&self, f: impl FnOnce(&mut ContainerState) -> T) -> T {
        let mut scene = self.0.borrow_mut();
        let state = scene
            .container
            .as_mut()
            .expect("container handle outlived its scene state");
        f(state)
    }
}

impl ButtonsContainer for SceneContainer {
    type Overlay = SceneOverlay;

    fn frame(&self) -> Rect {
        self.with_state(|c| c.frame)
    }

    fn set_frame(&mut self, frame: Rect) {
        self.with_state(|c| {
            c.frame = frame;
            c.writes += 1;
        })
    }

    fn is_hidden(&self) -> bool {
        self.with_state(|c| c.hidden)
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.with_state(|c| {
            c.hidden = hidden;
            c.writes += 1;
        })
    }

    fn attach_overlay(&mut self, frame: Rect) -> SceneOverlay {
        let mut scene = self.0.borrow_mut();
        scene.overlays.push(OverlayState {
            frame,
            attached: true,
            tracking: None,
            tracking_installs: 0,
        });
        SceneOverlay {
            scene: self.0.clone(),
            index: scene.overlays.len() - 1,
        }
    }
}

pub struct SceneOverlay {
    scene: Rc<RefCell<SceneState>>,
    index: usize,
}

impl SceneOverlay {
    fn with_state<T>(&self, f: impl FnOnce(&mut OverlayState) -> T) -> T {
        f(&mut self.scene.borrow_mut().overlays[self.index])
    }
}

impl HoverOverlay for SceneOverlay {
    fn frame(&self) -> Rect {
        self.with_state(|o| o.frame)
    }

    fn set_frame(&mut self, frame: Rect) {
        self.with_state(|o| o.frame = frame)
    }

    fn visible_rect(&self) -> Rect {
        self.with_state(|o| Rect::new(0.0, 0.0, o.frame.width(), o.frame.height()))
    }

    fn replace_tracking_region(&mut self, rect: Rect, options: TrackingOptions) {
        self.with_state(|o| {
            o.tracking = Some((rect, options));
            o.tracking_installs += 1;
        })
    }

    fn detach(&mut self) {
        self.with_state(|o| {
            o.attached = false;
            o.tracking = None;
        })
    }
}
