//! AppKit host for the button cluster
//!
//! Talks to the `NSWindow` behind a tao window. The buttons container is the
//! view two `superview` hops above the close button; the hover overlay is a
//! runtime-registered `NSView` subclass that forwards tracking events.

use std::ffi::c_void;
use std::ptr;
use std::rc::Rc;
use std::sync::Once;

use cocoa::base::{id, nil, BOOL, NO, YES};
use cocoa::foundation::{NSInteger, NSPoint, NSRect, NSSize, NSUInteger};
use objc::declare::ClassDecl;
use objc::runtime::{Class, Object, Sel};
use objc::{class, msg_send, sel, sel_impl};
use tao::platform::macos::WindowExtMacOS;
use tao::window::Window;

use crate::geometry::{Point, Rect};
use crate::host::{
    ButtonsContainer, HoverOverlay, LayoutDirection, OverlayEvent, OverlayEventSink, ProbeError,
    TrackingOptions, WindowButton, WindowHandle,
};

const HOVER_VIEW_CLASS: &str = "FramelessHoverCaptureView";
const SINK_IVAR: &str = "frameless_sink";

/// `NSWindowStyleMaskFullScreen`
const FULL_SCREEN_STYLE_MASK: NSUInteger = 1 << 14;
/// `NSUserInterfaceLayoutDirectionRightToLeft`
const LAYOUT_RIGHT_TO_LEFT: NSInteger = 1;
/// `NSWindowAbove`
const ORDER_ABOVE: NSInteger = 1;

type SharedSink = Rc<dyn OverlayEventSink>;

fn to_rect(frame: NSRect) -> Rect {
    Rect::new(frame.origin.x, frame.origin.y, frame.size.width, frame.size.height)
}

fn to_ns_rect(rect: Rect) -> NSRect {
    NSRect::new(
        NSPoint::new(rect.origin.x, rect.origin.y),
        NSSize::new(rect.size.width, rect.size.height),
    )
}

fn to_bool(value: bool) -> BOOL {
    if value {
        YES
    } else {
        NO
    }
}

/// `NSWindowButton` value for a button.
fn button_type(button: WindowButton) -> NSUInteger {
    match button {
        WindowButton::Close => 0,
        WindowButton::Minimize => 1,
        WindowButton::Zoom => 2,
    }
}

/// The native window of a tao window.
///
/// Holds the `NSWindow` without retaining it; the tao window must outlive
/// this handle and anything built from it.
pub struct NativeWindow {
    ns_window: id,
    sink: SharedSink,
}

impl NativeWindow {
    /// Wrap `window`. Overlay notifications are delivered to `sink`.
    pub fn new(window: &Window, sink: impl OverlayEventSink + 'static) -> Self {
        Self {
            ns_window: window.ns_window() as id,
            sink: Rc::new(sink),
        }
    }

    fn button(&self, button: WindowButton) -> id {
        unsafe { msg_send![self.ns_window, standardWindowButton: button_type(button)] }
    }
}

impl WindowHandle for NativeWindow {
    type Container = NativeContainer;

    fn layout_direction(&self) -> LayoutDirection {
        let direction: NSInteger =
            unsafe { msg_send![self.ns_window, windowTitlebarLayoutDirection] };
        if direction == LAYOUT_RIGHT_TO_LEFT {
            LayoutDirection::RightToLeft
        } else {
            LayoutDirection::LeftToRight
        }
    }

    fn is_fullscreen(&self) -> bool {
        let mask: NSUInteger = unsafe { msg_send![self.ns_window, styleMask] };
        mask & FULL_SCREEN_STYLE_MASK != 0
    }

    fn frame(&self) -> Rect {
        let frame: NSRect = unsafe { msg_send![self.ns_window, frame] };
        to_rect(frame)
    }

    fn button_frame(&self, button: WindowButton) -> Rect {
        let frame: NSRect = unsafe { msg_send![self.button(button), frame] };
        to_rect(frame)
    }

    fn set_button_origin(&mut self, button: WindowButton, origin: Point) {
        let origin = NSPoint::new(origin.x, origin.y);
        unsafe {
            let _: () = msg_send![self.button(button), setFrameOrigin: origin];
        }
    }

    fn is_button_hidden(&self, button: WindowButton) -> bool {
        let hidden: BOOL = unsafe { msg_send![self.button(button), isHidden] };
        hidden == YES
    }

    fn set_button_hidden(&mut self, button: WindowButton, hidden: bool) {
        unsafe {
            let _: () = msg_send![self.button(button), setHidden: to_bool(hidden)];
        }
    }

    fn request_button_redraw(&mut self, button: WindowButton) {
        unsafe {
            let _: () = msg_send![self.button(button), setNeedsDisplay: YES];
        }
    }

    fn buttons_container(&self, depth: usize) -> Result<NativeContainer, ProbeError> {
        let close = self.button(WindowButton::Close);
        if close == nil {
            return Err(ProbeError::MissingButton(WindowButton::Close));
        }

        let mut view = close;
        for _ in 0..depth {
            view = unsafe { msg_send![view, superview] };
            if view == nil {
                return Err(ProbeError::MissingAncestor {
                    button: WindowButton::Close,
                    depth,
                });
            }
        }

        let view: id = unsafe { msg_send![view, retain] };
        Ok(NativeContainer {
            view,
            sink: self.sink.clone(),
        })
    }
}

/// The title bar view hosting the buttons. Retained for as long as the
/// handle lives.
pub struct NativeContainer {
    view: id,
    sink: SharedSink,
}

impl ButtonsContainer for NativeContainer {
    type Overlay = NativeOverlay;

    fn frame(&self) -> Rect {
        let frame: NSRect = unsafe { msg_send![self.view, frame] };
        to_rect(frame)
    }

    fn set_frame(&mut self, frame: Rect) {
        unsafe {
            let _: () = msg_send![self.view, setFrame: to_ns_rect(frame)];
        }
    }

    fn is_hidden(&self) -> bool {
        let hidden: BOOL = unsafe { msg_send![self.view, isHidden] };
        hidden == YES
    }

    fn set_hidden(&mut self, hidden: bool) {
        unsafe {
            let _: () = msg_send![self.view, setHidden: to_bool(hidden)];
        }
    }

    fn attach_overlay(&mut self, frame: Rect) -> NativeOverlay {
        let Some(class) = hover_view_class() else {
            log::warn!("{} is unusable, hover overlay disabled", HOVER_VIEW_CLASS);
            return NativeOverlay::inert();
        };
        let sink = Box::into_raw(Box::new(self.sink.clone()));

        let view = unsafe {
            let view: id = msg_send![class, alloc];
            let view: id = msg_send![view, initWithFrame: to_ns_rect(frame)];
            (*view).set_ivar::<*mut c_void>(SINK_IVAR, sink as *mut c_void);
            let _: () = msg_send![self.view, addSubview: view positioned: ORDER_ABOVE relativeTo: nil];
            view
        };

        NativeOverlay {
            view,
            tracking_area: nil,
            sink,
        }
    }
}

impl Drop for NativeContainer {
    fn drop(&mut self) {
        unsafe {
            let _: () = msg_send![self.view, release];
        }
    }
}

/// An instance of the hover capture view class.
pub struct NativeOverlay {
    view: id,
    tracking_area: id,
    sink: *mut SharedSink,
}

impl NativeOverlay {
    /// Overlay with no view behind it. Every operation is a no-op.
    fn inert() -> Self {
        Self {
            view: nil,
            tracking_area: nil,
            sink: ptr::null_mut(),
        }
    }

    fn remove_tracking_area(&mut self) {
        if self.tracking_area == nil {
            return;
        }
        unsafe {
            let _: () = msg_send![self.view, removeTrackingArea: self.tracking_area];
            let _: () = msg_send![self.tracking_area, release];
        }
        self.tracking_area = nil;
    }
}

impl HoverOverlay for NativeOverlay {
    fn frame(&self) -> Rect {
        if self.view == nil {
            return Rect::ZERO;
        }
        let frame: NSRect = unsafe { msg_send![self.view, frame] };
        to_rect(frame)
    }

    fn set_frame(&mut self, frame: Rect) {
        if self.view == nil {
            return;
        }
        unsafe {
            let _: () = msg_send![self.view, setFrame: to_ns_rect(frame)];
        }
    }

    fn visible_rect(&self) -> Rect {
        if self.view == nil {
            return Rect::ZERO;
        }
        let rect: NSRect = unsafe { msg_send![self.view, visibleRect] };
        to_rect(rect)
    }

    fn replace_tracking_region(&mut self, rect: Rect, options: TrackingOptions) {
        if self.view == nil {
            return;
        }
        self.remove_tracking_area();

        let options = options.bits() as NSUInteger;
        unsafe {
            let area: id = msg_send![class!(NSTrackingArea), alloc];
            let area: id = msg_send![area,
                initWithRect: to_ns_rect(rect)
                options: options
                owner: self.view
                userInfo: nil];
            let _: () = msg_send![self.view, addTrackingArea: area];
            self.tracking_area = area;
        }
    }

    fn detach(&mut self) {
        if self.view == nil {
            return;
        }
        self.remove_tracking_area();

        unsafe {
            // Late AppKit callbacks find no sink and do nothing.
            (*self.view).set_ivar::<*mut c_void>(SINK_IVAR, ptr::null_mut());
            let _: () = msg_send![self.view, removeFromSuperview];
            let _: () = msg_send![self.view, release];
            drop(Box::from_raw(self.sink));
        }
        self.view = nil;
        self.sink = ptr::null_mut();
    }
}

impl Drop for NativeOverlay {
    fn drop(&mut self) {
        self.detach();
    }
}

/// The hover view class, registered on first use. `None` if a class of the
/// same name exists without the sink ivar.
fn hover_view_class() -> Option<&'static Class> {
    static REGISTER: Once = Once::new();
    REGISTER.call_once(register_hover_view_class);
    Class::get(HOVER_VIEW_CLASS).filter(|class| class.instance_variable(SINK_IVAR).is_some())
}

fn register_hover_view_class() {
    let Some(mut decl) = ClassDecl::new(HOVER_VIEW_CLASS, class!(NSView)) else {
        log::warn!("{} already registered elsewhere", HOVER_VIEW_CLASS);
        return;
    };

    decl.add_ivar::<*mut c_void>(SINK_IVAR);
    unsafe {
        decl.add_method(
            sel!(hitTest:),
            hit_test as extern "C" fn(&Object, Sel, NSPoint) -> id,
        );
        decl.add_method(
            sel!(mouseEntered:),
            mouse_entered as extern "C" fn(&Object, Sel, id),
        );
        decl.add_method(
            sel!(mouseExited:),
            mouse_exited as extern "C" fn(&Object, Sel, id),
        );
        decl.add_method(
            sel!(updateTrackingAreas),
            update_tracking_areas as extern "C" fn(&Object, Sel),
        );
    }
    decl.register();
}

/// Never the target of a click.
extern "C" fn hit_test(_this: &Object, _sel: Sel, _point: NSPoint) -> id {
    nil
}

extern "C" fn mouse_entered(this: &Object, _sel: Sel, _event: id) {
    forward(this, OverlayEvent::PointerEntered);
}

extern "C" fn mouse_exited(this: &Object, _sel: Sel, _event: id) {
    forward(this, OverlayEvent::PointerExited);
}

extern "C" fn update_tracking_areas(this: &Object, _sel: Sel) {
    unsafe {
        let _: () = msg_send![super(this, class!(NSView)), updateTrackingAreas];
    }
    forward(this, OverlayEvent::TrackingInvalidated);
}

fn forward(this: &Object, event: OverlayEvent) {
    unsafe {
        let sink = *this.get_ivar::<*mut c_void>(SINK_IVAR) as *const SharedSink;
        if let Some(sink) = sink.as_ref() {
            sink.send(event);
        }
    }
}
