//! Button visibility policy

/// Whether the buttons should be hidden.
///
/// Hover mode hides them until the pointer is over the cluster. Fullscreen
/// always shows them.
pub fn buttons_hidden(show_on_hover: bool, pointer_inside: bool, fullscreen: bool) -> bool {
    show_on_hover && !pointer_inside && !fullscreen
}
