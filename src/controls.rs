//! Keyboard controls for the demo window

use frameless_buttons::Margin;
use tao::keyboard::KeyCode;

/// Extra margin the demo can switch to
const WIDE_MARGIN: Margin = Margin { x: 24.0, y: 20.0 };

/// Something the user asked the demo to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleHover,
    CycleMargin,
    ToggleVisible,
    ToggleFullscreen,
}

impl Command {
    /// H, M, V and F
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyH => Some(Self::ToggleHover),
            KeyCode::KeyM => Some(Self::CycleMargin),
            KeyCode::KeyV => Some(Self::ToggleVisible),
            KeyCode::KeyF => Some(Self::ToggleFullscreen),
            _ => None,
        }
    }
}

/// Steps through the configured margin, a wide one, and the platform default.
/// `None` means the platform default.
pub struct MarginCycle {
    presets: Vec<Option<Margin>>,
    index: usize,
}

impl MarginCycle {
    pub fn new(configured: Option<Margin>) -> Self {
        let mut presets = vec![configured];
        for preset in [Some(WIDE_MARGIN), None] {
            if !presets.contains(&preset) {
                presets.push(preset);
            }
        }
        Self { presets, index: 0 }
    }

    /// Move to the next margin and return it.
    pub fn advance(&mut self) -> Option<Margin> {
        self.index = (self.index + 1) % self.presets.len();
        self.presets[self.index]
    }
}
