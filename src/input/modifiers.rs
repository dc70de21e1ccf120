//! Keyboard modifier state tracking.

/// Keyboard modifier state.
///
/// Tracks which modifier keys (Shift, Ctrl, Alt) are currently pressed.
/// Shift doubles as the straight-line modifier for pointer gestures; Ctrl is
/// the primary modifier for keyboard shortcuts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key pressed
    pub shift: bool,
    /// Ctrl key pressed
    pub ctrl: bool,
    /// Alt key pressed
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture started right now would be in straight-line mode.
    ///
    /// Sampled once at pointer-down; releasing Shift mid-gesture does not
    /// change the mode of the stroke in progress.
    pub fn straight_line(&self) -> bool {
        self.shift
    }
}
