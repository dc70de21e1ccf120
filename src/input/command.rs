//! Engine commands and the fixed keyboard shortcut table.
//!
//! Menu selections and keyboard shortcuts are two independent sources of
//! the same [`Command`] values, delivered through a single dispatch entry
//! point, so both produce identical effects by construction.

use std::collections::HashMap;

use crate::draw::PaletteColor;

/// A discrete operation on the engine.
///
/// Carried values are validated at dispatch time: a `SetWidth` outside the
/// selectable width set is silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Show or hide the annotation surface (handled by the overlay controller)
    ToggleOverlay,
    /// Remove the most recently committed stroke
    Undo,
    /// Drop all strokes, including one in progress
    Clear,
    /// Select a pen width in pixels; non-members of the width set are ignored
    SetWidth(u32),
    /// Select a pen color from the palette
    SetColor(PaletteColor),
    /// Step to the next larger pen width, clamping at the maximum
    IncreaseWidth,
    /// Step to the next smaller pen width, clamping at the minimum
    DecreaseWidth,
    /// Advance the pen color one step through the palette cycle
    RotateColor,
}

/// A single keyboard shortcut: a key name with its required modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    const fn plain(key: &'static str) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
        }
    }

    const fn ctrl(key: &'static str) -> Self {
        Self {
            key,
            ctrl: true,
            shift: false,
            alt: false,
        }
    }

    /// Check if this binding matches the pressed key and modifier state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

/// Builds the shortcut table.
///
/// The mapping is a product invariant and is deliberately not configurable:
/// Escape clears, Ctrl+Z undoes, W/E step the width down/up, R rotates the
/// color.
pub fn shortcut_table() -> HashMap<KeyBinding, Command> {
    HashMap::from([
        (KeyBinding::plain("Escape"), Command::Clear),
        (KeyBinding::ctrl("z"), Command::Undo),
        (KeyBinding::plain("w"), Command::DecreaseWidth),
        (KeyBinding::plain("e"), Command::IncreaseWidth),
        (KeyBinding::plain("r"), Command::RotateColor),
    ])
}
