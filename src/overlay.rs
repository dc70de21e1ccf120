//! Overlay visibility: whether the annotation surface is presented at all.

use log::{debug, info};

use crate::input::{Command, InputState};

/// Visibility of the annotation surface.
///
/// The surface starts hidden; the shell queries this to decide whether to
/// present or withdraw its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Surface not presented; the engine is unreachable by the user
    Hidden,
    /// Surface presented and capturing input
    Visible,
}

/// Owns the show/hide state machine for one annotation surface.
///
/// This is also the single command entry point for shells: it routes
/// [`Command::ToggleOverlay`] itself and forwards everything else to the
/// engine, so menu and hotkey layers never need to know which component
/// handles which command.
#[derive(Debug)]
pub struct OverlayController {
    visibility: Visibility,
}

impl Default for OverlayController {
    fn default() -> Self {
        Self::new()
    }
}

impl OverlayController {
    /// Creates a controller with the surface hidden.
    pub fn new() -> Self {
        Self {
            visibility: Visibility::Hidden,
        }
    }

    /// Current visibility, for the shell's present/withdraw decision.
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns true when the surface is presented.
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// Flips visibility and returns the new state.
    ///
    /// Showing clears any residual drawing state first, so every activation
    /// starts from a blank canvas. Hiding leaves the drawing state untouched;
    /// it is discarded on the next show, not on hide.
    pub fn toggle(&mut self, input: &mut InputState) -> Visibility {
        self.visibility = match self.visibility {
            Visibility::Hidden => {
                input.dispatch(Command::Clear);
                info!("overlay shown");
                Visibility::Visible
            }
            Visibility::Visible => {
                info!("overlay hidden");
                Visibility::Hidden
            }
        };
        self.visibility
    }

    /// Single dispatch entry point for shells.
    pub fn dispatch(&mut self, input: &mut InputState, command: Command) {
        debug!("dispatching {command:?}");
        match command {
            Command::ToggleOverlay => {
                self.toggle(input);
            }
            other => input.dispatch(other),
        }
    }
}
