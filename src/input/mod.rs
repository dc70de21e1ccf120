//! Input handling and the annotation state machine.
//!
//! This module translates shell pointer and keyboard events into drawing
//! actions. It owns the tool state (width, color), the stroke lifecycle, and
//! the command dispatcher that menu and shortcut layers feed.

pub mod command;
pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use command::Command;
pub use events::Key;
pub use state::{DrawingState, InputState};
pub use tool::{StrokeWidth, ToolState};

// Re-export for public API (unused internally but part of public interface)
#[allow(unused_imports)]
pub use modifiers::Modifiers;
