//! Drawing state machine and input state management.

use std::collections::HashMap;

use log::debug;

use super::command::{Command, KeyBinding, shortcut_table};
use super::events::Key;
use super::modifiers::Modifiers;
use super::tool::{StrokeWidth, ToolState};
use crate::draw::{self, DirtyTracker, PaletteColor, Stroke, StrokeStore};
use crate::util::Rect;

/// Current gesture state machine.
///
/// Tracks whether the user is idle or actively drawing a stroke. The stroke
/// under construction itself lives in [`StrokeStore::current`]; this enum
/// carries only the per-gesture metadata (anchor point and whether
/// straight-line mode was active at pointer-down).
#[derive(Debug, Clone, Copy)]
pub enum DrawingState {
    /// Not actively drawing - waiting for pointer input
    Idle,
    /// Pointer button held down, stroke in progress
    Drawing {
        /// X coordinate where the pointer went down (straight-line anchor)
        start_x: i32,
        /// Y coordinate where the pointer went down (straight-line anchor)
        start_y: i32,
        /// Whether straight-line mode is active for this gesture,
        /// sampled once at pointer-down
        straight: bool,
    },
}

/// Main engine state for one annotation surface.
///
/// Owns the stroke store, the tool state and the cursor indicator, processes
/// pointer and keyboard events, dispatches commands, and tracks what needs
/// repainting. All access is single-threaded: mutators run synchronously and
/// set the dirty flag, the render scheduler drains it via [`take_damage`].
///
/// [`take_damage`]: InputState::take_damage
pub struct InputState {
    /// Committed strokes plus the stroke in progress
    pub store: StrokeStore,
    /// Current pen width and color
    pub tool: ToolState,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Current gesture state machine
    pub state: DrawingState,
    /// Last known hover position, shown as the cursor indicator while idle
    pub cursor: Option<(i32, i32)>,
    /// Whether the cursor indicator is drawn at all (from config)
    pub show_cursor_indicator: bool,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Surface width in pixels (set by the shell after configuration)
    pub screen_width: u32,
    /// Surface height in pixels (set by the shell after configuration)
    pub screen_height: u32,
    /// Tracks dirty regions between renders
    pub(crate) dirty: DirtyTracker,
    /// Fixed shortcut lookup table
    shortcuts: HashMap<KeyBinding, Command>,
}

impl InputState {
    /// Creates a new `InputState` with the given tool defaults.
    ///
    /// Surface dimensions default to 0 and should be updated by the shell
    /// once the real surface size is known (see [`update_screen_dimensions`]).
    ///
    /// [`update_screen_dimensions`]: InputState::update_screen_dimensions
    pub fn with_defaults(
        color: PaletteColor,
        width: StrokeWidth,
        show_cursor_indicator: bool,
    ) -> Self {
        Self {
            store: StrokeStore::new(),
            tool: ToolState::new(width, color),
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            cursor: None,
            show_cursor_indicator,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
            dirty: DirtyTracker::new(),
            shortcuts: shortcut_table(),
        }
    }

    /// Updates surface dimensions after shell configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
        self.dirty.mark_full();
        self.needs_redraw = true;
    }

    /// Returns true while a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, DrawingState::Drawing { .. })
    }

    // ------------------------------------------------------------------
    // Pointer lifecycle
    // ------------------------------------------------------------------

    /// Begins a new stroke at the given position.
    ///
    /// The stroke inherits the current tool state. `straight_line` decides,
    /// once and for the whole gesture, whether the stroke is collapsed to a
    /// single segment; shells usually pass
    /// [`Modifiers::straight_line`](super::modifiers::Modifiers::straight_line).
    /// The cursor indicator is cleared for the duration of the gesture.
    pub fn on_pointer_down(&mut self, x: i32, y: i32, straight_line: bool) {
        if self.is_drawing() {
            // Missed release event; finish the previous gesture first.
            self.on_pointer_up();
        }

        self.mark_cursor_damage();
        self.cursor = None;

        let stroke = Stroke::start(x, y, self.tool.width.px(), self.tool.color.color());
        self.dirty.mark_stroke(&stroke);
        self.store.begin(stroke);
        self.state = DrawingState::Drawing {
            start_x: x,
            start_y: y,
            straight: straight_line,
        };
        self.needs_redraw = true;
    }

    /// Extends the stroke in progress. No-op when no stroke is in progress.
    ///
    /// In straight-line mode the point sequence is replaced by exactly
    /// `[anchor, p]`, so the stroke stays a single segment no matter how the
    /// pointer wandered in between. Otherwise the point is appended.
    pub fn on_pointer_motion(&mut self, x: i32, y: i32) {
        let DrawingState::Drawing {
            start_x,
            start_y,
            straight,
        } = self.state
        else {
            return;
        };
        let Some(stroke) = self.store.current.as_mut() else {
            return;
        };

        if straight {
            // Both the segment being replaced and its replacement need repainting.
            self.dirty.mark_optional_rect(stroke.bounding_box());
            stroke.set_segment((start_x, start_y), (x, y));
            self.dirty.mark_optional_rect(stroke.bounding_box());
        } else {
            stroke.push(x, y);
            self.dirty.mark_optional_rect(stroke.last_segment_box());
        }
        self.needs_redraw = true;
    }

    /// Finishes the gesture, committing the stroke in progress.
    ///
    /// A stroke with at least one point moves atomically into the committed
    /// history; an empty one is discarded silently. Gesture metadata
    /// (anchor, straight-line mode) resets either way.
    pub fn on_pointer_up(&mut self) {
        if !self.is_drawing() {
            return;
        }

        if let Some(stroke) = self.store.current.as_ref() {
            self.dirty.mark_optional_rect(stroke.bounding_box());
        }
        if self.store.commit_current() {
            debug!("stroke committed ({} total)", self.store.committed.len());
        }
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
    }

    /// Updates the cursor indicator from a passive hover (no button held).
    ///
    /// Never touches the stroke store. Ignored while drawing: the indicator
    /// stays cleared until the gesture ends.
    pub fn on_pointer_hover(&mut self, x: i32, y: i32) {
        if self.is_drawing() {
            return;
        }
        if !self.show_cursor_indicator {
            self.cursor = Some((x, y));
            return;
        }
        self.mark_cursor_damage();
        self.cursor = Some((x, y));
        self.mark_cursor_damage();
        self.needs_redraw = true;
    }

    /// Clears the cursor indicator when the pointer leaves the surface.
    pub fn on_pointer_exit(&mut self) {
        if self.cursor.is_none() {
            return;
        }
        self.mark_cursor_damage();
        self.cursor = None;
        if self.show_cursor_indicator {
            self.needs_redraw = true;
        }
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Processes a key press event.
    ///
    /// Tracks modifier state and matches everything else against the fixed
    /// shortcut table. Returns `true` when the key triggered a command, so
    /// the shell can suppress further propagation of the event.
    pub fn on_key_press(&mut self, key: Key) -> bool {
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return false;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return false;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return false;
            }
            _ => {}
        }

        let key_str = match key {
            Key::Char(c) => c.to_string(),
            Key::Escape => "Escape".to_string(),
            _ => return false,
        };

        if let Some(command) = self.find_shortcut(&key_str) {
            self.dispatch(command);
            return true;
        }
        false
    }

    /// Processes a key release event. Only modifier state is tracked.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }

    /// Look up a command for the given key under the current modifiers.
    fn find_shortcut(&self, key_str: &str) -> Option<Command> {
        for (binding, command) in &self.shortcuts {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*command);
            }
        }
        None
    }

    // ------------------------------------------------------------------
    // Command dispatch
    // ------------------------------------------------------------------

    /// Applies a command to the stroke store or the tool state.
    ///
    /// Every command is total: invalid parameters are ignored, and undo or
    /// clear on an empty store do nothing. Commands from the menu and from
    /// keyboard shortcuts pass through here identically.
    pub fn dispatch(&mut self, command: Command) {
        match command {
            Command::Undo => {
                if let Some(stroke) = self.store.undo() {
                    self.dirty.mark_optional_rect(stroke.bounding_box());
                    self.needs_redraw = true;
                    debug!("undo ({} strokes left)", self.store.committed.len());
                }
            }
            Command::Clear => {
                if !self.store.is_empty() {
                    self.dirty.mark_full();
                    self.needs_redraw = true;
                }
                self.store.clear();
                if self.is_drawing() {
                    self.state = DrawingState::Idle;
                }
            }
            Command::SetWidth(px) => match StrokeWidth::from_px(px) {
                Some(width) => self.set_width(width),
                None => debug!("ignoring SetWidth({px}): not a selectable width"),
            },
            Command::SetColor(color) => self.set_color(color),
            Command::IncreaseWidth => self.set_width(self.tool.width.thicker()),
            Command::DecreaseWidth => self.set_width(self.tool.width.thinner()),
            Command::RotateColor => self.set_color(self.tool.color.next()),
            Command::ToggleOverlay => {
                // Visibility belongs to the overlay controller; reaching this
                // arm means the shell bypassed it.
                debug!("ToggleOverlay delivered to the engine; ignoring");
            }
        }
    }

    fn set_width(&mut self, width: StrokeWidth) {
        if self.tool.width == width {
            return;
        }
        // The indicator disc changes size: damage both the old and new extents.
        self.mark_cursor_damage();
        self.tool.width = width;
        self.mark_cursor_damage();
        self.needs_redraw = true;
        debug!("pen width set to {}px", width.px());
    }

    fn set_color(&mut self, color: PaletteColor) {
        if self.tool.color == color {
            return;
        }
        self.tool.color = color;
        self.mark_cursor_damage();
        self.needs_redraw = true;
        debug!("pen color set to {}", color.name());
    }

    // ------------------------------------------------------------------
    // Redraw scheduling and rendering
    // ------------------------------------------------------------------

    /// Damage rectangle covering the cursor indicator at its current
    /// position and tool size, if it is visible.
    fn cursor_rect(&self) -> Option<Rect> {
        if !self.show_cursor_indicator || self.is_drawing() {
            return None;
        }
        let (x, y) = self.cursor?;
        Rect::around_point(x, y, self.tool.width.px() / 2.0)
    }

    fn mark_cursor_damage(&mut self) {
        let rect = self.cursor_rect();
        self.dirty.mark_optional_rect(rect);
    }

    /// Drains the accumulated damage and clears the redraw flag.
    ///
    /// Only the render scheduler calls this, immediately before invoking
    /// [`render`](InputState::render).
    pub fn take_damage(&mut self) -> Vec<Rect> {
        self.needs_redraw = false;
        self.dirty
            .take_regions(self.screen_width as i32, self.screen_height as i32)
    }

    /// Paints the annotation layer onto the given context.
    ///
    /// A pure function of the current state: committed strokes and the
    /// stroke in progress are drawn with their own recorded settings, then
    /// the cursor indicator with the live tool state. Never mutates.
    pub fn render(&self, ctx: &cairo::Context) {
        draw::render_strokes(ctx, &self.store.committed);
        if let Some(stroke) = &self.store.current {
            draw::render_stroke_points(ctx, &stroke.points, stroke.color, stroke.width);
        }
        if !self.is_drawing() && self.show_cursor_indicator {
            if let Some((x, y)) = self.cursor {
                draw::render_cursor_indicator(
                    ctx,
                    x,
                    y,
                    self.tool.width.px(),
                    self.tool.color.color(),
                );
            }
        }
    }
}
