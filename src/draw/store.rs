//! Stroke store: committed history plus the single in-progress slot.

use super::stroke::Stroke;

/// Container for all strokes in the current annotation session.
///
/// `committed` holds finalized strokes in draw order (first = bottom layer)
/// and only ever changes by appending, popping from the end (undo), or
/// clearing. `current` holds at most one stroke under construction; it is
/// never part of `committed` and transitions into it atomically on
/// completion.
///
/// The store is exclusively owned by the engine: external components mutate
/// it only through the pointer lifecycle and command dispatch.
#[derive(Debug, Default)]
pub struct StrokeStore {
    /// Finalized strokes in draw order
    pub committed: Vec<Stroke>,
    /// Stroke currently being drawn, if any
    pub current: Option<Stroke>,
}

impl StrokeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new in-progress stroke, replacing any leftover one.
    pub fn begin(&mut self, stroke: Stroke) {
        if self.current.is_some() {
            log::warn!("beginning a stroke while another was in progress; discarding the old one");
        }
        self.current = Some(stroke);
    }

    /// Moves the in-progress stroke into the committed history.
    ///
    /// An empty in-progress stroke is discarded instead of committed.
    /// Returns `true` when a stroke was actually committed.
    pub fn commit_current(&mut self) -> bool {
        match self.current.take() {
            Some(stroke) if !stroke.is_empty() => {
                self.committed.push(stroke);
                true
            }
            Some(_) => {
                log::debug!("discarding empty stroke");
                false
            }
            None => false,
        }
    }

    /// Drops the in-progress stroke without committing it.
    pub fn discard_current(&mut self) -> Option<Stroke> {
        self.current.take()
    }

    /// Removes and returns the most recently committed stroke, if any.
    ///
    /// Never touches the in-progress stroke. No-op on an empty history.
    pub fn undo(&mut self) -> Option<Stroke> {
        self.committed.pop()
    }

    /// Empties the committed history and discards any in-progress stroke.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.current = None;
    }

    /// Returns true when there is neither history nor an in-progress stroke.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty() && self.current.is_none()
    }
}
