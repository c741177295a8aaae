use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// Returns the next event via `next()`. The game has no clock, so the
/// loop is purely event-driven: a render is emitted at startup and after
/// every terminal event, and the loop otherwise blocks on terminal input.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    /// Creates a new `EventLoop`.
    pub fn new() -> Self {
        Self {
            dirty: true, // Initial render is required on startup
        }
    }

    /// Returns the next event.
    ///
    /// Emits a render while the screen is dirty, otherwise blocks until a
    /// crossterm event occurs (which marks the screen dirty again).
    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        self.dirty = true;
        Ok(event::read()?.into())
    }
}
