//! Crossterm-backed input source.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use term_tetris_core::InputSource;
use tracing::warn;

use crate::map::handle_key_event;
use crate::types::GameAction;

/// Reads at most one key event per poll, waiting no longer than `poll_timeout`.
///
/// A zero timeout (`TETRIS_FRAME_MS=0`) makes every poll strictly non-blocking;
/// the 16 ms default keeps the loop from spinning while still waking up in time
/// for gravity.
pub struct TerminalInput {
    poll_timeout: Duration,
}

impl TerminalInput {
    pub fn new(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Option<GameAction> {
        let event = match event::poll(self.poll_timeout) {
            Ok(true) => event::read(),
            Ok(false) => return None,
            Err(e) => Err(e),
        };

        match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => handle_key_event(key),
            Ok(_) => None,
            Err(e) => {
                // A terminal we can no longer read from cannot be played.
                warn!(error = %e, "input poll failed, ending session");
                Some(GameAction::Quit)
            }
        }
    }
}
