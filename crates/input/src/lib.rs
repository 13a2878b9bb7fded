//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and exposes a
//! crossterm-backed [`InputSource`](term_tetris_core::InputSource) for the loop
//! driver.

pub mod map;
pub mod source;

pub use term_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::TerminalInput;
