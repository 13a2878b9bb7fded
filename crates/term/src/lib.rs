//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer (pure, testable) which is then flushed to the terminal with
//! crossterm.
//!
//! - [`fb`]: framebuffer and glyph styles
//! - [`game_view`]: snapshot to framebuffer (board, ghost, active piece, panel)
//! - [`renderer`]: raw mode / alternate screen handling and frame flushing
//! - [`sink`]: the [`RenderSink`](term_tetris_core::RenderSink) used by the binary

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{attr_glyph, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_frame_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
