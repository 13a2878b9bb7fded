//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! Re-exports the member crates under short names so integration tests,
//! benches and the binary share one import path, and hosts the binary's
//! ambient pieces: environment configuration and log setup.

pub use term_tetris_core as core;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;

pub mod config;
pub mod logging;

pub use config::Config;
