//! Core game logic - the falling-block engine with no terminal dependencies
//!
//! This crate holds every game rule and nothing that touches a terminal:
//!
//! - **Deterministic**: a seed fixes the piece sequence, a [`Clock`] fixes time
//! - **Testable**: rendering and input are traits, so whole sessions run headless
//!
//! # Module Structure
//!
//! - [`pieces`]: the static catalog of the seven shapes and their rotation tables
//! - [`piece`]: one spawned piece and its rotation index
//! - [`board`]: 10x22 grid with collision, landing, line scanning and shifting
//! - [`queue`]: 7-bag randomizer
//! - [`ghost`]: lowest legal resting row for the ghost preview and hard drop
//! - [`session`]: the state machine that runs one game
//! - [`snapshot`]: what a renderer receives each frame
//! - [`clock`] / [`game_loop`]: time source, collaborator traits and the loop driver
//!
//! # Game Rules
//!
//! - Gravity moves the piece down one row per interval; the interval starts at
//!   one second and shrinks by a factor of 0.8 every 5 cleared rows
//! - Moves and rotations that would collide are rejected; there are no wall kicks
//! - Hard drop jumps to the ghost row and locks on the same iteration
//! - The score is the number of cleared rows
//! - The game ends when a freshly spawned piece cannot be placed
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use term_tetris_core::{Phase, Session};
//! use term_tetris_types::GameAction;
//!
//! let start = Instant::now();
//! let mut session = Session::new(12345, start);
//!
//! session.apply(GameAction::MoveLeft);
//! session.apply(GameAction::HardDrop);
//! assert!(session.update(start));
//!
//! assert_eq!(session.phase(), Phase::Falling);
//! assert_eq!(session.board().cells().iter().filter(|c| c.is_some()).count(), 4);
//! ```

pub mod board;
pub mod clock;
pub mod game_loop;
pub mod ghost;
pub mod piece;
pub mod pieces;
pub mod queue;
pub mod session;
pub mod snapshot;

pub use term_tetris_types as types;

pub use board::{Board, ClearedRows};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use game_loop::{run, InputSource, RenderSink, ScriptedInput};
pub use ghost::{project, project_from};
pub use piece::ActivePiece;
pub use pieces::{definition, get_shape, PieceDef, Shape, CATALOG};
pub use queue::PieceQueue;
pub use session::{Phase, Report, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot, GHOST_ATTR};
