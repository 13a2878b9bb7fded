//! Shared types and constants for the terminal falling-block game.
//!
//! Everything here is plain data with no dependencies, so the core engine, the
//! input mapping and the terminal renderer can all agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 22 rows (indexed 0-21, row 0 at the top)
//! - **Hidden rows**: the top 2 rows are the spawn buffer; they take part in
//!   collision checks but are never drawn
//! - **Spawn anchor**: (3, 1)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_GRAVITY_MS` | 1000 | Gravity interval at the start of a session |
//! | `DIFFICULTY_FACTOR` | 0.8 | Interval multiplier applied on every difficulty step |
//! | `DIFFICULTY_LINES` | 5 | Cleared rows per difficulty step |
//! | `FRAME_MS` | 16 | Default input poll budget per loop iteration |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert_eq!(PieceKind::T.as_str(), "T");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 22);
//! assert_eq!(HIDDEN_ROWS, 2);
//! ```

use std::fmt;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells, hidden spawn rows included (22 rows)
pub const BOARD_HEIGHT: u8 = 22;

/// Rows at the top of the board that hold freshly spawned pieces but are not drawn
pub const HIDDEN_ROWS: u8 = 2;

/// Rows actually drawn by a renderer
pub const VISIBLE_ROWS: u8 = BOARD_HEIGHT - HIDDEN_ROWS;

/// Column of the anchor for a freshly spawned piece
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 2;

/// Row of the anchor for a freshly spawned piece
pub const SPAWN_Y: i8 = 1;

/// Gravity interval when a session starts (one row per second)
pub const BASE_GRAVITY_MS: u64 = 1000;

/// Gravity interval multiplier applied every `DIFFICULTY_LINES` cleared rows
pub const DIFFICULTY_FACTOR: f64 = 0.8;

/// Number of cleared rows between difficulty steps
pub const DIFFICULTY_LINES: u32 = 5;

/// Default upper bound for how long one input poll may wait (≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_geometry_defaults() {
        assert_eq!(BOARD_WIDTH, 10);
        assert_eq!(BOARD_HEIGHT, 22);
        assert_eq!(VISIBLE_ROWS, 20);
        assert_eq!((SPAWN_X, SPAWN_Y), (3, 1));
    }

    #[test]
    fn difficulty_defaults() {
        assert_eq!(BASE_GRAVITY_MS, 1000);
        assert_eq!(DIFFICULTY_LINES, 5);
        assert!((DIFFICULTY_FACTOR - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn piece_names_follow_catalog_order() {
        let names: Vec<_> = PieceKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["I", "O", "T", "S", "Z", "J", "L"]);
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn diagnostic_display_is_stable() {
        let d = Diagnostic {
            cause: LossCause::SpawnBlocked,
            stage: LossStage::AfterLineClear,
        };
        assert_eq!(d.to_string(), "spawn area blocked (after line clear)");
    }
}

/// The seven tetromino shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every shape, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDirection {
    Left,
    Right,
}

impl RotateDirection {
    pub fn opposite(&self) -> Self {
        match self {
            RotateDirection::Left => RotateDirection::Right,
            RotateDirection::Right => RotateDirection::Left,
        }
    }
}

/// Player commands accepted by a session
///
/// The input layer maps key presses into these; "no event" is represented by
/// `Option::None` at the poll boundary rather than by a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Quarter turn counter-clockwise
    RotateLeft,
    /// Quarter turn clockwise
    RotateRight,
    /// Drop to the ghost position and lock immediately
    HardDrop,
    /// End the session
    Quit,
}

/// Display attribute carried by occupied cells.
///
/// The core never looks inside it; only a renderer maps it to actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Cyan,
    /// Bold orange (the square)
    OrangeBold,
    Orange,
    Magenta,
    Green,
    Red,
    Blue,
    /// Ghost preview; never stored in the board
    Ghost,
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(Attr)`: occupied, drawn with the given attribute
pub type Cell = Option<Attr>;

/// Why a freshly spawned piece cannot be placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    /// Some cell of the piece sits above row 0
    AboveBoard,
    /// Some cell of the piece overlaps an occupied board cell
    SpawnBlocked,
}

/// Where in the lock sequence the loss was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossStage {
    /// The very first piece of the session
    InitialSpawn,
    /// Right after the previous piece locked, before line clears
    AfterLock,
    /// After line clears shifted the board under the new piece
    AfterLineClear,
}

/// Exit diagnostic recorded when a session tops out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub cause: LossCause,
    pub stage: LossStage,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cause = match self.cause {
            LossCause::AboveBoard => "piece above board",
            LossCause::SpawnBlocked => "spawn area blocked",
        };
        let stage = match self.stage {
            LossStage::InitialSpawn => "initial spawn",
            LossStage::AfterLock => "after lock",
            LossStage::AfterLineClear => "after line clear",
        };
        write!(f, "{cause} ({stage})")
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The player asked to quit
    Quit,
    /// A new piece could not be placed
    ToppedOut,
}
