//! Render snapshot handed to a render sink once per loop iteration.

use std::time::Duration;

use crate::pieces::Shape;
use crate::session::Phase;
use crate::types::{Attr, Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Attribute used for every ghost mino
pub const GHOST_ATTR: Attr = Attr::Ghost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub cells: Shape,
    pub attr: Attr,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Absolute board coordinates of every mino at the piece anchor
    pub fn minos(&self) -> [(i8, i8); 4] {
        self.minos_at(self.y)
    }

    /// Absolute coordinates with the anchor moved to row `y` (ghost rendering)
    pub fn minos_at(&self, y: i8) -> [(i8, i8); 4] {
        self.cells.map(|(dx, dy)| (self.x + dx, y + dy))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub ghost_attr: Attr,
    pub score: u32,
    pub speed: Duration,
    pub phase: Phase,
    pub finished: bool,
}

impl GameSnapshot {
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            ghost_attr: GHOST_ATTR,
            score: 0,
            speed: Duration::ZERO,
            phase: Phase::Spawning,
            finished: false,
        }
    }
}
