//! Active piece - one spawned instance of a catalog shape
//!
//! The instance only owns its rotation index; the shape data stays in the
//! shared catalog. The anchor position lives in the session.

use crate::pieces::{definition, PieceDef, Shape};
use crate::types::{Attr, PieceKind, RotateDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePiece {
    def: &'static PieceDef,
    rotation: usize,
}

impl ActivePiece {
    /// Create a piece in its spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        Self {
            def: definition(kind),
            rotation: 0,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.def.kind
    }

    pub fn attr(&self) -> Attr {
        self.def.attr
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    /// Occupied offsets for the current rotation
    pub fn cells(&self) -> &'static Shape {
        self.def.shape(self.rotation)
    }

    /// Advance (right) or retreat (left) the rotation index.
    ///
    /// No collision check happens here; the session validates the result.
    pub fn rotate(&mut self, direction: RotateDirection) {
        let count = self.def.rotation_count();
        self.rotation = match direction {
            RotateDirection::Right => (self.rotation + 1) % count,
            RotateDirection::Left => (self.rotation + count - 1) % count,
        };
    }

    pub fn reset(&mut self) {
        self.rotation = 0;
    }
}
