//! Pieces module - the static tetromino catalog
//!
//! Every shape carries its rotation states as explicit offset tables; nothing is
//! rotated at runtime. Offsets are `(dx, dy)` relative to the piece anchor, with
//! `dy` growing downward. The square has a single state reused for every
//! orientation, the other six have four states ordered by successive right turns.

use crate::types::{Attr, PieceKind};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// The four mino offsets of one rotation state
pub type Shape = [MinoOffset; 4];

/// Immutable definition shared by every piece of one kind
#[derive(Debug, PartialEq, Eq)]
pub struct PieceDef {
    pub kind: PieceKind,
    pub rotations: &'static [Shape],
    pub attr: Attr,
}

impl PieceDef {
    /// Number of distinct rotation states (1 or 4)
    pub fn rotation_count(&self) -> usize {
        self.rotations.len()
    }

    /// Shape for a rotation index; the index wraps
    pub fn shape(&self, rotation: usize) -> &'static Shape {
        &self.rotations[rotation % self.rotations.len()]
    }
}

const I_ROTATIONS: [Shape; 4] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(2, 1), (2, 0), (2, -1), (2, -2)],
    [(0, -1), (1, -1), (2, -1), (3, -1)],
    [(1, 1), (1, 0), (1, -1), (1, -2)],
];

const O_ROTATIONS: [Shape; 1] = [[(0, 0), (0, 1), (1, 0), (1, 1)]];

const T_ROTATIONS: [Shape; 4] = [
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 1), (1, 0), (1, -1), (2, 0)],
    [(0, 0), (1, 0), (2, 0), (1, -1)],
    [(0, 0), (1, 1), (1, 0), (1, -1)],
];

const S_ROTATIONS: [Shape; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 1), (1, 0), (2, 0), (2, -1)],
    [(0, -1), (1, -1), (1, 0), (2, 0)],
    [(0, 1), (0, 0), (1, 0), (1, -1)],
];

const Z_ROTATIONS: [Shape; 4] = [
    [(0, 1), (1, 1), (1, 0), (2, 0)],
    [(1, -1), (1, 0), (2, 0), (2, 1)],
    [(0, 0), (1, 0), (1, -1), (2, -1)],
    [(0, -1), (0, 0), (1, 0), (1, 1)],
];

const J_ROTATIONS: [Shape; 4] = [
    [(0, 1), (0, 0), (1, 0), (2, 0)],
    [(1, -1), (1, 0), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (2, 0), (2, -1)],
    [(0, -1), (1, -1), (1, 0), (1, 1)],
];

const L_ROTATIONS: [Shape; 4] = [
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(1, 1), (1, 0), (1, -1), (2, -1)],
    [(0, -1), (0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (1, 0), (1, -1)],
];

/// The catalog, indexed by [`PieceKind::index`]
pub static CATALOG: [PieceDef; 7] = [
    PieceDef {
        kind: PieceKind::I,
        rotations: &I_ROTATIONS,
        attr: Attr::Cyan,
    },
    PieceDef {
        kind: PieceKind::O,
        rotations: &O_ROTATIONS,
        attr: Attr::OrangeBold,
    },
    PieceDef {
        kind: PieceKind::T,
        rotations: &T_ROTATIONS,
        attr: Attr::Magenta,
    },
    PieceDef {
        kind: PieceKind::S,
        rotations: &S_ROTATIONS,
        attr: Attr::Green,
    },
    PieceDef {
        kind: PieceKind::Z,
        rotations: &Z_ROTATIONS,
        attr: Attr::Red,
    },
    PieceDef {
        kind: PieceKind::J,
        rotations: &J_ROTATIONS,
        attr: Attr::Blue,
    },
    PieceDef {
        kind: PieceKind::L,
        rotations: &L_ROTATIONS,
        attr: Attr::Orange,
    },
];

/// Look up the shared definition for a piece kind
pub fn definition(kind: PieceKind) -> &'static PieceDef {
    &CATALOG[kind.index()]
}

/// Shape of a piece kind at a rotation index (wrapping)
pub fn get_shape(kind: PieceKind, rotation: usize) -> &'static Shape {
    definition(kind).shape(rotation)
}
