//! Ghost projection - lowest legal resting row for a piece in a column.

use crate::board::Board;
use crate::pieces::Shape;
use crate::types::SPAWN_Y;

/// Lowest non-colliding anchor row for `shape` at column `x`, scanning down from
/// the spawn row.
///
/// Returns `None` when the spawn row itself collides.
pub fn project(board: &Board, shape: &Shape, x: i8) -> Option<i8> {
    project_from(board, shape, x, SPAWN_Y)
}

/// Same as [`project`] but starting the scan at `start_y`.
///
/// The session starts from the active piece's own row so the projection never
/// lands above an overhang the piece has already passed.
pub fn project_from(board: &Board, shape: &Shape, x: i8, start_y: i8) -> Option<i8> {
    if board.collides(shape, x, start_y) {
        return None;
    }

    let mut y = start_y;
    while !board.collides(shape, x, y + 1) {
        y += 1;
    }
    Some(y)
}
