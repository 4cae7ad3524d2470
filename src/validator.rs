use crate::board::Board;
use crate::common::MoveCheck;

/// Classify a proposed move without touching the board.
///
/// Bounds are checked before occupancy, so an off-board coordinate is always
/// reported as [`MoveCheck::OutOfBounds`] whatever the board holds.
pub fn validate_move(row: isize, col: isize, board: &Board) -> MoveCheck {
    if !board.is_in_bounds(row, col) {
        return MoveCheck::OutOfBounds;
    }
    // in bounds, so both are non-negative
    if board.is_empty(row as usize, col as usize) {
        MoveCheck::Valid
    } else {
        MoveCheck::AlreadyOccupied
    }
}
