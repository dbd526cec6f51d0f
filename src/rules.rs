use crate::grid::{Digit, Grid};

/// True iff no cell *other than* (col, row) in the same row, same column, or
/// same 3x3 box currently holds `value`. Pure predicate; the sole constraint
/// authority for both the pre-search validity pass and search pruning.
///
/// All three scans run exhaustively over their full 9 cells. The box scan in
/// particular covers all three of its rows; shortcuts here break the
/// box-uniqueness invariant.
pub fn placement_fits(grid: &Grid, col: usize, row: usize, value: Digit) -> bool {
    for c in 0..9 {
        if c != col && grid.cells[c][row] == value {
            return false;
        }
    }
    for r in 0..9 {
        if r != row && grid.cells[col][r] == value {
            return false;
        }
    }
    let box_col = (col / 3) * 3;
    let box_row = (row / 3) * 3;
    for c in box_col..box_col + 3 {
        for r in box_row..box_row + 3 {
            if (c != col || r != row) && grid.cells[c][r] == value {
                return false;
            }
        }
    }
    true
}
