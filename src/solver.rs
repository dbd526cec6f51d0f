use crate::grid::Grid;
use crate::rules::placement_fits;

/// Result of a solve attempt. All three are reported outcomes, never panics;
/// the caller decides messaging and exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Grid is fully assigned and satisfies all constraints.
    Solved,
    /// The fixed cells already contradict each other; search never ran.
    InvalidPuzzle,
    /// Fixed cells are individually consistent but admit no completion.
    Unsolvable,
}

#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    pub fn new() -> Self {
        Self
    }

    /// Validity pass, then search. The grid is left solved on `Solved` and
    /// restored to its input state otherwise.
    pub fn solve(&mut self, grid: &mut Grid) -> Outcome {
        if !self.validate_fixed_cells(grid) {
            return Outcome::InvalidPuzzle;
        }
        if self.search(grid) {
            Outcome::Solved
        } else {
            Outcome::Unsolvable
        }
    }

    /// Single linear pass over every cell in row-major order: each non-zero
    /// cell must fit as a placement given the other fixed cells. No
    /// backtracking; a false result means the puzzle is self-contradictory
    /// and must not be searched.
    pub fn validate_fixed_cells(&self, grid: &Grid) -> bool {
        for row in 0..9 {
            for col in 0..9 {
                let v = grid.cells[col][row];
                if v != 0 && !placement_fits(grid, col, row, v) {
                    return false;
                }
            }
        }
        true
    }

    /// Depth-first backtracking over empty cells in row-major order, trying
    /// candidates 1..=9 ascending. First solution wins; together with the
    /// fixed traversal order that makes the result deterministic. Depth is
    /// bounded by the 81 cells.
    pub fn search(&mut self, grid: &mut Grid) -> bool {
        search_from(grid, 0, 0)
    }
}

fn search_from(grid: &mut Grid, col: usize, row: usize) -> bool {
    let (col, row) = if col == 9 { (0, row + 1) } else { (col, row) };
    if row == 9 {
        return true;
    }
    if grid.cells[col][row] != 0 {
        // fixed cell, already vetted by the validity pass
        return search_from(grid, col + 1, row);
    }
    for value in 1..=9 {
        if placement_fits(grid, col, row, value) {
            grid.cells[col][row] = value;
            if search_from(grid, col + 1, row) {
                return true;
            }
            // undo before the next candidate so every enclosing frame sees
            // the pre-branch state
            grid.cells[col][row] = 0;
        }
    }
    false
}
