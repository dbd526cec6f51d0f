use std::fmt::{self, Display, Formatter};
use thiserror::Error;

pub type Digit = u8; // 0 = blank; 1..=9 assigned

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell ({col},{row}) is outside the 9x9 grid")]
    OutOfBounds { col: usize, row: usize },
    #[error("value {0} is not a sudoku cell value (expected 0..=9)")]
    InvalidValue(Digit),
}

/// The 9x9 board. Cells are addressed (col, row), both 0..=8, and stored
/// columns-then-rows. Pure storage with bounds-checked access; all sudoku
/// semantics live in `rules` and `solver`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: [[Digit; 9]; 9], // cells[col][row]
}

impl Grid {
    pub fn empty() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Build from row-major data, the shape a line-by-line loader produces.
    pub fn from_rows(rows: [[Digit; 9]; 9]) -> Result<Self, GridError> {
        let mut g = Grid::empty();
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                g.set(c, r, v)?;
            }
        }
        Ok(g)
    }

    pub fn get(&self, col: usize, row: usize) -> Result<Digit, GridError> {
        check_bounds(col, row)?;
        Ok(self.cells[col][row])
    }

    pub fn set(&mut self, col: usize, row: usize, value: Digit) -> Result<(), GridError> {
        check_bounds(col, row)?;
        if value > 9 {
            return Err(GridError::InvalidValue(value));
        }
        self.cells[col][row] = value;
        Ok(())
    }

    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|col| col.iter().all(|&v| v != 0))
    }

    /// Row-major rows, the order the writer emits them.
    pub fn rows(&self) -> impl Iterator<Item = [Digit; 9]> + '_ {
        (0..9).map(move |r| {
            let mut row = [0; 9];
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.cells[c][r];
            }
            row
        })
    }
}

fn check_bounds(col: usize, row: usize) -> Result<(), GridError> {
    if col > 8 || row > 8 {
        Err(GridError::OutOfBounds { col, row })
    } else {
        Ok(())
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for r in 0..9 {
            if r % 3 == 0 {
                writeln!(f, "+-------+-------+-------+")?;
            }
            for c in 0..9 {
                if c % 3 == 0 {
                    write!(f, "| ")?;
                }
                let d = self.cells[c][r];
                if d == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{d} ")?;
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "+-------+-------+-------+")
    }
}
