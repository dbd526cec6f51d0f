use crate::grid::{Grid, GridError};
use itertools::Itertools;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the output file, created in the same directory as the input.
pub const SOLVED_FILE_NAME: &str = "solved_sudoku.csv";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: expected 9 comma-separated cells, found {found}")]
    WrongCellCount { line: usize, found: usize },
    #[error("line {line}: `{token}` is not a sudoku cell value (expected 0..=9)")]
    BadToken { line: usize, token: String },
    #[error("line {line}: puzzle has more than 9 rows")]
    TooManyRows { line: usize },
    #[error("puzzle has {found} rows, expected 9")]
    TooFewRows { found: usize },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Parse a puzzle from a comma-separated file: 9 lines of 9 cells, `0` for
/// blanks. Rejects on the first malformed row or token encountered,
/// reporting the 1-indexed line number and the offending content.
pub fn load_puzzle(path: &Path) -> Result<Grid, LoadError> {
    let text = fs::read_to_string(path)?;
    let mut grid = Grid::empty();
    let mut row = 0usize;
    for (idx, line) in text.lines().enumerate() {
        let lineno = idx + 1;
        if row == 9 {
            return Err(LoadError::TooManyRows { line: lineno });
        }
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != 9 {
            return Err(LoadError::WrongCellCount {
                line: lineno,
                found: cells.len(),
            });
        }
        for (col, token) in cells.iter().enumerate() {
            match token.trim().parse::<u8>() {
                Ok(v) if v <= 9 => grid.set(col, row, v)?,
                _ => {
                    return Err(LoadError::BadToken {
                        line: lineno,
                        token: token.trim().to_string(),
                    })
                }
            }
        }
        row += 1;
    }
    if row != 9 {
        return Err(LoadError::TooFewRows { found: row });
    }
    Ok(grid)
}

/// Write a solved grid as comma-separated rows beside the input file.
/// Returns the path written. Write failures propagate; a computed solution
/// that could not be persisted is an observable error, not a silent one.
pub fn write_solution(grid: &Grid, input: &Path) -> io::Result<PathBuf> {
    let dir = match input.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let path = dir.join(SOLVED_FILE_NAME);
    let mut out = String::new();
    for row in grid.rows() {
        out.push_str(&row.iter().join(","));
        out.push('\n');
    }
    fs::write(&path, out)?;
    Ok(path)
}
