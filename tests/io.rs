use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use sudoku_csv::io::{load_puzzle, write_solution, LoadError, SOLVED_FILE_NAME};
use sudoku_csv::{Outcome, Solver};

const CLASSIC_CSV: &str = "\
5,3,0,0,7,0,0,0,0
6,0,0,1,9,5,0,0,0
0,9,8,0,0,0,0,6,0
8,0,0,0,6,0,0,0,3
4,0,0,8,0,3,0,0,1
7,0,0,0,2,0,0,0,6
0,6,0,0,0,0,2,8,0
0,0,0,4,1,9,0,0,5
0,0,0,0,8,0,0,7,9
";

const CLASSIC_SOLVED_CSV: &str = "\
5,3,4,6,7,8,9,1,2
6,7,2,1,9,5,3,4,8
1,9,8,3,4,2,5,6,7
8,5,9,7,6,1,4,2,3
4,2,6,8,5,3,7,9,1
7,1,3,9,2,4,8,5,6
9,6,1,5,3,7,2,8,4
2,8,7,4,1,9,6,3,5
3,4,5,2,8,6,1,7,9
";

/// Fresh file in a per-process temp dir; distinct names keep tests isolated.
fn temp_puzzle(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sudoku-csv-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_a_well_formed_puzzle() {
    let path = temp_puzzle("classic.csv", CLASSIC_CSV);
    let grid = load_puzzle(&path).unwrap();
    assert_eq!(grid.get(0, 0), Ok(5));
    assert_eq!(grid.get(4, 0), Ok(7));
    assert_eq!(grid.get(8, 8), Ok(9));
    assert_eq!(grid.get(2, 0), Ok(0));
}

#[test]
fn rejects_short_row_with_line_number() {
    let input = "0,0,0,0,0,0,0,0,0\n0,0,0,0,0,0,0,0,0\n1,2,3\n";
    let path = temp_puzzle("short_row.csv", input);
    match load_puzzle(&path) {
        Err(LoadError::WrongCellCount { line, found }) => {
            assert_eq!(line, 3);
            assert_eq!(found, 3);
        }
        other => panic!("expected WrongCellCount, got {other:?}"),
    }
}

#[test]
fn rejects_non_digit_token_with_line_and_content() {
    let input = "0,0,0,0,0,0,0,0,0\n0,x,0,0,0,0,0,0,0\n";
    let path = temp_puzzle("bad_token.csv", input);
    match load_puzzle(&path) {
        Err(LoadError::BadToken { line, token }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "x");
        }
        other => panic!("expected BadToken, got {other:?}"),
    }
}

#[test]
fn rejects_cell_value_above_nine() {
    let input = "0,0,0,0,12,0,0,0,0\n";
    let path = temp_puzzle("big_value.csv", input);
    match load_puzzle(&path) {
        Err(LoadError::BadToken { line, token }) => {
            assert_eq!(line, 1);
            assert_eq!(token, "12");
        }
        other => panic!("expected BadToken, got {other:?}"),
    }
}

#[test]
fn rejects_tenth_row() {
    let mut input = String::from(CLASSIC_CSV);
    input.push_str("0,0,0,0,0,0,0,0,0\n");
    let path = temp_puzzle("ten_rows.csv", &input);
    match load_puzzle(&path) {
        Err(LoadError::TooManyRows { line }) => assert_eq!(line, 10),
        other => panic!("expected TooManyRows, got {other:?}"),
    }
}

#[test]
fn rejects_truncated_puzzle() {
    let input = "0,0,0,0,0,0,0,0,0\n0,0,0,0,0,0,0,0,0\n";
    let path = temp_puzzle("two_rows.csv", input);
    match load_puzzle(&path) {
        Err(LoadError::TooFewRows { found }) => assert_eq!(found, 2),
        other => panic!("expected TooFewRows, got {other:?}"),
    }
}

#[test]
fn missing_file_surfaces_as_io_error() {
    let path = std::env::temp_dir().join("sudoku-csv-no-such-file.csv");
    assert!(matches!(load_puzzle(&path), Err(LoadError::Io(_))));
}

#[test]
fn solution_lands_beside_the_input_file() {
    let path = temp_puzzle("to_solve.csv", CLASSIC_CSV);
    let mut grid = load_puzzle(&path).unwrap();
    assert_eq!(Solver::new().solve(&mut grid), Outcome::Solved);

    let written = write_solution(&grid, &path).unwrap();
    assert_eq!(written.file_name().unwrap(), SOLVED_FILE_NAME);
    assert_eq!(written.parent(), path.parent());
    assert_eq!(fs::read_to_string(&written).unwrap(), CLASSIC_SOLVED_CSV);
}

#[test]
fn whitespace_around_cells_is_tolerated() {
    let input = CLASSIC_CSV.replace(",", ", ");
    let path = temp_puzzle("spaced.csv", &input);
    let grid = load_puzzle(&path).unwrap();
    assert_eq!(grid.get(1, 0), Ok(3));
}
