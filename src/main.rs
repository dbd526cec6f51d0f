use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use std::process::ExitCode;
use sudoku_csv::io::{load_puzzle, write_solution};
use sudoku_csv::{Outcome, Solver};

#[derive(Parser, Debug)]
#[command(name = "sudoku-csv", version, about = "Backtracking Sudoku solver for comma-separated puzzle files")]
struct Cli {
    /// Puzzle file: 9 lines of 9 comma-separated cells, 0 for blanks
    input: PathBuf,

    /// Skip printing the solved grid to the console
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let mut grid =
        load_puzzle(&cli.input).with_context(|| format!("reading {}", cli.input.display()))?;

    let mut solver = Solver::new();
    match solver.solve(&mut grid) {
        Outcome::Solved => {
            let path = write_solution(&grid, &cli.input).context("writing solution")?;
            if !cli.quiet {
                println!("{grid}");
            }
            println!("{} solution written to {}", "solved:".green().bold(), path.display());
            Ok(ExitCode::SUCCESS)
        }
        Outcome::InvalidPuzzle => {
            eprintln!(
                "{} fixed cells violate sudoku constraints; nothing written",
                "invalid puzzle:".yellow().bold()
            );
            Ok(ExitCode::from(2))
        }
        Outcome::Unsolvable => {
            eprintln!(
                "{} puzzle admits no completion; nothing written",
                "unsolvable:".yellow().bold()
            );
            Ok(ExitCode::from(3))
        }
    }
}
