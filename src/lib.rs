pub mod grid;
pub mod io;
pub mod rules;
pub mod solver;

pub use grid::{Digit, Grid, GridError};
pub use solver::{Outcome, Solver};
