use std::path::PathBuf;

use clap::Parser;

/// Computes one generation of Conway's Game of Life and prints both boards.
#[derive(Parser, Debug)]
#[command(name = "life")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Initial grid. `.json` files hold an array of 0/1 rows, anything else is
    /// read as whitespace-separated 0/1 cells, one row per line.
    /// Defaults to a 5x5 vertical blinker.
    pub grid_path: Option<PathBuf>,
}
