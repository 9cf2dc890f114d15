use std::{fs, path::Path};

use anyhow::Context;
use liblife::Grid;

/// Vertical blinker in column 1, used when no grid file is given.
pub const DEFAULT_GRID: &str = "\
0 1 0 0 0
0 1 0 0 0
0 1 0 0 0
0 0 0 0 0
0 0 0 0 0
";

pub fn default_grid() -> anyhow::Result<Grid> {
    DEFAULT_GRID
        .parse()
        .context("Couldn't parse built-in grid")
}

pub fn load_grid<P>(path: P) -> anyhow::Result<Grid>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let grid_serialized = fs::read_to_string(path)
        .with_context(|| format!("Couldn't read grid file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let grid: Grid = if is_json {
        serde_json::from_str(&grid_serialized).context("Couldn't deserialize grid")?
    } else {
        grid_serialized.parse().context("Couldn't parse grid")?
    };

    Ok(grid)
}
