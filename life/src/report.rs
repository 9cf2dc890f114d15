use std::io::{self, Write};

use liblife::Grid;

/// Writes the before/after boards, separated by a blank line.
pub fn write_transition<W>(out: &mut W, initial: &Grid, next: &Grid) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Initial:")?;
    write!(out, "{initial}")?;
    writeln!(out)?;
    writeln!(out, "Next Gen:")?;
    write!(out, "{next}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blinker_report_layout() {
        let initial: Grid = crate::input::DEFAULT_GRID.parse().unwrap();
        let next = liblife::step(&initial);

        let mut out = Vec::new();
        write_transition(&mut out, &initial, &next).unwrap();

        let expected = "\
Initial:
0 1 0 0 0
0 1 0 0 0
0 1 0 0 0
0 0 0 0 0
0 0 0 0 0

Next Gen:
0 0 0 0 0
1 1 1 0 0
0 0 0 0 0
0 0 0 0 0
0 0 0 0 0
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
