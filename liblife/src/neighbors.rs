use crate::{grid::Grid, pos::Position};

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// Counts the live cells among the up to eight cells surrounding `pos`.
///
/// The board does not wrap: neighbors that fall outside the grid are skipped,
/// so edge cells have five candidates and corner cells three.
pub fn count<P>(grid: &Grid, pos: P) -> usize
where
    P: Into<Position>,
{
    let pos = pos.into();

    NEIGHBOR_RELATIVE_POSITIONS
        .iter()
        .filter_map(|[d_row, d_col]| grid.cell(pos.offset(*d_row, *d_col)?))
        .filter(|neighbor| neighbor.is_alive())
        .count()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn full(width: usize, height: usize) -> Grid {
        Grid::try_from(vec![vec![1u8; width]; height]).unwrap()
    }

    #[rstest]
    #[case((0, 0), 3)]
    #[case((0, 4), 3)]
    #[case((4, 0), 3)]
    #[case((4, 4), 3)]
    #[case((0, 2), 5)]
    #[case((2, 0), 5)]
    #[case((4, 2), 5)]
    #[case((2, 4), 5)]
    #[case((2, 2), 8)]
    #[case((1, 3), 8)]
    fn full_grid_counts_only_in_bounds(#[case] pos: (usize, usize), #[case] expected: usize) {
        assert_eq!(count(&full(5, 5), pos), expected);
    }

    #[test]
    fn center_cell_is_not_its_own_neighbor() {
        let grid: Grid = "0 0 0\n0 1 0\n0 0 0\n".parse().unwrap();

        assert_eq!(count(&grid, (1, 1)), 0);
        assert_eq!(count(&grid, (0, 0)), 1);
    }

    #[test]
    fn interior_count_matches_sum_of_surrounding_cells() {
        let grid: Grid = "\
1 0 1 1
0 1 1 0
1 1 0 0
0 0 1 1
"
        .parse()
        .unwrap();

        for (pos, _) in grid.cells() {
            let expected: usize = (pos.row.saturating_sub(1)..=pos.row + 1)
                .flat_map(|row| {
                    (pos.col.saturating_sub(1)..=pos.col + 1).map(move |col| (row, col))
                })
                .filter(|&(row, col)| (row, col) != (pos.row, pos.col))
                .filter_map(|p| grid.cell(p))
                .map(|cell| usize::from(u8::from(cell)))
                .sum();

            assert_eq!(count(&grid, pos), expected, "at {pos:?}");
        }
    }

    #[test]
    fn single_row_grid() {
        let grid: Grid = "1 1 1".parse().unwrap();

        assert_eq!(count(&grid, (0, 0)), 1);
        assert_eq!(count(&grid, (0, 1)), 2);
    }
}
