//! Breadth-first flood fill. Slower than the union-find sizer but shares no
//! code path with it, which makes it a useful cross-check.

use pathfinding::prelude::bfs_reach;

use data::{Cell, Direction};
use grid::{GMap, Grid};
use sizer::ComponentSizer;

pub fn flood_areas(grid: &Grid) -> GMap<usize> {
    let dim = grid.dim();
    let dirs = Direction::adjacent_directions();
    let mut areas = GMap::filled(dim, 0);
    let mut seen = GMap::filled(dim, false);
    for cell in grid.cells() {
        if *seen.get(cell) || !grid.is_valid_unchecked(cell) {
            continue;
        }
        let island: Vec<Cell> = bfs_reach(cell, |c: &Cell| grid.valid_neighbors(*c, &dirs)).collect();
        for &c in &island {
            *seen.get_mut(c) = true;
            *areas.get_mut(c) = island.len();
        }
    }
    areas
}

/// Cells where the sizer disagrees with the flood fill, as
/// (cell, sizer area, flood area).
pub fn mismatches(sizer: &ComponentSizer) -> Vec<(Cell, usize, usize)> {
    let expected = flood_areas(sizer.grid());
    let got = sizer.areas();
    sizer.grid().cells().into_iter()
        .filter(|&c| got.get(c) != expected.get(c))
        .map(|c| (c, *got.get(c), *expected.get(c)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flood_counts_ring() {
        let grid = Grid::new(vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]], 1).unwrap();
        let areas = flood_areas(&grid);
        assert_eq!(areas.gmap[0][0], 8);
        assert_eq!(areas.gmap[1][1], 0);
        assert_eq!(areas.gmap[2][1], 8);
    }

    #[test]
    fn flood_ignores_diagonals() {
        let grid = Grid::new(vec![vec![1, 0], vec![0, 1]], 1).unwrap();
        let areas = flood_areas(&grid);
        assert_eq!(areas.gmap, vec![vec![1, 0], vec![0, 1]]);
    }

    #[test]
    fn built_sizer_has_no_mismatches() {
        let mut sizer = ComponentSizer::new(vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]).unwrap();
        sizer.build();
        assert!(mismatches(&sizer).is_empty());
    }

    #[test]
    fn unbuilt_sizer_disagrees() {
        let sizer = ComponentSizer::new(vec![vec![1, 1], vec![0, 0]]).unwrap();
        let diff = mismatches(&sizer);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0], (Cell::new(0, 0), 1, 2));
    }
}
