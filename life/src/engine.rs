//! Generation stepping.

use crate::grid::Grid;

/// How cells on the outermost ring of the grid are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgePolicy {
    /// Boundary cells report zero neighbours and never change state.
    #[default]
    Frozen,
    /// Boundary cells follow the rule too; positions off the grid count as
    /// empty. There is no wrap-around.
    Bounded,
}

/// Computes generation N+1 from generation N.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LifeEngine {
    edges: EdgePolicy,
}

impl LifeEngine {
    pub fn new(edges: EdgePolicy) -> Self {
        LifeEngine { edges }
    }

    pub fn edges(&self) -> EdgePolicy {
        self.edges
    }

    /// Number of populated neighbours of the cell at linear `index`.
    ///
    /// Under [`EdgePolicy::Frozen`] a boundary cell always reports 0.
    pub fn neighbour_count(&self, grid: &Grid, index: usize) -> u8 {
        let Some(cell) = grid.cell(index) else {
            return 0;
        };
        if grid.is_boundary(cell.row, cell.column) {
            return match self.edges {
                EdgePolicy::Frozen => 0,
                EdgePolicy::Bounded => bounded_count(grid, cell.row, cell.column),
            };
        }

        // Interior cells have all eight neighbours on the grid, so plain
        // index offsets never cross a row edge.
        let size = grid.size();
        let cells = grid.cells();
        [
            index - size - 1,
            index - size,
            index - size + 1,
            index - 1,
            index + 1,
            index + size - 1,
            index + size,
            index + size + 1,
        ]
        .into_iter()
        .filter(|&neighbour| cells[neighbour].populated)
        .count() as u8
    }

    /// Advances `grid` by one generation and returns the result.
    ///
    /// Every cell is copied forward with its colour and glow; only
    /// `populated` is recomputed.
    pub fn step(&self, grid: &Grid) -> Grid {
        let mut next = grid.cells().to_vec();

        for (index, cell) in next.iter_mut().enumerate() {
            if self.edges == EdgePolicy::Frozen && grid.is_boundary(cell.row, cell.column) {
                continue;
            }
            let neighbours = self.neighbour_count(grid, index);

            cell.populated = match (cell.populated, neighbours) {
                (true, 2..=3) => true, // Survives
                (false, 3) => true,    // Becomes alive
                _ => false,            // Dies or remains dead
            };
        }

        Grid::from_cells(grid.size(), next)
    }
}

fn bounded_count(grid: &Grid, row: usize, column: usize) -> u8 {
    let mut count = 0;

    for dr in [-1isize, 0, 1] {
        for dc in [-1isize, 0, 1] {
            if dr == 0 && dc == 0 {
                continue;
            }
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), column.checked_add_signed(dc))
            else {
                continue;
            };
            if grid.is_populated(r, c) {
                count += 1;
            }
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Rgb;
    use crate::palette::{FixedAttributes, Swatch};

    fn grid_with(size: usize, live: &[(usize, usize)]) -> Grid {
        let mut attributes =
            FixedAttributes(Swatch::new(Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)));
        let mut grid = Grid::new(size, &mut attributes);
        for &(row, column) in live {
            assert!(grid.toggle(row, column));
        }
        grid
    }

    fn live(grid: &Grid) -> Vec<(usize, usize)> {
        grid.populated().collect()
    }

    #[test]
    fn counts_all_eight_neighbours() {
        let grid = grid_with(
            5,
            &[(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)],
        );
        assert_eq!(LifeEngine::default().neighbour_count(&grid, 12), 8);
        assert_eq!(LifeEngine::default().neighbour_count(&grid, 6), 2);
    }

    #[test]
    fn frozen_boundary_reports_zero() {
        let grid = grid_with(5, &[(0, 0), (0, 2), (1, 1), (1, 2)]);
        let engine = LifeEngine::new(EdgePolicy::Frozen);
        assert_eq!(engine.neighbour_count(&grid, 1), 0);
    }

    #[test]
    fn bounded_boundary_counts_on_grid_neighbours() {
        let grid = grid_with(5, &[(0, 0), (0, 2), (1, 1), (1, 2)]);
        let engine = LifeEngine::new(EdgePolicy::Bounded);
        assert_eq!(engine.neighbour_count(&grid, 1), 4);
        assert_eq!(engine.neighbour_count(&grid, 0), 1);
        assert_eq!(engine.neighbour_count(&grid, 24), 0);
    }

    #[test]
    fn blinker_oscillates() {
        let engine = LifeEngine::default();
        let horizontal = grid_with(5, &[(2, 1), (2, 2), (2, 3)]);
        let vertical = engine.step(&horizontal);
        assert_eq!(live(&vertical), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(engine.step(&vertical), horizontal);
    }

    #[test]
    fn block_is_still() {
        let engine = LifeEngine::default();
        let block = grid_with(6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
        assert_eq!(engine.step(&block), block);
    }

    #[test]
    fn frozen_edges_keep_their_state() {
        let engine = LifeEngine::new(EdgePolicy::Frozen);
        // A lone corner cell and a full edge row that would otherwise change.
        let grid = grid_with(5, &[(0, 0), (4, 1), (4, 2), (4, 3), (3, 2)]);
        let next = engine.step(&grid);
        for row in 0..5 {
            for column in 0..5 {
                if grid.is_boundary(row, column) {
                    assert_eq!(
                        next.is_populated(row, column),
                        grid.is_populated(row, column),
                        "boundary cell ({row}, {column}) changed"
                    );
                }
            }
        }
    }

    #[test]
    fn bounded_edges_follow_the_rule() {
        let engine = LifeEngine::new(EdgePolicy::Bounded);
        let grid = grid_with(5, &[(0, 0), (0, 1), (0, 2)]);
        let next = engine.step(&grid);
        assert_eq!(live(&next), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn colours_are_carried_forward() {
        let engine = LifeEngine::default();
        let grid = grid_with(5, &[(2, 1), (2, 2), (2, 3)]);
        let next = engine.step(&grid);
        for (before, after) in grid.cells().iter().zip(next.cells()) {
            assert_eq!(before.colour, after.colour);
            assert_eq!(before.glow, after.glow);
            assert_eq!((before.row, before.column), (after.row, after.column));
        }
    }

    #[test]
    fn tiny_grids_are_all_boundary() {
        for size in 0..=2 {
            let grid = grid_with(size, &[]);
            let mut seeded = grid.clone();
            if size > 0 {
                seeded.toggle(0, 0);
            }
            assert_eq!(LifeEngine::default().step(&seeded), seeded);
            assert_eq!(LifeEngine::new(EdgePolicy::Bounded).step(&grid), grid);
        }
    }
}
