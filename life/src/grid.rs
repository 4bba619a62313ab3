use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::lifeform::Lifeform;
use crate::palette::AttributeSource;

/// A square grid of cells stored row by row.
///
/// The cell at `(row, column)` always lives at index `row * size + column`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a `size` x `size` grid of empty cells, asking `attributes`
    /// for the look of each one.
    pub fn new<A: AttributeSource + ?Sized>(size: usize, attributes: &mut A) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for row in 0..size {
            for column in 0..size {
                let swatch = attributes.next_swatch();
                cells.push(Cell::new(row, column, swatch.colour, swatch.glow));
            }
        }
        Grid { size, cells }
    }

    /// Wraps cells that are already laid out row by row.
    pub(crate) fn from_cells(size: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Grid { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The ordered snapshot a renderer draws from.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        if row < self.size && column < self.size {
            Some(row * self.size + column)
        } else {
            None
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.index_of(row, column).map(|index| &self.cells[index])
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub fn is_populated(&self, row: usize, column: usize) -> bool {
        self.get(row, column).is_some_and(|cell| cell.populated)
    }

    /// Whether `(row, column)` is on the outermost ring of the grid.
    pub fn is_boundary(&self, row: usize, column: usize) -> bool {
        row == 0 || column == 0 || row + 1 == self.size || column + 1 == self.size
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.populated).count()
    }

    /// Coordinates of every populated cell, in row-major order.
    pub fn populated(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|cell| cell.populated)
            .map(|cell| (cell.row, cell.column))
    }

    /// Flips the cell at `(row, column)`.
    ///
    /// Returns `false` and leaves the grid alone when the coordinate is off
    /// the grid.
    pub fn toggle(&mut self, row: usize, column: usize) -> bool {
        match self.index_of(row, column) {
            Some(index) => {
                let cell = &mut self.cells[index];
                cell.populated = !cell.populated;
                true
            }
            None => false,
        }
    }

    /// Marks every cell of `lifeform` populated, with its top-left corner at
    /// `anchor`. Nothing is written unless the whole pattern fits.
    pub fn seed(&mut self, lifeform: &Lifeform, anchor: (usize, usize)) -> Result<()> {
        let mut targets = Vec::with_capacity(lifeform.cells.len());
        for (row, column) in lifeform.placed_at(anchor) {
            let index = self.index_of(row, column).ok_or(Error::LifeformOutOfRange {
                name: lifeform.name,
                row,
                column,
                size: self.size,
            })?;
            targets.push(index);
        }
        for index in targets {
            self.cells[index].populated = true;
        }
        Ok(())
    }

    /// Marks the cells at the given linear indices populated.
    ///
    /// Indices are checked against this grid before anything is written.
    pub fn seed_indices(&mut self, indices: &[usize]) -> Result<()> {
        let len = self.cells.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(Error::IndexOutOfRange { index, len });
        }
        for &index in indices {
            self.cells[index].populated = true;
        }
        Ok(())
    }

    /// Swaps in a brand new empty grid of `size`.
    pub fn reset<A: AttributeSource + ?Sized>(&mut self, size: usize, attributes: &mut A) {
        *self = Grid::new(size, attributes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Rgb;
    use crate::lifeform::{DIEHARD, GLIDER};
    use crate::palette::{FixedAttributes, Swatch};

    fn plain() -> FixedAttributes {
        FixedAttributes(Swatch::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)))
    }

    #[test]
    fn new_grid_is_row_major_and_empty() {
        let grid = Grid::new(7, &mut plain());
        assert_eq!(grid.len(), 49);
        for (index, cell) in grid.cells().iter().enumerate() {
            assert_eq!(cell.row * 7 + cell.column, index);
            assert!(!cell.populated);
        }
    }

    #[test]
    fn zero_sized_grid_has_no_cells() {
        let grid = Grid::new(0, &mut plain());
        assert!(grid.is_empty());
        assert_eq!(grid.get(0, 0), None);
    }

    #[test]
    fn toggle_flips_exactly_one_cell() {
        let mut grid = Grid::new(5, &mut plain());
        assert!(grid.toggle(2, 3));
        assert_eq!(grid.populated().collect::<Vec<_>>(), vec![(2, 3)]);
        assert!(grid.toggle(2, 3));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn toggle_off_grid_is_ignored() {
        let mut grid = Grid::new(5, &mut plain());
        let before = grid.clone();
        assert!(!grid.toggle(5, 0));
        assert!(!grid.toggle(0, 5));
        assert!(!grid.toggle(usize::MAX, usize::MAX));
        assert_eq!(grid, before);
    }

    #[test]
    fn boundary_ring() {
        let grid = Grid::new(4, &mut plain());
        assert!(grid.is_boundary(0, 2));
        assert!(grid.is_boundary(3, 1));
        assert!(grid.is_boundary(2, 0));
        assert!(grid.is_boundary(1, 3));
        assert!(!grid.is_boundary(1, 1));
        assert!(!grid.is_boundary(2, 2));
    }

    #[test]
    fn seed_places_the_pattern() {
        let mut grid = Grid::new(10, &mut plain());
        grid.seed(&GLIDER, (2, 3)).unwrap();
        assert_eq!(
            grid.populated().collect::<Vec<_>>(),
            vec![(2, 4), (3, 5), (4, 3), (4, 4), (4, 5)]
        );
    }

    #[test]
    fn seed_that_does_not_fit_leaves_the_grid_alone() {
        let mut grid = Grid::new(10, &mut plain());
        let before = grid.clone();
        let err = grid.seed(&DIEHARD, (5, 5)).unwrap_err();
        assert_eq!(
            err,
            Error::LifeformOutOfRange {
                name: "Diehard",
                row: 7,
                column: 10,
                size: 10,
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn seed_indices_are_bounds_checked() {
        let mut grid = Grid::new(10, &mut plain());
        assert_eq!(
            grid.seed_indices(&[3, 1741]),
            Err(Error::IndexOutOfRange { index: 1741, len: 100 })
        );
        assert_eq!(grid.population(), 0);

        grid.seed_indices(&[3, 99, 3]).unwrap();
        assert_eq!(grid.populated().collect::<Vec<_>>(), vec![(0, 3), (9, 9)]);
    }

    #[test]
    fn reset_replaces_everything() {
        let mut grid = Grid::new(4, &mut plain());
        grid.toggle(1, 1);
        grid.reset(6, &mut plain());
        assert_eq!(grid.size(), 6);
        assert_eq!(grid.len(), 36);
        assert_eq!(grid.population(), 0);
    }
}
