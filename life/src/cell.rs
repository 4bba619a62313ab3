/// An RGB triple carried on each cell for the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// One position of the grid.
///
/// Only `populated` changes from one generation to the next. `colour` and
/// `glow` are picked when the cell is created and copied forward untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub populated: bool,
    pub colour: Rgb,
    pub glow: Rgb,
}

impl Cell {
    pub fn new(row: usize, column: usize, colour: Rgb, glow: Rgb) -> Self {
        Cell {
            row,
            column,
            populated: false,
            colour,
            glow,
        }
    }
}
