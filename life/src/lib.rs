/*!
* Conway's Game of Life on a square, non-wrapping grid.
*
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* Cells on the outer ring are frozen by default, see [`EdgePolicy`].
*/
mod cell;
mod config;
mod engine;
mod error;
mod grid;
pub mod lifeform;
mod palette;
mod simulation;

pub use cell::{Cell, Rgb};
pub use config::{Config, DEFAULT_CELL_PIXEL_SIZE, DEFAULT_INTERVAL};
pub use engine::{EdgePolicy, LifeEngine};
pub use error::{Error, Result};
pub use grid::Grid;
pub use lifeform::{Lifeform, CATALOG};
pub use palette::{AttributeSource, FixedAttributes, Palette, RandomAttributes, Swatch};
pub use simulation::{Phase, Simulation};
