//! Simulation settings.

use crate::engine::EdgePolicy;
use crate::error::{Error, Result};
use crate::lifeform::REFERENCE_GRID_SIZE;
use crate::palette::Palette;
use std::time::Duration;

pub const DEFAULT_CELL_PIXEL_SIZE: u32 = 25;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

/// Everything a [`Simulation`](crate::Simulation) needs to know up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Cells per side.
    pub grid_size: usize,
    /// Side length of one cell on screen. Only used to map pointer positions.
    pub cell_pixel_size: u32,
    /// Colour/glow pairs handed out at random to new cells.
    pub palette: Palette,
    /// Time between two generations while running.
    pub interval: Duration,
    pub edge_policy: EdgePolicy,
}

impl Config {
    pub fn new(grid_size: usize) -> Self {
        Config {
            grid_size,
            ..Config::default()
        }
    }

    pub fn set_cell_pixel_size(mut self, cell_pixel_size: u32) -> Self {
        self.cell_pixel_size = cell_pixel_size;
        self
    }

    pub fn set_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn set_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn set_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(Error::ZeroGridSize);
        }
        if self.cell_pixel_size == 0 {
            return Err(Error::ZeroCellPixelSize);
        }
        if self.interval.is_zero() {
            return Err(Error::ZeroInterval);
        }
        if self.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid_size: REFERENCE_GRID_SIZE,
            cell_pixel_size: DEFAULT_CELL_PIXEL_SIZE,
            palette: Palette::default(),
            interval: DEFAULT_INTERVAL,
            edge_policy: EdgePolicy::default(),
        }
    }
}
