//! The state a driver owns: the current grid plus the stepping lifecycle.

use crate::cell::Cell;
use crate::config::Config;
use crate::engine::LifeEngine;
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::lifeform::{Lifeform, CATALOG};
use crate::palette::{AttributeSource, RandomAttributes};
use log::{debug, info};
use rand::Rng;
use std::time::{Duration, Instant};

/// Where the simulation is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Freshly created or reset grid, no generation has been scheduled yet.
    Ready,
    /// Generations advance on every elapsed interval.
    Running,
    /// Stepping halted; the grid is kept as it was.
    Stopped,
}

/// A Game of Life session.
///
/// Not meant to be shared between threads: the driver owns it and calls
/// [`update`](Simulation::update) from a single loop, so steps never overlap.
pub struct Simulation<A = RandomAttributes> {
    config: Config,
    engine: LifeEngine,
    attributes: A,
    grid: Grid,
    phase: Phase,
    generation: u64,
    last_step: Option<Instant>,
}

impl Simulation<RandomAttributes> {
    /// Creates a session whose cells get random swatches from the
    /// configured palette.
    pub fn new(config: Config) -> Result<Self> {
        let attributes = RandomAttributes::new(config.palette.clone());
        Simulation::with_attributes(config, attributes)
    }
}

impl<A: AttributeSource> Simulation<A> {
    pub fn with_attributes(config: Config, mut attributes: A) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.grid_size, &mut attributes);
        Ok(Simulation {
            engine: LifeEngine::new(config.edge_policy),
            config,
            attributes,
            grid,
            phase: Phase::Ready,
            generation: 0,
            last_step: None,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Snapshot of every cell in row-major order.
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Generations computed since the grid was last created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces the grid with a fresh, empty one without touching the phase.
    pub fn create_grid(&mut self) {
        self.grid.reset(self.config.grid_size, &mut self.attributes);
        self.generation = 0;
    }

    /// Stops stepping and starts over with an empty grid.
    pub fn reset(&mut self) {
        self.create_grid();
        self.phase = Phase::Ready;
        self.last_step = None;
        info!("reset to an empty {0}x{0} grid", self.config.grid_size);
    }

    /// Begins advancing one generation per interval. Calling it while
    /// already running changes nothing.
    pub fn start(&mut self) {
        if self.phase == Phase::Running {
            return;
        }
        self.phase = Phase::Running;
        self.last_step = Some(Instant::now());
        info!(
            "started at generation {}, stepping every {:?}",
            self.generation, self.config.interval
        );
    }

    pub fn stop(&mut self) {
        if self.phase != Phase::Running {
            return;
        }
        self.phase = Phase::Stopped;
        self.last_step = None;
        info!("stopped at generation {}", self.generation);
    }

    /// Steps once if running and a full interval has passed since the last
    /// step. Returns whether a generation was computed.
    pub fn update(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        if let Some(last) = self.last_step {
            if now.saturating_duration_since(last) < self.config.interval {
                return false;
            }
        }
        self.step_generation();
        self.last_step = Some(now);
        true
    }

    /// How long the driver may wait before the next [`update`](Self::update)
    /// has work to do. `None` when not running.
    pub fn time_until_next_step(&self, now: Instant) -> Option<Duration> {
        if self.phase != Phase::Running {
            return None;
        }
        let elapsed = self
            .last_step
            .map_or(self.config.interval, |last| now.saturating_duration_since(last));
        Some(self.config.interval.saturating_sub(elapsed))
    }

    /// Computes the next generation and makes it current. Returns whether
    /// any cell changed.
    pub fn step_generation(&mut self) -> bool {
        let next = self.engine.step(&self.grid);
        let changed = next != self.grid;
        self.grid = next;
        self.generation += 1;
        debug!(
            "generation {}: {} populated{}",
            self.generation,
            self.grid.population(),
            if changed { "" } else { ", unchanged" }
        );
        changed
    }

    /// Flips the cell at `(row, column)`. Off-grid coordinates are ignored.
    pub fn toggle_cell(&mut self, row: usize, column: usize) -> bool {
        let toggled = self.grid.toggle(row, column);
        if !toggled {
            debug!("ignored toggle at ({row}, {column}), outside the grid");
        }
        toggled
    }

    /// Maps a pointer position, relative to the grid's top-left corner, to a
    /// `(row, column)` on the grid.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        let side = self.config.cell_pixel_size as f32;
        let row = (y / side).floor() as usize;
        let column = (x / side).floor() as usize;
        self.grid.index_of(row, column).map(|_| (row, column))
    }

    /// Toggles whichever cell lies under the pointer position.
    pub fn toggle_at(&mut self, x: f32, y: f32) -> bool {
        match self.cell_at(x, y) {
            Some((row, column)) => self.toggle_cell(row, column),
            None => false,
        }
    }

    /// Seeds catalog entry `id` at its home position, scaled to this grid.
    pub fn seed_lifeform(&mut self, id: usize) -> Result<&'static Lifeform> {
        let lifeform = CATALOG.get(id).ok_or(Error::UnknownLifeform(id))?;
        self.seed_pattern(lifeform)?;
        Ok(lifeform)
    }

    pub fn seed_pattern(&mut self, lifeform: &Lifeform) -> Result<()> {
        let anchor = lifeform.anchor_for(self.grid.size());
        self.grid.seed(lifeform, anchor)?;
        info!("seeded {} at {:?}", lifeform.name, anchor);
        Ok(())
    }

    /// Clears the grid and seeds a catalog entry picked at random.
    pub fn seed_random_lifeform(&mut self) -> Result<&'static Lifeform> {
        self.seed_random_lifeform_with(&mut rand::rng())
    }

    pub fn seed_random_lifeform_with<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<&'static Lifeform> {
        self.create_grid();
        self.seed_lifeform(rng.random_range(0..CATALOG.len()))
    }
}
