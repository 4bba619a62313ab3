//! Visual attributes handed to cells when a grid is created.

use crate::cell::Rgb;
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A fill colour together with the glow drawn around it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub colour: Rgb,
    pub glow: Rgb,
}

impl Swatch {
    pub const fn new(colour: Rgb, glow: Rgb) -> Self {
        Swatch { colour, glow }
    }
}

/// Non-empty list of swatches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    swatches: Vec<Swatch>,
}

impl Palette {
    pub fn new(swatches: Vec<Swatch>) -> Result<Self> {
        if swatches.is_empty() {
            return Err(Error::EmptyPalette);
        }
        Ok(Palette { swatches })
    }

    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    pub fn len(&self) -> usize {
        self.swatches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }
}

impl Default for Palette {
    /// Blue, green, orange, red and magenta, each with a brighter glow.
    fn default() -> Self {
        Palette {
            swatches: vec![
                Swatch::new(Rgb::new(43, 101, 236), Rgb::new(0, 255, 255)),
                Swatch::new(Rgb::new(76, 196, 23), Rgb::new(0, 255, 0)),
                Swatch::new(Rgb::new(255, 165, 0), Rgb::new(255, 235, 70)),
                Swatch::new(Rgb::new(205, 0, 0), Rgb::new(255, 0, 0)),
                Swatch::new(Rgb::new(205, 0, 205), Rgb::new(255, 0, 255)),
            ],
        }
    }
}

/// Supplies the colour and glow of every freshly created cell.
pub trait AttributeSource {
    fn next_swatch(&mut self) -> Swatch;
}

/// Picks swatches uniformly at random from a palette.
#[derive(Clone, Debug)]
pub struct RandomAttributes {
    palette: Palette,
    rng: StdRng,
}

impl RandomAttributes {
    pub fn new(palette: Palette) -> Self {
        RandomAttributes {
            palette,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible variant, mostly useful in tests.
    pub fn with_seed(palette: Palette, seed: u64) -> Self {
        RandomAttributes {
            palette,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl AttributeSource for RandomAttributes {
    fn next_swatch(&mut self) -> Swatch {
        let swatches = self.palette.swatches();
        swatches[self.rng.random_range(0..swatches.len())]
    }
}

/// Hands out the same swatch every time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedAttributes(pub Swatch);

impl AttributeSource for FixedAttributes {
    fn next_swatch(&mut self) -> Swatch {
        self.0
    }
}
