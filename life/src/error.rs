use thiserror::Error;

/// Errors reported by the simulation core.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("grid size must be positive")]
    ZeroGridSize,
    #[error("cell pixel size must be positive")]
    ZeroCellPixelSize,
    #[error("generation interval must be positive")]
    ZeroInterval,
    #[error("palette needs at least one colour")]
    EmptyPalette,
    #[error("no lifeform with id {0}")]
    UnknownLifeform(usize),
    #[error("{name} does not fit: cell ({row}, {column}) is outside a {size}x{size} grid")]
    LifeformOutOfRange {
        name: &'static str,
        row: usize,
        column: usize,
        size: usize,
    },
    #[error("cell index {index} is outside a grid of {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
