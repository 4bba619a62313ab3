//! The catalog of patterns the grid can be seeded with.

/// Width of the grid the catalog's home positions were laid out on.
pub const REFERENCE_GRID_SIZE: usize = 100;

/// A named arrangement of populated cells.
///
/// `cells` are `(row, column)` offsets from the pattern's top-left anchor,
/// `home` is where that anchor sits on a [`REFERENCE_GRID_SIZE`] grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lifeform {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
    pub home: (usize, usize),
}

impl Lifeform {
    /// Anchor for a grid of `grid_size`, scaling `home` proportionally.
    pub fn anchor_for(&self, grid_size: usize) -> (usize, usize) {
        let (row, column) = self.home;
        (
            row * grid_size / REFERENCE_GRID_SIZE,
            column * grid_size / REFERENCE_GRID_SIZE,
        )
    }

    /// Absolute coordinates of the pattern when anchored at `anchor`.
    pub fn placed_at(&self, anchor: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .map(move |&(row, column)| (anchor.0 + row, anchor.1 + column))
    }

    /// Height and width of the bounding box.
    pub fn extent(&self) -> (usize, usize) {
        self.cells.iter().fold((0, 0), |(height, width), &(row, column)| {
            (height.max(row + 1), width.max(column + 1))
        })
    }
}

pub const ARCH: Lifeform = Lifeform {
    name: "Arch",
    cells: &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2)],
    home: (17, 40),
};

pub const GLIDER: Lifeform = Lifeform {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 2), (2, 1), (2, 0)],
    home: (17, 40),
};

pub const R_PENTOMINO: Lifeform = Lifeform {
    name: "R-pentomino",
    cells: &[(1, 1), (2, 1), (1, 0), (0, 2), (0, 1)],
    home: (17, 40),
};

pub const DIEHARD: Lifeform = Lifeform {
    name: "Diehard",
    cells: &[(1, 0), (1, 1), (2, 1), (2, 5), (2, 6), (2, 7), (0, 6)],
    home: (17, 37),
};

pub const CATALOG: &[Lifeform] = &[ARCH, GLIDER, R_PENTOMINO, DIEHARD];

pub fn by_name(name: &str) -> Option<&'static Lifeform> {
    CATALOG
        .iter()
        .find(|lifeform| lifeform.name.eq_ignore_ascii_case(name))
}
