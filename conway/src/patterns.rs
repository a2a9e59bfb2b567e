use crate::board::Board;

/// A named shape as `(row, col)` offsets from its top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

/// Three cells of a block; the missing corner is born next generation.
pub const L_TROMINO: Pattern = Pattern {
    name: "L-tromino",
    cells: &[(0, 0), (0, 1), (1, 0)],
};

pub const PATTERNS: &[Pattern] = &[BLOCK, BLINKER, GLIDER, L_TROMINO];

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(rows, cols), &(r, c)| (rows.max(r + 1), cols.max(c + 1)))
    }

    /// Stamp the pattern with its top-left corner at interior `(row, col)`.
    ///
    /// Existing cells are left as they are; only the pattern's cells are set.
    ///
    /// # Panics
    ///
    /// If any cell of the pattern would land on the border or outside.
    pub fn place(&self, board: &mut Board, row: usize, col: usize) {
        for &(r, c) in self.cells {
            board.set(row + r, col + c, true);
        }
    }

    /// Padded coordinates the pattern occupies at origin `(row, col)`, sorted row-major.
    pub fn cells_at(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        let mut cells: Vec<_> = self.cells.iter().map(|&(r, c)| (row + r, col + c)).collect();
        cells.sort_unstable();
        cells
    }
}

/// Look a pattern up by name, ignoring case.
pub fn by_name(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
