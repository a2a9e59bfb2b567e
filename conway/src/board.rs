// board.rs - Padded cell matrix and the generation rule

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::{BORDER, GRID_START};
use crate::error::LifeError;

/// Live/dead matrix of `(height + 2) x (width + 2)` cells.
///
/// Row and column `0` and `height + 1` / `width + 1` are a dead border that
/// nothing writes to, so neighbor sums at the edges need no bounds checks.
/// Coordinates are padded: the interior is `1..=height` x `1..=width`.
#[derive(Clone)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    // Neighbor sums from the last count pass, reused across steps.
    neighbors: Vec<u8>,
}

impl Board {
    /// Allocate an all-dead board with the given interior size.
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_add(2 * BORDER)
            .zip(height.checked_add(2 * BORDER))
            .and_then(|(w, h)| w.checked_mul(h))
            .ok_or(LifeError::Allocation { cells: usize::MAX })?;

        Ok(Self {
            width,
            height,
            cells: zeroed(len, false)?,
            neighbors: zeroed(len, 0)?,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Seed every interior row with `live_count - 1` live cells in random
    /// columns.
    ///
    /// Each row first gets columns `1..live_count` alive and the rest dead,
    /// then its interior is shuffled in place with Fisher-Yates (`i` from
    /// `width - 1` down to `1`, `j` uniform in `0..=i`). The border is never
    /// touched and the previous interior is fully overwritten.
    ///
    /// # Panics
    ///
    /// If `live_count` is outside `1..=width`.
    pub fn initialize<R: Rng + ?Sized>(&mut self, live_count: usize, rng: &mut R) {
        assert!(
            (1..=self.width).contains(&live_count),
            "live count {live_count} outside 1..={}",
            self.width
        );
        for row in GRID_START..=self.height {
            let interior = self.interior_row_mut(row);
            for (offset, cell) in interior.iter_mut().enumerate() {
                *cell = offset + GRID_START < live_count;
            }
            interior.shuffle(rng);
        }
    }

    /// Advance one generation.
    ///
    /// All neighbor sums are taken from the current generation before any
    /// cell changes. A sum of 2 leaves the cell as it is, 3 makes it alive,
    /// anything else kills it.
    pub fn step(&mut self) {
        let stride = self.stride();
        let cells = &self.cells;
        let neighbors = &mut self.neighbors;

        for row in GRID_START..=self.height {
            for col in GRID_START..=self.width {
                let i = row * stride + col;
                let above = i - stride;
                let below = i + stride;
                neighbors[i] = [
                    above - 1, above, above + 1,
                    i - 1,            i + 1,
                    below - 1, below, below + 1,
                ]
                .iter()
                .map(|&n| u8::from(cells[n]))
                .sum();
            }
        }

        for row in GRID_START..=self.height {
            for col in GRID_START..=self.width {
                let i = row * stride + col;
                match self.neighbors[i] {
                    2 => {}
                    3 => self.cells[i] = true,
                    _ => self.cells[i] = false,
                }
            }
        }

        debug_assert!(self.border_is_dead());
    }

    /// Whether the cell at padded coordinates is alive.
    ///
    /// Border coordinates are valid and always dead.
    ///
    /// # Panics
    ///
    /// If `row > height + 1` or `col > width + 1`.
    pub fn cell(&self, row: usize, col: usize) -> bool {
        assert!(
            row <= self.height + BORDER && col <= self.width + BORDER,
            "cell ({row}, {col}) outside padded {}x{} board",
            self.width + 2 * BORDER,
            self.height + 2 * BORDER
        );
        self.cells[row * self.stride() + col]
    }

    /// Set an interior cell.
    ///
    /// # Panics
    ///
    /// If `(row, col)` is on the border or outside the board.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        assert!(
            (GRID_START..=self.height).contains(&row) && (GRID_START..=self.width).contains(&col),
            "cell ({row}, {col}) is not inside the {}x{} interior",
            self.width,
            self.height
        );
        let i = row * self.stride() + col;
        self.cells[i] = alive;
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Padded coordinates of every live cell, row-major.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        let stride = self.stride();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| (i / stride, i % stride))
            .collect()
    }

    /// Interior rows top to bottom, each `width` cells long.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        (GRID_START..=self.height).map(move |row| self.interior_row(row))
    }

    /// True when no border cell is alive.
    pub fn border_is_dead(&self) -> bool {
        let last_row = self.height + BORDER;
        let last_col = self.width + BORDER;
        let stride = self.stride();
        let top_bottom = (0..stride).all(|col| !self.cells[col] && !self.cells[last_row * stride + col]);
        let left_right = (0..=last_row).all(|row| !self.cells[row * stride] && !self.cells[row * stride + last_col]);
        top_bottom && left_right
    }

    fn stride(&self) -> usize {
        self.width + 2 * BORDER
    }

    fn interior_row(&self, row: usize) -> &[bool] {
        let start = row * self.stride() + GRID_START;
        &self.cells[start..start + self.width]
    }

    fn interior_row_mut(&mut self, row: usize) -> &mut [bool] {
        let start = row * self.stride() + GRID_START;
        let width = self.width;
        &mut self.cells[start..start + width]
    }
}

// Scratch sums are not part of the state.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|&alive| if alive { '#' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{}", self.width, self.height)?;
        fmt::Display::fmt(self, f)
    }
}

fn zeroed<T: Clone>(len: usize, value: T) -> Result<Vec<T>, LifeError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| LifeError::Allocation { cells: len })?;
    buf.resize(len, value);
    Ok(buf)
}
