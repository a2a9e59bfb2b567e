// config.rs - Board geometry and frame pacing for the Game of Life

use std::time::Duration;

use crate::error::LifeError;

// Compile-time configuration
pub const GRID_WIDTH: usize = 200;                    // Interior columns
pub const GRID_HEIGHT: usize = 200;                   // Interior rows
pub const LIVE_SEED_WIDTH: usize = 50;                // Seed columns per row (yields 49 live cells)
pub const BORDER: usize = 1;                          // Dead margin on every side
pub const GRID_START: usize = BORDER;                 // First interior index
pub const TARGET_FPS: u32 = 30;                       // One generation per frame while running
pub const CELL_PIXELS: u32 = 2;                       // Side of one painted cell
pub const HELP_HEIGHT: u32 = 60;                      // Help strip under the board

/// Everything the core and the shell need to agree on about shape and pace.
///
/// Values are fixed at build time through the constants above; the struct
/// exists so tests can run the same code paths on small boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeConfig {
    pub width: usize,
    pub height: usize,
    pub live_seed_width: usize,
    pub fps: u32,
    pub cell_pixels: u32,
    pub help_height: u32,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            live_seed_width: LIVE_SEED_WIDTH,
            fps: TARGET_FPS,
            cell_pixels: CELL_PIXELS,
            help_height: HELP_HEIGHT,
        }
    }
}

impl LifeConfig {
    /// Same pacing and pixel sizes as the default, different board shape.
    pub fn with_board(width: usize, height: usize, live_seed_width: usize) -> Self {
        Self {
            width,
            height,
            live_seed_width,
            ..Self::default()
        }
    }

    /// Checks the shape before anything is allocated.
    pub fn validate(&self) -> Result<(), LifeError> {
        if self.width == 0 || self.height == 0 {
            return Err(LifeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.live_seed_width == 0 || self.live_seed_width > self.width {
            return Err(LifeError::InvalidSeedWidth {
                live_seed_width: self.live_seed_width,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Window size in pixels: the board plus the help strip below it.
    pub fn window_size(&self) -> [f32; 2] {
        let board_w = self.width as u32 * self.cell_pixels;
        let board_h = self.height as u32 * self.cell_pixels;
        [board_w as f32, (board_h + self.help_height) as f32]
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
