// session.rs - Run state shared between the board and whatever drives it

use log::{debug, info, trace};

use crate::board::Board;
use crate::config::LifeConfig;
use crate::error::LifeError;
use crate::rng::LifeRng;

/// Live-cell colours, cycled in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellColor {
    #[default]
    Green,
    Blue,
    Yellow,
    Red,
}

impl CellColor {
    pub const ALL: [CellColor; 4] = [Self::Green, Self::Blue, Self::Yellow, Self::Red];

    /// The colour after this one, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|&c| c == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn rgb(self) -> [u8; 3] {
        match self {
            Self::Green => [0, 228, 48],
            Self::Blue => [0, 121, 241],
            Self::Yellow => [253, 249, 0],
            Self::Red => [230, 41, 55],
        }
    }
}

/// A board plus the commands a front end issues against it.
///
/// Starts paused. `tick` is meant to be called once per frame and only
/// advances the board while running.
pub struct Session {
    config: LifeConfig,
    board: Board,
    rng: LifeRng,
    running: bool,
    color: CellColor,
    generation: u64,
}

impl Session {
    /// Build and seed a board for `config`, drawing randomness from `rng`.
    pub fn new(config: LifeConfig, mut rng: LifeRng) -> Result<Self, LifeError> {
        config.validate()?;
        let mut board = Board::new(config.width, config.height)?;
        board.initialize(config.live_seed_width, &mut rng);
        info!(
            "created {}x{} board, seed width {}, rng seed {}",
            config.width,
            config.height,
            config.live_seed_width,
            rng.seed()
        );

        Ok(Self {
            config,
            board,
            rng,
            running: false,
            color: CellColor::default(),
            generation: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn color(&self) -> CellColor {
        self.color
    }

    /// Generations stepped since the last (re)seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn toggle_running(&mut self) {
        self.running = !self.running;
        debug!("running: {}", self.running);
    }

    /// Reseed the board in place. The running flag is left alone.
    pub fn regenerate(&mut self) {
        self.board.initialize(self.config.live_seed_width, &mut self.rng);
        self.generation = 0;
        info!("regenerated board, {} live cells", self.board.live_count());
    }

    pub fn cycle_color(&mut self) {
        self.color = self.color.next();
        debug!("cell color: {:?}", self.color);
    }

    /// Advance one generation if running. Returns whether the board changed
    /// generation.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.board.step();
        self.generation += 1;
        trace!("generation {}: {} live", self.generation, self.board.live_count());
        true
    }
}
