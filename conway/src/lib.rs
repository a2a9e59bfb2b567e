//! Conway's Game of Life on a bounded grid with a permanent dead border.
//!
//! [`Board`] holds the cells and applies the B3/S23 rule. [`Session`] wraps
//! a board with the running flag, colour and random source a front end
//! drives once per frame.
//!
//! ```
//! use conway::{Board, rng::LifeRng};
//!
//! let mut board = Board::new(20, 20).unwrap();
//! board.initialize(5, &mut LifeRng::new(1));
//! assert_eq!(board.rows().next().unwrap().iter().filter(|&&c| c).count(), 4);
//! board.step();
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod patterns;
pub mod rng;
pub mod session;

pub use board::Board;
pub use config::LifeConfig;
pub use error::LifeError;
pub use session::{CellColor, Session};
