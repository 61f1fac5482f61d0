//! snakesim-core — deterministic multi-snake simulation on a character grid.
//!
//! The grid is the sole source of truth. Snake records (head, tail, alive)
//! are maintained incrementally by the engine and are always re-derivable
//! from the board alone via [`locator::locate_snakes`].

pub mod board;
pub mod cell;
pub mod engine;
pub mod error;
pub mod event;
pub mod locator;
pub mod rng;
pub mod snake;
pub mod spawn;
pub mod state;
pub mod types;
