//! Shared primitive types used across the entire simulation.

use crate::cell::Direction;
use serde::{Deserialize, Serialize};

/// A simulation tick. One tick advances every living snake once.
pub type Tick = u64;

/// A snake's identifier: its position in the roster, assigned in
/// head-discovery order.
pub type SnakeId = usize;

/// A grid coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One cell over in `dir`. Returns None when the step would leave the
    /// coordinate space entirely (row or column below zero).
    pub fn step(self, dir: Direction) -> Option<Pos> {
        match dir {
            Direction::Up => self.row.checked_sub(1).map(|row| Pos::new(row, self.col)),
            Direction::Down => Some(Pos::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Pos::new(self.row, col)),
            Direction::Right => Some(Pos::new(self.row, self.col + 1)),
        }
    }
}
