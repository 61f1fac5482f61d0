//! Fruit placement strategies.
//!
//! The engine never decides where fruit goes. After a growth step it hands
//! the board to a `FruitSpawner`, which may write exactly one fruit cell
//! into an empty cell, or decline. How the position is chosen is invisible
//! to the engine.

use crate::{
    board::Board,
    cell::Cell,
    error::GameResult,
    rng::GameRng,
    types::Pos,
};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Placed(Pos),
    NotPlaced,
}

pub trait FruitSpawner {
    /// Stable name, for logs.
    fn name(&self) -> &'static str;

    /// Write at most one fruit cell into the board.
    fn place_fruit(&mut self, board: &mut Board) -> GameResult<SpawnOutcome>;
}

/// Uniform pick over the currently empty cells, driven by a seeded
/// deterministic RNG.
pub struct RandomFruitSpawner {
    rng: GameRng,
}

impl RandomFruitSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::seed_from(seed),
        }
    }
}

impl FruitSpawner for RandomFruitSpawner {
    fn name(&self) -> &'static str {
        "random"
    }

    fn place_fruit(&mut self, board: &mut Board) -> GameResult<SpawnOutcome> {
        let empties: Vec<Pos> = board
            .cells()
            .filter(|(_, cell)| *cell == Cell::Empty)
            .map(|(pos, _)| pos)
            .collect();
        if empties.is_empty() {
            log::warn!("no empty cell left to place a fruit");
            return Ok(SpawnOutcome::NotPlaced);
        }
        let pick = empties[self.rng.next_u64_below(empties.len() as u64) as usize];
        board.set(pick, Cell::Fruit)?;
        Ok(SpawnOutcome::Placed(pick))
    }
}

/// Plays back a scripted list of positions, one per call. Used by tests
/// and debug scenarios where the fruit sequence must be exact.
pub struct FixedFruitSpawner {
    queue: VecDeque<Pos>,
}

impl FixedFruitSpawner {
    pub fn new(positions: impl IntoIterator<Item = Pos>) -> Self {
        Self {
            queue: positions.into_iter().collect(),
        }
    }
}

impl FruitSpawner for FixedFruitSpawner {
    fn name(&self) -> &'static str {
        "fixed"
    }

    fn place_fruit(&mut self, board: &mut Board) -> GameResult<SpawnOutcome> {
        match self.queue.pop_front() {
            Some(pos) => {
                board.set(pos, Cell::Fruit)?;
                Ok(SpawnOutcome::Placed(pos))
            }
            None => Ok(SpawnOutcome::NotPlaced),
        }
    }
}

/// Never places anything. For pure-movement scenarios.
pub struct NoFruitSpawner;

impl FruitSpawner for NoFruitSpawner {
    fn name(&self) -> &'static str {
        "none"
    }

    fn place_fruit(&mut self, _board: &mut Board) -> GameResult<SpawnOutcome> {
        Ok(SpawnOutcome::NotPlaced)
    }
}
