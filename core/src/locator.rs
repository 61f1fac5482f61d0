//! Snake discovery — rebuilds the roster from a raw grid.
//!
//! RULES:
//!   - Heads are discovered row-major over the interior rows; the Nth
//!     head found becomes snake N. The ordering is part of the contract,
//!     since the engine advances snakes in id order.
//!   - Every tail candidate is traced forward along the facing codes
//!     until it reaches a head. The trace is bounded by the board's cell
//!     count; a path that loops, leaves the grid, or runs onto a
//!     non-snake cell is a corrupt encoding, not undefined behavior.

use crate::{
    board::Board,
    cell::Cell,
    error::{GameError, GameResult},
    snake::Snake,
    types::Pos,
};

/// Rebuild the full roster from the board. Snakes with a dead head (`x`)
/// come back with `alive = false`, so a roster rebuilt mid-game matches
/// the incrementally maintained one exactly.
pub fn locate_snakes(board: &Board) -> GameResult<Vec<Snake>> {
    let heads: Vec<(Pos, Cell)> = board
        .interior_cells()
        .filter(|(_, cell)| cell.is_head())
        .collect();

    // Trace every candidate tail up front; each trace validates its own
    // stretch of the board.
    let mut traced: Vec<(Pos, Pos)> = Vec::new(); // (tail, head it reaches)
    for (tail, _) in board.interior_cells().filter(|(_, cell)| cell.is_tail()) {
        let (head, _) = trace_path(board, tail)?;
        traced.push((tail, head));
    }

    let mut snakes = Vec::with_capacity(heads.len());
    for (id, (head, head_cell)) in heads.into_iter().enumerate() {
        let tail = traced
            .iter()
            .find(|(_, reached)| *reached == head)
            .map(|(tail, _)| *tail)
            .ok_or_else(|| GameError::corrupt(head, "head with no matching tail"))?;
        snakes.push(Snake {
            id,
            head,
            tail,
            alive: head_cell != Cell::DeadHead,
        });
    }

    log::debug!("located {} snake(s)", snakes.len());
    Ok(snakes)
}

/// Follow facing codes from `start` until a head cell is reached.
/// Returns the head position and the number of cells on the path,
/// both endpoints included.
pub fn trace_path(board: &Board, start: Pos) -> GameResult<(Pos, usize)> {
    let limit = board.cell_count();
    let mut pos = start;
    let mut visited = 0usize;
    loop {
        visited += 1;
        if visited > limit {
            return Err(GameError::corrupt(start, "body path never reaches a head"));
        }
        let cell = board
            .get(pos)
            .map_err(|_| GameError::corrupt(pos, "body path leaves the grid"))?;
        if cell.is_head() {
            return Ok((pos, visited));
        }
        let dir = match cell {
            Cell::Body(d) | Cell::Tail(d) => d,
            other => {
                return Err(GameError::corrupt(
                    pos,
                    format!("body path runs onto '{}'", other.to_char()),
                ))
            }
        };
        pos = pos
            .step(dir)
            .ok_or_else(|| GameError::corrupt(pos, "body path leaves the grid"))?;
    }
}
