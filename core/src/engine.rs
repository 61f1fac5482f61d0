//! The per-tick update engine.
//!
//! RULES:
//!   - Snakes advance in ascending id order, every tick. One snake's move
//!     can create or remove a collision target for a later snake in the
//!     same tick; the ordering is part of the observable contract.
//!   - A tick runs to completion before returning; there is no partial
//!     tick state visible from outside.
//!   - A dead snake never moves again, and its board cells are left
//!     exactly as they were when it died.

use crate::{
    board::Board,
    cell::{Cell, Direction},
    error::{GameError, GameResult},
    event::GameEvent,
    snake::Snake,
    spawn::{FruitSpawner, SpawnOutcome},
    state::GameState,
    types::{Pos, Tick},
};

pub struct GameEngine {
    pub state: GameState,
    current_tick: Tick,
}

impl GameEngine {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            current_tick: 0,
        }
    }

    pub fn current_tick(&self) -> Tick {
        self.current_tick
    }

    /// Advance one tick. For each living snake, in id order:
    ///
    /// - destination is a wall or any snake cell → the snake dies: its
    ///   current head cell is frozen as `x` and nothing else changes;
    /// - destination is fruit → the head moves in, the tail stays (length
    ///   grows by one), and the spawner is asked for a replacement fruit;
    /// - destination is empty → head and tail both advance one cell.
    pub fn tick(&mut self, spawner: &mut dyn FruitSpawner) -> GameResult<Vec<GameEvent>> {
        self.current_tick += 1;
        let tick = self.current_tick;
        let mut events = vec![GameEvent::TickStarted { tick }];

        let state = &mut self.state;
        for id in 0..state.snakes.len() {
            if !state.snakes[id].alive {
                continue;
            }
            let head = state.snakes[id].head;
            let dir = match state.board.get(head)? {
                Cell::Head(d) => d,
                other => {
                    return Err(GameError::corrupt(
                        head,
                        format!("live snake head is '{}', not a facing head", other.to_char()),
                    ))
                }
            };
            let dest = head.step(dir).ok_or(GameError::StepOffGrid {
                row: head.row,
                col: head.col,
            })?;

            match state.board.get(dest)? {
                Cell::Wall | Cell::Head(_) | Cell::DeadHead | Cell::Body(_) | Cell::Tail(_) => {
                    state.board.set(head, Cell::DeadHead)?;
                    state.snakes[id].alive = false;
                    log::debug!("tick={tick} snake={id} died at ({}, {})", head.row, head.col);
                    events.push(GameEvent::SnakeDied {
                        tick,
                        snake: id,
                        at: head,
                    });
                }
                Cell::Fruit => {
                    advance_head(&mut state.board, &mut state.snakes[id], dir, dest)?;
                    log::debug!(
                        "tick={tick} snake={id} grew into ({}, {})",
                        dest.row,
                        dest.col
                    );
                    events.push(GameEvent::SnakeGrew {
                        tick,
                        snake: id,
                        head: dest,
                    });
                    match spawner.place_fruit(&mut state.board)? {
                        SpawnOutcome::Placed(at) => {
                            events.push(GameEvent::FruitSpawned { tick, at })
                        }
                        SpawnOutcome::NotPlaced => {
                            events.push(GameEvent::FruitNotPlaced { tick })
                        }
                    }
                }
                Cell::Empty => {
                    advance_head(&mut state.board, &mut state.snakes[id], dir, dest)?;
                    advance_tail(&mut state.board, &mut state.snakes[id])?;
                    events.push(GameEvent::SnakeMoved {
                        tick,
                        snake: id,
                        head: dest,
                    });
                }
            }
        }

        events.push(GameEvent::TickCompleted { tick });
        Ok(events)
    }

    /// Run n ticks in a loop, concatenating their event lists.
    pub fn run_ticks(
        &mut self,
        n: u64,
        spawner: &mut dyn FruitSpawner,
    ) -> GameResult<Vec<GameEvent>> {
        let mut all = Vec::new();
        for _ in 0..n {
            all.extend(self.tick(spawner)?);
        }
        Ok(all)
    }
}

/// Move the head into `dest`: the old head cell becomes the matching body
/// cell, the destination becomes the head with the same facing.
fn advance_head(
    board: &mut Board,
    snake: &mut Snake,
    dir: Direction,
    dest: Pos,
) -> GameResult<()> {
    board.set(snake.head, Cell::Body(dir))?;
    board.set(dest, Cell::Head(dir))?;
    snake.head = dest;
    Ok(())
}

/// Advance the tail one cell: the next cell on the path (a body cell,
/// since the head has already moved) becomes the new tail, and the
/// vacated cell is blanked.
fn advance_tail(board: &mut Board, snake: &mut Snake) -> GameResult<()> {
    let dir = match board.get(snake.tail)? {
        Cell::Tail(d) => d,
        other => {
            return Err(GameError::corrupt(
                snake.tail,
                format!("expected a tail cell, found '{}'", other.to_char()),
            ))
        }
    };
    let next = snake
        .tail
        .step(dir)
        .ok_or_else(|| GameError::corrupt(snake.tail, "tail points off the grid"))?;
    let next_dir = match board.get(next)? {
        Cell::Body(d) => d,
        other => {
            return Err(GameError::corrupt(
                next,
                format!("expected a body cell behind the tail, found '{}'", other.to_char()),
            ))
        }
    };
    board.set(next, Cell::Tail(next_dir))?;
    board.set(snake.tail, Cell::Empty)?;
    snake.tail = next;
    Ok(())
}
