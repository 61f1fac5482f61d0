//! Tick events — the observable record of everything a tick did.
//!
//! The engine returns the ordered event list for each tick; callers that
//! want a run log simply concatenate them. Events serialize to tagged
//! JSON for tooling.

use crate::types::{Pos, SnakeId, Tick};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    TickStarted {
        tick: Tick,
    },
    TickCompleted {
        tick: Tick,
    },
    /// Normal step: head and tail both advanced one cell.
    SnakeMoved {
        tick: Tick,
        snake: SnakeId,
        head: Pos,
    },
    /// Growth step: head advanced onto fruit, tail stayed put.
    SnakeGrew {
        tick: Tick,
        snake: SnakeId,
        head: Pos,
    },
    /// Fatal collision. `at` is the former head cell, now frozen as `x`.
    SnakeDied {
        tick: Tick,
        snake: SnakeId,
        at: Pos,
    },
    FruitSpawned {
        tick: Tick,
        at: Pos,
    },
    /// The spawner declined to place a fruit (no space, or a strategy
    /// that never places one).
    FruitNotPlaced {
        tick: Tick,
    },
}
