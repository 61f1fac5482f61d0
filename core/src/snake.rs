//! The snake record: head/tail coordinates plus the alive flag.
//!
//! Records are never persisted. They are created by the locator (or the
//! default-board constructor), mutated in place by the engine, and can be
//! rebuilt from the board at any time.

use crate::types::{Pos, SnakeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    pub id: SnakeId,
    pub head: Pos,
    pub tail: Pos,
    pub alive: bool,
}
