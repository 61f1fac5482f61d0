//! The cell alphabet — the single-character encoding of every board square.
//!
//! A body or tail cell's direction points toward the head, so the grid
//! itself encodes each snake as a linked path from tail to head with no
//! side storage. Heads carry the snake's facing; a dead head is frozen
//! as `x` and has no facing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cell {
    Empty,
    Wall,
    Fruit,
    /// A living snake's leading cell, facing its direction of travel.
    Head(Direction),
    /// A head that collided fatally. Never moves again.
    DeadHead,
    /// Interior segment; the direction points one cell toward the head.
    Body(Direction),
    /// Trailing cell; same direction convention as Body.
    Tail(Direction),
}

impl Cell {
    /// Decode one character of the board alphabet. None for anything
    /// outside the alphabet.
    pub fn from_char(ch: char) -> Option<Cell> {
        let cell = match ch {
            ' ' => Cell::Empty,
            '#' => Cell::Wall,
            '*' => Cell::Fruit,
            'W' => Cell::Head(Direction::Up),
            'S' => Cell::Head(Direction::Down),
            'A' => Cell::Head(Direction::Left),
            'D' => Cell::Head(Direction::Right),
            'x' => Cell::DeadHead,
            '^' => Cell::Body(Direction::Up),
            'v' => Cell::Body(Direction::Down),
            '<' => Cell::Body(Direction::Left),
            '>' => Cell::Body(Direction::Right),
            'w' => Cell::Tail(Direction::Up),
            's' => Cell::Tail(Direction::Down),
            'a' => Cell::Tail(Direction::Left),
            'd' => Cell::Tail(Direction::Right),
            _ => return None,
        };
        Some(cell)
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Fruit => '*',
            Cell::Head(Direction::Up) => 'W',
            Cell::Head(Direction::Down) => 'S',
            Cell::Head(Direction::Left) => 'A',
            Cell::Head(Direction::Right) => 'D',
            Cell::DeadHead => 'x',
            Cell::Body(Direction::Up) => '^',
            Cell::Body(Direction::Down) => 'v',
            Cell::Body(Direction::Left) => '<',
            Cell::Body(Direction::Right) => '>',
            Cell::Tail(Direction::Up) => 'w',
            Cell::Tail(Direction::Down) => 's',
            Cell::Tail(Direction::Left) => 'a',
            Cell::Tail(Direction::Right) => 'd',
        }
    }

    /// Live or dead head.
    pub fn is_head(self) -> bool {
        matches!(self, Cell::Head(_) | Cell::DeadHead)
    }

    pub fn is_tail(self) -> bool {
        matches!(self, Cell::Tail(_))
    }

    /// Any cell belonging to a snake: head, dead head, body, or tail.
    pub fn is_snake(self) -> bool {
        matches!(
            self,
            Cell::Head(_) | Cell::DeadHead | Cell::Body(_) | Cell::Tail(_)
        )
    }

    /// The facing encoded in this cell, if it has one.
    pub fn facing(self) -> Option<Direction> {
        match self {
            Cell::Head(d) | Cell::Body(d) | Cell::Tail(d) => Some(d),
            _ => None,
        }
    }
}
