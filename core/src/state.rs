//! Game state: the board plus the snake roster, as one owned unit.
//!
//! Construction paths:
//!   - `default_board()` — the fixed starting fixture;
//!   - `from_board()` — any raw grid, with the roster rebuilt by the
//!     locator;
//!   - `load()` — decode a file, then `from_board()`.
//!
//! Saving writes only the raw grid; the roster is always re-derivable.

use crate::{
    board::Board,
    cell::{Cell, Direction},
    error::GameResult,
    locator::locate_snakes,
    snake::Snake,
    types::Pos,
};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

pub const DEFAULT_ROWS: usize = 18;
pub const DEFAULT_COLS: usize = 20;

#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub snakes: Vec<Snake>,
}

impl GameState {
    /// The fixed starting fixture: a bordered 18x20 board with one
    /// three-cell snake facing right and one fruit.
    pub fn default_board() -> Self {
        let mut rows = Vec::with_capacity(DEFAULT_ROWS);
        for r in 0..DEFAULT_ROWS {
            if r == 0 || r == DEFAULT_ROWS - 1 {
                rows.push(vec![Cell::Wall; DEFAULT_COLS]);
            } else {
                let mut row = vec![Cell::Empty; DEFAULT_COLS];
                row[0] = Cell::Wall;
                row[DEFAULT_COLS - 1] = Cell::Wall;
                rows.push(row);
            }
        }
        rows[2][2] = Cell::Tail(Direction::Right);
        rows[2][3] = Cell::Body(Direction::Right);
        rows[2][4] = Cell::Head(Direction::Right);
        rows[2][9] = Cell::Fruit;

        Self {
            board: Board::from_rows(rows),
            snakes: vec![Snake {
                id: 0,
                head: Pos::new(2, 4),
                tail: Pos::new(2, 2),
                alive: true,
            }],
        }
    }

    /// Build state from a raw grid, rebuilding the roster by scanning.
    pub fn from_board(board: Board) -> GameResult<Self> {
        let snakes = locate_snakes(&board)?;
        Ok(Self { board, snakes })
    }

    /// Decode a board file and discover its snakes. A missing or
    /// unreadable file surfaces as `GameError::Io`.
    pub fn load(path: impl AsRef<Path>) -> GameResult<Self> {
        let file = File::open(path)?;
        let board = Board::decode(BufReader::new(file))?;
        Self::from_board(board)
    }

    /// Write the raw grid only. Snake records are not persisted.
    pub fn save(&self, path: impl AsRef<Path>) -> GameResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.board.encode(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn living_snakes(&self) -> usize {
        self.snakes.iter().filter(|s| s.alive).count()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::default_board()
    }
}
