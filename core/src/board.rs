//! The board: an owned 2D grid of cells plus its line-oriented text codec.
//!
//! Rows may have independent lengths; nothing here enforces rectangularity
//! or border walls. All access is bounds-checked through row/column
//! indices — a read or write outside the grid is an error, never a wrap.

use crate::{
    cell::Cell,
    error::{GameError, GameResult},
    types::Pos,
};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Cell>>,
}

impl Board {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    /// Read an entire stream; each line becomes one row with the line
    /// terminator stripped. Any character outside the cell alphabet is a
    /// `CorruptBoard` error.
    pub fn decode<R: BufRead>(reader: R) -> GameResult<Board> {
        let mut rows = Vec::new();
        for (row_idx, line) in reader.lines().enumerate() {
            let line = line?;
            let mut row = Vec::with_capacity(line.len());
            for (col_idx, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or_else(|| {
                    GameError::corrupt(
                        Pos::new(row_idx, col_idx),
                        format!("unknown cell code '{ch}'"),
                    )
                })?;
                row.push(cell);
            }
            rows.push(row);
        }
        Ok(Board { rows })
    }

    /// Decode from an in-memory string. Used by tests and tooling.
    pub fn parse(text: &str) -> GameResult<Board> {
        Self::decode(text.as_bytes())
    }

    /// Write each row followed by a line terminator, in row order. Does
    /// not mutate the board.
    pub fn encode<W: Write>(&self, mut writer: W) -> GameResult<()> {
        for row in &self.rows {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    pub fn encode_to_string(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.extend(row.iter().map(|c| c.to_char()));
            out.push('\n');
        }
        out
    }

    pub fn get(&self, pos: Pos) -> GameResult<Cell> {
        self.rows
            .get(pos.row)
            .and_then(|row| row.get(pos.col))
            .copied()
            .ok_or(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            })
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) -> GameResult<()> {
        let slot = self
            .rows
            .get_mut(pos.row)
            .and_then(|row| row.get_mut(pos.col))
            .ok_or(GameError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            })?;
        *slot = cell;
        Ok(())
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Total number of cells across all rows. Bounds the tail trace.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (Pos::new(r, c), *cell))
        })
    }

    /// Every cell except the first and last rows, row-major. This is the
    /// region the snake locator scans; the outer rows are the border by
    /// convention.
    pub fn interior_cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let last = self.rows.len().saturating_sub(1);
        self.rows
            .iter()
            .enumerate()
            .filter(move |(r, _)| *r > 0 && *r < last)
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(c, cell)| (Pos::new(r, c), *cell))
            })
    }
}
