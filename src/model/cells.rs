//! The board's cell collection.
//!
//! Keyed by `(row, col)` and ordered row-major, so iteration always walks
//! a1..h1, a2..h2, … a8..h8. After a full `Board::init` the collection holds
//! exactly 64 cells, one per coordinate pair in `[1,8] × [1,8]`.

use std::collections::BTreeMap;

use crate::model::cell::Cell;
use crate::model::types::BoardError;

/// Ordered, coordinate-keyed container of board cells, also addressable by
/// algebraic name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cells {
    map: BTreeMap<(u8, u8), Cell>,
}

impl Cells {
    pub fn new() -> Self {
        Cells {
            map: BTreeMap::new(),
        }
    }

    /// Insert a cell, keyed by its coordinate. Inserting a coordinate twice
    /// is a caller bug: clear before rebuilding.
    pub fn add(&mut self, cell: Cell) {
        let prev = self.map.insert((cell.row(), cell.col()), cell);
        debug_assert!(
            prev.is_none(),
            "duplicate cell at ({}, {})",
            cell.row(),
            cell.col()
        );
    }

    /// Remove all cells.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up a cell by coordinate.
    pub fn get(&self, row: u8, col: u8) -> Result<&Cell, BoardError> {
        self.map
            .get(&(row, col))
            .ok_or(BoardError::OutOfRange { row, col })
    }

    /// Look up a cell by algebraic name like "e4".
    pub fn get_named(&self, name: &str) -> Result<&Cell, BoardError> {
        let (row, col) =
            Cell::parse_name(name).ok_or_else(|| BoardError::NotFound(name.to_string()))?;
        // A well-formed name always maps into [1,8]², so a miss here means
        // the collection itself is not fully built.
        self.map
            .get(&(row, col))
            .ok_or_else(|| BoardError::NotFound(name.to_string()))
    }

    pub(crate) fn get_mut(&mut self, row: u8, col: u8) -> Result<&mut Cell, BoardError> {
        self.map
            .get_mut(&(row, col))
            .ok_or(BoardError::OutOfRange { row, col })
    }

    /// Iterate cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.map.values()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
