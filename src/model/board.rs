//! The board aggregate: setup, lookup, adjacency, and enumeration.
//!
//! A `Board` owns the 64-cell collection. It is constructed empty, fully
//! (re)populated by [`Board::init`], and read through coordinate, name, and
//! adjacency queries for the rest of its life. Row 1 holds Black's back
//! rank, row 8 White's, and both sides share one back-rank layout.

use std::fmt;

use crate::model::cell::Cell;
use crate::model::cells::Cells;
use crate::model::layout;
use crate::model::types::{BoardError, Piece, PieceType, Side};

/// An 8×8 chess board holding piece placement, without any game state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    cells: Cells,
}

impl Board {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Create a board with no cells. Call [`Board::init`] before querying.
    pub fn new() -> Self {
        Board {
            cells: Cells::new(),
        }
    }

    /// Reset and fully populate the board for a new game.
    ///
    /// Rebuilds all 64 cells, then places each side's back rank (the classic
    /// R N B Q K B N R order, or a shuffle-chess layout when `shuffled` is
    /// set) and a full rank of pawns in front of it. Calling `init` again
    /// discards the previous position and rebuilds from scratch.
    pub fn init(&mut self, shuffled: bool) {
        self.cells.clear();
        for row in 1..=8 {
            for col in 1..=8 {
                self.cells.add(Cell::new(row, col));
            }
        }

        let layout = if shuffled {
            layout::shuffled(&mut rand::thread_rng())
        } else {
            layout::CLASSIC
        };

        self.place_side(Side::Black, 1, 2, &layout);
        self.place_side(Side::White, 8, 7, &layout);

        tracing::debug!(shuffled, "board initialized");
    }

    /// Place one side: its back rank per the layout, then a rank of pawns.
    fn place_side(&mut self, side: Side, back_row: u8, pawn_row: u8, layout: &[PieceType; 8]) {
        for (slot, &kind) in layout.iter().enumerate() {
            let col = slot as u8 + 1;
            self.cells
                .get_mut(back_row, col)
                .expect("cell exists after rebuild")
                .set_piece(Piece::new(kind, side));
        }
        for col in 1..=8 {
            self.cells
                .get_mut(pawn_row, col)
                .expect("cell exists after rebuild")
                .set_piece(Piece::new(PieceType::Pawn, side));
        }
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// The underlying cell collection.
    #[inline]
    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut Cells {
        &mut self.cells
    }

    /// Look up a cell by coordinate, both in `[1, 8]`.
    pub fn cell(&self, row: u8, col: u8) -> Result<&Cell, BoardError> {
        self.cells.get(row, col)
    }

    /// Look up a cell by algebraic name like "e4".
    pub fn cell_named(&self, name: &str) -> Result<&Cell, BoardError> {
        self.cells.get_named(name)
    }

    /// Re-resolve an arbitrary cell value to this board's canonical cell for
    /// the same coordinate.
    pub fn resolve(&self, cell: &Cell) -> Result<&Cell, BoardError> {
        self.cells.get(cell.row(), cell.col())
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// The cell one step toward row 1, or `None` at the edge.
    #[inline]
    pub fn above(&self, cell: &Cell) -> Option<&Cell> {
        self.offset(cell, -1, 0)
    }

    /// The cell one step toward row 8, or `None` at the edge.
    #[inline]
    pub fn below(&self, cell: &Cell) -> Option<&Cell> {
        self.offset(cell, 1, 0)
    }

    /// The cell one column toward 'a', or `None` at the edge.
    #[inline]
    pub fn left(&self, cell: &Cell) -> Option<&Cell> {
        self.offset(cell, 0, -1)
    }

    /// The cell one column toward 'h', or `None` at the edge.
    #[inline]
    pub fn right(&self, cell: &Cell) -> Option<&Cell> {
        self.offset(cell, 0, 1)
    }

    #[inline]
    pub fn above_left(&self, cell: &Cell) -> Option<&Cell> {
        self.offset(cell, -1, -1)
    }

    #[inline]
    pub fn above_right(&self, cell: &Cell) -> Option<&Cell> {
        self.offset(cell, -1, 1)
    }

    #[inline]
    pub fn below_left(&self, cell: &Cell) -> Option<&Cell> {
        self.offset(cell, 1, -1)
    }

    #[inline]
    pub fn below_right(&self, cell: &Cell) -> Option<&Cell> {
        self.offset(cell, 1, 1)
    }

    fn offset(&self, cell: &Cell, dr: i8, dc: i8) -> Option<&Cell> {
        let row = cell.row() as i8 + dr;
        let col = cell.col() as i8 + dc;
        if (1..=8).contains(&row) && (1..=8).contains(&col) {
            self.cells.get(row as u8, col as u8).ok()
        } else {
            None
        }
    }

    // -----------------------------------------------------------------------
    // Enumeration
    // -----------------------------------------------------------------------

    /// All cell names in row-major order: a1, b1, … h8.
    pub fn cell_names(&self) -> Vec<String> {
        self.cells.iter().map(|c| c.name()).collect()
    }

    /// Names of cells occupied by the given side, row-major.
    pub fn side_cell_names(&self, side: Side) -> Vec<String> {
        self.cells
            .iter()
            .filter(|c| c.piece().is_some_and(|p| p.side == side))
            .map(|c| c.name())
            .collect()
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    /// Render the board as an 8-line text grid, row 1 (Black) at the top.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for row in 1..=8 {
            s.push((b'0' + row) as char);
            s.push(' ');
            for col in 1..=8 {
                let ch = match self.cells.get(row, col) {
                    Ok(cell) => cell.piece().map_or('.', |p| p.to_char()),
                    Err(_) => '.',
                };
                s.push(ch);
                if col < 8 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h");
        s
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
