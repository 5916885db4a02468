//! Board state as a structured document.
//!
//! The document lists both side identities followed by all 64 cells (each
//! with its coordinate, square color, and occupying piece, if any). Side
//! records carry their own identity tag and are resolved by content when
//! decoding, so their order in the document does not matter. Decoding
//! validates the full shape before any board is returned.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::board::Board;
use crate::model::cell::Cell;
use crate::model::types::{BoardError, Piece, PieceType, Side};

// ---------------------------------------------------------------------------
// Document model
// ---------------------------------------------------------------------------

/// Full board state: side identities, then all 64 cells row-major.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDocument {
    pub sides: Vec<SideDocument>,
    pub cells: Vec<CellDocument>,
}

/// One side's identity record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideDocument {
    pub side: Side,
}

/// One cell: coordinate, square color, and piece if occupied.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellDocument {
    pub row: u8,
    pub col: u8,
    pub dark: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub piece: Option<PieceDocument>,
}

/// An occupying piece: kind plus owning side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieceDocument {
    pub kind: PieceType,
    pub side: Side,
}

// ---------------------------------------------------------------------------
// Board ⇄ document conversion
// ---------------------------------------------------------------------------

impl Board {
    /// Export the board as a document: White's identity, Black's identity,
    /// then every cell in row-major order.
    pub fn to_document(&self) -> BoardDocument {
        BoardDocument {
            sides: vec![
                SideDocument { side: Side::White },
                SideDocument { side: Side::Black },
            ],
            cells: self
                .cells()
                .iter()
                .map(|cell| CellDocument {
                    row: cell.row(),
                    col: cell.col(),
                    dark: cell.is_dark(),
                    piece: cell.piece().map(|p| PieceDocument {
                        kind: p.kind,
                        side: p.side,
                    }),
                })
                .collect(),
        }
    }

    /// Rebuild a board from a document.
    ///
    /// Side records are matched by their identity tag, not position; the
    /// document must carry exactly one record per color, exactly 64 cells,
    /// and every coordinate in range, unique, and with a square color
    /// matching its parity. Any violation is a `MalformedDocument`.
    pub fn from_document(doc: &BoardDocument) -> Result<Board, BoardError> {
        let white = doc.sides.iter().filter(|s| s.side == Side::White).count();
        let black = doc.sides.iter().filter(|s| s.side == Side::Black).count();
        if white != 1 || black != 1 {
            return Err(BoardError::MalformedDocument(format!(
                "expected one side record per color, got {white} white and {black} black"
            )));
        }

        if doc.cells.len() != 64 {
            return Err(BoardError::MalformedDocument(format!(
                "expected 64 cells, got {}",
                doc.cells.len()
            )));
        }

        let mut board = Board::new();
        let mut seen = [[false; 8]; 8];
        for record in &doc.cells {
            if !(1..=8).contains(&record.row) || !(1..=8).contains(&record.col) {
                return Err(BoardError::MalformedDocument(format!(
                    "cell coordinate out of range: row {}, col {}",
                    record.row, record.col
                )));
            }
            let (r, c) = (record.row as usize - 1, record.col as usize - 1);
            if seen[r][c] {
                return Err(BoardError::MalformedDocument(format!(
                    "duplicate cell at row {}, col {}",
                    record.row, record.col
                )));
            }
            seen[r][c] = true;

            let mut cell = Cell::new(record.row, record.col);
            if record.dark != cell.is_dark() {
                return Err(BoardError::MalformedDocument(format!(
                    "square color mismatch at {}: document says dark={}",
                    cell.name(),
                    record.dark
                )));
            }
            if let Some(piece) = record.piece {
                cell.set_piece(Piece::new(piece.kind, piece.side));
            }
            board.cells_mut().add(cell);
        }

        tracing::debug!("board document decoded");
        Ok(board)
    }

    /// Serialize to a JSON document string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.to_document()).expect("board document always serializes")
    }

    /// Decode a board from a JSON document string. JSON syntax errors are
    /// reported as `MalformedDocument` like any other shape violation.
    pub fn from_json(json: &str) -> Result<Board, BoardError> {
        let doc: BoardDocument =
            serde_json::from_str(json).map_err(|e| BoardError::MalformedDocument(e.to_string()))?;
        Board::from_document(&doc)
    }
}

// ---------------------------------------------------------------------------
// Serde for Board itself
// ---------------------------------------------------------------------------

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_document().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let doc = BoardDocument::deserialize(deserializer)?;
        Board::from_document(&doc).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> Board {
        let mut board = Board::new();
        board.init(false);
        board
    }

    // ===================================================================
    // Round trips
    // ===================================================================

    #[test]
    fn document_round_trip_classic() {
        let board = classic();
        let doc = board.to_document();
        let rebuilt = Board::from_document(&doc).unwrap();
        assert_eq!(board, rebuilt);
    }

    #[test]
    fn json_round_trip_classic() {
        let board = classic();
        let rebuilt = Board::from_json(&board.to_json()).unwrap();
        assert_eq!(board, rebuilt);
    }

    #[test]
    fn json_round_trip_shuffled() {
        let mut board = Board::new();
        for _ in 0..20 {
            board.init(true);
            let rebuilt = Board::from_json(&board.to_json()).unwrap();
            assert_eq!(board, rebuilt);
        }
    }

    #[test]
    fn serde_round_trip_via_board_impls() {
        let board = classic();
        let json = serde_json::to_string(&board).unwrap();
        let rebuilt: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, rebuilt);
    }

    #[test]
    fn empty_board_round_trips_as_document_error() {
        // A board that was never initialized has zero cells; its document
        // cannot be decoded back.
        let board = Board::new();
        let doc = board.to_document();
        assert!(matches!(
            Board::from_document(&doc),
            Err(BoardError::MalformedDocument(_))
        ));
    }

    // ===================================================================
    // Document shape
    // ===================================================================

    #[test]
    fn document_lists_both_sides() {
        let doc = classic().to_document();
        assert_eq!(doc.sides.len(), 2);
        assert!(doc.sides.contains(&SideDocument { side: Side::White }));
        assert!(doc.sides.contains(&SideDocument { side: Side::Black }));
    }

    #[test]
    fn document_cells_row_major() {
        let doc = classic().to_document();
        assert_eq!(doc.cells.len(), 64);
        assert_eq!((doc.cells[0].row, doc.cells[0].col), (1, 1));
        assert_eq!((doc.cells[8].row, doc.cells[8].col), (2, 1));
        assert_eq!((doc.cells[63].row, doc.cells[63].col), (8, 8));
    }

    #[test]
    fn json_field_shape() {
        let json = classic().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["sides"][0]["side"], "white");
        assert_eq!(value["sides"][1]["side"], "black");
        // a1: dark square, black rook.
        assert_eq!(value["cells"][0]["row"], 1);
        assert_eq!(value["cells"][0]["col"], 1);
        assert_eq!(value["cells"][0]["dark"], true);
        assert_eq!(value["cells"][0]["piece"]["kind"], "rook");
        assert_eq!(value["cells"][0]["piece"]["side"], "black");
    }

    #[test]
    fn empty_cells_omit_piece_field() {
        let json = classic().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        // e5 is empty on a fresh board; index 4*8 + 4 = 36 in row-major order.
        let e5 = &value["cells"][36];
        assert_eq!(e5["row"], 5);
        assert_eq!(e5["col"], 5);
        assert!(e5.get("piece").is_none());
    }

    // ===================================================================
    // Side resolution by content
    // ===================================================================

    #[test]
    fn side_records_resolved_by_tag_not_position() {
        let board = classic();
        let mut doc = board.to_document();
        doc.sides.reverse();
        let rebuilt = Board::from_document(&doc).unwrap();
        assert_eq!(board, rebuilt);
    }

    #[test]
    fn missing_side_record_rejected() {
        let mut doc = classic().to_document();
        doc.sides.retain(|s| s.side == Side::White);
        assert!(matches!(
            Board::from_document(&doc),
            Err(BoardError::MalformedDocument(_))
        ));
    }

    #[test]
    fn duplicate_side_record_rejected() {
        let mut doc = classic().to_document();
        doc.sides[1] = SideDocument { side: Side::White };
        assert!(matches!(
            Board::from_document(&doc),
            Err(BoardError::MalformedDocument(_))
        ));
    }

    // ===================================================================
    // Cell validation
    // ===================================================================

    #[test]
    fn wrong_cell_count_rejected() {
        let mut doc = classic().to_document();
        doc.cells.pop();
        let err = Board::from_document(&doc).unwrap_err();
        assert!(err.to_string().contains("expected 64 cells"));
    }

    #[test]
    fn duplicate_coordinate_rejected() {
        let mut doc = classic().to_document();
        doc.cells[1] = doc.cells[0];
        assert!(matches!(
            Board::from_document(&doc),
            Err(BoardError::MalformedDocument(_))
        ));
    }

    #[test]
    fn out_of_range_coordinate_rejected() {
        let mut doc = classic().to_document();
        doc.cells[0].row = 9;
        assert!(matches!(
            Board::from_document(&doc),
            Err(BoardError::MalformedDocument(_))
        ));
    }

    #[test]
    fn color_parity_mismatch_rejected() {
        let mut doc = classic().to_document();
        doc.cells[0].dark = false; // a1 is dark
        let err = Board::from_document(&doc).unwrap_err();
        assert!(err.to_string().contains("color mismatch"));
    }

    #[test]
    fn invalid_json_rejected() {
        assert!(matches!(
            Board::from_json("not json"),
            Err(BoardError::MalformedDocument(_))
        ));
        assert!(matches!(
            Board::from_json("{\"sides\": []}"),
            Err(BoardError::MalformedDocument(_))
        ));
    }
}
