use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
///
/// A plain value type: every place that needs "which player" holds a copy,
/// so there is no shared side object to alias or mutate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Index for array lookups: White=0, Black=1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::ops::Not for Side {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceType
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Number of piece types.
    pub const COUNT: usize = 6;

    /// Index for array lookups: Pawn=0 .. King=5.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single uppercase letter for white, lowercase for black.
    pub fn to_char(self, side: Side) -> char {
        let c = match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        };
        match side {
            Side::White => c.to_ascii_uppercase(),
            Side::Black => c,
        }
    }

    /// Parse a piece character: uppercase means White, lowercase Black.
    pub fn from_char(c: char) -> Option<(Side, PieceType)> {
        let side = if c.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceType::Pawn,
            'n' => PieceType::Knight,
            'b' => PieceType::Bishop,
            'r' => PieceType::Rook,
            'q' => PieceType::Queen,
            'k' => PieceType::King,
            _ => return None,
        };
        Some((side, kind))
    }
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceType::Pawn => write!(f, "pawn"),
            PieceType::Knight => write!(f, "knight"),
            PieceType::Bishop => write!(f, "bishop"),
            PieceType::Rook => write!(f, "rook"),
            PieceType::Queen => write!(f, "queen"),
            PieceType::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A piece on the board: kind plus owning side. Immutable once constructed;
/// a piece lives in exactly one cell at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceType,
    pub side: Side,
}

impl Piece {
    pub const fn new(kind: PieceType, side: Side) -> Self {
        Piece { kind, side }
    }

    #[inline]
    pub fn is_pawn(self) -> bool {
        self.kind == PieceType::Pawn
    }

    #[inline]
    pub fn is_knight(self) -> bool {
        self.kind == PieceType::Knight
    }

    #[inline]
    pub fn is_bishop(self) -> bool {
        self.kind == PieceType::Bishop
    }

    #[inline]
    pub fn is_rook(self) -> bool {
        self.kind == PieceType::Rook
    }

    #[inline]
    pub fn is_queen(self) -> bool {
        self.kind == PieceType::Queen
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self.kind == PieceType::King
    }

    /// Display character: uppercase for White, lowercase for Black.
    #[inline]
    pub fn to_char(self) -> char {
        self.kind.to_char(self.side)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.side, self.kind)
    }
}

// ---------------------------------------------------------------------------
// BoardError
// ---------------------------------------------------------------------------

/// Domain errors for board lookup and document decoding.
///
/// All variants are immediate caller-input errors; none are retryable.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("coordinate out of range: row {row}, col {col}")]
    OutOfRange { row: u8, col: u8 },

    #[error("no such cell: {0}")]
    NotFound(String),

    #[error("malformed board document: {0}")]
    MalformedDocument(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
