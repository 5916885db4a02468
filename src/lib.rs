//! Chess board model: an 8×8 grid of addressable cells, piece placement
//! (classic and shuffle-chess starting positions), coordinate- and
//! adjacency-based lookup, and a serde document round-trip of board state.
//!
//! This crate deliberately stops at the board: move generation, legality,
//! and game flow belong to whatever engine is built on top of it.

pub mod model;

pub use model::{Board, BoardDocument, BoardError, Cell, Cells, Piece, PieceType, Side};
