pub mod board;
pub mod cell;
pub mod cells;
pub mod document;
pub(crate) mod layout;
pub mod types;

pub use board::Board;
pub use cell::Cell;
pub use cells::Cells;
pub use document::{BoardDocument, CellDocument, PieceDocument, SideDocument};
pub use types::{BoardError, Piece, PieceType, Side};
