//! Back-rank piece layouts.
//!
//! A layout is the 8-slot arrangement of non-pawn pieces, slot 0..7 mapping
//! to columns a..h. Both sides use the same layout for a given game.

use rand::Rng;

use crate::model::types::PieceType;

/// The classic arrangement: R N B Q K B N R.
pub(crate) const CLASSIC: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// Generate a shuffle-chess layout.
///
/// Invariants guaranteed for every output: the two bishops sit on
/// opposite-colored squares, and the king sits strictly between the two
/// rooks.
pub(crate) fn shuffled(rng: &mut impl Rng) -> [PieceType; 8] {
    let mut slots: [Option<PieceType>; 8] = [None; 8];

    // One bishop on an even slot, one on an odd slot. Adjacent columns
    // alternate color, so the pair always splits light/dark.
    slots[rng.gen_range(0..3) * 2] = Some(PieceType::Bishop);
    slots[rng.gen_range(0..3) * 2 + 1] = Some(PieceType::Bishop);

    // Queen and knights: draw from the still-open slots, shrinking the
    // candidate list after each placement.
    let mut open: Vec<usize> = (0..8).filter(|&i| slots[i].is_none()).collect();
    for kind in [PieceType::Queen, PieceType::Knight, PieceType::Knight] {
        let picked = open.swap_remove(rng.gen_range(0..open.len()));
        slots[picked] = Some(kind);
    }

    // The last three open slots get rook, king, rook from the highest index
    // down, which places the king strictly between the rooks.
    open.sort_unstable();
    slots[open[2]] = Some(PieceType::Rook);
    slots[open[1]] = Some(PieceType::King);
    slots[open[0]] = Some(PieceType::Rook);

    slots.map(|slot| slot.expect("all layout slots filled"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
