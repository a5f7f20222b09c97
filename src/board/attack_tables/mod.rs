//! Attack tables for move generation.
//!
//! Leaper masks (knight, king, pawn) are direct per-square lookups. Sliding
//! pieces use magic bitboards: the relevant occupancy of a square is hashed by a
//! per-square multiplier into a dense table filled once with ray-walk attacks.
//! All tables live in one process-wide [`AttackTables`] built lazily on first
//! use and immutable afterwards.

#![allow(clippy::needless_range_loop)] // Index loops are clearer for board coordinates

mod leapers;
mod magics;

use once_cell::sync::Lazy;

use super::types::{Bitboard, Color, Square};
use magics::{BISHOP_MAGICS, ROOK_MAGICS};

/// Sliding piece family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Slider {
    Bishop,
    Rook,
}

impl Slider {
    const fn directions(self) -> [(i8, i8); 4] {
        match self {
            Slider::Bishop => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
            Slider::Rook => [(1, 0), (-1, 0), (0, 1), (0, -1)],
        }
    }
}

/// Magic lookup for one slider type.
pub(crate) struct MagicTable {
    masks: [Bitboard; 64],
    magics: [u64; 64],
    bits: [u8; 64],
    offsets: [usize; 64],
    attacks: Vec<Bitboard>,
}

impl MagicTable {
    fn build(slider: Slider, magics: &[u64; 64]) -> Self {
        let mut masks = [Bitboard::EMPTY; 64];
        let mut bits = [0u8; 64];
        let mut offsets = [0usize; 64];
        let mut total = 0usize;
        for sq in 0..64 {
            masks[sq] = relevant_mask(slider, Square::from_index(sq as u8));
            bits[sq] = masks[sq].popcount() as u8;
            offsets[sq] = total;
            total += 1 << bits[sq];
        }

        let mut attacks = vec![Bitboard::EMPTY; total];
        for sq in 0..64 {
            let square = Square::from_index(sq as u8);
            for index in 0..(1usize << bits[sq]) {
                let occupancy = occupancy_from_index(index, masks[sq]);
                let key = magic_index(occupancy, magics[sq], bits[sq]);
                attacks[offsets[sq] + key] = ray_attacks(slider, square, occupancy);
            }
        }

        MagicTable {
            masks,
            magics: *magics,
            bits,
            offsets,
            attacks,
        }
    }

    #[inline]
    fn attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        let i = sq.as_usize();
        let key = magic_index(occupancy & self.masks[i], self.magics[i], self.bits[i]);
        self.attacks[self.offsets[i] + key]
    }

    #[cfg(test)]
    pub(crate) fn mask(&self, sq: Square) -> Bitboard {
        self.masks[sq.as_usize()]
    }

    #[cfg(test)]
    pub(crate) fn relevant_bits(&self, sq: Square) -> u8 {
        self.bits[sq.as_usize()]
    }

    #[cfg(any(test, feature = "logging"))]
    pub(crate) fn len(&self) -> usize {
        self.attacks.len()
    }
}

#[inline]
fn magic_index(relevant: Bitboard, magic: u64, bits: u8) -> usize {
    (relevant.0.wrapping_mul(magic) >> (64 - bits)) as usize
}

/// Every precomputed attack table.
pub struct AttackTables {
    knight: [Bitboard; 64],
    king: [Bitboard; 64],
    pawn: [[Bitboard; 64]; 2],
    pub(crate) bishop: MagicTable,
    pub(crate) rook: MagicTable,
}

impl AttackTables {
    fn new() -> Self {
        let tables = AttackTables {
            knight: leapers::build_knight_table(),
            king: leapers::build_king_table(),
            pawn: leapers::build_pawn_table(),
            bishop: MagicTable::build(Slider::Bishop, &BISHOP_MAGICS),
            rook: MagicTable::build(Slider::Rook, &ROOK_MAGICS),
        };
        #[cfg(feature = "logging")]
        log::debug!(
            "attack tables built: {} rook entries, {} bishop entries",
            tables.rook.len(),
            tables.bishop.len()
        );
        tables
    }
}

static ATTACKS: Lazy<AttackTables> = Lazy::new(AttackTables::new);

/// Build the attack tables now instead of on the first lookup.
///
/// Calling this is optional; it only moves the one-time construction cost to a
/// predictable point, such as program start-up.
pub fn init_attack_tables() {
    Lazy::force(&ATTACKS);
}

/// The shared, immutable attack tables.
#[cfg(test)]
pub(crate) fn tables() -> &'static AttackTables {
    &ATTACKS
}

#[inline]
#[must_use]
pub fn knight_attacks(sq: Square) -> Bitboard {
    ATTACKS.knight[sq.as_usize()]
}

#[inline]
#[must_use]
pub fn king_attacks(sq: Square) -> Bitboard {
    ATTACKS.king[sq.as_usize()]
}

/// Squares attacked by a pawn of `color` standing on `sq`.
#[inline]
#[must_use]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    ATTACKS.pawn[color.index()][sq.as_usize()]
}

#[inline]
#[must_use]
pub fn bishop_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ATTACKS.bishop.attacks(sq, occupancy)
}

#[inline]
#[must_use]
pub fn rook_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    ATTACKS.rook.attacks(sq, occupancy)
}

#[inline]
#[must_use]
pub fn queen_attacks(sq: Square, occupancy: Bitboard) -> Bitboard {
    bishop_attacks(sq, occupancy) | rook_attacks(sq, occupancy)
}

/// Walk each ray from `sq` until the board edge or the first blocker, which is
/// included.
pub(crate) fn ray_attacks(slider: Slider, sq: Square, occupancy: Bitboard) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for (dr, df) in slider.directions() {
        let mut r = sq.rank() as i8 + dr;
        let mut f = sq.file() as i8 + df;
        while (0..8).contains(&r) && (0..8).contains(&f) {
            let target = Square::new(r as u8, f as u8);
            attacks |= target.bitboard();
            if occupancy.contains(target) {
                break;
            }
            r += dr;
            f += df;
        }
    }
    attacks
}

/// Ray squares whose occupancy can change the attack set: every ray square
/// except the last one before the edge.
pub(crate) fn relevant_mask(slider: Slider, sq: Square) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for (dr, df) in slider.directions() {
        let mut r = sq.rank() as i8 + dr;
        let mut f = sq.file() as i8 + df;
        while (0..8).contains(&(r + dr)) && (0..8).contains(&(f + df)) {
            mask |= Square::new(r as u8, f as u8).bitboard();
            r += dr;
            f += df;
        }
    }
    mask
}

/// Expand the low bits of `index` onto the set squares of `mask`, lowest
/// square first.
pub(crate) fn occupancy_from_index(mut index: usize, mask: Bitboard) -> Bitboard {
    let mut result = Bitboard::EMPTY;
    for sq in mask.iter() {
        if index & 1 != 0 {
            result |= sq.bitboard();
        }
        index >>= 1;
    }
    result
}
