//! The 64-bit occupancy set shared by every board operation.
//!
//! By convention, the MSB is the upper-left square (A1) and bits proceed in
//! row-major order, so a square at `(row, col)` lives at bit
//! `63 - (row * 8 + col)`. Shifting left by 1 moves every square one file
//! towards A, and shifting left by 8 moves it one rank towards 1.

use crate::{utils, NUM_SQUARES};
use derive_more::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, From, Into, Not,
};
use std::fmt::{self, Display, Formatter};

/// Holds a single bit per square of the board.
/// Wraps [`u64`] for efficient bit-twiddling, but avoids mixing with numerics.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    PartialOrd,
    Ord,
    Default,
    From,
    Into,
    BitAnd,
    BitAndAssign,
    BitOr,
    BitOrAssign,
    BitXor,
    BitXorAssign,
    Not,
)]
pub struct Bitboard(pub(crate) u64);

impl Bitboard {
    /// No squares.
    pub const EMPTY: Self = Self(0);

    /// Every square.
    pub const FULL: Self = Self(u64::MAX);

    /// Every square except the A and H files. Clips chains that would
    /// otherwise wrap across the left or right edge while shifting.
    pub const NO_WRAP: Self = Self(0x7E7E7E7E7E7E7E7E);

    /// The leftmost file.
    pub const A_FILE: Self = Self(0x8080808080808080);

    /// The rightmost file.
    pub const H_FILE: Self = Self(0x0101010101010101);

    /// Count the number of occupied squares.
    #[inline]
    pub fn count_occupied(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Count the number of empty squares.
    #[inline]
    pub fn count_empty(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Return true if no square is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return true if exactly one square is set.
    #[inline]
    pub fn is_onehot(self) -> bool {
        self.0.is_power_of_two()
    }

    /// Return true if `self` and `other` share no square.
    #[inline]
    pub fn is_disjoint(self, other: Self) -> bool {
        (self & other).is_empty()
    }
}

impl Display for Bitboard {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        utils::format_grid(f, |square| {
            if self.is_disjoint(square.bitboard()) {
                '.'
            } else {
                '#'
            }
        })
    }
}

/// Iterator for the bits in a [`Bitboard`], in reading order.
#[derive(Clone, Copy, Debug)]
pub struct Bits {
    remaining: usize,
    bitboard: Bitboard,
}

impl Iterator for Bits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bit = self.bitboard.0 & (1u64 << (self.remaining - 1)) != 0;
        self.remaining -= 1;

        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Bits {}

/// Iterate over the bits in row-major order, starting from A1.
impl IntoIterator for Bitboard {
    type Item = bool;
    type IntoIter = Bits;

    fn into_iter(self) -> Self::IntoIter {
        Bits {
            remaining: NUM_SQUARES,
            bitboard: self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let bitboard = Bitboard(0x0000001818000000);
        assert_eq!(bitboard.count_occupied(), 4);
        assert_eq!(bitboard.count_empty(), 60);
        assert!(!bitboard.is_empty());
        assert!(Bitboard::EMPTY.is_empty());
    }

    #[test]
    fn onehot() {
        assert!(Bitboard(1 << 17).is_onehot());
        assert!(!Bitboard(0b11).is_onehot());
        assert!(!Bitboard::EMPTY.is_onehot());
    }

    #[test]
    fn edge_masks_partition_files() {
        assert_eq!(
            Bitboard::NO_WRAP | Bitboard::A_FILE | Bitboard::H_FILE,
            Bitboard::FULL
        );
        assert!(Bitboard::NO_WRAP.is_disjoint(Bitboard::A_FILE));
        assert!(Bitboard::NO_WRAP.is_disjoint(Bitboard::H_FILE));
        assert_eq!(Bitboard::A_FILE.count_occupied(), 8);
    }

    #[test]
    fn bits_in_reading_order() {
        let bits: Vec<bool> = Bitboard(1 << 63).into_iter().collect();
        assert_eq!(bits.len(), NUM_SQUARES);
        assert!(bits[0]);
        assert!(bits[1..].iter().all(|&bit| !bit));
    }

    #[test]
    fn display_grid() {
        let expected = "   A B C D E F G H\n 1 # . . . . . . # \n 2 . . . . . . . . \
                        \n 3 . . . . . . . . \n 4 . . . . . . . . \n 5 . . . . . . . . \
                        \n 6 . . . . . . . . \n 7 . . . . . . . . \n 8 # . . . . . . # ";
        let corners = Bitboard((1 << 63) | (1 << 56) | (1 << 7) | 1);
        assert_eq!(corners.to_string(), expected);
    }
}
