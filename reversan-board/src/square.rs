//! Code for working with [`Square`]s on the board.

use crate::bitboard::Bitboard;
use crate::EDGE_LENGTH;
use derive_more::{Display, Error, From, Into};
use std::fmt::{self, Formatter, Write};

/// A single square of the board, stored as a one-hot [`Bitboard`].
/// This is the move selector accepted by [`Board::apply_move`](crate::Board::apply_move).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Into)]
pub struct Square(Bitboard);

/// A set of squares, such as the legal moves out of a position.
/// Iterating yields the member [`Square`]s from H8 towards A1.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord, From, Into)]
pub struct SquareSet(Bitboard);

impl Square {
    /// Convert from a one-hot [`Bitboard`].
    #[inline]
    pub fn from_onehot(bitboard: Bitboard) -> Self {
        assert!(bitboard.is_onehot());
        Self::from_onehot_unchecked(bitboard)
    }

    /// Convert from a one-hot [`Bitboard`] without checking this invariant.
    /// Results in inconsistent state if `bitboard` has other than one square set.
    #[inline]
    pub fn from_onehot_unchecked(bitboard: Bitboard) -> Self {
        Self(bitboard)
    }

    /// Convert from a bit index: 0 is H8, 63 is A1.
    #[inline]
    pub fn from_index(index: u8) -> Self {
        assert!(index < 64);
        Self(Bitboard(1 << index))
    }

    /// Convert into a bit index: 0 is H8, 63 is A1.
    #[inline]
    pub fn to_index(self) -> u8 {
        self.0 .0.trailing_zeros() as u8
    }

    /// Convert from zero-based row (rank 1 is row 0) and column (file A is column 0).
    pub fn from_coords(row: usize, col: usize) -> Self {
        assert!(row < EDGE_LENGTH && col < EDGE_LENGTH);
        let index = (EDGE_LENGTH * EDGE_LENGTH - 1) - (row * EDGE_LENGTH + col);
        Self::from_index(index as u8)
    }

    /// Get the zero-based `(row, col)` coordinates.
    pub fn to_coords(self) -> (usize, usize) {
        let reading_index = (EDGE_LENGTH * EDGE_LENGTH - 1) - self.to_index() as usize;
        (reading_index / EDGE_LENGTH, reading_index % EDGE_LENGTH)
    }

    /// Position of this square in reading order: 0 is A1, 63 is H8.
    #[inline]
    pub fn reading_index(self) -> usize {
        63 - self.to_index() as usize
    }

    /// The one-hot bitboard of this square.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        self.0
    }
}

/// Convert this [`Square`] into algebraic notation ("D3").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_coords();
        let row_str = "12345678".chars().nth(row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid square notation")]
pub struct ParseSquareError;

/// Build a [`Square`] from 1-indexed algebraic notation ("A4"), case-insensitive.
impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col_str = chars.next().ok_or(ParseSquareError)?.to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(ParseSquareError)?;
        let row = chars
            .next()
            .ok_or(ParseSquareError)?
            .to_digit(10)
            .ok_or(ParseSquareError)? as usize;

        if row == 0 || row > EDGE_LENGTH || chars.next().is_some() {
            log::debug!("rejected square notation {:?}", s);
            return Err(ParseSquareError);
        }

        Ok(Self::from_coords(row - 1, col))
    }
}

impl SquareSet {
    /// Returns whether `square` is in this set.
    #[inline]
    pub fn contains(self, square: Square) -> bool {
        !(self.0 & square.0).is_empty()
    }

    /// Returns whether this set holds no square. An empty legal-move set means a pass.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }

    /// The underlying bitboard.
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        self.0
    }
}

impl ExactSizeIterator for SquareSet {
    fn len(&self) -> usize {
        self.0.count_occupied() as usize
    }
}

impl Iterator for SquareSet {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.0.is_empty() {
            return None;
        }

        // Isolate the lowest set bit.
        let lowest = Bitboard(self.0 .0 & self.0 .0.wrapping_neg());
        self.0 ^= lowest;

        Some(Square::from_onehot_unchecked(lowest))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let string = self
            .into_iter()
            .map(|square| square.to_string())
            .collect::<Vec<String>>()
            .join(", ");

        f.write_fmt(format_args!("[{}]", string))
    }
}
