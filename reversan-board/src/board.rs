//! A fast, unchecked implementation of the board state and its operations.
//!
//! [`Board`] is a pair of [`Bitboard`]s and is `Copy`: a search forks one
//! board per branch and mutates each copy independently. Move generation and
//! move application are thin wrappers over [`flood`](crate::flood).

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::flood;
use crate::heuristic::{HeuristicTable, MOBILITY_WEIGHT};
use crate::square::{Square, SquareSet};
use crate::{utils, NUM_SQUARES};
use derive_more::{Display, Error};
use std::fmt;

/// Both colors' discs. The two bitboards never share a square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    white: Bitboard,
    black: Bitboard,
}

/// The fixed layouts a [`Board`] can be created from.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Position {
    /// The standard start: white on D4 and E5, black on E4 and D5.
    Initial,
    /// A mid-game layout, black to move.
    Test,
    /// A crowded late-game layout, black to move.
    Benchmark,
}

impl Position {
    pub const ALL: [Self; 3] = [Self::Initial, Self::Test, Self::Benchmark];

    /// The `(white, black)` bitboards of this layout.
    const fn bitboards(self) -> (u64, u64) {
        match self {
            Self::Initial => (0x0000001008000000, 0x0000000810000000),
            Self::Test => (0x80707e9000040000, 0x400000281c182000),
            Self::Benchmark => (0x2238af50e0528000, 0x080440281c2c3c7c),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initial => "initial",
            Self::Test => "test",
            Self::Benchmark => "benchmark",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
#[display(fmt = "unknown position name")]
pub struct ParsePositionError;

impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "initial" | "start" | "standard" => Ok(Self::Initial),
            "test" => Ok(Self::Test),
            "benchmark" | "bench" => Ok(Self::Benchmark),
            _ => {
                log::debug!("rejected position name {:?}", s);
                Err(ParsePositionError)
            }
        }
    }
}

/// Reasons a set of discs does not form a board.
#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
pub enum BoardError {
    #[display(fmt = "a square holds both a white and a black disc")]
    Overlap,
    #[display(fmt = "expected {} squares, found {}", NUM_SQUARES, len)]
    WrongLength { len: usize },
    #[display(fmt = "unknown square symbol {:?}", symbol)]
    UnknownSymbol { symbol: char },
}

impl Default for Board {
    /// Gets the standard starting layout.
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The standard starting layout.
    pub const fn new() -> Self {
        Self::make_initial(Position::Initial)
    }

    /// Construct one of the fixed layouts.
    pub const fn make_initial(position: Position) -> Self {
        let (white, black) = position.bitboards();
        Self {
            white: Bitboard(white),
            black: Bitboard(black),
        }
    }

    /// Construct a board from each color's discs.
    pub fn from_bitboards(white: Bitboard, black: Bitboard) -> Result<Self, BoardError> {
        if !white.is_disjoint(black) {
            return Err(BoardError::Overlap);
        }
        Ok(Self { white, black })
    }

    #[inline]
    pub fn white(self) -> Bitboard {
        self.white
    }

    #[inline]
    pub fn black(self) -> Bitboard {
        self.black
    }

    /// The discs of one color.
    #[inline]
    pub fn occupancy(self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Get a mask indicating where the occupied squares are.
    #[inline]
    pub fn occupied(self) -> Bitboard {
        self.white | self.black
    }

    /// Get a mask indicating where the empty squares are.
    #[inline]
    pub fn empty(self) -> Bitboard {
        !self.occupied()
    }

    /// Count the discs of one color.
    #[inline]
    pub fn count(self, color: Color) -> u8 {
        self.occupancy(color).count_occupied()
    }

    /// The same discs with their colors exchanged.
    #[inline]
    pub fn swap_colors(self) -> Self {
        Self {
            white: self.black,
            black: self.white,
        }
    }

    /// Split the board into `(playing, opponent)` discs for `color`.
    #[inline]
    fn split(self, color: Color) -> (Bitboard, Bitboard) {
        match color {
            Color::White => (self.white, self.black),
            Color::Black => (self.black, self.white),
        }
    }

    /// Get the squares where `color` may place a disc. An empty set means
    /// `color` must pass; detecting that is up to the caller.
    #[inline]
    pub fn legal_moves(self, color: Color) -> SquareSet {
        let (playing, opponent) = self.split(color);
        SquareSet::from(flood::legal_moves(playing, opponent))
    }

    /// Place a disc of `color` on `square` and flip every disc it captures.
    ///
    /// Unchecked: `square` must come from [`Board::legal_moves`] for the same
    /// color on this same board. Anything else silently corrupts the board.
    /// Debug builds assert this.
    #[inline]
    pub fn apply_move(&mut self, color: Color, square: Square) {
        debug_assert!(square.bitboard().is_onehot(), "move selector is not one-hot");
        debug_assert!(
            self.legal_moves(color).contains(square),
            "{} is not a legal move for {}",
            square,
            color
        );

        let (playing, opponent) = self.split(color);
        let seed = square.bitboard();
        let playing = playing | seed;
        let flips = flood::captures(seed, playing, opponent);

        let playing = playing | flips;
        let opponent = opponent ^ flips;

        match color {
            Color::White => {
                self.white = playing;
                self.black = opponent;
            }
            Color::Black => {
                self.black = playing;
                self.white = opponent;
            }
        }
    }

    /// Statically score the board with [`HeuristicTable::STANDARD`].
    /// Positive scores favor white.
    #[inline]
    pub fn evaluate(self) -> i32 {
        self.evaluate_with(&HeuristicTable::STANDARD)
    }

    /// Statically score the board as the weighted disc difference plus
    /// [`MOBILITY_WEIGHT`] times the legal-move difference, white minus black.
    pub fn evaluate_with(self, table: &HeuristicTable) -> i32 {
        let positional = self.positional_with(table);

        let white_moves = flood::legal_moves(self.white, self.black).count_occupied() as i32;
        let black_moves = flood::legal_moves(self.black, self.white).count_occupied() as i32;

        positional + MOBILITY_WEIGHT * (white_moves - black_moves)
    }

    /// The weighted disc difference alone, white minus black.
    #[inline]
    pub(crate) fn positional_with(self, table: &HeuristicTable) -> i32 {
        weighted_sum(self.white, table) - weighted_sum(self.black, table)
    }
}

/// Sum the weights of every square in `discs`.
#[inline]
fn weighted_sum(discs: Bitboard, table: &HeuristicTable) -> i32 {
    let mut remaining = u64::from(discs);
    let mut sum = 0;

    while remaining != 0 {
        sum += table.weight_at_bit(remaining.trailing_zeros());
        remaining &= remaining - 1;
    }

    sum
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(f, |square| {
            let square = square.bitboard();
            match (self.white.is_disjoint(square), self.black.is_disjoint(square)) {
                (false, true) => 'O',
                (true, false) => 'X',
                (true, true) => '-',
                (false, false) => '!',
            }
        })
    }
}

/// Parse a board from 64 squares in reading order: `X` black, `O` white,
/// `-` or `.` empty. Whitespace is ignored, so rows may sit on separate lines.
impl std::str::FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut white = 0u64;
        let mut black = 0u64;
        let mut len = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            if len < NUM_SQUARES {
                let bit = 1u64 << (NUM_SQUARES - 1 - len);
                match symbol {
                    'O' | 'o' => white |= bit,
                    'X' | 'x' => black |= bit,
                    '-' | '.' => {}
                    _ => {
                        log::debug!("rejected board layout {:?}", s);
                        return Err(BoardError::UnknownSymbol { symbol });
                    }
                }
            }
            len += 1;
        }

        if len != NUM_SQUARES {
            log::debug!("rejected board layout of {} squares", len);
            return Err(BoardError::WrongLength { len });
        }

        Self::from_bitboards(Bitboard(white), Bitboard(black))
    }
}
