//! Implements game-level logic on top of [`Board`].
//!
//! For correctness, this higher-level interface is preferred, but for
//! performance a search should drive [`Board`] directly.

use crate::board::Board;
use crate::color::Color;
use crate::square::{ParseSquareError, Square, SquareSet};
use derive_more::{Display, Error};
use std::fmt;

/// An action in a game: place a disc or pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Square),
    Pass,
}

impl From<Square> for Move {
    fn from(square: Square) -> Self {
        Self::Place(square)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(square) => fmt::Display::fmt(square, f),
            Move::Pass => f.write_str("PASS"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
#[display(fmt = "invalid move notation")]
pub struct ParseMoveError;

impl From<ParseSquareError> for ParseMoveError {
    fn from(_: ParseSquareError) -> Self {
        ParseMoveError
    }
}

/// Parse a move from square notation ("D3") or "PASS".
impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("pass") {
            return Ok(Move::Pass);
        }
        Ok(Move::Place(s.parse()?))
    }
}

/// Reasons [`Game::apply`] refuses a move.
#[derive(Clone, Copy, Debug, PartialEq, Display, Error)]
pub enum IllegalMoveError {
    #[display(fmt = "the game is already over")]
    GameOver,
    #[display(fmt = "placing there captures nothing")]
    NoCapture,
    #[display(fmt = "cannot pass while a legal move exists")]
    PassWithMoves,
}

/// The complete state of a game: the discs, whose turn it is, and whether
/// the previous turn was a pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    to_move: Color,
    just_passed: bool,
}

impl Default for Game {
    /// The standard start, black to move.
    fn default() -> Self {
        Self::new(Board::new(), Color::default())
    }
}

impl Game {
    pub fn new(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            just_passed: false,
        }
    }

    #[inline]
    pub fn board(self) -> Board {
        self.board
    }

    /// The color whose turn it is.
    #[inline]
    pub fn to_move(self) -> Color {
        self.to_move
    }

    #[inline]
    pub fn just_passed(self) -> bool {
        self.just_passed
    }

    /// The squares the side to move may play. Empty if it must pass.
    #[inline]
    pub fn legal_moves(self) -> SquareSet {
        self.board.legal_moves(self.to_move)
    }

    /// True when neither color can place a disc.
    pub fn is_finished(self) -> bool {
        self.board.legal_moves(self.to_move).is_empty()
            && self.board.legal_moves(!self.to_move).is_empty()
    }

    /// Play `mv` for the side to move, rejecting it if it breaks the rules.
    pub fn apply(self, mv: Move) -> Result<Self, IllegalMoveError> {
        if self.is_finished() {
            return Err(IllegalMoveError::GameOver);
        }

        let moves = self.legal_moves();
        match mv {
            Move::Pass if !moves.is_empty() => Err(IllegalMoveError::PassWithMoves),
            Move::Pass => {
                log::debug!("{} passes", self.to_move);
                Ok(Self {
                    board: self.board,
                    to_move: !self.to_move,
                    just_passed: true,
                })
            }
            Move::Place(square) if !moves.contains(square) => Err(IllegalMoveError::NoCapture),
            Move::Place(square) => {
                let mut board = self.board;
                board.apply_move(self.to_move, square);

                let next = Self {
                    board,
                    to_move: !self.to_move,
                    just_passed: false,
                };
                if next.is_finished() {
                    log::debug!("game over after {} plays {}", self.to_move, square);
                }
                Ok(next)
            }
        }
    }

    /// Disc count of white minus disc count of black.
    pub fn disc_difference(self) -> i8 {
        self.board.count(Color::White) as i8 - self.board.count(Color::Black) as i8
    }

    /// The color with more discs once the game is over. `None` for a draw
    /// or an unfinished game.
    pub fn winner(self) -> Option<Color> {
        if !self.is_finished() {
            return None;
        }

        match self.disc_difference() {
            d if d > 0 => Some(Color::White),
            d if d < 0 => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.to_move)?;
        if self.just_passed {
            f.write_str(" (last move was a pass)")?;
        }
        Ok(())
    }
}
