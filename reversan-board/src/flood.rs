//! Directional flood-fill shared by move generation and capture computation.
//!
//! The eight compass directions are folded into four lanes, one per shift
//! magnitude, and every lane is stepped once with a left shift and once with
//! a right shift:
//!
//! | lane | magnitude | SHL | SHR | opponent mask |
//! |------|-----------|-----|-----|---------------|
//! | 0    | 1         | W   | E   | no A/H files  |
//! | 1    | 7         | NE  | SW  | no A/H files  |
//! | 2    | 8         | N   | S   | all squares   |
//! | 3    | 9         | NW  | SE  | no A/H files  |
//!
//! From a seed set, each lane grows a run of consecutive opponent discs and
//! then takes one more unmasked step: the frontier. Legal moves are empty
//! frontier squares; a run is captured when its frontier holds a disc of the
//! playing color.
//!
//! The algorithm is written once against [`Lanes`]. The backend is chosen at
//! build time: four unrolled `u64`s by default, `packed_simd::u64x4` with the
//! `simd` feature. All functions here are unchecked and give meaningless
//! results if the two colors overlap.

use crate::bitboard::Bitboard;
use std::ops::{BitAnd, BitOr, Shl, Shr};

/// Shift magnitude of each lane: W/E, NE/SW, N/S, NW/SE.
const SHIFTS: [u64; 4] = [1, 7, 8, 9];

/// Opponent mask of each lane. Only the vertical lane cannot wrap around an edge.
const MASKS: [u64; 4] = [
    Bitboard::NO_WRAP.0,
    Bitboard::NO_WRAP.0,
    Bitboard::FULL.0,
    Bitboard::NO_WRAP.0,
];

/// Steps taken after the first one. A bracketed run on an 8-square line
/// holds at most 6 opponent discs.
const EXTRA_STEPS: usize = 5;

/// Four `u64` lanes stepped in lockstep.
pub trait Lanes:
    Copy
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Shl<Self, Output = Self>
    + Shr<Self, Output = Self>
{
    fn splat(value: u64) -> Self;

    fn from_array(values: [u64; 4]) -> Self;

    /// Keep the lanes of `self` where `check` is nonzero and zero the others.
    fn select_nonzero(self, check: Self) -> Self;

    /// OR all lanes together.
    fn reduce_or(self) -> u64;
}

/// Portable backend: four `u64`s, unrolled by hand.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Scalar([u64; 4]);

impl BitAnd for Scalar {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] & b[0], a[1] & b[1], a[2] & b[2], a[3] & b[3]])
    }
}

impl BitOr for Scalar {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] | b[0], a[1] | b[1], a[2] | b[2], a[3] | b[3]])
    }
}

impl Shl for Scalar {
    type Output = Self;

    #[inline(always)]
    fn shl(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] << b[0], a[1] << b[1], a[2] << b[2], a[3] << b[3]])
    }
}

impl Shr for Scalar {
    type Output = Self;

    #[inline(always)]
    fn shr(self, rhs: Self) -> Self {
        let (a, b) = (self.0, rhs.0);
        Self([a[0] >> b[0], a[1] >> b[1], a[2] >> b[2], a[3] >> b[3]])
    }
}

impl Lanes for Scalar {
    #[inline(always)]
    fn splat(value: u64) -> Self {
        Self([value; 4])
    }

    #[inline(always)]
    fn from_array(values: [u64; 4]) -> Self {
        Self(values)
    }

    #[inline(always)]
    fn select_nonzero(self, check: Self) -> Self {
        // All-ones where the check lane is set, zero otherwise.
        let keep = |lane: u64| 0u64.wrapping_sub((lane != 0) as u64);
        let (a, c) = (self.0, check.0);
        Self([
            a[0] & keep(c[0]),
            a[1] & keep(c[1]),
            a[2] & keep(c[2]),
            a[3] & keep(c[3]),
        ])
    }

    #[inline(always)]
    fn reduce_or(self) -> u64 {
        let a = self.0;
        (a[0] | a[1]) | (a[2] | a[3])
    }
}

#[cfg(feature = "simd")]
impl Lanes for packed_simd::u64x4 {
    #[inline(always)]
    fn splat(value: u64) -> Self {
        packed_simd::u64x4::splat(value)
    }

    #[inline(always)]
    fn from_array(values: [u64; 4]) -> Self {
        packed_simd::u64x4::new(values[0], values[1], values[2], values[3])
    }

    #[inline(always)]
    fn select_nonzero(self, check: Self) -> Self {
        let zero = packed_simd::u64x4::splat(0);
        check.ne(zero).select(self, zero)
    }

    #[inline(always)]
    fn reduce_or(self) -> u64 {
        packed_simd::u64x4::or(self)
    }
}

/// The lane backend selected for this build.
#[cfg(feature = "simd")]
pub type Native = packed_simd::u64x4;

/// The lane backend selected for this build.
#[cfg(not(feature = "simd"))]
pub type Native = Scalar;

/// Runs of opponent discs grown from a seed set, and the square past each run.
#[derive(Clone, Copy, Debug)]
pub struct Fill<L> {
    /// Runs grown by SHL: W, NE, N, NW.
    pub run_left: L,
    /// Runs grown by SHR: E, SW, S, SE.
    pub run_right: L,
    /// One SHL step past `run_left`, not masked by the opponent.
    pub frontier_left: L,
    /// One SHR step past `run_right`, not masked by the opponent.
    pub frontier_right: L,
}

/// Grow runs of `opponent` discs outward from every disc of `seed`, in all
/// eight directions.
#[inline(always)]
pub fn fill<L: Lanes>(seed: Bitboard, opponent: Bitboard) -> Fill<L> {
    let shifts = L::from_array(SHIFTS);
    let opponent = L::from_array(MASKS) & L::splat(opponent.0);
    let seed = L::splat(seed.0);

    // First step: only opponent discs adjacent to the seed count.
    let mut run_left = (seed << shifts) & opponent;
    let mut run_right = (seed >> shifts) & opponent;

    // Extend through consecutive opponent discs.
    for _ in 0..EXTRA_STEPS {
        run_left = run_left | ((run_left << shifts) & opponent);
        run_right = run_right | ((run_right >> shifts) & opponent);
    }

    Fill {
        run_left,
        run_right,
        frontier_left: run_left << shifts,
        frontier_right: run_right >> shifts,
    }
}

/// Compute a mask of the legal moves for `playing` on the given lane backend.
#[inline(always)]
pub fn legal_moves_on<L: Lanes>(playing: Bitboard, opponent: Bitboard) -> Bitboard {
    let fill = fill::<L>(playing, opponent);
    let empties = !(playing | opponent);

    // Only emptiness matters: frontiers landing on discs or off the board drop out here.
    Bitboard((fill.frontier_left | fill.frontier_right).reduce_or()) & empties
}

/// Compute the discs captured when `playing` places the one-hot `seed`,
/// on the given lane backend.
#[inline(always)]
pub fn captures_on<L: Lanes>(
    seed: Bitboard,
    playing: Bitboard,
    opponent: Bitboard,
) -> Bitboard {
    let fill = fill::<L>(seed, opponent);
    let playing = L::splat(playing.0);

    // A run is captured only if it is bracketed by one of our own discs.
    let captured_left = fill.run_left.select_nonzero(fill.frontier_left & playing);
    let captured_right = fill.run_right.select_nonzero(fill.frontier_right & playing);

    Bitboard((captured_left | captured_right).reduce_or())
}

/// Compute a mask of the legal moves for `playing` against `opponent`.
/// Undefined behavior if the two sets overlap.
#[inline]
pub fn legal_moves(playing: Bitboard, opponent: Bitboard) -> Bitboard {
    legal_moves_on::<Native>(playing, opponent)
}

/// Compute the opponent discs flipped when `playing` places a disc on the
/// one-hot `seed`. Undefined behavior if `seed` is not one-hot or the two
/// sets overlap.
#[inline]
pub fn captures(seed: Bitboard, playing: Bitboard, opponent: Bitboard) -> Bitboard {
    captures_on::<Native>(seed, playing, opponent)
}
