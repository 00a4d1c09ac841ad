//! Positional weights used by the static evaluator.

use crate::square::Square;
use crate::NUM_SQUARES;

/// Score added per legal move of advantage in mobility.
pub const MOBILITY_WEIGHT: i32 = 10;

/// A signed weight per square, stored in reading order (A1, B1, ..., H8).
///
/// Square `(row, col)` reads entry `row * 8 + col`. For a [`Square`] this is
/// [`Square::reading_index`], i.e. `63 - bit index`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct HeuristicTable([i8; NUM_SQUARES]);

impl HeuristicTable {
    /// The table used by [`Board::evaluate`](crate::Board::evaluate).
    /// Symmetric under every rotation and reflection of the board, so the
    /// bit-order convention cannot flip its meaning.
    #[rustfmt::skip]
    pub const STANDARD: Self = Self([
        100, -20,  10,   5,   5,  10, -20, 100,
        -20, -50,  -2,  -2,  -2,  -2, -50, -20,
         10,  -2,  -1,  -1,  -1,  -1,  -2,  10,
          5,  -2,  -1,  -1,  -1,  -1,  -2,   5,
          5,  -2,  -1,  -1,  -1,  -1,  -2,   5,
         10,  -2,  -1,  -1,  -1,  -1,  -2,  10,
        -20, -50,  -2,  -2,  -2,  -2, -50, -20,
        100, -20,  10,   5,   5,  10, -20, 100,
    ]);

    /// Build a table from weights in reading order.
    pub const fn new(weights: [i8; NUM_SQUARES]) -> Self {
        Self(weights)
    }

    /// The weight of `square`.
    #[inline]
    pub fn weight(&self, square: Square) -> i8 {
        self.0[square.reading_index()]
    }

    /// The weight at bit index `index` (0 is H8).
    #[inline]
    pub(crate) fn weight_at_bit(&self, index: u32) -> i32 {
        self.0[63 - index as usize] as i32
    }

    /// The same table with every weight negated.
    /// Panics if a weight is `i8::MIN`.
    pub fn negated(&self) -> Self {
        let mut weights = self.0;
        for weight in weights.iter_mut() {
            *weight = weight
                .checked_neg()
                .expect("i8::MIN weight has no negation");
        }
        Self(weights)
    }

    /// The weights in reading order.
    pub fn weights(&self) -> &[i8; NUM_SQUARES] {
        &self.0
    }
}

impl Default for HeuristicTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn standard_is_symmetric() {
        let w = HeuristicTable::STANDARD.weights();
        for row in 0..8 {
            for col in 0..8 {
                let weight = w[row * 8 + col];
                assert_eq!(weight, w[row * 8 + (7 - col)]);
                assert_eq!(weight, w[(7 - row) * 8 + col]);
                assert_eq!(weight, w[col * 8 + row]);
            }
        }
    }

    #[test]
    fn weight_lookup() {
        let table = HeuristicTable::STANDARD;
        assert_eq!(table.weight(Square::from_str("A1").unwrap()), 100);
        assert_eq!(table.weight(Square::from_str("B2").unwrap()), -50);
        assert_eq!(table.weight(Square::from_str("D4").unwrap()), -1);
        assert_eq!(table.weight_at_bit(0), 100);
    }

    #[test]
    #[should_panic(expected = "no negation")]
    fn negating_min_weight_panics() {
        let mut weights = [0i8; NUM_SQUARES];
        weights[5] = i8::MIN;
        HeuristicTable::new(weights).negated();
    }

    #[test]
    fn negation() {
        let negated = HeuristicTable::STANDARD.negated();
        assert_eq!(negated.weights()[0], -100);
        assert_eq!(negated.negated(), HeuristicTable::STANDARD);
    }
}
