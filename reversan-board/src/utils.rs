//! Text rendering shared by the board types.

use crate::square::Square;
use crate::EDGE_LENGTH;
use std::fmt::{self, Write};

/// Draw an 8x8 grid with files lettered across the top and ranks numbered
/// down the left, asking `symbol` for the character on each square.
pub fn format_grid(f: &mut fmt::Formatter<'_>, symbol: impl Fn(Square) -> char) -> fmt::Result {
    f.write_str("  ")?;
    for file in (b'A'..).take(EDGE_LENGTH) {
        f.write_char(' ')?;
        f.write_char(char::from(file))?;
    }

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            f.write_char(symbol(Square::from_coords(row, col)))?;
            f.write_char(' ')?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Diagonal;

    impl fmt::Display for Diagonal {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            format_grid(f, |square| {
                let (row, col) = square.to_coords();
                if row == col {
                    '\\'
                } else {
                    ' '
                }
            })
        }
    }

    #[test]
    fn grid_layout() {
        let text = Diagonal.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), EDGE_LENGTH + 1);
        assert_eq!(lines[0], "   A B C D E F G H");
        assert_eq!(lines[1], " 1 \\               ");
        assert_eq!(lines[3], " 3     \\           ");
        assert_eq!(lines[8], " 8               \\ ");
    }
}
