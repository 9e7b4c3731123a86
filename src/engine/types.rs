use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Index for array lookups: White=0, Black=1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row delta for a pawn advance. Row 0 is rank 8, so White moves
    /// toward smaller rows.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which this side's pawns start.
    #[inline]
    pub const fn pawn_home_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Unicode chess glyph for this kind and color (e.g. '♔', '♟').
    pub fn glyph(self, color: Color) -> char {
        match (color, self) {
            (Color::White, PieceKind::King) => '\u{2654}',
            (Color::White, PieceKind::Queen) => '\u{2655}',
            (Color::White, PieceKind::Rook) => '\u{2656}',
            (Color::White, PieceKind::Bishop) => '\u{2657}',
            (Color::White, PieceKind::Knight) => '\u{2658}',
            (Color::White, PieceKind::Pawn) => '\u{2659}',
            (Color::Black, PieceKind::King) => '\u{265A}',
            (Color::Black, PieceKind::Queen) => '\u{265B}',
            (Color::Black, PieceKind::Rook) => '\u{265C}',
            (Color::Black, PieceKind::Bishop) => '\u{265D}',
            (Color::Black, PieceKind::Knight) => '\u{265E}',
            (Color::Black, PieceKind::Pawn) => '\u{265F}',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "king"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Pawn => write!(f, "pawn"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A square address on the board: `(row, col)`, each in `[0,8)`.
///
/// Row 0 is rank 8 (Black's back rank), row 7 is rank 1. A `Pos` is always
/// in bounds — out-of-range pairs are rejected at construction, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    row: u8,
    col: u8,
}

impl Pos {
    /// Checked constructor. Out-of-range input is an `OutOfBounds` error;
    /// callers stepping off the board treat it as "stop", not a failure.
    pub fn try_new(row: i8, col: i8) -> Result<Self, ChessError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Pos {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessError::OutOfBounds { row, col })
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Apply a `(Δrow, Δcol)` delta, yielding `None` off the board.
    #[inline]
    pub fn offset(self, delta: (i8, i8)) -> Option<Pos> {
        Pos::try_new(self.row as i8 + delta.0, self.col as i8 + delta.1).ok()
    }

    /// Parse algebraic notation like "e4" (lowercase file, rank digit).
    pub fn from_coord(s: &str) -> Result<Self, ChessError> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidCoordinate(s.to_string()));
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file < 8 && rank < 8 {
            Ok(Pos {
                row: 7 - rank,
                col: file,
            })
        } else {
            Err(ChessError::InvalidCoordinate(s.to_string()))
        }
    }

    /// Convert to algebraic notation like "e4".
    pub fn to_coord(self) -> String {
        let file = (b'a' + self.col) as char;
        let rank = (b'1' + (7 - self.row)) as char;
        format!("{file}{rank}")
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coord())
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the chess engine.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ChessError {
    #[error("invalid coordinate: {0:?}")]
    InvalidCoordinate(String),

    #[error("position out of bounds: ({row}, {col})")]
    OutOfBounds { row: i8, col: i8 },

    #[error("piece is not placed on a board")]
    UnplacedPiece,

    #[error("illegal move: {from} -> {to}: {reason}")]
    IllegalMove {
        from: String,
        to: String,
        reason: String,
    },

    #[error("it is not {attempted}'s turn to move")]
    OutOfTurn { attempted: Color },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn pawn_direction_and_home_row() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.pawn_home_row(), 6);
        assert_eq!(Color::Black.pawn_home_row(), 1);
    }

    #[test]
    fn pos_from_coord() {
        // a1 is the bottom-left corner: row 7, col 0.
        let a1 = Pos::from_coord("a1").unwrap();
        assert_eq!((a1.row(), a1.col()), (7, 0));
        // h8 is the top-right corner: row 0, col 7.
        let h8 = Pos::from_coord("h8").unwrap();
        assert_eq!((h8.row(), h8.col()), (0, 7));
        let e4 = Pos::from_coord("e4").unwrap();
        assert_eq!((e4.row(), e4.col()), (4, 4));
    }

    #[test]
    fn pos_from_coord_invalid() {
        for s in ["", "a", "a9", "i1", "A1", "e44", "4e"] {
            assert_eq!(
                Pos::from_coord(s),
                Err(ChessError::InvalidCoordinate(s.to_string()))
            );
        }
    }

    #[test]
    fn coord_bijection_all_squares() {
        for row in 0..8i8 {
            for col in 0..8i8 {
                let pos = Pos::try_new(row, col).unwrap();
                let coord = pos.to_coord();
                assert_eq!(Pos::from_coord(&coord).unwrap(), pos);
            }
        }
    }

    #[test]
    fn try_new_out_of_bounds() {
        for (row, col) in [(-1, 0), (0, -1), (8, 0), (0, 8), (127, 127)] {
            assert_eq!(
                Pos::try_new(row, col),
                Err(ChessError::OutOfBounds { row, col })
            );
        }
    }

    #[test]
    fn offset_stays_in_bounds() {
        let a1 = Pos::from_coord("a1").unwrap();
        assert_eq!(a1.offset((0, -1)), None); // off the a-file
        assert_eq!(a1.offset((1, 0)), None); // below rank 1
        assert_eq!(a1.offset((-1, 0)), Some(Pos::from_coord("a2").unwrap()));
    }

    #[test]
    fn glyphs_distinct_per_side() {
        for kind in PieceKind::ALL {
            assert_ne!(kind.glyph(Color::White), kind.glyph(Color::Black));
        }
        assert_eq!(PieceKind::King.glyph(Color::White), '♔');
        assert_eq!(PieceKind::Pawn.glyph(Color::Black), '♟');
    }

    #[test]
    fn pos_display_is_coordinate() {
        assert_eq!(Pos::from_coord("d8").unwrap().to_string(), "d8");
    }
}
