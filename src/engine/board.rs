//! Board: the single source of truth for occupancy and move legality.
//!
//! Squares hold an `Occupant` — a real piece or the `Empty` sentinel — so
//! color and occupancy queries never special-case emptiness. The board owns
//! every piece; legality above raw geometry (self-check prevention) lives
//! here because only the board has global visibility.

use crate::engine::piece::Piece;
use crate::engine::types::{ChessError, Color, PieceKind, Pos};

// =========================================================================
// Occupant
// =========================================================================

/// What a square holds: a piece, or the empty-square sentinel.
///
/// The sentinel answers the same queries a piece does; its color is `None`,
/// so it never compares equal to either side.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Occupant {
    Piece(Piece),
    #[default]
    Empty,
}

impl Occupant {
    /// The occupant's side, `None` for the sentinel.
    #[inline]
    pub fn color(&self) -> Option<Color> {
        match self {
            Occupant::Piece(p) => Some(p.color()),
            Occupant::Empty => None,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Occupant::Empty)
    }

    /// The piece, if any.
    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Occupant::Piece(p) => Some(p),
            Occupant::Empty => None,
        }
    }
}

// =========================================================================
// Board
// =========================================================================

/// Back-rank layout, queen on d.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 grid of occupants.
#[derive(Clone, Debug)]
pub struct Board {
    squares: [[Occupant; 8]; 8],
}

impl Board {
    /// An empty board (all sentinels).
    pub fn new() -> Self {
        Board {
            squares: std::array::from_fn(|_| std::array::from_fn(|_| Occupant::Empty)),
        }
    }

    /// A board in the standard starting position.
    pub fn starting() -> Self {
        let mut board = Board::new();
        board.reset();
        board
    }

    /// Repopulate the standard 32-piece starting position, clearing
    /// everything else to the sentinel.
    pub fn reset(&mut self) {
        for row in &mut self.squares {
            for square in row {
                *square = Occupant::Empty;
            }
        }
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as i8;
            // Black's back rank is row 0, White's is row 7.
            self.place(
                Piece::new(Color::Black, kind),
                Pos::try_new(0, col).expect("back rank square"),
            );
            self.place(
                Piece::new(Color::White, kind),
                Pos::try_new(7, col).expect("back rank square"),
            );
            self.place(
                Piece::new(Color::Black, PieceKind::Pawn),
                Pos::try_new(1, col).expect("pawn rank square"),
            );
            self.place(
                Piece::new(Color::White, PieceKind::Pawn),
                Pos::try_new(6, col).expect("pawn rank square"),
            );
        }
    }

    /// Whether a raw `(row, col)` pair addresses a square.
    #[inline]
    pub fn in_bounds(row: i8, col: i8) -> bool {
        (0..8).contains(&row) && (0..8).contains(&col)
    }

    /// The occupant of a square. Never absent: empty squares answer with
    /// the sentinel. `Pos` is in bounds by construction.
    #[inline]
    pub fn occupant_at(&self, pos: Pos) -> &Occupant {
        &self.squares[pos.row() as usize][pos.col() as usize]
    }

    /// Attach a piece to a square, replacing whatever was there.
    pub fn place(&mut self, mut piece: Piece, pos: Pos) {
        piece.set_pos(Some(pos));
        self.squares[pos.row() as usize][pos.col() as usize] = Occupant::Piece(piece);
    }

    /// All placed pieces of one side, in row-major order (stable, so
    /// rendering is deterministic).
    pub fn pieces_of(&self, color: Color) -> Vec<&Piece> {
        self.squares
            .iter()
            .flatten()
            .filter_map(Occupant::piece)
            .filter(|p| p.color() == color)
            .collect()
    }

    // -----------------------------------------------------------------
    // Coordinate bijection
    // -----------------------------------------------------------------

    /// Parse an algebraic coordinate into a position.
    pub fn position_for(&self, coord: &str) -> Result<Pos, ChessError> {
        Pos::from_coord(coord)
    }

    /// Render a position as an algebraic coordinate.
    pub fn coordinate_for(&self, pos: Pos) -> String {
        pos.to_coord()
    }

    // -----------------------------------------------------------------
    // Legality
    // -----------------------------------------------------------------

    /// Whether `from -> to` is a chess-legal move: the destination must be
    /// one of the mover's raw geometric moves (which already enforces
    /// bounds, blocking, and same-color rejection), and the move must not
    /// leave the mover's own king under attack.
    pub fn is_legal_move(&self, from: Pos, to: Pos) -> bool {
        let Some(piece) = self.occupant_at(from).piece() else {
            return false;
        };
        let Ok(raw) = piece.raw_moves(self) else {
            return false;
        };
        if !raw.contains(&to) {
            return false;
        }
        !self.move_exposes_king(from, to, piece.color())
    }

    /// Legal destination coordinates for the piece at `coord`. An empty
    /// square has no moves.
    pub fn valid_moves_for(&self, coord: &str) -> Result<Vec<String>, ChessError> {
        let pos = self.position_for(coord)?;
        match self.occupant_at(pos).piece() {
            Some(piece) => Ok(piece
                .valid_moves(self)?
                .into_iter()
                .map(|p| p.to_coord())
                .collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Simulate the move on a scratch copy and test whether `color`'s king
    /// ends up attacked. A board without that king (test setups) is never
    /// considered exposed.
    fn move_exposes_king(&self, from: Pos, to: Pos, color: Color) -> bool {
        let mut scratch = self.clone();
        scratch.apply_move(from, to);
        match scratch.king_pos(color) {
            Some(king) => scratch.is_attacked(king, !color),
            None => false,
        }
    }

    /// Whether any piece of `by` attacks `target`.
    pub fn is_attacked(&self, target: Pos, by: Color) -> bool {
        self.pieces_of(by)
            .iter()
            .any(|p| p.attacks(self).contains(&target))
    }

    /// The square of `color`'s king, if placed.
    pub fn king_pos(&self, color: Color) -> Option<Pos> {
        self.pieces_of(color)
            .into_iter()
            .find(|p| p.kind() == PieceKind::King)
            .and_then(|p| p.pos())
    }

    // -----------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------

    /// Move the piece at `from` to `to`, removing any captured occupant.
    ///
    /// Performs no legality check: callers validate with `is_legal_move`
    /// first. The pure-query / unchecked-mutation split keeps move
    /// enumeration for rendering free of side effects.
    pub fn apply_move(&mut self, from: Pos, to: Pos) {
        let mover = std::mem::take(&mut self.squares[from.row() as usize][from.col() as usize]);
        if let Occupant::Piece(mut piece) = mover {
            // Overwriting `to` drops the captured piece: fully detached.
            piece.set_pos(Some(to));
            self.squares[to.row() as usize][to.col() as usize] = Occupant::Piece(piece);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

// =========================================================================
// Tests
// =========================================================================
