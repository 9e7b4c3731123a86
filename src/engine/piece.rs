//! Pieces and their movement geometry.
//!
//! Movement is data-driven: each kind maps to a direction list plus a range
//! (slide until blocked, or a single step). The knight uses its fixed
//! L-offsets; the pawn is the one special case (color-dependent direction,
//! double step from the home row, capture-only diagonals).

use crate::engine::board::Board;
use crate::engine::types::{ChessError, Color, PieceKind, Pos};

// =========================================================================
// Movement specification
// =========================================================================

/// The four orthogonal compass deltas: up, down, right, left.
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];

/// The four diagonal compass deltas: nw, ne, sw, se.
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight compass deltas.
const COMPASS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, 1),
    (0, -1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The knight's eight L-shaped offsets.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// How far a piece travels along each of its deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Range {
    /// Continue until blocked (rook, bishop, queen).
    Slide,
    /// Exactly one application per delta (king, knight).
    Step,
}

/// A piece kind's movement geometry: deltas plus range.
struct MoveSpec {
    deltas: &'static [(i8, i8)],
    range: Range,
}

/// Movement table for the five uniform kinds. The pawn has no entry; its
/// asymmetric rules live in `Piece::pawn_moves`.
fn move_spec(kind: PieceKind) -> Option<MoveSpec> {
    let spec = match kind {
        PieceKind::King => MoveSpec {
            deltas: &COMPASS,
            range: Range::Step,
        },
        PieceKind::Queen => MoveSpec {
            deltas: &COMPASS,
            range: Range::Slide,
        },
        PieceKind::Rook => MoveSpec {
            deltas: &ORTHOGONAL,
            range: Range::Slide,
        },
        PieceKind::Bishop => MoveSpec {
            deltas: &DIAGONAL,
            range: Range::Slide,
        },
        PieceKind::Knight => MoveSpec {
            deltas: &KNIGHT_OFFSETS,
            range: Range::Step,
        },
        PieceKind::Pawn => return None,
    };
    Some(spec)
}

// =========================================================================
// Piece
// =========================================================================

/// One physical chess unit: a color, a kind, and its square (if placed).
///
/// The board owns every piece; movement queries borrow the board rather
/// than holding a back-reference to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    kind: PieceKind,
    pos: Option<Pos>,
}

impl Piece {
    /// Create an unplaced piece. `Board::place` attaches it to a square.
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Piece {
            color,
            kind,
            pos: None,
        }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Current square, or `None` before placement / after capture.
    #[inline]
    pub fn pos(&self) -> Option<Pos> {
        self.pos
    }

    pub(crate) fn set_pos(&mut self, pos: Option<Pos>) {
        self.pos = pos;
    }

    // -----------------------------------------------------------------
    // Move generation
    // -----------------------------------------------------------------

    /// Raw (pre-legality) candidate destinations: geometry plus blocking,
    /// before the self-check filter. Every yielded square is in bounds and
    /// never holds a same-color piece.
    pub fn raw_moves(&self, board: &Board) -> Result<Vec<Pos>, ChessError> {
        let from = self.pos.ok_or(ChessError::UnplacedPiece)?;
        match move_spec(self.kind) {
            Some(spec) => Ok(self.walk(board, from, &spec)),
            None => Ok(self.pawn_moves(board, from)),
        }
    }

    /// `raw_moves` narrowed to moves the board accepts (no self-check).
    pub fn valid_moves(&self, board: &Board) -> Result<Vec<Pos>, ChessError> {
        let from = self.pos.ok_or(ChessError::UnplacedPiece)?;
        let raw = self.raw_moves(board)?;
        Ok(raw
            .into_iter()
            .filter(|&to| board.is_legal_move(from, to))
            .collect())
    }

    /// Squares this piece attacks. Differs from `raw_moves` only for the
    /// pawn, whose forward pushes threaten nothing; its two forward
    /// diagonals always do, occupied or not. Unplaced pieces attack nothing.
    pub fn attacks(&self, board: &Board) -> Vec<Pos> {
        let Some(from) = self.pos else {
            return Vec::new();
        };
        match move_spec(self.kind) {
            Some(spec) => self.walk(board, from, &spec),
            None => {
                let forward = self.color.forward();
                [(forward, -1), (forward, 1)]
                    .iter()
                    .filter_map(|&d| from.offset(d))
                    .collect()
            }
        }
    }

    /// Walk outward along each delta: empty squares accumulate, the first
    /// occupied square is included only when it holds an enemy (capture),
    /// and stepping pieces stop after one application either way.
    fn walk(&self, board: &Board, from: Pos, spec: &MoveSpec) -> Vec<Pos> {
        let mut moves = Vec::new();
        for &delta in spec.deltas {
            let mut cur = from;
            while let Some(next) = cur.offset(delta) {
                match board.occupant_at(next).color() {
                    None => {
                        moves.push(next);
                        if spec.range == Range::Step {
                            break;
                        }
                        cur = next;
                    }
                    Some(c) => {
                        if c != self.color {
                            moves.push(next);
                        }
                        break;
                    }
                }
            }
        }
        moves
    }

    fn pawn_moves(&self, board: &Board, from: Pos) -> Vec<Pos> {
        let mut moves = Vec::new();
        let forward = self.color.forward();

        // Advance: one square, plus a double step from the home row; both
        // require the path to be empty.
        if let Some(one) = from.offset((forward, 0)) {
            if board.occupant_at(one).is_empty() {
                moves.push(one);
                if from.row() == self.color.pawn_home_row() {
                    if let Some(two) = one.offset((forward, 0)) {
                        if board.occupant_at(two).is_empty() {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        // Diagonal squares are capture-only.
        for dc in [-1, 1] {
            if let Some(target) = from.offset((forward, dc)) {
                if board.occupant_at(target).color() == Some(!self.color) {
                    moves.push(target);
                }
            }
        }

        moves
    }

    // -----------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------

    /// Unicode glyph for this piece.
    pub fn glyph(&self) -> char {
        self.kind.glyph(self.color)
    }

    /// Decimal HTML-entity token for the glyph, e.g. `"&#9812;"` for '♔'.
    pub fn html_glyph(&self) -> String {
        format!("&#{};", self.glyph() as u32)
    }
}

// =========================================================================
// Tests
// =========================================================================
