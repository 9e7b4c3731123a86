//! Stateful game controller wrapping a Board.
//!
//! `Game` tracks whose turn it is, executes validated moves, and answers
//! the "what can move now" queries the presentation layer renders from.
//! It is the primary type the API layer interacts with.

use std::collections::BTreeMap;

use crate::engine::board::Board;
use crate::engine::types::{ChessError, Color, Pos};

/// Map from origin coordinate to legal destination coordinates for the
/// side to move. `BTreeMap` keeps the JSON rendering deterministic.
pub type Moveable = BTreeMap<String, Vec<String>>;

/// A chess game: one board plus the turn indicator.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    /// A game at the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::starting(),
            turn: Color::White,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Restore the starting position and reset the turn to White.
    pub fn reset(&mut self) {
        self.board.reset();
        self.turn = Color::White;
    }

    /// Every placed piece as `(coordinate, html-entity token)`, white
    /// pieces first, each side in stable board order.
    pub fn placements(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(32);
        for color in [Color::White, Color::Black] {
            for piece in self.board.pieces_of(color) {
                let pos = piece.pos().expect("board pieces are placed");
                out.push((pos.to_coord(), piece.html_glyph()));
            }
        }
        out
    }

    /// Legal destinations for every piece of the side to move that has at
    /// least one, keyed by origin coordinate.
    pub fn moveable(&self) -> Moveable {
        let mut map = Moveable::new();
        for piece in self.board.pieces_of(self.turn) {
            let from = piece.pos().expect("board pieces are placed");
            let moves: Vec<String> = piece
                .valid_moves(&self.board)
                .expect("board pieces are placed")
                .into_iter()
                .map(|p| p.to_coord())
                .collect();
            if !moves.is_empty() {
                map.insert(from.to_coord(), moves);
            }
        }
        map
    }

    /// Play a move.
    ///
    /// The origin must hold a piece of the side to move (`OutOfTurn` when
    /// it belongs to the opponent, `IllegalMove` when empty) and the move
    /// must pass the board's legality predicate. On success the move is
    /// applied and the turn flips exactly once; on failure nothing changes.
    pub fn make_move(&mut self, from: Pos, to: Pos) -> Result<(), ChessError> {
        match self.board.occupant_at(from).color() {
            None => {
                return Err(ChessError::IllegalMove {
                    from: from.to_coord(),
                    to: to.to_coord(),
                    reason: "no piece on the origin square".into(),
                });
            }
            Some(color) if color != self.turn => {
                return Err(ChessError::OutOfTurn { attempted: color });
            }
            Some(_) => {}
        }

        if !self.board.is_legal_move(from, to) {
            return Err(ChessError::IllegalMove {
                from: from.to_coord(),
                to: to.to_coord(),
                reason: "not a legal move".into(),
            });
        }

        self.board.apply_move(from, to);
        self.turn = !self.turn;
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(coord: &str) -> Pos {
        Pos::from_coord(coord).unwrap()
    }

    fn play(g: &mut Game, from: &str, to: &str) {
        g.make_move(pos(from), pos(to)).unwrap();
    }

    // -----------------------------------------------------------------
    // Construction / reset
    // -----------------------------------------------------------------

    #[test]
    fn new_game_white_to_move() {
        let g = Game::new();
        assert_eq!(g.turn(), Color::White);
        assert_eq!(g.placements().len(), 32);
    }

    #[test]
    fn reset_restores_start_and_turn() {
        let mut g = Game::new();
        play(&mut g, "e2", "e4");
        assert_eq!(g.turn(), Color::Black);
        g.reset();
        assert_eq!(g.turn(), Color::White);
        assert_eq!(g.placements(), Game::new().placements());
    }

    #[test]
    fn placements_are_deterministic() {
        let a = Game::new();
        let b = Game::new();
        assert_eq!(a.placements(), b.placements());
        // White first, row-major: the a2 pawn leads. Tokens are entities.
        let (coord, token) = &a.placements()[0];
        assert_eq!(coord, "a2");
        assert_eq!(token, "&#9817;");
    }

    // -----------------------------------------------------------------
    // Moveable
    // -----------------------------------------------------------------

    #[test]
    fn opening_moveable_has_ten_movable_pieces() {
        // Eight pawns plus both knights; rooks, bishops, queen, king are
        // all blocked in the starting position.
        let g = Game::new();
        let moveable = g.moveable();
        assert_eq!(moveable.len(), 10);
        assert!(!moveable.contains_key("a1"));
        assert!(!moveable.contains_key("e1"));
    }

    #[test]
    fn knight_b1_opens_to_a3_c3() {
        let g = Game::new();
        let moveable = g.moveable();
        let mut knight = moveable.get("b1").cloned().unwrap();
        knight.sort();
        assert_eq!(knight, vec!["a3", "c3"]);
    }

    #[test]
    fn moveable_tracks_side_to_move() {
        let mut g = Game::new();
        assert!(g.moveable().contains_key("e2"));
        play(&mut g, "e2", "e4");
        let black = g.moveable();
        assert!(black.contains_key("e7"));
        assert!(!black.contains_key("e4"));
    }

    // -----------------------------------------------------------------
    // make_move
    // -----------------------------------------------------------------

    #[test]
    fn successful_move_flips_turn_once() {
        let mut g = Game::new();
        play(&mut g, "e2", "e4");
        assert_eq!(g.turn(), Color::Black);
        play(&mut g, "e7", "e5");
        assert_eq!(g.turn(), Color::White);
    }

    #[test]
    fn illegal_move_leaves_state_unchanged() {
        let mut g = Game::new();
        let before = g.placements();
        let err = g.make_move(pos("a1"), pos("a5")).unwrap_err();
        assert!(matches!(err, ChessError::IllegalMove { .. }));
        assert_eq!(g.turn(), Color::White);
        assert_eq!(g.placements(), before);
    }

    #[test]
    fn empty_origin_is_illegal() {
        let mut g = Game::new();
        let err = g.make_move(pos("e4"), pos("e5")).unwrap_err();
        assert!(matches!(err, ChessError::IllegalMove { .. }));
    }

    #[test]
    fn moving_opponent_piece_is_out_of_turn() {
        let mut g = Game::new();
        let err = g.make_move(pos("e7"), pos("e5")).unwrap_err();
        assert_eq!(
            err,
            ChessError::OutOfTurn {
                attempted: Color::Black
            }
        );
        assert_eq!(g.turn(), Color::White);
    }

    #[test]
    fn capture_removes_opponent_piece() {
        let mut g = Game::new();
        // 1. e4 d5 2. exd5
        play(&mut g, "e2", "e4");
        play(&mut g, "d7", "d5");
        play(&mut g, "e4", "d5");
        assert_eq!(g.board().pieces_of(Color::Black).len(), 15);
        assert_eq!(g.placements().len(), 31);
    }

    #[test]
    fn cannot_leave_own_king_in_check() {
        let mut g = Game::new();
        // 1. e4 e5 2. Qh5 — the f7 pawn is pinned along h5-e8.
        play(&mut g, "e2", "e4");
        play(&mut g, "e7", "e5");
        play(&mut g, "d1", "h5");
        let err = g.make_move(pos("f7"), pos("f6")).unwrap_err();
        assert!(matches!(err, ChessError::IllegalMove { .. }));
        // Blocking or developing is still allowed.
        assert!(g.make_move(pos("g7"), pos("g6")).is_ok());
    }
}
