pub mod board;
pub mod game;
pub mod piece;
pub mod types;

pub use board::{Board, Occupant};
pub use game::{Game, Moveable};
pub use piece::Piece;
pub use types::*;
