//! A web-served chess game: a rules engine (board, pieces, turn-driven
//! game) behind a small JSON HTTP API. One game instance is shared
//! process-wide and guarded by a lock in the API state.

pub mod api;
pub mod config;
pub mod engine;
