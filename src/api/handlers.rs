use axum::Json;
use axum::extract::{Query, State};

use crate::engine::game::{Game, Moveable};

use super::errors::ApiError;
use super::models::*;
use super::state::SharedState;

// =========================================================================
// Health
// =========================================================================

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let uptime = state.start_time.elapsed().as_secs();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        engine: "webchess".to_string(),
        uptime,
    })
}

// =========================================================================
// New game
// =========================================================================

/// POST /api/game/new — reset the shared game, respond with all placements.
pub async fn new_game(State(state): State<SharedState>) -> Json<Vec<Placement>> {
    let mut game = state.game.write().await;
    game.reset();
    tracing::info!("game reset");
    Json(placements(&game))
}

// =========================================================================
// Current game
// =========================================================================

/// GET /api/game
pub async fn get_game(State(state): State<SharedState>) -> Json<GameResponse> {
    let game = state.game.read().await;
    Json(GameResponse {
        pieces: placements(&game),
        turn: game.turn().to_string(),
    })
}

// =========================================================================
// Moveable
// =========================================================================

/// GET /api/game/moveable — legal destinations for the side to move.
pub async fn moveable(State(state): State<SharedState>) -> Json<Moveable> {
    let game = state.game.read().await;
    Json(game.moveable())
}

// =========================================================================
// Moves for one square
// =========================================================================

/// GET /api/game/moves?coord=e2
pub async fn moves(
    State(state): State<SharedState>,
    Query(query): Query<MovesQuery>,
) -> Result<Json<Vec<String>>, ApiError> {
    let game = state.game.read().await;
    let moves = game.board().valid_moves_for(&query.coord)?;
    Ok(Json(moves))
}

// =========================================================================
// Make move
// =========================================================================

/// POST /api/game/moves — play a move, respond with the refreshed
/// moveable mapping. The write guard spans validate+apply.
pub async fn make_move(
    State(state): State<SharedState>,
    Json(input): Json<MoveRequest>,
) -> Result<Json<Moveable>, ApiError> {
    let mut game = state.game.write().await;
    let from = game.board().position_for(&input.from)?;
    let to = game.board().position_for(&input.to)?;
    game.make_move(from, to)?;
    tracing::info!(from = %input.from, to = %input.to, next = %game.turn(), "move played");
    Ok(Json(game.moveable()))
}

// =========================================================================
// Helpers
// =========================================================================

fn placements(game: &Game) -> Vec<Placement> {
    game.placements()
        .into_iter()
        .map(|(id, value)| Placement { id, value })
        .collect()
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::state::AppState;
    use crate::config::AppConfig;

    fn state() -> SharedState {
        AppState::new(AppConfig::default())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let resp = health(State(state())).await;
        assert_eq!(resp.0.status, "ok");
        assert_eq!(resp.0.engine, "webchess");
    }

    #[tokio::test]
    async fn new_game_returns_32_placements() {
        let resp = new_game(State(state())).await;
        assert_eq!(resp.0.len(), 32);
        assert!(resp.0.iter().any(|p| p.id == "e1" && p.value == "&#9812;"));
        assert!(resp.0.iter().any(|p| p.id == "d8" && p.value == "&#9819;"));
    }

    #[tokio::test]
    async fn get_game_reports_turn() {
        let resp = get_game(State(state())).await;
        assert_eq!(resp.0.turn, "white");
        assert_eq!(resp.0.pieces.len(), 32);
    }

    #[tokio::test]
    async fn moveable_lists_knight_openings() {
        let resp = moveable(State(state())).await;
        let mut b1 = resp.0.get("b1").cloned().unwrap();
        b1.sort();
        assert_eq!(b1, vec!["a3", "c3"]);
    }

    #[tokio::test]
    async fn moves_for_empty_square_is_empty() {
        let query = Query(MovesQuery {
            coord: "e4".into(),
        });
        let resp = moves(State(state()), query).await.unwrap();
        assert!(resp.0.is_empty());
    }

    #[tokio::test]
    async fn moves_rejects_bad_coordinate() {
        let query = Query(MovesQuery {
            coord: "yy".into(),
        });
        assert!(matches!(
            moves(State(state()), query).await,
            Err(ApiError::InvalidCoordinate(_))
        ));
    }

    #[tokio::test]
    async fn make_move_flips_turn_and_refreshes_moveable() {
        let state = state();
        let body = Json(MoveRequest {
            from: "e2".into(),
            to: "e4".into(),
        });
        let resp = make_move(State(state.clone()), body).await.unwrap();
        // The refreshed mapping is for Black.
        assert!(resp.0.contains_key("e7"));
        assert!(!resp.0.contains_key("e4"));
        assert_eq!(
            state.game.read().await.turn(),
            crate::engine::Color::Black
        );
    }

    #[tokio::test]
    async fn make_move_rejects_illegal() {
        let body = Json(MoveRequest {
            from: "a1".into(),
            to: "a5".into(),
        });
        assert!(matches!(
            make_move(State(state()), body).await,
            Err(ApiError::IllegalMove(_))
        ));
    }

    #[tokio::test]
    async fn make_move_rejects_out_of_turn() {
        let body = Json(MoveRequest {
            from: "e7".into(),
            to: "e5".into(),
        });
        assert!(matches!(
            make_move(State(state()), body).await,
            Err(ApiError::OutOfTurn(_))
        ));
    }
}
