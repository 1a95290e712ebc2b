//! Fixed-step simulation tick
//!
//! One call advances the match by one frame. Displacement is constant per
//! tick; there is no real-time scaling.

use super::collision::{resolve_paddle, resolve_wall, scoring_side};
use super::opponent;
use super::state::{GameEvent, GameState, MatchState, Side};

/// Advance the game state by one tick, returning what happened in order.
///
/// Does nothing unless the match is running.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !state.is_running() {
        return events;
    }

    state.time_ticks += 1;

    // Integrate
    state.ball.pos += state.ball.vel;

    // Walls
    if resolve_wall(&mut state.ball, &state.arena) {
        events.push(GameEvent::WallHit);
    }

    // Paddles
    for side in [Side::Player, Side::Opponent] {
        let paddle = *state.paddle(side);
        if resolve_paddle(&mut state.ball, &paddle, side) {
            log::debug!("{:?} paddle hit, vel = {}", side, state.ball.vel);
            events.push(GameEvent::PaddleHit { side });
        }
    }

    // Scoring
    if let Some(side) = scoring_side(&state.ball, &state.arena) {
        state.score.award(side);
        log::info!(
            "{:?} scores: {} - {}",
            side,
            state.score.player,
            state.score.opponent
        );
        events.push(GameEvent::Scored { side });

        // Win check, before any re-serve. The final frame keeps the ball
        // where it left the field.
        if let Some(winner) = state.score.winner() {
            state.phase = MatchState::GameOver { winner };
            log::info!("Game over, {:?} wins", winner);
            events.push(GameEvent::GameOver { winner });
            return events;
        }

        state.reset_ball();
    }

    // CPU paddle
    let arena = state.arena;
    opponent::track(&mut state.opponent, &state.ball, &arena);

    events
}
