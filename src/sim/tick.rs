//! Per-frame simulation tick
//!
//! Core game loop body: steer the balloon, drop and recycle obstacles, then
//! test for a hit. One tick per rendered frame.

use super::collision::first_hit;
use super::state::{GameEvent, GameState, SessionPhase};

/// Input intents for a single tick (last known key state)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one tick.
///
/// A no-op unless the session is running, so a straggling frame after game
/// over cannot move anything.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != SessionPhase::Running {
        return events;
    }

    state.time_ticks += 1;

    state
        .balloon
        .integrate(input.left, input.right, &state.tuning);

    state.advance_obstacles(&mut events);

    if let Some(obstacle_id) = first_hit(state) {
        state.phase = SessionPhase::GameOver;
        events.push(GameEvent::GameOver {
            score: state.score,
            obstacle_id,
        });
    }

    events
}
