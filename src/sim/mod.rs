//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod motion;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use collision::{Circle, Rect, balloon_hitbox, circle_hits_rect, first_hit, obstacle_hitbox};
pub use difficulty::Difficulty;
pub use state::{Balloon, GameEvent, GameState, Obstacle, SessionPhase};
pub use tick::{TickInput, tick};
