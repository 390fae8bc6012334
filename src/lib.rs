//! Balloon Dodge - steer a balloon past falling obstacles
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, obstacles, collisions, game state)
//! - `session`: Session controller driven by the host's frame clock
//! - `scoreboard`: Best score tracking for the current run
//! - `tuning`: Data-driven game balance and layout

pub mod scoreboard;
pub mod session;
pub mod sim;
pub mod tuning;

pub use scoreboard::Scoreboard;
pub use session::{Frame, Schedule, Session, SessionError};
pub use tuning::{Tuning, TuningError};

/// Reference layout and balance constants (all distances in CSS pixels,
/// speeds in pixels per tick)
pub mod consts {
    /// Play area size
    pub const PLAY_WIDTH: f32 = 400.0;
    pub const PLAY_HEIGHT: f32 = 500.0;

    /// Balloon sprite size and its fixed distance from the floor
    pub const BALLOON_WIDTH: f32 = 50.0;
    pub const BALLOON_HEIGHT: f32 = 70.0;
    pub const BALLOON_BOTTOM: f32 = 30.0;

    /// Obstacle sprite size (square)
    pub const OBSTACLE_SIZE: f32 = 60.0;
    /// Horizontal spawn range is [0, OBSTACLE_SPAWN_WIDTH)
    pub const OBSTACLE_SPAWN_WIDTH: f32 = 360.0;
    /// Obstacles spawn in [-(OBSTACLE_SPAWN_OFFSET + OBSTACLE_SPAWN_SPREAD), -OBSTACLE_SPAWN_OFFSET)
    pub const OBSTACLE_SPAWN_OFFSET: f32 = 60.0;
    pub const OBSTACLE_SPAWN_SPREAD: f32 = 200.0;
    /// Obstacles past this y are recycled
    pub const OBSTACLE_BOTTOM_BOUND: f32 = 500.0;

    /// Balloon steering: impulse per tick while a direction is held
    pub const BALLOON_IMPULSE: f32 = 0.8 * 1.8;
    pub const BALLOON_SPEED_MULTIPLIER: f32 = 1.2;
    /// Fraction of velocity kept each tick
    pub const BALLOON_DAMPING: f32 = 0.85;

    /// Speed ramp every N points
    pub const SPEED_RAMP_INTERVAL: u64 = 5;
    /// Multiplicative fall-speed growth per ramp
    pub const SPEED_RAMP_FACTOR: f32 = 1.03;

    pub const INITIAL_OBSTACLES: usize = 3;
    pub const MAX_OBSTACLES: usize = 6;

    /// Obstacle hitbox shrinks this much on every side
    pub const COLLISION_PADDING: f32 = 25.0;
    /// Balloon hitbox radius as a fraction of its half-extent
    pub const BALLOON_HITBOX_SCALE: f32 = 0.6;
}
