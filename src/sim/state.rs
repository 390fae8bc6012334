//! Game state and core simulation types
//!
//! One `GameState` lives for the whole page; `reset` turns it into a fresh
//! session without losing the chosen difficulty or tuning.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::difficulty::Difficulty;
use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Before the first start; never re-entered
    Idle,
    /// Ticking
    Running,
    /// Balloon hit an obstacle; waiting for restart
    GameOver,
}

/// The player's balloon. Only moves horizontally.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balloon {
    /// Left edge, in [0, max_balloon_x]
    pub x: f32,
    /// Horizontal velocity (pixels per tick)
    pub vel: f32,
}

/// A falling hazard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner; y is negative while above the play area
    pub pos: Vec2,
}

/// Things that happened during a tick, for the host to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// An obstacle left the play area and was recycled
    Dodged { score: u64 },
    /// Fall speed ramped up
    SpeedRamp { fall_speed: f32 },
    /// A new obstacle joined the live set
    ObstacleSpawned { id: u32 },
    /// The balloon hit an obstacle
    GameOver { score: u64, obstacle_id: u32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed of the current session
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: SessionPhase,
    pub score: u64,
    /// Current obstacle descent rate (pixels per tick)
    pub fall_speed: f32,
    pub balloon: Balloon,
    pub difficulty: Difficulty,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    pub tuning: Tuning,
    /// Ticks since the session started
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Create an idle state; call [`GameState::reset`] to start playing.
    ///
    /// `tuning` must pass [`Tuning::validate`]; spawning and steering panic
    /// on a zero ramp interval, empty spawn ranges or an oversized balloon.
    /// [`crate::Session::new`] checks this.
    pub fn new(seed: u64, difficulty: Difficulty, tuning: Tuning) -> Self {
        let balloon = Balloon {
            x: tuning.balloon_start_x(),
            vel: 0.0,
        };
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::Idle,
            score: 0,
            fall_speed: difficulty.base_speed(),
            balloon,
            difficulty,
            obstacles: Vec::with_capacity(tuning.max_obstacles),
            tuning,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Start a fresh session: drop every obstacle, zero the score, recenter
    /// the balloon and spawn the initial obstacles. Difficulty is kept.
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.obstacles.clear();
        self.next_id = 1;
        self.score = 0;
        self.time_ticks = 0;
        self.fall_speed = self.difficulty.base_speed();
        self.balloon = Balloon {
            x: self.tuning.balloon_start_x(),
            vel: 0.0,
        };
        for _ in 0..self.tuning.initial_obstacles {
            self.spawn_obstacle();
        }
        self.phase = SessionPhase::Running;
    }

    /// Change difficulty; resets fall speed to the level's base value and
    /// leaves everything else alone. Safe mid-session.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.fall_speed = difficulty.base_speed();
    }

    #[inline]
    pub fn speed_ceiling(&self) -> f32 {
        self.difficulty.speed_ceiling()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Allocate a new obstacle ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
