//! Session controller
//!
//! Owns the game state, the input intents and the run's scoreboard. The host
//! drives it from its frame clock: request a frame, call [`Session::frame`]
//! with the epoch captured at request time, and request another frame only
//! when it answers [`Schedule::NextFrame`].

use thiserror::Error;

use crate::scoreboard::Scoreboard;
use crate::sim::{Difficulty, GameEvent, GameState, SessionPhase, TickInput, tick};
use crate::tuning::{Tuning, TuningError};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("A session is already running")]
    AlreadyRunning,
}

/// What the host should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Request another frame for the same epoch
    NextFrame,
    /// Stop the loop; the session ended or the frame was stale
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Obstacle position for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// Everything the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub balloon_x: f32,
    pub obstacles: Vec<ObstacleView>,
    pub score: u64,
    pub best_score: u64,
    /// Final score while the game-over overlay should be visible
    pub game_over: Option<u64>,
    pub difficulty_label: &'static str,
}

pub struct Session {
    state: GameState,
    input: TickInput,
    scoreboard: Scoreboard,
    /// Bumped on every start so frames requested for an older session no-op
    epoch: u64,
}

impl Session {
    /// Create an idle session. Fails if `tuning` is invalid.
    pub fn new(difficulty: Difficulty, tuning: Tuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            state: GameState::new(0, difficulty, tuning),
            input: TickInput::default(),
            scoreboard: Scoreboard::new(),
            epoch: 0,
        })
    }

    /// Start a session (from idle or after game over) and return its epoch.
    ///
    /// Obstacles, score and balloon are reset; the current difficulty is kept.
    pub fn start(&mut self, seed: u64) -> Result<u64, SessionError> {
        if self.state.is_running() {
            return Err(SessionError::AlreadyRunning);
        }
        self.state.reset(seed);
        self.epoch += 1;
        log::info!(
            "Session {} started on {} (seed {})",
            self.epoch,
            self.state.difficulty.label(),
            seed
        );
        Ok(self.epoch)
    }

    /// Record a held/released direction key; read on the next tick
    pub fn set_intent(&mut self, direction: Direction, held: bool) {
        match direction {
            Direction::Left => self.input.left = held,
            Direction::Right => self.input.right = held,
        }
    }

    /// Apply a difficulty slider level. Takes effect immediately, even
    /// mid-session.
    pub fn set_difficulty_level(&mut self, level: u8) -> Difficulty {
        let difficulty = Difficulty::from_level(level);
        self.state.set_difficulty(difficulty);
        log::info!("Difficulty set to {}", difficulty.label());
        difficulty
    }

    /// Run one tick for the session identified by `epoch`
    pub fn frame(&mut self, epoch: u64) -> Schedule {
        if epoch != self.epoch {
            log::trace!("Ignoring frame for stale session {}", epoch);
            return Schedule::Halt;
        }
        if !self.state.is_running() {
            return Schedule::Halt;
        }

        for event in tick(&mut self.state, &self.input) {
            if let GameEvent::GameOver { score, obstacle_id } = event {
                log::info!("Game over: score {} (hit obstacle {})", score, obstacle_id);
                if self.scoreboard.record_game_over(score) {
                    log::info!("New best score: {}", score);
                }
            }
        }

        if self.state.is_running() {
            Schedule::NextFrame
        } else {
            Schedule::Halt
        }
    }

    /// Snapshot for rendering
    pub fn snapshot(&self) -> Frame {
        let state = &self.state;
        Frame {
            balloon_x: state.balloon.x,
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    x: o.pos.x,
                    y: o.pos.y,
                })
                .collect(),
            score: state.score,
            best_score: self.scoreboard.best(),
            game_over: (state.phase == SessionPhase::GameOver).then_some(state.score),
            difficulty_label: state.difficulty.label(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn difficulty(&self) -> Difficulty {
        self.state.difficulty
    }
}
