//! Obstacle lifecycle: spawn, fall, recycle
//!
//! Obstacles are never freed during a session. Once one falls past the
//! bottom bound it is thrown back above the play area and counts as a dodge.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GameState, Obstacle};

impl GameState {
    /// Random spawn position above the play area
    fn random_spawn_pos(&mut self) -> Vec2 {
        let t = &self.tuning;
        let (width, top, bottom) = (
            t.spawn_width,
            -(t.spawn_offset + t.spawn_spread),
            -t.spawn_offset,
        );
        Vec2::new(
            self.rng.random_range(0.0..width),
            self.rng.random_range(top..bottom),
        )
    }

    /// Add one obstacle to the live set, returning its id
    pub fn spawn_obstacle(&mut self) -> u32 {
        let id = self.next_entity_id();
        let pos = self.random_spawn_pos();
        self.obstacles.push(Obstacle { id, pos });
        id
    }

    /// Send the obstacle at `index` back to the top and score the dodge.
    ///
    /// Every `ramp_interval` points the fall speed grows by `ramp_factor`,
    /// clamped to the difficulty's ceiling. A ramp also spawns one extra
    /// obstacle while below `max_obstacles`. Once the ceiling is reached no
    /// further ramps or ramp spawns happen.
    pub fn recycle_obstacle(&mut self, index: usize, events: &mut Vec<GameEvent>) {
        let pos = self.random_spawn_pos();
        let Some(obstacle) = self.obstacles.get_mut(index) else {
            return;
        };
        obstacle.pos = pos;

        self.score += 1;
        events.push(GameEvent::Dodged { score: self.score });

        let ceiling = self.speed_ceiling();
        if self.score % self.tuning.ramp_interval != 0 || self.fall_speed >= ceiling {
            return;
        }

        self.fall_speed = (self.fall_speed * self.tuning.ramp_factor).min(ceiling);
        log::debug!(
            "Speed ramp at score {}: fall speed {:.3}",
            self.score,
            self.fall_speed
        );
        events.push(GameEvent::SpeedRamp {
            fall_speed: self.fall_speed,
        });

        if self.obstacles.len() < self.tuning.max_obstacles {
            let id = self.spawn_obstacle();
            log::debug!("Spawned obstacle {} ({} live)", id, self.obstacles.len());
            events.push(GameEvent::ObstacleSpawned { id });
        }
    }

    /// Drop every obstacle by `fall_speed` and recycle those past the bottom
    pub fn advance_obstacles(&mut self, events: &mut Vec<GameEvent>) {
        // Obstacles spawned by a ramp this tick start falling next tick
        let live = self.obstacles.len();
        for i in 0..live {
            self.obstacles[i].pos.y += self.fall_speed;
            if self.obstacles[i].pos.y > self.tuning.bottom_bound {
                self.recycle_obstacle(i, events);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Difficulty;
    use crate::tuning::Tuning;

    fn running(difficulty: Difficulty) -> GameState {
        let mut state = GameState::new(4242, difficulty, Tuning::default());
        state.reset(4242);
        state
    }

    fn in_spawn_range(pos: Vec2) -> bool {
        (0.0..360.0).contains(&pos.x) && (-260.0..-60.0).contains(&pos.y)
    }

    #[test]
    fn test_spawn_ranges() {
        let mut state = running(Difficulty::Easy);
        for _ in 0..500 {
            let pos = state.random_spawn_pos();
            assert!(in_spawn_range(pos), "out of range: {pos:?}");
        }
        assert!(state.obstacles.iter().all(|o| in_spawn_range(o.pos)));
    }

    #[test]
    fn test_recycle_scores_and_repositions() {
        let mut state = running(Difficulty::Easy);
        let mut events = Vec::new();
        state.obstacles[1].pos = Vec2::new(10.0, 501.0);

        state.recycle_obstacle(1, &mut events);
        assert_eq!(state.score, 1);
        assert!(in_spawn_range(state.obstacles[1].pos));
        assert_eq!(events, vec![GameEvent::Dodged { score: 1 }]);
        assert_eq!(state.fall_speed, 3.0);
    }

    #[test]
    fn test_ramp_on_interval_spawns_obstacle() {
        let mut state = running(Difficulty::Easy);
        let mut events = Vec::new();
        state.score = 4;

        state.recycle_obstacle(0, &mut events);
        assert_eq!(state.score, 5);
        assert!((state.fall_speed - 3.0 * 1.03).abs() < 1e-6);
        assert_eq!(state.obstacles.len(), 4);
        assert!(events.contains(&GameEvent::ObstacleSpawned { id: 4 }));
    }

    #[test]
    fn test_ramp_clamps_to_ceiling_and_stops() {
        let mut state = running(Difficulty::Easy);
        let mut events = Vec::new();
        state.fall_speed = 8.9;
        state.score = 9;

        state.recycle_obstacle(0, &mut events);
        assert_eq!(state.fall_speed, 9.0);
        let live = state.obstacles.len();

        // At the ceiling: no more ramps, no more ramp spawns
        for _ in 0..50 {
            state.recycle_obstacle(0, &mut events);
        }
        assert_eq!(state.fall_speed, 9.0);
        assert_eq!(state.obstacles.len(), live);
        assert_eq!(state.score, 60);
    }

    #[test]
    fn test_live_count_capped() {
        let mut state = running(Difficulty::Hard);
        let mut events = Vec::new();
        for _ in 0..100 {
            state.recycle_obstacle(0, &mut events);
        }
        assert_eq!(state.obstacles.len(), 6);
    }

    #[test]
    fn test_advance_moves_then_recycles() {
        let mut state = running(Difficulty::Medium);
        let mut events = Vec::new();
        state.obstacles[0].pos = Vec2::new(0.0, 100.0);
        state.obstacles[1].pos = Vec2::new(0.0, 496.0);
        state.obstacles[2].pos = Vec2::new(0.0, 495.0);

        state.advance_obstacles(&mut events);
        assert_eq!(state.obstacles[0].pos.y, 105.0);
        // 496 + 5 = 501 > 500: recycled
        assert!(state.obstacles[1].pos.y < 0.0);
        // 495 + 5 = 500 is not past the bound
        assert_eq!(state.obstacles[2].pos.y, 500.0);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn test_easy_ramp_to_forty() {
        let mut state = running(Difficulty::Easy);
        let mut events = Vec::new();
        for _ in 0..40 {
            state.recycle_obstacle(0, &mut events);
        }
        assert_eq!(state.score, 40);

        let mut expected = 3.0_f32;
        for _ in 0..8 {
            expected *= 1.03;
        }
        assert!(expected < 9.0);
        assert_eq!(state.fall_speed, expected);
        // Three ramps fill the set up to six
        assert_eq!(state.obstacles.len(), 6);
    }
}
