//! Collision detection between the balloon and obstacles
//!
//! Both hitboxes are deliberately forgiving: the balloon is a circle well
//! inside its sprite, and each obstacle box is shrunk on every side.

use glam::Vec2;

use super::state::{Balloon, GameState, Obstacle};
use crate::tuning::Tuning;

/// A circular hitbox
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// An axis-aligned box. May be inverted (`min > max`) after heavy padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Shrink by `padding` on all four sides
    pub fn shrink(&self, padding: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(padding),
            max: self.max - Vec2::splat(padding),
        }
    }

    /// Point of the box closest to `p`.
    ///
    /// Uses `max(min, min(p, max))` per axis rather than `clamp`, which
    /// panics on an inverted box. An inverted axis resolves to its `min`.
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.min.x.max(p.x.min(self.max.x)),
            self.min.y.max(p.y.min(self.max.y)),
        )
    }
}

/// Circle vs box overlap (strict: touching is not a hit)
pub fn circle_hits_rect(circle: &Circle, rect: &Rect) -> bool {
    let closest = rect.closest_point(circle.center);
    circle.center.distance_squared(closest) < circle.radius * circle.radius
}

/// Balloon hitbox: centered on the sprite, radius a fraction of its
/// smaller half-extent
pub fn balloon_hitbox(balloon: &Balloon, tuning: &Tuning) -> Circle {
    let size = Vec2::new(tuning.balloon_width, tuning.balloon_height);
    let top_left = Vec2::new(balloon.x, tuning.balloon_top());
    Circle {
        center: top_left + size / 2.0,
        radius: size.min_element() / 2.0 * tuning.hitbox_scale,
    }
}

/// Obstacle hitbox: the sprite box shrunk by the collision padding
pub fn obstacle_hitbox(obstacle: &Obstacle, tuning: &Tuning) -> Rect {
    Rect::from_pos_size(obstacle.pos, Vec2::splat(tuning.obstacle_size))
        .shrink(tuning.collision_padding)
}

/// First obstacle (in live-set order) the balloon overlaps, if any
pub fn first_hit(state: &GameState) -> Option<u32> {
    let circle = balloon_hitbox(&state.balloon, &state.tuning);
    state
        .obstacles
        .iter()
        .find(|o| circle_hits_rect(&circle, &obstacle_hitbox(o, &state.tuning)))
        .map(|o| o.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balloon_hitbox() {
        let tuning = Tuning::default();
        let circle = balloon_hitbox(&Balloon { x: 100.0, vel: 0.0 }, &tuning);
        // Top edge at 500 - 30 - 70 = 400
        assert_eq!(circle.center, Vec2::new(125.0, 435.0));
        assert!((circle.radius - 15.0).abs() < 1e-5);
    }

    #[test]
    fn test_obstacle_hitbox_padding() {
        let tuning = Tuning::default();
        let rect = obstacle_hitbox(
            &Obstacle {
                id: 1,
                pos: Vec2::new(10.0, 20.0),
            },
            &tuning,
        );
        assert_eq!(rect.min, Vec2::new(35.0, 45.0));
        assert_eq!(rect.max, Vec2::new(45.0, 55.0));
    }

    #[test]
    fn test_hit_and_miss() {
        let rect = Rect {
            min: Vec2::new(0.0, 0.0),
            max: Vec2::new(10.0, 10.0),
        };
        // Center inside the box
        let inside = Circle {
            center: Vec2::new(5.0, 5.0),
            radius: 1.0,
        };
        assert!(circle_hits_rect(&inside, &rect));

        // Corner approach: distance to (10, 10) is 5
        let near_corner = Circle {
            center: Vec2::new(13.0, 14.0),
            radius: 5.1,
        };
        assert!(circle_hits_rect(&near_corner, &rect));
        let touching = Circle {
            radius: 5.0,
            ..near_corner
        };
        assert!(!circle_hits_rect(&touching, &rect));
    }

    #[test]
    fn test_inverted_box_does_not_panic() {
        // 20x20 box with 25 padding inverts to min (115, 115), max (85, 85)
        let rect = Rect {
            min: Vec2::new(90.0, 90.0),
            max: Vec2::new(110.0, 110.0),
        }
        .shrink(25.0);
        let circle = Circle {
            center: Vec2::new(100.0, 100.0),
            radius: 10.0,
        };
        assert_eq!(rect.closest_point(circle.center), Vec2::new(115.0, 115.0));
        // Squared distance 450 vs squared radius 100
        assert!(!circle_hits_rect(&circle, &rect));

        let big = Circle {
            radius: 22.0,
            ..circle
        };
        assert!(circle_hits_rect(&big, &rect));
    }

    #[test]
    fn test_first_hit_in_order() {
        use crate::sim::Difficulty;

        let tuning = Tuning::default();
        let mut state = GameState::new(9, Difficulty::Easy, tuning);
        state.reset(9);
        assert_eq!(first_hit(&state), None);

        // Balloon circle center (200, 435) with the balloon at x = 175
        let over_balloon = Vec2::new(200.0 - 30.0, 435.0 - 30.0);
        state.obstacles[1].pos = over_balloon;
        state.obstacles[2].pos = over_balloon;
        assert_eq!(first_hit(&state), Some(2));
    }
}
