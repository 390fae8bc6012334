//! Balloon steering
//!
//! A damped-velocity integrator: held directions add a fixed impulse, the
//! velocity then loses a fixed fraction, and the position follows. This
//! gives an asymptotic top speed and a smooth glide after release.

use super::state::Balloon;
use crate::tuning::Tuning;

impl Balloon {
    /// Advance one tick. The position is clamped to the play area but the
    /// velocity is left alone, so a balloon pinned against a wall keeps a
    /// residual velocity that decays normally.
    pub fn integrate(&mut self, left: bool, right: bool, tuning: &Tuning) {
        let impulse = tuning.steer_impulse();
        if left {
            self.vel -= impulse;
        }
        if right {
            self.vel += impulse;
        }
        self.vel *= tuning.damping;
        self.x = (self.x + self.vel).clamp(0.0, tuning.max_balloon_x());
    }
}
