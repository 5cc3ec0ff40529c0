//! Idle/demo mode - a scripted player
//!
//! Produces a `TickInput` each step from the current state plus a seeded
//! PCG stream, so a demo run with the same seed replays exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::GameState;
use super::tick::TickInput;

/// Preferred gap to the nearest enemy (center to center)
const KEEP_MIN: f32 = 50.0;
const KEEP_MAX: f32 = 90.0;

/// Seeded input generator
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Decide the next frame's input
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        let player = &state.player;
        let me = player.center();

        let nearest = state
            .enemies
            .iter()
            .filter(|e| e.alive)
            .map(|e| e.body.center())
            .min_by(|a, b| {
                me.distance(*a)
                    .partial_cmp(&me.distance(*b))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(target) = nearest else {
            // Nothing to fight: wander back to the middle
            let middle = Vec2::new(state.world.width / 2.0, me.y);
            let dx = middle.x - me.x;
            return TickInput {
                move_axis: if dx.abs() > 10.0 { dx.signum() } else { 0.0 },
                aim: middle,
                ..Default::default()
            };
        };

        let to = target - me;
        let dist = to.length();
        let toward = if to.x > 0.0 { 1.0 } else { -1.0 };
        let move_axis = if dist > KEEP_MAX {
            toward
        } else if dist < KEEP_MIN {
            -toward
        } else {
            0.0
        };

        let body = &player.body;
        let jump_pressed = (body.on_ground && (to.y < -40.0 || self.rng.random_bool(0.02)))
            || (body.on_wall() && self.rng.random_bool(0.2));

        let wobble = Vec2::new(
            self.rng.random_range(-12.0..12.0),
            self.rng.random_range(-12.0..12.0),
        );

        TickInput {
            move_axis,
            jump_pressed,
            fire_held: true,
            melee_pressed: dist < state.tuning.combat.melee_range,
            dash_pressed: self.rng.random_bool(0.01),
            aim: target + wobble,
        }
    }
}
