//! Combat rules shared by the player, enemies and projectiles
//!
//! - Cooldowns are absolute timestamps checked against the simulation clock
//! - Death is reported at the moment health crosses zero, never polled later
//! - Knockback pops the target up and away from the attacker

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::enemy::Enemy;
use crate::tuning::{CombatTuning, MeleeMode};
use crate::{angle_between, cartesian_to_polar, polar_to_cartesian};

/// Result of a single damage application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageOutcome {
    /// Blocked (invincible) or target already dead
    Ignored,
    /// Health reduced, still alive
    Hurt,
    /// Health reached zero with this hit
    Killed,
}

/// Has `cooldown_ms` elapsed since `last` (or was the action never used)?
#[inline]
pub fn cooldown_ready(last: Option<f64>, now: f64, cooldown_ms: f64) -> bool {
    last.is_none_or(|t| now - t >= cooldown_ms)
}

/// Knockback velocity: unit vector attacker -> defender times `force`, then
/// `lift` subtracted from y.
pub fn knockback(from: Vec2, to: Vec2, force: f32, lift: f32) -> Vec2 {
    let dir = (to - from).normalize_or_zero();
    let mut v = dir * force;
    v.y -= lift;
    v
}

/// Heading from `origin` toward `target` in radians (screen space, y down)
#[inline]
pub fn aim_angle(origin: Vec2, target: Vec2) -> f32 {
    cartesian_to_polar(target - origin).1
}

/// Indices of the enemies a melee swing from `origin` aimed at `aim` connects with.
///
/// Only live, non-stunned enemies whose centers are strictly within
/// `melee_range` are eligible. `MeleeMode::Cone` keeps every eligible enemy
/// within the half-angle of the aim; `MeleeMode::Nearest` keeps the single
/// closest one regardless of direction.
pub fn melee_targets(origin: Vec2, aim: f32, enemies: &[Enemy], combat: &CombatTuning) -> Vec<usize> {
    let eligible = enemies.iter().enumerate().filter_map(|(i, e)| {
        if !e.alive || e.is_stunned {
            return None;
        }
        let dist = origin.distance(e.body.center());
        (dist < combat.melee_range).then_some((i, dist, e.body.center()))
    });

    match combat.melee_mode {
        MeleeMode::Cone => {
            let half_angle = combat.melee_half_angle();
            eligible
                .filter(|&(_, _, center)| angle_between(aim_angle(origin, center), aim) <= half_angle)
                .map(|(i, _, _)| i)
                .collect()
        }
        MeleeMode::Nearest => eligible
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _, _)| vec![i])
            .unwrap_or_default(),
    }
}

/// Transient melee effect exposed to the renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeleeSwing {
    pub origin: Vec2,
    pub radius: f32,
    /// Aim heading in radians
    pub aim: f32,
    pub half_angle: f32,
    pub created_at: f64,
    pub duration_ms: f64,
}

impl MeleeSwing {
    pub fn remaining_ms(&self, now: f64) -> f64 {
        (self.created_at + self.duration_ms - now).max(0.0)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now - self.created_at > self.duration_ms
    }

    /// World-space endpoints of the swing arc
    pub fn arc_endpoints(&self) -> (Vec2, Vec2) {
        (
            self.origin + polar_to_cartesian(self.radius, self.aim - self.half_angle),
            self.origin + polar_to_cartesian(self.radius, self.aim + self.half_angle),
        )
    }
}
