//! Projectiles fired by the player and by shooter enemies
//!
//! Pure kinematic entities: no gravity, fixed speed, fixed lifespan, first
//! hit wins. A projectile is retired by zeroing its lifespan and swept out of
//! the collection at the end of the step.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{first_overlap, intersects};
use super::enemy::Enemy;
use super::player::Player;
use super::rect::Rect;
use super::state::{GameEvent, record_enemy_hit, record_player_hit};
use super::world::WorldConfig;
use crate::tuning::{ProjectileTuning, Tuning};

/// Which side fired a projectile (and therefore who it can hurt)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub side: Side,
    /// Center of the hitbox
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length of the square hitbox
    pub size: f32,
    pub lifespan_ms: f64,
    pub damage: i32,
}

impl Projectile {
    /// Spawn a projectile at `origin` heading for `target` at the side's speed.
    ///
    /// The id is assigned when the projectile joins the game state. A target
    /// on top of the origin fires along +x.
    pub fn fire(origin: Vec2, target: Vec2, side: Side, tuning: &ProjectileTuning) -> Self {
        let shot = match side {
            Side::Player => &tuning.player,
            Side::Enemy => &tuning.enemy,
        };
        let mut dir = (target - origin).normalize_or_zero();
        if dir == Vec2::ZERO {
            dir = Vec2::X;
        }
        Self {
            id: 0,
            side,
            pos: origin,
            vel: dir * shot.speed,
            size: shot.size,
            lifespan_ms: shot.lifespan_ms,
            damage: shot.damage,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::centered(self.pos, Vec2::splat(self.size))
    }

    /// Unit heading (for drawing player shots as short lines)
    pub fn direction(&self) -> Vec2 {
        self.vel.normalize_or_zero()
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.lifespan_ms > 0.0
    }

    pub fn retire(&mut self) {
        self.lifespan_ms = 0.0;
    }

    /// Move one frame and age by `dt_ms`
    pub fn advance(&mut self, dt_ms: f64) {
        self.pos += self.vel;
        self.lifespan_ms -= dt_ms;
    }
}

/// Advance every projectile and resolve its hits.
///
/// Player shots damage the first live enemy they overlap; enemy shots damage
/// the player unless invincible, in which case they pass through. Platforms
/// and leaving the world retire a projectile without damage.
#[allow(clippy::too_many_arguments)]
pub fn step_projectiles(
    projectiles: &mut [Projectile],
    player: &mut Player,
    enemies: &mut [Enemy],
    world: &WorldConfig,
    tuning: &Tuning,
    now: f64,
    dt_ms: f64,
    events: &mut Vec<GameEvent>,
) {
    for p in projectiles.iter_mut() {
        if !p.is_live() {
            continue;
        }
        p.advance(dt_ms);
        if !p.is_live() {
            continue;
        }

        let hitbox = p.rect();
        match p.side {
            Side::Player => {
                if let Some(enemy) = enemies
                    .iter_mut()
                    .find(|e| e.alive && intersects(&hitbox, &e.body.rect()))
                {
                    let outcome = enemy.take_damage(p.damage);
                    record_enemy_hit(events, enemy.id, p.damage, outcome);
                    p.retire();
                    continue;
                }
            }
            Side::Enemy => {
                if !player.is_invincible && intersects(&hitbox, &player.body.rect()) {
                    let outcome = player.take_damage(p.damage, tuning, now);
                    record_player_hit(events, p.damage, outcome);
                    p.retire();
                    continue;
                }
            }
        }

        if first_overlap(&hitbox, &world.platforms).is_some() || !world.in_bounds(p.pos) {
            p.retire();
        }
    }
}
