//! Enemy archetypes and their AI
//!
//! One `Enemy` record for every archetype; behaviour is selected by matching
//! on `EnemyKind`. AI only ever writes acceleration (plus jumps), so the shared
//! body integration stays the single place that moves anything.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::PhysicsBody;
use super::collision::{line_of_sight, point_in_platform};
use super::combat::{DamageOutcome, cooldown_ready, knockback};
use super::player::Facing;
use super::projectile::{Projectile, Side};
use super::world::{EnemyArchetype, WorldConfig};
use crate::tuning::{CombatTuning, EnemyTuning, Tuning};

/// Archetype tag plus archetype-only state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Closes in and strikes at short range. `spotted` latches on first sight;
    /// `in_reach` is set at attack range and cleared past the hysteresis band.
    Melee { spotted: bool, in_reach: bool },
    /// Keeps its distance and fires while it can see the player
    Shooter,
}

impl EnemyKind {
    pub fn archetype(&self) -> EnemyArchetype {
        match self {
            EnemyKind::Melee { .. } => EnemyArchetype::Melee,
            EnemyKind::Shooter => EnemyArchetype::Shooter,
        }
    }
}

impl From<EnemyArchetype> for EnemyKind {
    fn from(archetype: EnemyArchetype) -> Self {
        match archetype {
            EnemyArchetype::Melee => EnemyKind::Melee {
                spotted: false,
                in_reach: false,
            },
            EnemyArchetype::Shooter => EnemyKind::Shooter,
        }
    }
}

/// Something an enemy did this step that the simulation has to carry out
#[derive(Debug, Clone)]
pub enum EnemyAction {
    /// Spawn this projectile
    Fire(Projectile),
    /// Close-range hit on the player; dropped if the attacker dies first
    Strike { attacker: u32, damage: i32 },
}

/// Per-step report from `Enemy::update`
#[derive(Debug, Clone, Default)]
pub struct EnemyUpdate {
    pub action: Option<EnemyAction>,
    /// Noticed the player for the first time
    pub aggro: bool,
    /// Fell out of the world and was put back at its spawn
    pub respawned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub body: PhysicsBody,
    pub health: i32,
    pub max_health: i32,
    pub facing: Facing,
    pub is_stunned: bool,
    pub stunned_until: f64,
    /// Last strike (melee) or shot (shooter)
    pub last_attack_at: Option<f64>,
    /// Top-left position used for respawns
    pub spawn: Vec2,
    /// Cleared on death; the enemy is dropped at the end of the step
    pub alive: bool,
}

/// -1, 0 or 1 (unlike `f32::signum`, zero maps to zero)
#[inline]
fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Enemy {
    pub fn new(id: u32, archetype: EnemyArchetype, pos: Vec2, tuning: &Tuning) -> Self {
        let enemies = &tuning.enemies;
        Self {
            id,
            kind: archetype.into(),
            body: PhysicsBody::new(pos, Vec2::splat(enemies.size), &tuning.physics),
            health: enemies.max_health,
            max_health: enemies.max_health,
            facing: Facing::Left,
            is_stunned: false,
            stunned_until: 0.0,
            last_attack_at: None,
            spawn: pos,
            alive: true,
        }
    }

    pub fn has_spotted_player(&self) -> bool {
        match self.kind {
            EnemyKind::Melee { spotted, .. } => spotted,
            EnemyKind::Shooter => true,
        }
    }

    fn max_speed(&self, enemies: &EnemyTuning) -> f32 {
        match self.kind {
            EnemyKind::Melee { .. } => enemies.melee.max_speed,
            EnemyKind::Shooter => enemies.shooter.max_speed,
        }
    }

    fn face_toward(&mut self, dx: f32) {
        if dx > 0.0 {
            self.facing = Facing::Right;
        } else if dx < 0.0 {
            self.facing = Facing::Left;
        }
    }

    /// Stun for the configured duration and launch away from `from`
    pub fn stun_and_knockback(&mut self, from: Vec2, now: f64, combat: &CombatTuning) {
        self.is_stunned = true;
        self.stunned_until = now + combat.stun_duration_ms;
        self.body.vel = knockback(
            from,
            self.body.center(),
            combat.knockback_force,
            combat.knockback_lift,
        );
    }

    /// Apply damage. Health saturates at zero and death is reported once.
    pub fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if !self.alive {
            return DamageOutcome::Ignored;
        }
        self.health = (self.health - amount.max(0)).max(0);
        if self.health == 0 {
            self.alive = false;
            log::debug!("Enemy {} killed", self.id);
            DamageOutcome::Killed
        } else {
            DamageOutcome::Hurt
        }
    }

    /// Back to the spawn point, full health, unstunned. Aggro is kept.
    pub fn respawn(&mut self) {
        self.body.place(self.spawn);
        self.health = self.max_health;
        self.is_stunned = false;
        self.stunned_until = 0.0;
        log::debug!("Enemy {} respawned at {}", self.id, self.spawn);
    }

    /// Decide this frame's movement and attack against a player centered at
    /// `target`. Writes acceleration and jumps into the body; does not move it.
    pub fn think(
        &mut self,
        now: f64,
        target: Vec2,
        world: &WorldConfig,
        tuning: &Tuning,
    ) -> Option<EnemyAction> {
        match self.kind {
            EnemyKind::Melee { spotted, in_reach } => {
                self.think_melee(spotted, in_reach, now, target, world, tuning)
            }
            EnemyKind::Shooter => self.think_shooter(now, target, world, tuning),
        }
    }

    fn think_melee(
        &mut self,
        spotted: bool,
        in_reach: bool,
        now: f64,
        target: Vec2,
        world: &WorldConfig,
        tuning: &Tuning,
    ) -> Option<EnemyAction> {
        let m = &tuning.enemies.melee;
        let center = self.body.center();
        let to_player = target - center;
        let dist = to_player.length();

        if !spotted {
            if dist >= m.aggro_range {
                return None;
            }
            log::debug!("Enemy {} spotted the player at {:.0}px", self.id, dist);
        }

        let in_reach = if in_reach {
            dist <= m.attack_range + m.hysteresis
        } else {
            dist <= m.attack_range
        };
        self.kind = EnemyKind::Melee {
            spotted: true,
            in_reach,
        };

        self.face_toward(to_player.x);
        let chasing = !in_reach;
        if chasing {
            self.body.acc.x += m.accel * sign(to_player.x);
        }

        let mut action = None;
        if dist <= m.attack_range && cooldown_ready(self.last_attack_at, now, m.strike_cooldown_ms) {
            self.last_attack_at = Some(now);
            action = Some(EnemyAction::Strike {
                attacker: self.id,
                damage: m.strike_damage,
            });
        }

        let player_above = to_player.y < 0.0;
        if self.body.on_ground {
            let far_above = to_player.y < -2.0 * self.body.size.y;
            if far_above || (chasing && self.path_blocked(world)) {
                self.body.jump(tuning.enemies.jump_power);
            }
        } else if self.body.on_wall() && player_above {
            let e = &tuning.enemies;
            self.body.wall_jump(e.wall_jump_x, e.jump_power);
        }

        action
    }

    /// A platform taller than the enemy sits one body-width ahead
    fn path_blocked(&self, world: &WorldConfig) -> bool {
        let probe = self.body.center() + Vec2::new(self.facing.sign() * self.body.size.x, 0.0);
        point_in_platform(probe, &world.platforms).is_some_and(|p| p.h > self.body.size.y)
    }

    fn think_shooter(
        &mut self,
        now: f64,
        target: Vec2,
        world: &WorldConfig,
        tuning: &Tuning,
    ) -> Option<EnemyAction> {
        let s = &tuning.enemies.shooter;
        let center = self.body.center();
        let to_player = target - center;
        let dist = to_player.length();
        let dir = sign(to_player.x);

        self.face_toward(to_player.x);

        let mut action = None;
        if line_of_sight(center, target, &world.platforms) {
            if dist < s.flee_distance {
                self.body.acc.x -= s.accel * dir;
            } else if dist > s.engage_distance {
                self.body.acc.x += s.accel * dir;
            }
            if cooldown_ready(self.last_attack_at, now, s.shoot_cooldown_ms) {
                self.last_attack_at = Some(now);
                action = Some(EnemyAction::Fire(Projectile::fire(
                    center,
                    target,
                    Side::Enemy,
                    &tuning.projectiles,
                )));
            }
        } else {
            self.body.acc.x += s.accel * s.drift_factor * dir;
        }

        if self.body.on_wall() && !self.body.on_ground && self.body.vel.y <= 0.0 {
            let e = &tuning.enemies;
            self.body.wall_jump(e.wall_jump_x, e.jump_power);
        }

        action
    }

    /// Full per-frame update: stun expiry, AI, separation, physics, respawn
    pub fn update(
        &mut self,
        now: f64,
        target: Vec2,
        world: &WorldConfig,
        tuning: &Tuning,
        separation: f32,
    ) -> EnemyUpdate {
        let mut out = EnemyUpdate::default();
        let mut kicked = false;
        if !self.alive {
            return out;
        }

        if self.is_stunned && now >= self.stunned_until {
            self.is_stunned = false;
        }

        // Stunned bodies keep their knockback arc until they touch down
        let apply_drag = if self.is_stunned {
            self.body.on_ground
        } else {
            let was_spotted = self.has_spotted_player();
            let charges = self.body.wall_jumps_remaining;
            out.action = self.think(now, target, world, tuning);
            kicked = self.body.wall_jumps_remaining < charges;
            out.aggro = !was_spotted && self.has_spotted_player();
            self.body.acc.x += separation;
            true
        };

        let contacts = self.body.integrate(world, &tuning.physics, apply_drag);

        // A wall-jump kick is allowed to exceed the run speed on its frame
        if !self.is_stunned && !kicked {
            let max = self.max_speed(&tuning.enemies);
            self.body.vel.x = self.body.vel.x.clamp(-max, max);
        }

        if contacts.fell_out {
            self.respawn();
            out.respawned = true;
        }
        out
    }
}

/// Horizontal push keeping enemy `index` from stacking on its neighbours.
///
/// Each live neighbour closer than the separation radius contributes
/// `(radius - distance) / radius` away from itself; the sum is reduced to a
/// direction and scaled by the separation force. Neighbours at the same x are
/// split by index. Dead or stunned enemies get no push.
pub fn separation_force(index: usize, enemies: &[Enemy], tuning: &EnemyTuning) -> f32 {
    let Some(me) = enemies.get(index) else {
        return 0.0;
    };
    if !me.alive || me.is_stunned {
        return 0.0;
    }

    let center = me.body.center();
    let radius = tuning.separation_radius;
    let push: f32 = enemies
        .iter()
        .enumerate()
        .filter(|&(j, other)| j != index && other.alive)
        .filter_map(|(j, other)| {
            let other_center = other.body.center();
            let d = center.distance(other_center);
            if d >= radius {
                return None;
            }
            let dx = center.x - other_center.x;
            let dir = if dx != 0.0 {
                sign(dx)
            } else if index < j {
                -1.0
            } else {
                1.0
            };
            Some(dir * (radius - d) / radius)
        })
        .sum();

    sign(push) * tuning.separation_force
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use proptest::prelude::*;

    fn floor_world() -> WorldConfig {
        WorldConfig {
            platforms: vec![Rect::new(0.0, 300.0, 1000.0, 20.0)],
            ..WorldConfig::empty(1000.0, 400.0)
        }
    }

    /// Enemy standing on the floor of `floor_world` with its left edge at `x`
    fn grounded(kind: EnemyArchetype, x: f32, tuning: &Tuning) -> Enemy {
        let mut e = Enemy::new(1, kind, Vec2::new(x, 280.0), tuning);
        e.body.on_ground = true;
        e
    }

    #[test]
    fn test_take_damage_reports_death_once() {
        let tuning = Tuning::default();
        let mut e = Enemy::new(1, EnemyArchetype::Melee, Vec2::ZERO, &tuning);

        for _ in 0..3 {
            assert_eq!(e.take_damage(10), DamageOutcome::Hurt);
        }
        assert_eq!(e.health, 70);

        assert_eq!(e.take_damage(500), DamageOutcome::Killed);
        assert_eq!(e.health, 0);
        assert!(!e.alive);
        assert_eq!(e.take_damage(10), DamageOutcome::Ignored);
        assert_eq!(e.health, 0);
    }

    #[test]
    fn test_stun_and_knockback_launches_away() {
        let tuning = Tuning::default();
        let mut e = Enemy::new(1, EnemyArchetype::Shooter, Vec2::new(100.0, 100.0), &tuning);
        let attacker = e.body.center() - Vec2::new(30.0, 0.0);

        e.stun_and_knockback(attacker, 500.0, &tuning.combat);

        assert!(e.is_stunned);
        assert_eq!(e.stunned_until, 500.0 + tuning.combat.stun_duration_ms);
        assert!((e.body.vel.x - tuning.combat.knockback_force).abs() < 1e-5);
        assert!((e.body.vel.y + tuning.combat.knockback_lift).abs() < 1e-5);
    }

    #[test]
    fn test_stunned_enemy_skips_ai_until_expiry() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut e = grounded(EnemyArchetype::Shooter, 100.0, &tuning);
        let player = e.body.center() + Vec2::new(200.0, 0.0);
        e.stun_and_knockback(player, 0.0, &tuning.combat);

        let out = e.update(100.0, player, &world, &tuning, 0.0);
        assert!(out.action.is_none());
        assert!(e.is_stunned);
        assert!(e.last_attack_at.is_none());

        let out = e.update(tuning.combat.stun_duration_ms, player, &world, &tuning, 0.0);
        assert!(!e.is_stunned);
        assert!(matches!(out.action, Some(EnemyAction::Fire(_))));
    }

    #[test]
    fn test_shooter_holds_inside_band_and_fires_on_cooldown() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut e = grounded(EnemyArchetype::Shooter, 100.0, &tuning);
        let player = e.body.center() + Vec2::new(200.0, 0.0);

        let action = e.think(1000.0, player, &world, &tuning);
        assert_eq!(e.body.acc.x, 0.0);
        match action {
            Some(EnemyAction::Fire(p)) => {
                assert_eq!(p.side, Side::Enemy);
                assert!(p.vel.x > 0.0);
            }
            other => panic!("expected a shot, got {other:?}"),
        }

        assert!(e.think(1500.0, player, &world, &tuning).is_none());
        assert_eq!(e.body.acc.x, 0.0);
        let cooldown = tuning.enemies.shooter.shoot_cooldown_ms;
        assert!(e.think(1000.0 + cooldown, player, &world, &tuning).is_some());
    }

    #[test]
    fn test_shooter_flees_and_advances() {
        let tuning = Tuning::default();
        let world = floor_world();

        let mut e = grounded(EnemyArchetype::Shooter, 400.0, &tuning);
        let close = e.body.center() + Vec2::new(50.0, 0.0);
        e.think(0.0, close, &world, &tuning);
        assert!(e.body.acc.x < 0.0);

        let mut e = grounded(EnemyArchetype::Shooter, 400.0, &tuning);
        let far = e.body.center() - Vec2::new(350.0, 0.0);
        e.think(0.0, far, &world, &tuning);
        assert!(e.body.acc.x < 0.0);
        assert_eq!(e.facing, Facing::Left);
    }

    #[test]
    fn test_shooter_without_sight_drifts_and_holds_fire() {
        let tuning = Tuning::default();
        let mut world = floor_world();
        world.platforms.push(Rect::new(200.0, 0.0, 20.0, 300.0));
        let mut e = grounded(EnemyArchetype::Shooter, 100.0, &tuning);
        let player = e.body.center() + Vec2::new(200.0, 0.0);

        let action = e.think(0.0, player, &world, &tuning);

        assert!(action.is_none());
        let s = &tuning.enemies.shooter;
        assert!((e.body.acc.x - s.accel * s.drift_factor).abs() < 1e-6);
    }

    #[test]
    fn test_melee_waits_until_player_is_close() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut e = grounded(EnemyArchetype::Melee, 100.0, &tuning);
        let far = e.body.center() + Vec2::new(tuning.enemies.melee.aggro_range + 10.0, 0.0);

        let out = e.update(0.0, far, &world, &tuning, 0.0);
        assert!(!out.aggro);
        assert!(!e.has_spotted_player());
        assert_eq!(e.body.vel.x, 0.0);

        let near = e.body.center() + Vec2::new(100.0, 0.0);
        let out = e.update(16.0, near, &world, &tuning, 0.0);
        assert!(out.aggro);
        assert!(e.body.vel.x > 0.0);

        // The latch holds even once the player is far away again
        let out = e.update(32.0, far + Vec2::new(200.0, 0.0), &world, &tuning, 0.0);
        assert!(!out.aggro);
        assert!(e.has_spotted_player());
        assert!(e.body.vel.x > 0.0);
    }

    #[test]
    fn test_melee_strikes_in_range_on_cooldown() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut e = grounded(EnemyArchetype::Melee, 100.0, &tuning);
        e.kind = EnemyKind::Melee {
            spotted: true,
            in_reach: false,
        };
        let player = e.body.center() + Vec2::new(20.0, 0.0);

        let action = e.think(0.0, player, &world, &tuning);
        assert!(matches!(
            action,
            Some(EnemyAction::Strike { attacker: 1, damage }) if damage == tuning.enemies.melee.strike_damage
        ));
        assert_eq!(e.body.acc.x, 0.0);
        assert!(e.think(100.0, player, &world, &tuning).is_none());
    }

    #[test]
    fn test_melee_closes_gap_inside_hysteresis_band() {
        let tuning = Tuning::default();
        let world = floor_world();
        let m = &tuning.enemies.melee;
        let mut e = grounded(EnemyArchetype::Melee, 100.0, &tuning);
        let center = e.body.center();
        let at = |dx: f32| center + Vec2::new(dx, 0.0);

        // Spotted but never reached: keep walking in
        let band = m.attack_range + m.hysteresis / 2.0;
        assert!(e.think(0.0, at(band), &world, &tuning).is_none());
        assert!(e.body.acc.x > 0.0);

        e.body.acc = Vec2::ZERO;
        assert!(e.think(0.0, at(m.attack_range - 6.0), &world, &tuning).is_some());
        assert_eq!(e.body.acc.x, 0.0);

        // Player steps back into the band: stay put
        e.body.acc = Vec2::ZERO;
        e.think(100.0, at(band), &world, &tuning);
        assert_eq!(e.body.acc.x, 0.0);

        // Past the band: chase again
        e.think(200.0, at(m.attack_range + m.hysteresis + 1.0), &world, &tuning);
        assert!(e.body.acc.x > 0.0);
        assert_eq!(
            e.kind,
            EnemyKind::Melee {
                spotted: true,
                in_reach: false
            }
        );
    }

    #[test]
    fn test_melee_jumps_wall_in_its_path() {
        let tuning = Tuning::default();
        let mut world = floor_world();
        world.platforms.push(Rect::new(125.0, 200.0, 20.0, 100.0));
        let mut e = grounded(EnemyArchetype::Melee, 100.0, &tuning);
        let player = e.body.center() + Vec2::new(150.0, 0.0);

        e.think(0.0, player, &world, &tuning);

        assert_eq!(e.body.vel.y, -tuning.enemies.jump_power);
        assert!(!e.body.on_ground);
    }

    #[test]
    fn test_melee_ignores_low_step() {
        let tuning = Tuning::default();
        let mut world = floor_world();
        world.platforms.push(Rect::new(125.0, 285.0, 40.0, 15.0));
        let mut e = grounded(EnemyArchetype::Melee, 100.0, &tuning);
        let player = e.body.center() + Vec2::new(150.0, 0.0);

        e.think(0.0, player, &world, &tuning);

        assert_eq!(e.body.vel.y, 0.0);
    }

    #[test]
    fn test_melee_wall_jumps_toward_player_above() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut e = Enemy::new(1, EnemyArchetype::Melee, Vec2::new(100.0, 150.0), &tuning);
        e.kind = EnemyKind::Melee {
            spotted: true,
            in_reach: false,
        };
        e.body.on_wall_right = true;
        let player = e.body.center() + Vec2::new(-20.0, -80.0);

        e.think(0.0, player, &world, &tuning);

        assert_eq!(e.body.vel.y, -tuning.enemies.jump_power);
        assert!(e.body.vel.x < 0.0);
        assert_eq!(e.body.wall_jumps_remaining, tuning.physics.max_wall_jumps - 1);
    }

    #[test]
    fn test_wall_jump_kick_survives_speed_clamp() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut e = Enemy::new(1, EnemyArchetype::Melee, Vec2::new(100.0, 150.0), &tuning);
        e.kind = EnemyKind::Melee {
            spotted: true,
            in_reach: false,
        };
        e.body.on_wall_right = true;
        let player = e.body.center() + Vec2::new(-20.0, -80.0);

        e.update(0.0, player, &world, &tuning, 0.0);

        assert!(e.body.vel.x < -tuning.enemies.melee.max_speed);

        // Next frame the run-speed cap applies again
        e.update(16.0, player, &world, &tuning, 0.0);
        assert!(e.body.vel.x >= -tuning.enemies.melee.max_speed);
    }

    #[test]
    fn test_fall_out_respawns_at_spawn() {
        let tuning = Tuning::default();
        let world = WorldConfig::empty(640.0, 360.0);
        let spawn = Vec2::new(100.0, 350.0);
        let mut e = Enemy::new(1, EnemyArchetype::Shooter, spawn, &tuning);
        e.health = 20;
        e.body.vel.y = 12.0;
        e.is_stunned = true;
        e.stunned_until = 10_000.0;

        let out = e.update(0.0, Vec2::new(600.0, 0.0), &world, &tuning, 0.0);

        assert!(out.respawned);
        assert_eq!(e.body.pos, spawn);
        assert_eq!(e.body.vel, Vec2::ZERO);
        assert_eq!(e.health, e.max_health);
        assert!(!e.is_stunned);
        assert!(e.alive);
    }

    #[test]
    fn test_separation_pushes_apart() {
        let tuning = Tuning::default();
        let a = Enemy::new(1, EnemyArchetype::Melee, Vec2::new(100.0, 100.0), &tuning);
        let b = Enemy::new(2, EnemyArchetype::Melee, Vec2::new(110.0, 100.0), &tuning);
        let far = Enemy::new(3, EnemyArchetype::Melee, Vec2::new(400.0, 100.0), &tuning);
        let enemies = [a, b, far];

        let force = tuning.enemies.separation_force;
        assert_eq!(separation_force(0, &enemies, &tuning.enemies), -force);
        assert_eq!(separation_force(1, &enemies, &tuning.enemies), force);
        assert_eq!(separation_force(2, &enemies, &tuning.enemies), 0.0);
    }

    #[test]
    fn test_separation_splits_stacked_enemies() {
        let tuning = Tuning::default();
        let a = Enemy::new(1, EnemyArchetype::Melee, Vec2::new(100.0, 100.0), &tuning);
        let b = Enemy::new(2, EnemyArchetype::Shooter, Vec2::new(100.0, 100.0), &tuning);
        let mut enemies = [a, b];

        let left = separation_force(0, &enemies, &tuning.enemies);
        let right = separation_force(1, &enemies, &tuning.enemies);
        assert!(left < 0.0 && right > 0.0);

        enemies[0].is_stunned = true;
        assert_eq!(separation_force(0, &enemies, &tuning.enemies), 0.0);
        enemies[0].alive = false;
        assert_eq!(separation_force(1, &enemies, &tuning.enemies), 0.0);
    }

    #[test]
    fn test_speed_clamped_to_archetype_max() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut e = grounded(EnemyArchetype::Melee, 100.0, &tuning);
        e.kind = EnemyKind::Melee {
            spotted: true,
            in_reach: false,
        };
        e.body.vel.x = 50.0;

        e.update(0.0, Vec2::new(900.0, 290.0), &world, &tuning, 0.0);

        assert!(e.body.vel.x <= tuning.enemies.melee.max_speed);
    }

    proptest! {
        #[test]
        fn prop_health_stays_in_bounds(hits in proptest::collection::vec(0i32..60, 0..20)) {
            let tuning = Tuning::default();
            let mut e = Enemy::new(1, EnemyArchetype::Melee, Vec2::ZERO, &tuning);
            let mut deaths = 0;
            for amount in hits {
                if e.take_damage(amount) == DamageOutcome::Killed {
                    deaths += 1;
                }
                prop_assert!(e.health >= 0 && e.health <= e.max_health);
            }
            prop_assert!(deaths <= 1);
            prop_assert_eq!(deaths == 1, !e.alive);
        }
    }
}
