//! Player controller
//!
//! Orthogonal flags over the shared physics body: grounded/airborne comes from
//! the body, dashing and invincible are deadline-driven and independent of
//! each other.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Contacts, PhysicsBody};
use super::combat::{DamageOutcome, MeleeSwing, aim_angle, cooldown_ready, melee_targets};
use super::enemy::Enemy;
use super::projectile::{Projectile, Side};
use super::world::WorldConfig;
use crate::tuning::{MeleeMode, Tuning};

/// Horizontal movement facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Coarse aim shown by the HUD arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AimDirection {
    Up,
    Down,
    Left,
    #[default]
    Right,
}

impl AimDirection {
    /// Dominant axis of `delta` (ties go vertical)
    pub fn from_delta(delta: Vec2) -> Self {
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                AimDirection::Right
            } else {
                AimDirection::Left
            }
        } else if delta.y > 0.0 {
            AimDirection::Down
        } else {
            AimDirection::Up
        }
    }
}

/// Equipped weapon. Cosmetic; firing rules come from tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Weapon {
    #[default]
    MachineGun,
}

impl Weapon {
    pub fn label(&self) -> &'static str {
        match self {
            Weapon::MachineGun => "Machine Gun",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JumpKind {
    Ground,
    Wall,
}

/// Result of a melee swing that went off
#[derive(Debug, Clone)]
pub struct MeleeStrike {
    pub swing: MeleeSwing,
    /// Ids of the enemies stunned by the swing
    pub struck: Vec<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: PhysicsBody,
    pub health: i32,
    pub max_health: i32,
    pub facing: Facing,
    pub aim: AimDirection,
    pub weapon: Weapon,
    pub dashes_remaining: u32,
    pub is_dashing: bool,
    pub is_invincible: bool,
    pub dash_ends_at: f64,
    pub invincible_until: f64,
    pub last_shot_at: Option<f64>,
    pub last_melee_at: Option<f64>,
    pub last_dash_replenish_at: f64,
    /// Top-left position restored by `reset`
    pub spawn: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2, tuning: &Tuning, now: f64) -> Self {
        let p = &tuning.player;
        Self {
            body: PhysicsBody::new(spawn, Vec2::splat(p.size), &tuning.physics),
            health: p.max_health,
            max_health: p.max_health,
            facing: Facing::Right,
            aim: AimDirection::Right,
            weapon: Weapon::MachineGun,
            dashes_remaining: p.max_dashes,
            is_dashing: false,
            is_invincible: false,
            dash_ends_at: 0.0,
            invincible_until: 0.0,
            last_shot_at: None,
            last_melee_at: None,
            last_dash_replenish_at: now,
            spawn,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.body.center()
    }

    /// Run left or right. Returns whether the input drove the body this frame
    /// (no input, or dashing, leaves velocity to drag).
    pub fn handle_movement_input(&mut self, axis: f32, tuning: &Tuning) -> bool {
        if self.is_dashing || axis == 0.0 {
            return false;
        }
        if axis > 0.0 {
            self.body.vel.x = tuning.player.speed;
            self.facing = Facing::Right;
        } else {
            self.body.vel.x = -tuning.player.speed;
            self.facing = Facing::Left;
        }
        true
    }

    /// Rising edge of the jump signal
    pub fn handle_jump_edge(&mut self, tuning: &Tuning) -> Option<JumpKind> {
        let p = &tuning.player;
        if self.body.on_ground {
            self.body.jump(p.jump_power);
            Some(JumpKind::Ground)
        } else if self.body.wall_jump(p.wall_jump_x, p.wall_jump_y) {
            Some(JumpKind::Wall)
        } else {
            None
        }
    }

    /// Start a dash toward the facing direction. No-op without a charge or
    /// while already dashing.
    pub fn perform_dash(&mut self, now: f64, tuning: &Tuning) -> bool {
        if self.dashes_remaining == 0 || self.is_dashing {
            return false;
        }
        let p = &tuning.player;
        self.dashes_remaining -= 1;
        self.is_dashing = true;
        self.is_invincible = true;
        self.dash_ends_at = now + p.dash_duration_ms;
        self.invincible_until = now + p.dash_invincibility_ms;
        self.body.gravity_enabled = false;
        self.body.vel = Vec2::new(self.facing.sign() * p.dash_speed, 0.0);
        true
    }

    fn end_dash(&mut self) {
        self.is_dashing = false;
        self.body.gravity_enabled = true;
    }

    /// Expire dash and invincibility deadlines and trickle dash charges back
    pub fn update_timers(&mut self, now: f64, tuning: &Tuning) {
        if self.is_dashing && now >= self.dash_ends_at {
            self.end_dash();
        }
        if self.is_invincible && now >= self.invincible_until {
            self.is_invincible = false;
        }
        if self.body.on_ground {
            self.body.wall_jumps_remaining = tuning.physics.max_wall_jumps;
        }
        let p = &tuning.player;
        if self.dashes_remaining < p.max_dashes
            && now > self.last_dash_replenish_at + p.dash_replenish_ms
        {
            self.dashes_remaining += 1;
            self.last_dash_replenish_at = now;
        }
    }

    /// Point the HUD aim toward `target`
    pub fn update_aim(&mut self, target: Vec2) {
        self.aim = AimDirection::from_delta(target - self.center());
    }

    /// Fire toward `target` if the shot cooldown has elapsed
    pub fn shoot(&mut self, now: f64, target: Vec2, tuning: &Tuning) -> Option<Projectile> {
        if !cooldown_ready(self.last_shot_at, now, tuning.player.shoot_cooldown_ms) {
            return None;
        }
        self.last_shot_at = Some(now);
        Some(Projectile::fire(
            self.center(),
            target,
            Side::Player,
            &tuning.projectiles,
        ))
    }

    /// Swing toward `target`, stunning and knocking back every enemy the
    /// swing connects with
    pub fn perform_melee(
        &mut self,
        now: f64,
        target: Vec2,
        enemies: &mut [Enemy],
        tuning: &Tuning,
    ) -> Option<MeleeStrike> {
        let combat = &tuning.combat;
        if !cooldown_ready(self.last_melee_at, now, combat.melee_cooldown_ms) {
            return None;
        }
        self.last_melee_at = Some(now);

        let origin = self.center();
        let aim = aim_angle(origin, target);
        let struck = melee_targets(origin, aim, enemies, combat)
            .into_iter()
            .map(|i| {
                let enemy = &mut enemies[i];
                enemy.stun_and_knockback(origin, now, combat);
                enemy.id
            })
            .collect();

        let half_angle = match combat.melee_mode {
            MeleeMode::Cone => combat.melee_half_angle(),
            MeleeMode::Nearest => std::f32::consts::PI,
        };
        Some(MeleeStrike {
            swing: MeleeSwing {
                origin,
                radius: combat.melee_range,
                aim,
                half_angle,
                created_at: now,
                duration_ms: combat.swing_duration_ms,
            },
            struck,
        })
    }

    /// Apply damage unless invincible. Lethal damage resets the player on the
    /// spot and reports `Killed`.
    pub fn take_damage(&mut self, amount: i32, tuning: &Tuning, now: f64) -> DamageOutcome {
        if self.is_invincible {
            return DamageOutcome::Ignored;
        }
        self.health -= amount.max(0);
        if self.health <= 0 {
            log::debug!("Player died");
            self.reset(now, tuning);
            DamageOutcome::Killed
        } else {
            DamageOutcome::Hurt
        }
    }

    /// Back to spawn with every resource refilled
    pub fn reset(&mut self, now: f64, tuning: &Tuning) {
        self.body.place(self.spawn);
        self.body.gravity_enabled = true;
        self.body.wall_jumps_remaining = tuning.physics.max_wall_jumps;
        self.health = self.max_health;
        self.facing = Facing::Right;
        self.dashes_remaining = tuning.player.max_dashes;
        self.is_dashing = false;
        self.is_invincible = false;
        self.last_dash_replenish_at = now;
    }

    /// Integrate one frame. `moving` is the result of `handle_movement_input`.
    /// A dash that runs into a wall ends immediately.
    pub fn step_physics(&mut self, world: &WorldConfig, tuning: &Tuning, moving: bool) -> Contacts {
        let apply_drag = !self.is_dashing && !moving;
        let contacts = self.body.integrate(world, &tuning.physics, apply_drag);
        if contacts.hit_wall && self.is_dashing {
            self.end_dash();
        }
        contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_MS;
    use crate::sim::rect::Rect;
    use crate::sim::world::EnemyArchetype;
    use crate::polar_to_cartesian;
    use proptest::prelude::*;

    fn floor_world() -> WorldConfig {
        WorldConfig {
            platforms: vec![Rect::new(0.0, 300.0, 1000.0, 20.0)],
            ..WorldConfig::empty(1000.0, 400.0)
        }
    }

    /// Player resting on the floor of `floor_world`
    fn grounded(tuning: &Tuning) -> Player {
        let mut p = Player::new(Vec2::new(100.0, 280.0), tuning, 0.0);
        p.body.on_ground = true;
        p
    }

    #[test]
    fn test_dash_timeline() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut p = grounded(&tuning);

        assert!(p.perform_dash(0.0, &tuning));
        assert_eq!(p.body.vel, Vec2::new(tuning.player.dash_speed, 0.0));
        assert!(!p.body.gravity_enabled);
        assert_eq!(p.dashes_remaining, tuning.player.max_dashes - 1);
        assert!(p.is_dashing);
        assert!(p.is_invincible);

        let mut now = 0.0;
        while now < tuning.player.dash_duration_ms {
            p.update_timers(now, &tuning);
            assert!(p.is_dashing);
            p.step_physics(&world, &tuning, false);
            now += FRAME_MS;
        }

        p.update_timers(tuning.player.dash_duration_ms, &tuning);
        assert!(!p.is_dashing);
        assert!(p.body.gravity_enabled);
        assert!(p.is_invincible);

        p.update_timers(tuning.player.dash_invincibility_ms, &tuning);
        assert!(!p.is_invincible);
    }

    #[test]
    fn test_dash_needs_charge_and_no_active_dash() {
        let tuning = Tuning::default();
        let mut p = grounded(&tuning);

        assert!(p.perform_dash(0.0, &tuning));
        assert!(!p.perform_dash(10.0, &tuning));
        assert_eq!(p.dashes_remaining, tuning.player.max_dashes - 1);

        p.is_dashing = false;
        p.dashes_remaining = 0;
        assert!(!p.perform_dash(20.0, &tuning));
        assert!(!p.is_dashing);
    }

    #[test]
    fn test_dash_faces_left() {
        let tuning = Tuning::default();
        let mut p = grounded(&tuning);
        p.handle_movement_input(-1.0, &tuning);
        p.perform_dash(0.0, &tuning);
        assert_eq!(p.body.vel.x, -tuning.player.dash_speed);
    }

    #[test]
    fn test_dash_into_wall_ends_dash() {
        let tuning = Tuning::default();
        let mut world = floor_world();
        world.platforms.push(Rect::new(125.0, 0.0, 20.0, 300.0));
        let mut p = grounded(&tuning);

        p.perform_dash(0.0, &tuning);
        let contacts = p.step_physics(&world, &tuning, false);

        assert!(contacts.hit_wall);
        assert_eq!(p.body.pos.x, 105.0);
        assert!(!p.is_dashing);
        assert!(p.body.gravity_enabled);
        assert!(p.is_invincible);
    }

    #[test]
    fn test_movement_input() {
        let tuning = Tuning::default();
        let mut p = grounded(&tuning);

        assert!(p.handle_movement_input(-1.0, &tuning));
        assert_eq!(p.body.vel.x, -tuning.player.speed);
        assert_eq!(p.facing, Facing::Left);

        assert!(!p.handle_movement_input(0.0, &tuning));
        assert_eq!(p.facing, Facing::Left);

        p.is_dashing = true;
        p.body.vel.x = 12.0;
        assert!(!p.handle_movement_input(-1.0, &tuning));
        assert_eq!(p.body.vel.x, 12.0);
    }

    #[test]
    fn test_drag_only_without_input() {
        let tuning = Tuning::default();
        let world = floor_world();
        let mut p = grounded(&tuning);

        let moving = p.handle_movement_input(1.0, &tuning);
        p.step_physics(&world, &tuning, moving);
        assert_eq!(p.body.vel.x, tuning.player.speed);

        let moving = p.handle_movement_input(0.0, &tuning);
        p.step_physics(&world, &tuning, moving);
        assert!((p.body.vel.x - tuning.player.speed * tuning.physics.friction).abs() < 1e-5);
    }

    #[test]
    fn test_ground_and_wall_jumps() {
        let tuning = Tuning::default();
        let mut p = grounded(&tuning);

        assert_eq!(p.handle_jump_edge(&tuning), Some(JumpKind::Ground));
        assert_eq!(p.body.vel.y, -tuning.player.jump_power);
        assert!(!p.body.on_ground);

        // Airborne with no wall: nothing
        assert_eq!(p.handle_jump_edge(&tuning), None);

        p.body.on_wall_right = true;
        assert_eq!(p.handle_jump_edge(&tuning), Some(JumpKind::Wall));
        assert_eq!(p.body.vel, Vec2::new(-tuning.player.wall_jump_x, -tuning.player.wall_jump_y));
        assert_eq!(p.body.wall_jumps_remaining, tuning.physics.max_wall_jumps - 1);
    }

    #[test]
    fn test_wall_jump_budget_runs_out_and_refills_on_ground() {
        let tuning = Tuning::default();
        let mut p = Player::new(Vec2::new(100.0, 100.0), &tuning, 0.0);

        for _ in 0..tuning.physics.max_wall_jumps {
            p.body.on_wall_left = true;
            assert_eq!(p.handle_jump_edge(&tuning), Some(JumpKind::Wall));
        }
        p.body.on_wall_left = true;
        assert_eq!(p.handle_jump_edge(&tuning), None);
        assert_eq!(p.body.wall_jumps_remaining, 0);

        p.body.on_ground = true;
        p.update_timers(0.0, &tuning);
        assert_eq!(p.body.wall_jumps_remaining, tuning.physics.max_wall_jumps);
    }

    #[test]
    fn test_dash_replenishes_one_charge_at_a_time() {
        let tuning = Tuning::default();
        let cd = tuning.player.dash_replenish_ms;
        let mut p = grounded(&tuning);
        p.dashes_remaining = 0;

        p.update_timers(cd, &tuning);
        assert_eq!(p.dashes_remaining, 0);

        p.update_timers(cd + 1.0, &tuning);
        assert_eq!(p.dashes_remaining, 1);

        // Way later still only one more, the timer restamps each time
        p.update_timers(cd * 10.0, &tuning);
        assert_eq!(p.dashes_remaining, 2);
        p.update_timers(cd * 10.0 + 1.0, &tuning);
        assert_eq!(p.dashes_remaining, 2);
    }

    #[test]
    fn test_shoot_cooldown() {
        let tuning = Tuning::default();
        let mut p = grounded(&tuning);
        let target = p.center() + Vec2::new(100.0, 0.0);

        let shot = p.shoot(1000.0, target, &tuning).unwrap();
        assert_eq!(shot.side, Side::Player);
        assert_eq!(shot.pos, p.center());

        assert!(p.shoot(1050.0, target, &tuning).is_none());
        assert!(p.shoot(1000.0 + tuning.player.shoot_cooldown_ms, target, &tuning).is_some());
    }

    #[test]
    fn test_melee_cone_hits_inside_and_knocks_away() {
        let tuning = Tuning::default();
        let mut p = Player::new(Vec2::new(200.0, 200.0), &tuning, 0.0);
        let origin = p.center();
        let aim = 0.0_f32;
        let half = Vec2::splat(tuning.enemies.size / 2.0);

        let inside = origin + polar_to_cartesian(30.0, aim + 20f32.to_radians());
        let outside = origin + polar_to_cartesian(30.0, aim + 70f32.to_radians());
        let mut enemies = vec![
            Enemy::new(7, EnemyArchetype::Melee, inside - half, &tuning),
            Enemy::new(8, EnemyArchetype::Melee, outside - half, &tuning),
        ];

        let target = origin + Vec2::new(100.0, 0.0);
        let strike = p.perform_melee(0.0, target, &mut enemies, &tuning).unwrap();

        assert_eq!(strike.struck, vec![7]);
        assert!(enemies[0].is_stunned);
        assert!(enemies[0].body.vel.x > 0.0);
        assert!(enemies[0].body.vel.y < 0.0);
        assert!(!enemies[1].is_stunned);
        assert_eq!(strike.swing.radius, tuning.combat.melee_range);

        assert!(p.perform_melee(100.0, target, &mut enemies, &tuning).is_none());
    }

    #[test]
    fn test_swing_with_no_targets_still_spends_cooldown() {
        let tuning = Tuning::default();
        let mut p = grounded(&tuning);
        let target = p.center() + Vec2::X;

        let strike = p.perform_melee(0.0, target, &mut [], &tuning).unwrap();
        assert!(strike.struck.is_empty());
        assert_eq!(p.last_melee_at, Some(0.0));
    }

    #[test]
    fn test_invincibility_blocks_damage() {
        let tuning = Tuning::default();
        let mut p = grounded(&tuning);
        p.perform_dash(0.0, &tuning);

        assert_eq!(p.take_damage(50, &tuning, 10.0), DamageOutcome::Ignored);
        assert_eq!(p.health, p.max_health);

        p.update_timers(tuning.player.dash_invincibility_ms, &tuning);
        assert_eq!(p.take_damage(50, &tuning, 300.0), DamageOutcome::Hurt);
        assert_eq!(p.health, p.max_health - 50);
    }

    #[test]
    fn test_lethal_damage_resets_immediately() {
        let tuning = Tuning::default();
        let mut p = Player::new(Vec2::new(50.0, 200.0), &tuning, 0.0);
        p.body.pos = Vec2::new(400.0, 100.0);
        p.body.vel = Vec2::new(3.0, 4.0);
        p.dashes_remaining = 0;
        p.health = 5;

        assert_eq!(p.take_damage(5, &tuning, 900.0), DamageOutcome::Killed);
        assert_eq!(p.health, p.max_health);
        assert_eq!(p.body.pos, Vec2::new(50.0, 200.0));
        assert_eq!(p.body.vel, Vec2::ZERO);
        assert_eq!(p.dashes_remaining, tuning.player.max_dashes);
        assert_eq!(p.last_dash_replenish_at, 900.0);
    }

    #[test]
    fn test_aim_direction_follows_dominant_axis() {
        let tuning = Tuning::default();
        let mut p = grounded(&tuning);
        let c = p.center();

        p.update_aim(c + Vec2::new(-50.0, 10.0));
        assert_eq!(p.aim, AimDirection::Left);
        p.update_aim(c + Vec2::new(5.0, -40.0));
        assert_eq!(p.aim, AimDirection::Up);
        p.update_aim(c + Vec2::new(5.0, 40.0));
        assert_eq!(p.aim, AimDirection::Down);
        assert_eq!(p.weapon.label(), "Machine Gun");
    }

    proptest! {
        #[test]
        fn prop_dash_budget_conserved(
            steps in proptest::collection::vec((any::<bool>(), 0.0f64..400.0), 1..60)
        ) {
            let tuning = Tuning::default();
            let max = tuning.player.max_dashes;
            let mut p = grounded(&tuning);
            let mut now = 0.0;

            for (try_dash, advance) in steps {
                now += advance;
                let before = p.dashes_remaining;
                p.update_timers(now, &tuning);
                let after_timers = p.dashes_remaining;
                prop_assert!(after_timers == before || after_timers == before + 1);

                if try_dash {
                    let fired = p.perform_dash(now, &tuning);
                    if fired {
                        prop_assert_eq!(p.dashes_remaining, after_timers - 1);
                    } else {
                        prop_assert_eq!(p.dashes_remaining, after_timers);
                    }
                }
                prop_assert!(p.dashes_remaining <= max);
            }
        }
    }
}
