//! Ledgefire - 2D action-platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, combat, enemy AI)
//! - `tuning`: Data-driven game balance
//! - `error`: Configuration errors
//!
//! Rendering, input polling and the outer game loop live with the host; the
//! core consumes a `TickInput` per frame and exposes plain state to draw.

pub mod error;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use tuning::Tuning;

use glam::Vec2;

/// Default balance constants.
///
/// Distances are pixels, speeds are pixels per frame, accelerations are
/// pixels per frame², durations are milliseconds.
pub mod consts {
    /// Nominal frame length (60 Hz display-synchronised host)
    pub const FRAME_MS: f64 = 1000.0 / 60.0;

    /// World physics
    pub const GRAVITY: f32 = 0.5;
    pub const FRICTION: f32 = 0.8;
    pub const WALL_SLIDE_SPEED: f32 = 1.5;
    pub const MAX_FALL_SPEED: f32 = 12.0;
    pub const MAX_WALL_JUMPS: u32 = 3;

    /// Player movement
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const JUMP_POWER: f32 = 10.0;
    pub const WALL_JUMP_X: f32 = 5.0;
    pub const WALL_JUMP_Y: f32 = 9.0;

    /// Dash
    pub const DASH_SPEED: f32 = 12.0;
    pub const DASH_DURATION: f64 = 180.0;
    pub const DASH_INVINCIBILITY_DURATION: f64 = 200.0;
    pub const MAX_DASHES: u32 = 3;
    pub const DASH_REPLENISH_COOLDOWN: f64 = 1500.0;

    /// Combat
    pub const PLAYER_SHOOT_COOLDOWN: f64 = 80.0;
    pub const ENEMY_SHOOT_COOLDOWN: f64 = 1200.0;
    pub const MELEE_RANGE: f32 = 40.0;
    pub const MELEE_COOLDOWN: f64 = 500.0;
    pub const MELEE_HALF_ANGLE_DEG: f32 = 50.0;
    pub const MELEE_SWING_DURATION: f64 = 150.0;
    pub const MELEE_KNOCKBACK_FORCE: f32 = 8.0;
    /// Upward pop added to every knockback
    pub const KNOCKBACK_LIFT: f32 = 3.0;
    pub const STUN_DURATION: f64 = 1000.0;

    /// Projectiles
    pub const PLAYER_SHOT_SPEED: f32 = 7.0;
    pub const PLAYER_SHOT_LIFESPAN: f64 = 2000.0;
    pub const PLAYER_SHOT_DAMAGE: i32 = 10;
    pub const PLAYER_SHOT_SIZE: f32 = 4.0;
    pub const ENEMY_SHOT_SPEED: f32 = 4.0;
    pub const ENEMY_SHOT_LIFESPAN: f64 = 3000.0;
    pub const ENEMY_SHOT_DAMAGE: i32 = 5;
    pub const ENEMY_SHOT_SIZE: f32 = 10.0;

    /// Enemies
    pub const ENEMY_SIZE: f32 = 20.0;
    pub const ENEMY_MAX_HEALTH: i32 = 100;
    pub const ENEMY_JUMP_POWER: f32 = 10.0;
    pub const ENEMY_WALL_JUMP_X: f32 = 5.0;
    pub const MELEE_ENEMY_SPEED: f32 = 2.5;
    pub const MELEE_ENEMY_ACCEL: f32 = 0.5;
    pub const INITIAL_AGGRO_RANGE: f32 = 200.0;
    pub const MELEE_ENEMY_ATTACK_RANGE: f32 = 26.0;
    pub const MELEE_ENEMY_HYSTERESIS: f32 = 4.0;
    pub const MELEE_ENEMY_DAMAGE: i32 = 10;
    pub const MELEE_ENEMY_COOLDOWN: f64 = 800.0;
    pub const SHOOTER_ENEMY_SPEED: f32 = 2.0;
    pub const SHOOTER_ENEMY_ACCEL: f32 = 0.4;
    pub const MIN_FLEE_DISTANCE: f32 = 120.0;
    pub const MAX_ENGAGE_DISTANCE: f32 = 260.0;
    pub const SHOOTER_DRIFT_FACTOR: f32 = 0.5;
    pub const SEPARATION_RADIUS: f32 = 30.0;
    pub const SEPARATION_FORCE: f32 = 0.4;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

/// Absolute angular distance between two headings, in [0, π]
#[inline]
pub fn angle_between(a: f32, b: f32) -> f32 {
    normalize_angle(a - b).abs()
}
