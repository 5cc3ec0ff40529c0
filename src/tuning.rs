//! Data-driven game balance
//!
//! Every value defaults to the constants in [`crate::consts`]. Tuning files are
//! JSON and may be partial: missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Which enemies a melee swing connects with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MeleeMode {
    /// Every eligible enemy inside a cone around the aim direction
    #[default]
    Cone,
    /// Only the nearest eligible enemy inside the radius, any direction
    Nearest,
}

/// Shared body physics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsTuning {
    /// Downward acceleration per frame
    pub gravity: f32,
    /// Horizontal velocity multiplier on frames without input
    pub friction: f32,
    /// Fall speed while pressed against a wall
    pub wall_slide_speed: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Wall-jump budget restored on landing
    pub max_wall_jumps: u32,
}

impl Default for PhysicsTuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            friction: FRICTION,
            wall_slide_speed: WALL_SLIDE_SPEED,
            max_fall_speed: MAX_FALL_SPEED,
            max_wall_jumps: MAX_WALL_JUMPS,
        }
    }
}

/// Player controller
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub size: f32,
    pub speed: f32,
    pub max_health: i32,
    pub jump_power: f32,
    pub wall_jump_x: f32,
    pub wall_jump_y: f32,
    pub dash_speed: f32,
    pub dash_duration_ms: f64,
    /// Measured from dash start, independent of `dash_duration_ms`
    pub dash_invincibility_ms: f64,
    pub max_dashes: u32,
    /// One charge comes back per elapsed period
    pub dash_replenish_ms: f64,
    pub shoot_cooldown_ms: f64,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: PLAYER_SIZE,
            speed: PLAYER_SPEED,
            max_health: PLAYER_MAX_HEALTH,
            jump_power: JUMP_POWER,
            wall_jump_x: WALL_JUMP_X,
            wall_jump_y: WALL_JUMP_Y,
            dash_speed: DASH_SPEED,
            dash_duration_ms: DASH_DURATION,
            dash_invincibility_ms: DASH_INVINCIBILITY_DURATION,
            max_dashes: MAX_DASHES,
            dash_replenish_ms: DASH_REPLENISH_COOLDOWN,
            shoot_cooldown_ms: PLAYER_SHOOT_COOLDOWN,
        }
    }
}

/// Player melee and shared stun/knockback
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatTuning {
    pub melee_range: f32,
    pub melee_cooldown_ms: f64,
    /// Half-width of the melee cone in degrees
    pub melee_half_angle_deg: f32,
    pub melee_mode: MeleeMode,
    /// Lifetime of the swing effect exposed to the renderer
    pub swing_duration_ms: f64,
    pub knockback_force: f32,
    pub knockback_lift: f32,
    pub stun_duration_ms: f64,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            melee_range: MELEE_RANGE,
            melee_cooldown_ms: MELEE_COOLDOWN,
            melee_half_angle_deg: MELEE_HALF_ANGLE_DEG,
            melee_mode: MeleeMode::Cone,
            swing_duration_ms: MELEE_SWING_DURATION,
            knockback_force: MELEE_KNOCKBACK_FORCE,
            knockback_lift: KNOCKBACK_LIFT,
            stun_duration_ms: STUN_DURATION,
        }
    }
}

impl CombatTuning {
    /// Cone half-width in radians
    pub fn melee_half_angle(&self) -> f32 {
        self.melee_half_angle_deg.to_radians()
    }
}

/// One side's projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotTuning {
    pub speed: f32,
    pub lifespan_ms: f64,
    pub damage: i32,
    /// Edge length of the square hitbox
    pub size: f32,
}

impl ShotTuning {
    pub fn player() -> Self {
        Self {
            speed: PLAYER_SHOT_SPEED,
            lifespan_ms: PLAYER_SHOT_LIFESPAN,
            damage: PLAYER_SHOT_DAMAGE,
            size: PLAYER_SHOT_SIZE,
        }
    }

    pub fn enemy() -> Self {
        Self {
            speed: ENEMY_SHOT_SPEED,
            lifespan_ms: ENEMY_SHOT_LIFESPAN,
            damage: ENEMY_SHOT_DAMAGE,
            size: ENEMY_SHOT_SIZE,
        }
    }
}

/// Partial shot as read from a file; missing fields fall back to the side's
/// defaults
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ShotPatch {
    speed: Option<f32>,
    lifespan_ms: Option<f64>,
    damage: Option<i32>,
    size: Option<f32>,
}

impl ShotPatch {
    fn over(self, base: ShotTuning) -> ShotTuning {
        ShotTuning {
            speed: self.speed.unwrap_or(base.speed),
            lifespan_ms: self.lifespan_ms.unwrap_or(base.lifespan_ms),
            damage: self.damage.unwrap_or(base.damage),
            size: self.size.unwrap_or(base.size),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectilePatch {
    player: ShotPatch,
    enemy: ShotPatch,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "ProjectilePatch")]
pub struct ProjectileTuning {
    pub player: ShotTuning,
    pub enemy: ShotTuning,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            player: ShotTuning::player(),
            enemy: ShotTuning::enemy(),
        }
    }
}

impl From<ProjectilePatch> for ProjectileTuning {
    fn from(patch: ProjectilePatch) -> Self {
        Self {
            player: patch.player.over(ShotTuning::player()),
            enemy: patch.enemy.over(ShotTuning::enemy()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MeleeEnemyTuning {
    pub max_speed: f32,
    pub accel: f32,
    /// Distance at which the enemy first notices the player
    pub aggro_range: f32,
    pub attack_range: f32,
    /// Extra distance before chasing resumes after reaching attack range
    pub hysteresis: f32,
    pub strike_damage: i32,
    pub strike_cooldown_ms: f64,
}

impl Default for MeleeEnemyTuning {
    fn default() -> Self {
        Self {
            max_speed: MELEE_ENEMY_SPEED,
            accel: MELEE_ENEMY_ACCEL,
            aggro_range: INITIAL_AGGRO_RANGE,
            attack_range: MELEE_ENEMY_ATTACK_RANGE,
            hysteresis: MELEE_ENEMY_HYSTERESIS,
            strike_damage: MELEE_ENEMY_DAMAGE,
            strike_cooldown_ms: MELEE_ENEMY_COOLDOWN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShooterEnemyTuning {
    pub max_speed: f32,
    pub accel: f32,
    /// Closer than this the shooter backs away
    pub flee_distance: f32,
    /// Farther than this the shooter advances
    pub engage_distance: f32,
    /// Fraction of `accel` used while searching for line of sight
    pub drift_factor: f32,
    pub shoot_cooldown_ms: f64,
}

impl Default for ShooterEnemyTuning {
    fn default() -> Self {
        Self {
            max_speed: SHOOTER_ENEMY_SPEED,
            accel: SHOOTER_ENEMY_ACCEL,
            flee_distance: MIN_FLEE_DISTANCE,
            engage_distance: MAX_ENGAGE_DISTANCE,
            drift_factor: SHOOTER_DRIFT_FACTOR,
            shoot_cooldown_ms: ENEMY_SHOOT_COOLDOWN,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub size: f32,
    pub max_health: i32,
    pub jump_power: f32,
    /// Horizontal kick off a wall
    pub wall_jump_x: f32,
    pub separation_radius: f32,
    pub separation_force: f32,
    pub melee: MeleeEnemyTuning,
    pub shooter: ShooterEnemyTuning,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            size: ENEMY_SIZE,
            max_health: ENEMY_MAX_HEALTH,
            jump_power: ENEMY_JUMP_POWER,
            wall_jump_x: ENEMY_WALL_JUMP_X,
            separation_radius: SEPARATION_RADIUS,
            separation_force: SEPARATION_FORCE,
            melee: MeleeEnemyTuning::default(),
            shooter: ShooterEnemyTuning::default(),
        }
    }
}

/// Complete balance sheet for a session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub physics: PhysicsTuning,
    pub player: PlayerTuning,
    pub combat: CombatTuning,
    pub projectiles: ProjectileTuning,
    pub enemies: EnemyTuning,
}

impl Tuning {
    /// Parse tuning from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON (for writing a starter file)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&text)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
