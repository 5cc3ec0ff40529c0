//! Game state and per-step events
//!
//! Everything the renderer reads lives here. Collections are kept sorted by
//! entity id so iteration order is the same on every run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combat::{DamageOutcome, MeleeSwing};
use super::enemy::Enemy;
use super::player::Player;
use super::projectile::Projectile;
use super::world::{EnemyArchetype, WorldConfig};
use crate::error::ConfigError;
use crate::tuning::Tuning;

/// Why the player was sent back to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResetCause {
    Killed,
    FellOut,
}

/// Things that happened during the last step (hurt flash, log lines, audio
/// cues on the host side). Cleared at the start of every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerJumped { wall: bool },
    PlayerDashed,
    PlayerHurt { amount: i32 },
    PlayerReset { cause: ResetCause },
    EnemyAggro { id: u32 },
    EnemyStunned { id: u32 },
    EnemyHurt { id: u32, amount: i32 },
    EnemyKilled { id: u32 },
    EnemyRespawned { id: u32 },
}

/// Translate a player damage outcome into events
pub fn record_player_hit(events: &mut Vec<GameEvent>, amount: i32, outcome: DamageOutcome) {
    match outcome {
        DamageOutcome::Ignored => {}
        DamageOutcome::Hurt => events.push(GameEvent::PlayerHurt { amount }),
        DamageOutcome::Killed => {
            events.push(GameEvent::PlayerHurt { amount });
            events.push(GameEvent::PlayerReset {
                cause: ResetCause::Killed,
            });
        }
    }
}

/// Translate an enemy damage outcome into events
pub fn record_enemy_hit(events: &mut Vec<GameEvent>, id: u32, amount: i32, outcome: DamageOutcome) {
    match outcome {
        DamageOutcome::Ignored => {}
        DamageOutcome::Hurt => events.push(GameEvent::EnemyHurt { id, amount }),
        DamageOutcome::Killed => {
            events.push(GameEvent::EnemyHurt { id, amount });
            events.push(GameEvent::EnemyKilled { id });
        }
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub world: WorldConfig,
    pub tuning: Tuning,
    pub player: Player,
    /// Sorted by id
    pub enemies: Vec<Enemy>,
    /// Sorted by id
    pub projectiles: Vec<Projectile>,
    /// Melee swings still visible
    pub swings: Vec<MeleeSwing>,
    /// Simulation clock in milliseconds
    pub time_ms: f64,
    /// Steps taken
    pub time_ticks: u64,
    /// Events from the most recent step
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::build(WorldConfig::default(), Tuning::default())
    }
}

impl GameState {
    /// Start a session in `world`, spawning the player and every enemy spawn
    pub fn new(world: WorldConfig, tuning: Tuning) -> Result<Self, ConfigError> {
        world.validate()?;
        let state = Self::build(world, tuning);
        log::info!(
            "Session started: {}x{} world, {} platforms, {} enemies",
            state.world.width,
            state.world.height,
            state.world.platforms.len(),
            state.enemies.len()
        );
        Ok(state)
    }

    fn build(world: WorldConfig, tuning: Tuning) -> Self {
        let player = Player::new(world.player_spawn, &tuning, 0.0);
        let spawns = world.enemy_spawns.clone();
        let mut state = Self {
            world,
            tuning,
            player,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            swings: Vec::new(),
            time_ms: 0.0,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };
        for spawn in spawns {
            state.spawn_enemy(spawn.kind, spawn.pos);
        }
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy with its top-left corner at `pos`; that is also its respawn point
    pub fn spawn_enemy(&mut self, kind: EnemyArchetype, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy::new(id, kind, pos, &self.tuning));
        id
    }

    /// Take ownership of a freshly fired projectile
    pub fn spawn_projectile(&mut self, mut projectile: Projectile) -> u32 {
        let id = self.next_entity_id();
        projectile.id = id;
        self.projectiles.push(projectile);
        id
    }

    pub fn enemy(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Drop dead enemies, spent projectiles and faded swings
    pub fn remove_expired(&mut self) {
        let now = self.time_ms;
        self.enemies.retain(|e| e.alive);
        self.projectiles.retain(|p| p.is_live());
        self.swings.retain(|s| !s.is_expired(now));
    }

    /// Ensure entities are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}
