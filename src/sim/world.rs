//! Static world: bounds, platforms and spawn points
//!
//! Supplied once at session start and never mutated afterwards.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::error::ConfigError;

/// Enemy archetype selector used by spawn data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyArchetype {
    Melee,
    Shooter,
}

/// Where an enemy enters (and re-enters after falling out)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub kind: EnemyArchetype,
    pub pos: Vec2,
}

/// World configuration shared read-only by every mover
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    pub width: f32,
    pub height: f32,
    pub platforms: Vec<Rect>,
    pub player_spawn: Vec2,
    #[serde(default)]
    pub enemy_spawns: Vec<EnemySpawn>,
}

impl Default for WorldConfig {
    /// The 640x360 training arena: floor, three steps, a pillar and a left wall
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 360.0,
            platforms: vec![
                Rect::new(0.0, 340.0, 640.0, 20.0),
                Rect::new(100.0, 280.0, 100.0, 10.0),
                Rect::new(250.0, 220.0, 100.0, 10.0),
                Rect::new(400.0, 160.0, 100.0, 10.0),
                Rect::new(500.0, 200.0, 20.0, 140.0),
                Rect::new(0.0, 100.0, 20.0, 240.0),
            ],
            player_spawn: Vec2::new(50.0, 200.0),
            enemy_spawns: vec![
                EnemySpawn {
                    kind: EnemyArchetype::Melee,
                    pos: Vec2::new(425.0, 140.0),
                },
                EnemySpawn {
                    kind: EnemyArchetype::Shooter,
                    pos: Vec2::new(300.0, 200.0),
                },
            ],
        }
    }
}

impl WorldConfig {
    /// Empty world of the given size (tests and tools add platforms)
    pub fn empty(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            platforms: Vec::new(),
            player_spawn: Vec2::ZERO,
            enemy_spawns: Vec::new(),
        }
    }

    /// Parse and validate world data from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let world: Self = serde_json::from_str(json)?;
        world.validate()?;
        Ok(world)
    }

    /// Read and validate world data from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Check bounds, platform extents and spawn placement
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidWorld(format!(
                "bounds must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if let Some((i, p)) = self
            .platforms
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_valid())
        {
            return Err(ConfigError::InvalidWorld(format!(
                "platform {i} has non-positive extent ({}x{})",
                p.w, p.h
            )));
        }
        if !self.in_bounds(self.player_spawn) {
            return Err(ConfigError::InvalidWorld(format!(
                "player spawn {} is outside the world",
                self.player_spawn
            )));
        }
        if let Some(spawn) = self.enemy_spawns.iter().find(|s| !self.in_bounds(s.pos)) {
            return Err(ConfigError::InvalidWorld(format!(
                "{:?} spawn {} is outside the world",
                spawn.kind, spawn.pos
            )));
        }
        Ok(())
    }

    /// Point lies within the horizontal and vertical bounds
    pub fn in_bounds(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}
