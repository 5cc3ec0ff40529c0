//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only (autopilot)
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod combat;
pub mod enemy;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;
pub mod world;

pub use autopilot::Autopilot;
pub use body::{Contacts, PhysicsBody};
pub use collision::{intersects, line_of_sight, segment_intersects_rect};
pub use combat::{DamageOutcome, MeleeSwing};
pub use enemy::{Enemy, EnemyAction, EnemyKind};
pub use player::{AimDirection, Facing, JumpKind, Player, Weapon};
pub use projectile::{Projectile, Side};
pub use rect::Rect;
pub use state::{GameEvent, GameState, ResetCause};
pub use tick::{TickInput, tick};
pub use world::{EnemyArchetype, EnemySpawn, WorldConfig};
