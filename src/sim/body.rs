//! Physics body shared by the player and every enemy
//!
//! One integration step per frame: drag, acceleration, gravity, wall-slide,
//! then axis-separated resolution against the static platforms (X first, Y at
//! the resolved X), then the world bounds.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::intersects;
use super::rect::Rect;
use super::world::WorldConfig;
use crate::tuning::PhysicsTuning;

/// What happened to a body during one integration step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Horizontal motion was stopped by a platform side
    pub hit_wall: bool,
    /// Became grounded this step (was airborne before)
    pub landed: bool,
    /// Upward motion was stopped by a platform underside
    pub bonked: bool,
    /// Dropped below the world's lower bound
    pub fell_out: bool,
}

/// Position/velocity state with platform contact flags
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsBody {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    /// Consumed by the next `integrate`
    pub acc: Vec2,
    pub size: Vec2,
    pub on_ground: bool,
    pub on_wall_left: bool,
    pub on_wall_right: bool,
    pub gravity_enabled: bool,
    /// Horizontal velocity multiplier on frames without input
    pub drag: f32,
    pub wall_jumps_remaining: u32,
}

impl PhysicsBody {
    pub fn new(pos: Vec2, size: Vec2, physics: &PhysicsTuning) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            acc: Vec2::ZERO,
            size,
            on_ground: false,
            on_wall_left: false,
            on_wall_right: false,
            gravity_enabled: true,
            drag: physics.friction,
            wall_jumps_remaining: physics.max_wall_jumps,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    #[inline]
    pub fn on_wall(&self) -> bool {
        self.on_wall_left || self.on_wall_right
    }

    /// Teleport to `pos` at rest with contact flags cleared
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.acc = Vec2::ZERO;
        self.on_ground = false;
        self.on_wall_left = false;
        self.on_wall_right = false;
    }

    /// Ground jump
    pub fn jump(&mut self, power: f32) {
        self.vel.y = -power;
        self.on_ground = false;
    }

    /// Kick off the wall currently touched, spending one budget charge.
    ///
    /// Returns false (and changes nothing) when grounded, not on a wall or out
    /// of charges.
    pub fn wall_jump(&mut self, kick_x: f32, kick_y: f32) -> bool {
        if self.on_ground || !self.on_wall() || self.wall_jumps_remaining == 0 {
            return false;
        }
        self.vel.y = -kick_y;
        self.vel.x = if self.on_wall_left { kick_x } else { -kick_x };
        self.wall_jumps_remaining -= 1;
        self.on_wall_left = false;
        self.on_wall_right = false;
        true
    }

    /// Advance one frame against the world
    pub fn integrate(
        &mut self,
        world: &WorldConfig,
        physics: &PhysicsTuning,
        apply_drag: bool,
    ) -> Contacts {
        if apply_drag {
            self.vel.x *= self.drag;
        }

        self.vel += self.acc;
        self.acc = Vec2::ZERO;

        if self.gravity_enabled {
            self.vel.y += physics.gravity;
        }

        if self.on_wall() && !self.on_ground && self.vel.y > 0.0 {
            self.vel.y = self.vel.y.min(physics.wall_slide_speed);
        }
        self.vel.y = self.vel.y.min(physics.max_fall_speed);

        let mut contacts = self.resolve(&world.platforms, physics.max_wall_jumps);

        // Horizontal world bounds
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        }
        if self.pos.x + self.size.x > world.width {
            self.pos.x = world.width - self.size.x;
            self.vel.x = 0.0;
        }

        contacts.fell_out = self.pos.y > world.height;
        contacts
    }

    /// Axis-separated resolution of the current velocity against `platforms`.
    ///
    /// Every overlapping platform snaps the tentative position back to its
    /// near edge along the axis of travel. Corner cases where two platforms
    /// push in opposite directions on the same axis are not reconciled.
    pub fn resolve(&mut self, platforms: &[Rect], max_wall_jumps: u32) -> Contacts {
        let mut contacts = Contacts::default();
        let was_grounded = self.on_ground;

        self.on_ground = false;
        self.on_wall_left = false;
        self.on_wall_right = false;

        // X axis at the current Y
        let dx = self.vel.x;
        let mut next_x = self.pos.x + dx;
        for plat in platforms {
            let probe = Rect::new(next_x, self.pos.y, self.size.x, self.size.y);
            if !intersects(&probe, plat) {
                continue;
            }
            if dx > 0.0 {
                next_x = plat.x - self.size.x;
                self.on_wall_right = true;
                contacts.hit_wall = true;
            } else if dx < 0.0 {
                next_x = plat.right();
                self.on_wall_left = true;
                contacts.hit_wall = true;
            }
            self.vel.x = 0.0;
        }

        // Y axis at the resolved X
        let dy = self.vel.y;
        let mut next_y = self.pos.y + dy;
        for plat in platforms {
            let probe = Rect::new(next_x, next_y, self.size.x, self.size.y);
            if !intersects(&probe, plat) {
                continue;
            }
            if dy > 0.0 {
                next_y = plat.y - self.size.y;
                self.on_ground = true;
                self.wall_jumps_remaining = max_wall_jumps;
            } else if dy < 0.0 {
                next_y = plat.bottom();
                contacts.bonked = true;
            }
            self.vel.y = 0.0;
        }

        self.pos = Vec2::new(next_x, next_y);
        contacts.landed = self.on_ground && !was_grounded;
        contacts
    }
}
