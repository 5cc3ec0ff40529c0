//! Simulation tick - one fixed step of the game
//!
//! Order: player -> enemies -> projectiles -> queued enemy strikes -> cleanup.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::combat::DamageOutcome;
use super::enemy::{EnemyAction, separation_force};
use super::player::JumpKind;
use super::projectile::step_projectiles;
use super::state::{GameEvent, GameState, ResetCause, record_player_hit};

/// Input for a single tick. Edge-triggered actions are `true` only on the
/// frame the button went down.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Signed horizontal axis (-1 left, +1 right, 0 none)
    pub move_axis: f32,
    /// Jump rising edge
    pub jump_pressed: bool,
    /// Fire button held
    pub fire_held: bool,
    /// Melee rising edge
    pub melee_pressed: bool,
    /// Dash rising edge
    pub dash_pressed: bool,
    /// Aim point in world coordinates (pointer position)
    pub aim: Vec2,
}

/// Advance the game state by one step of `dt_ms` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64) {
    state.events.clear();
    state.time_ms += dt_ms;
    state.time_ticks += 1;
    let now = state.time_ms;

    update_player(state, input, now);
    let strikes = update_enemies(state, now);

    step_projectiles(
        &mut state.projectiles,
        &mut state.player,
        &mut state.enemies,
        &state.world,
        &state.tuning,
        now,
        dt_ms,
        &mut state.events,
    );

    resolve_strikes(state, &strikes, now);

    state.remove_expired();
    state.normalize_order();
}

fn update_player(state: &mut GameState, input: &TickInput, now: f64) {
    let player = &mut state.player;
    let tuning = &state.tuning;
    let events = &mut state.events;

    player.update_timers(now, tuning);
    player.update_aim(input.aim);

    let moving = player.handle_movement_input(input.move_axis, tuning);

    if input.jump_pressed {
        if let Some(kind) = player.handle_jump_edge(tuning) {
            events.push(GameEvent::PlayerJumped {
                wall: kind == JumpKind::Wall,
            });
        }
    }

    if input.dash_pressed && player.perform_dash(now, tuning) {
        events.push(GameEvent::PlayerDashed);
    }

    let shot = if input.fire_held {
        player.shoot(now, input.aim, tuning)
    } else {
        None
    };

    if input.melee_pressed {
        if let Some(strike) = player.perform_melee(now, input.aim, &mut state.enemies, tuning) {
            events.extend(strike.struck.iter().map(|&id| GameEvent::EnemyStunned { id }));
            state.swings.push(strike.swing);
        }
    }

    let contacts = player.step_physics(&state.world, tuning, moving);
    if contacts.fell_out {
        log::debug!("Player fell out of the world");
        player.reset(now, tuning);
        events.push(GameEvent::PlayerReset {
            cause: ResetCause::FellOut,
        });
    }

    if let Some(shot) = shot {
        state.spawn_projectile(shot);
    }
}

/// Queued enemy melee hit
struct Strike {
    attacker: u32,
    damage: i32,
}

/// Run every enemy against a stable snapshot; returns queued strikes
fn update_enemies(state: &mut GameState, now: f64) -> Vec<Strike> {
    let target = state.player.center();
    let forces: Vec<f32> = (0..state.enemies.len())
        .map(|i| separation_force(i, &state.enemies, &state.tuning.enemies))
        .collect();

    let mut strikes = Vec::new();
    let mut shots = Vec::new();
    for (enemy, force) in state.enemies.iter_mut().zip(forces) {
        let out = enemy.update(now, target, &state.world, &state.tuning, force);
        if out.aggro {
            state.events.push(GameEvent::EnemyAggro { id: enemy.id });
        }
        if out.respawned {
            state.events.push(GameEvent::EnemyRespawned { id: enemy.id });
        }
        match out.action {
            Some(EnemyAction::Fire(p)) => shots.push(p),
            Some(EnemyAction::Strike { attacker, damage }) => {
                strikes.push(Strike { attacker, damage })
            }
            None => {}
        }
    }

    for shot in shots {
        state.spawn_projectile(shot);
    }
    strikes
}

/// Apply queued melee strikes to the player. Strikes from enemies killed
/// earlier in the step are dropped. A strike that kills stops the rest; they
/// were aimed at where the player used to be.
fn resolve_strikes(state: &mut GameState, strikes: &[Strike], now: f64) {
    for &Strike { attacker, damage } in strikes {
        if !state.enemy(attacker).is_some_and(|e| e.alive) {
            continue;
        }
        let outcome = state.player.take_damage(damage, &state.tuning, now);
        record_player_hit(&mut state.events, damage, outcome);
        if outcome == DamageOutcome::Killed {
            break;
        }
    }
}
