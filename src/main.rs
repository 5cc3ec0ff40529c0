//! Ledgefire headless runner
//!
//! Plays a session with the autopilot at a fixed 60 Hz step, logs what
//! happens and prints a JSON summary at the end.
//!
//! ```text
//! ledgefire [--ticks N] [--seed S] [--tuning path.json] [--world path.json]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use serde::Serialize;

    use ledgefire::consts::FRAME_MS;
    use ledgefire::sim::{Autopilot, GameEvent, GameState, WorldConfig, tick};
    use ledgefire::{ConfigError, Tuning};

    #[derive(Debug)]
    struct Args {
        ticks: u64,
        seed: u64,
        tuning: Option<PathBuf>,
        world: Option<PathBuf>,
    }

    impl Default for Args {
        fn default() -> Self {
            Self {
                ticks: 60 * 60,
                seed: 1,
                tuning: None,
                world: None,
            }
        }
    }

    fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
        let mut parsed = Args::default();
        while let Some(flag) = args.next() {
            let mut value = || args.next().ok_or_else(|| format!("{flag} needs a value"));
            match flag.as_str() {
                "--ticks" => {
                    parsed.ticks = value()?
                        .parse()
                        .map_err(|e| format!("bad --ticks: {e}"))?
                }
                "--seed" => {
                    parsed.seed = value()?
                        .parse()
                        .map_err(|e| format!("bad --seed: {e}"))?
                }
                "--tuning" => parsed.tuning = Some(PathBuf::from(value()?)),
                "--world" => parsed.world = Some(PathBuf::from(value()?)),
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(parsed)
    }

    /// Final report written to stdout
    #[derive(Debug, Default, Serialize)]
    struct Summary {
        seed: u64,
        ticks: u64,
        time_ms: f64,
        player_health: i32,
        player_resets: u32,
        player_damage_taken: i32,
        dashes: u32,
        jumps: u32,
        wall_jumps: u32,
        enemies_alive: usize,
        enemies_killed: u32,
        enemy_respawns: u32,
        stuns: u32,
        projectiles_in_flight: usize,
    }

    impl Summary {
        fn record(&mut self, event: &GameEvent) {
            match *event {
                GameEvent::PlayerJumped { wall: true } => self.wall_jumps += 1,
                GameEvent::PlayerJumped { wall: false } => self.jumps += 1,
                GameEvent::PlayerDashed => self.dashes += 1,
                GameEvent::PlayerHurt { amount } => self.player_damage_taken += amount,
                GameEvent::PlayerReset { cause } => {
                    log::info!("Player reset ({cause:?})");
                    self.player_resets += 1;
                }
                GameEvent::EnemyStunned { .. } => self.stuns += 1,
                GameEvent::EnemyKilled { id } => {
                    log::info!("Enemy {id} killed");
                    self.enemies_killed += 1;
                }
                GameEvent::EnemyRespawned { .. } => self.enemy_respawns += 1,
                GameEvent::EnemyAggro { id } => log::info!("Enemy {id} spotted the player"),
                GameEvent::EnemyHurt { .. } => {}
            }
        }
    }

    fn setup(args: &Args) -> Result<GameState, ConfigError> {
        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)?,
            None => Tuning::default(),
        };
        let world = match &args.world {
            Some(path) => WorldConfig::load(path)?,
            None => WorldConfig::default(),
        };
        GameState::new(world, tuning)
    }

    pub fn run() -> ExitCode {
        env_logger::init();

        let args = match parse_args(std::env::args().skip(1)) {
            Ok(args) => args,
            Err(e) => {
                eprintln!("{e}");
                eprintln!("usage: ledgefire [--ticks N] [--seed S] [--tuning FILE] [--world FILE]");
                return ExitCode::from(2);
            }
        };

        let mut state = match setup(&args) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Cannot start session: {e}");
                return ExitCode::FAILURE;
            }
        };

        log::info!("Ledgefire (headless) running {} ticks, seed {}", args.ticks, args.seed);

        let mut pilot = Autopilot::new(args.seed);
        let mut summary = Summary {
            seed: args.seed,
            ..Default::default()
        };
        for _ in 0..args.ticks {
            let input = pilot.next_input(&state);
            tick(&mut state, &input, FRAME_MS);
            for event in &state.events {
                log::debug!("t={:.0}ms {event:?}", state.time_ms);
                summary.record(event);
            }
        }

        summary.ticks = state.time_ticks;
        summary.time_ms = state.time_ms;
        summary.player_health = state.player.health;
        summary.enemies_alive = state.enemies.len();
        summary.projectiles_in_flight = state.projectiles.len();

        match serde_json::to_string_pretty(&summary) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("Cannot write summary: {e}");
                ExitCode::FAILURE
            }
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The simulation is a library on the web; the host page drives `tick`
}
