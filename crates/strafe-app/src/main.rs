//! strafe: headless flight runner with a scripted autopilot.
//!
//! Usage:
//!   strafe [--config flight.json] [--seed N] [--seconds N]

use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};

use strafe_app::game_loop::spawn_game_loop;
use strafe_app::state::LoopHandle;
use strafe_core::commands::PlayerCommand;
use strafe_core::config::FlightConfig;
use strafe_core::enums::{Key, RoundPhase};
use strafe_sim::engine::SimConfig;

/// How often the autopilot swaps turn direction.
const TURN_PERIOD: Duration = Duration::from_secs(2);
/// How often the HUD is reported.
const REPORT_PERIOD: Duration = Duration::from_secs(1);

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let flight = match parse_value(&args, "--config").map(PathBuf::from) {
        Some(path) => match FlightConfig::load(&path) {
            Ok(config) => {
                log::info!("loaded flight config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                process::exit(1);
            }
        },
        None => FlightConfig::default(),
    };
    let defaults = SimConfig::default();
    let seed = parse_number(&args, "--seed").unwrap_or(defaults.seed);
    let seconds = parse_number(&args, "--seconds").unwrap_or(10.0_f64);

    let handle = match spawn_game_loop(SimConfig { seed, flight }) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("failed to start frame loop: {e}");
            process::exit(1);
        }
    };

    log::info!("flying for {seconds}s with seed {seed}");
    if let Err(e) = fly(&handle, Duration::from_secs_f64(seconds.max(0.0))) {
        log::error!("frame loop stopped early: {e}");
        process::exit(1);
    }

    if let Some(snapshot) = handle.latest_snapshot() {
        log::info!("final {}", hud_line(&snapshot.hud));
    }
    handle.shutdown();
}

/// Scripted autopilot: hold the trigger, weave left and right, restart after
/// every game over, and report the HUD periodically.
fn fly(handle: &LoopHandle, duration: Duration) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let mut turn_key = Key::A;
    let mut last_turn = start;
    let mut last_report = start;

    start_round(handle, turn_key)?;

    while start.elapsed() < duration {
        std::thread::sleep(Duration::from_millis(50));

        if last_turn.elapsed() >= TURN_PERIOD {
            handle.send(PlayerCommand::KeyUp { key: turn_key })?;
            turn_key = if turn_key == Key::A { Key::D } else { Key::A };
            handle.send(PlayerCommand::KeyDown { key: turn_key })?;
            last_turn = Instant::now();
        }

        let Some(snapshot) = handle.latest_snapshot() else {
            continue;
        };
        if snapshot.phase == RoundPhase::Idle {
            log::info!("restarting round");
            start_round(handle, turn_key)?;
        }
        if last_report.elapsed() >= REPORT_PERIOD {
            log::info!(
                "{} | enemies {} projectiles {}",
                hud_line(&snapshot.hud),
                snapshot.enemy_count,
                snapshot.projectile_count
            );
            last_report = Instant::now();
        }
    }

    Ok(())
}

fn start_round(handle: &LoopHandle, turn_key: Key) -> Result<(), Box<dyn std::error::Error>> {
    for command in [
        PlayerCommand::StartRound,
        PlayerCommand::PointerLockChanged { locked: true },
        PlayerCommand::KeyDown { key: Key::Space },
        PlayerCommand::KeyDown { key: turn_key },
    ] {
        handle.send(command)?;
    }
    Ok(())
}

fn hud_line(hud: &strafe_core::state::HudView) -> String {
    format!(
        "{}  {}  {}",
        hud.score_text(),
        hud.lives_text(),
        hud.speed_text()
    )
}

fn print_usage() {
    eprintln!(
        "strafe: headless flight runner\n\
         \n\
           --config <path>  Flight tuning JSON (optional, defaults built in)\n\
           --seed <N>       RNG seed (default: 42)\n\
           --seconds <N>    How long to fly (default: 10)\n"
    );
}

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    parse_value(args, flag)?.parse().ok()
}
