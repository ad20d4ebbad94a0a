//! Headless runner: starts the game loop thread, drives a run, and reports
//! progress on the console.

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;

use steamward_app::game_loop::spawn_game_loop;
use steamward_app::state::{shared_snapshot, GameLoopCommand};
use steamward_core::commands::PlayerCommand;
use steamward_core::enums::GamePhase;
use steamward_sim::engine::SimConfig;

#[derive(Parser, Debug)]
#[command(name = "steamward", about = "Headless Steamward simulation runner")]
struct Args {
    /// RNG seed. The same seed reproduces the same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Time scale (0.0 to 4.0).
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,

    /// Wall-clock run duration in seconds. The run also ends at game over.
    #[arg(long, default_value_t = 60)]
    duration_secs: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let snapshot = shared_snapshot();
    let tx = spawn_game_loop(
        SimConfig {
            seed: args.seed,
            time_scale: args.time_scale,
        },
        snapshot.clone(),
    );

    tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartGame))
        .context("game loop thread exited early")?;

    let deadline = Instant::now() + Duration::from_secs(args.duration_secs);
    let mut last_report = Instant::now();
    loop {
        std::thread::sleep(Duration::from_millis(100));

        let latest = snapshot
            .lock()
            .map_err(|_| anyhow::anyhow!("snapshot lock poisoned"))?
            .clone();
        let Some(snap) = latest else { continue };

        if last_report.elapsed() >= Duration::from_secs(5) {
            last_report = Instant::now();
            log::info!(
                "tick {} wave {} kills {}/{} score {} followers {} enemies {}",
                snap.time.tick,
                snap.wave.level,
                snap.wave.kills,
                snap.wave.quota,
                snap.score,
                snap.followers.len(),
                snap.enemies.len(),
            );
        }

        if snap.phase == GamePhase::GameOver || Instant::now() >= deadline {
            println!(
                "run finished: tick {} wave {} score {}",
                snap.time.tick, snap.wave.level, snap.score
            );
            break;
        }
    }

    let _ = tx.send(GameLoopCommand::Shutdown);
    Ok(())
}
