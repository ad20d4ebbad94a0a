//! Shared state between the game loop thread and its driver.

use std::sync::{Arc, Mutex};

use steamward_core::commands::PlayerCommand;
use steamward_core::state::GameStateSnapshot;

/// Commands accepted by the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    PlayerCommand(PlayerCommand),
    Shutdown,
}

/// Latest snapshot, published by the loop and polled by the driver.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

pub fn shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}
