//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::SteamClass;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Set the commander's movement direction. Components are normalized
    /// by the engine; (0, 0) stops.
    SetDirection { dx: f64, dy: f64 },

    // --- Spawn table ---
    /// Set the relative spawn weight for a class in the engineer table.
    SetClassSpawnRate { class: SteamClass, rate: u32 },
    /// Exclude a class from engineer spawns (weight 0).
    DisableClassSpawn { class: SteamClass },
    /// Restore all class weights to the default.
    ResetClassSpawnRates,

    // --- Simulation control ---
    /// Start a new run (from title or game over).
    StartGame,
    /// Set time scale (1.0 = normal, 0.0 = effectively paused).
    SetTimeScale { scale: f64 },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
