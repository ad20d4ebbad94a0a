//! Simulation engine for Steamward.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod deferred;
pub mod engine;
pub mod pool;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use steamward_core as core;
