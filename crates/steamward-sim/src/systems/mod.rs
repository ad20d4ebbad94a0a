//! Simulation systems, run in a fixed order each tick by the engine.

pub mod cleanup;
pub mod collision;
pub mod combat_apply;
pub mod commander;
pub mod effects;
pub mod enemy;
pub mod follower;
pub mod mines;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
pub mod waves;
