//! Environment layer for Steamward.
//!
//! Axis-aligned terrain patches that modify movement speed, plus the
//! procedural layout generator run at game start.

pub mod generate;
pub mod tiles;

pub use generate::generate_layout;
pub use steamward_core as core;
pub use tiles::{speed_modifier_at, TerrainTile};

#[cfg(test)]
mod tests;
