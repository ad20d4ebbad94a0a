//! Combat resolution for Steamward.
//!
//! Pure functions that turn a caster's situation into lists of combat
//! actions: special attacks, boss phase transitions, and boss specials.
//! No ECS dependency — operates on plain data; the sim crate applies
//! the resulting actions to the world.

pub mod actions;
pub mod boss;
pub mod specials;

pub use steamward_core as core;

#[cfg(test)]
mod tests;
