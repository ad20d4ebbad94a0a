//! Headless driver for the Steamward simulation.

pub mod game_loop;
pub mod state;
