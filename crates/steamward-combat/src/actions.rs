//! Inputs and outputs of combat resolution.
//!
//! Targets are referenced by index into the slice the caller passed in;
//! the sim maps indices back to entities when applying actions.

use glam::DVec2;

use steamward_core::state::EffectView;
use steamward_core::types::Position;

/// One potential target as seen by a combat function.
#[derive(Debug, Clone, Copy)]
pub struct TargetInfo {
    pub position: Position,
    /// Collision size; area attacks add this to their radius.
    pub size: f64,
}

/// The caster's situation at fire time.
#[derive(Debug, Clone, Copy)]
pub struct CasterContext {
    pub position: Position,
    pub damage: f64,
    pub range: f64,
    /// Direction the caster is facing, used when no enemy is in range.
    pub facing: DVec2,
}

/// A single combat outcome to apply to the world.
#[derive(Debug, Clone)]
pub enum CombatAction {
    /// Deal damage to a target.
    Damage { target: usize, amount: f64 },
    /// Push a target along an angle.
    Knockback {
        target: usize,
        angle: f64,
        distance: f64,
    },
    /// Multiply a target's speed, reverting after a delay.
    Slow {
        target: usize,
        factor: f64,
        duration_ticks: u64,
    },
    /// Apply or refresh corrosion on a target.
    Corrode { target: usize, pulse_damage: f64 },
    /// Spawn a transient visual effect.
    Effect {
        effect: EffectView,
        duration_ticks: u64,
    },
    /// Launch a gear projectile.
    LaunchGear {
        origin: Position,
        velocity: DVec2,
        damage: f64,
    },
    /// Spawn one ember particle-projectile.
    SpawnEmber {
        origin: Position,
        velocity: DVec2,
        damage: f64,
    },
    /// Arm a temporal mine at a position.
    PlaceMine { position: Position, damage: f64 },
    /// Schedule a shrapnel burst after a delay.
    ScheduleShrapnel {
        position: Position,
        damage: f64,
        delay_ticks: u64,
    },
    /// Request screen shake.
    Shake { intensity: f64 },
    /// Request a screen flash.
    Flash { alpha: f64 },
}
