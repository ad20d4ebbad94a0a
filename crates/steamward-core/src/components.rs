//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Systems mutate them; the snapshot builder reads them.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Health pool. Always kept within [0, max] by the damage/heal paths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Passive health regeneration after a quiet period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Regen {
    /// Health restored per tick once active.
    pub rate: f64,
    /// Ticks without taking damage before regen starts.
    pub delay_ticks: u64,
    /// Tick of the most recent damage taken.
    pub last_damage_tick: u64,
}

/// Player-steered movement direction (unit components, or zero when idle).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MoveDirection {
    pub dx: f64,
    pub dy: f64,
}

/// Upgrade counters from collected steam cores, for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Upgrades {
    pub damage: u32,
    pub range: u32,
    pub speed: u32,
}

/// Current combat stats of a follower (base class stats plus core bonuses).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatStats {
    pub damage: f64,
    pub range: f64,
    pub speed: f64,
    pub upgrades: Upgrades,
}

/// Follower class assignment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassAssignment {
    pub class: SteamClass,
    pub style: AttackStyle,
}

/// Basic attack timer state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BasicAttack {
    pub last_attack_tick: u64,
}

/// Special attack timer state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpecialAttack {
    pub cooldown_ticks: u64,
    pub last_fire_tick: u64,
}

/// Sampled positions of a chain link, consumed by the follower behind it.
/// Newest samples are pushed to the back; the follower reads from the front
/// with a fixed delay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChainSamples {
    pub positions: Vec<Position>,
}

/// Recent own positions for trail rendering (newest first).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    pub positions: Vec<Position>,
}

/// Live enemy stats (base spec scaled by level, then modified in play).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyState {
    pub kind: EnemyKind,
    pub size: f64,
    pub speed: f64,
    pub damage: f64,
    /// Wave level at spawn time, used for the kill score multiplier.
    pub level: u32,
}

/// Active corrosion on an enemy. Reapplication refreshes the expiry,
/// it never stacks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Corrosion {
    /// Damage dealt per pulse.
    pub pulse_damage: f64,
    /// Tick at which the effect expires.
    pub expires_at_tick: u64,
    /// Tick of the last pulse.
    pub last_pulse_tick: u64,
}

/// Boss fight state attached to a boss enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BossState {
    pub phase: BossPhase,
    /// Nonzero while the phase-change pulse is playing. Counts down.
    pub transition_ticks_left: u64,
    /// Tick of the last special attack.
    pub last_special_tick: u64,
    /// Current interval between specials (shrinks in later phases).
    pub special_interval_ticks: u64,
}

/// Pickup payload: either an engineer (new follower) or a steam core (team
/// upgrade).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PickupPayload {
    Engineer { class: SteamClass },
    SteamCore { bonus: CoreBonus },
}

/// Marks the player-controlled commander.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Commander;

/// Marks a follower.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Follower;

/// Marks an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a boss enemy (also has Enemy).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boss;

/// Marks a collectible pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pickup;
