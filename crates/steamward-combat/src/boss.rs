//! Boss behavior: phase transitions and per-species special attacks.
//!
//! Pure functions; the sim applies the resulting actions. Phase transitions
//! step one phase at a time and only fire from the matching current phase,
//! so each threshold triggers exactly once even if health oscillates around
//! it within a frame.

use glam::DVec2;
use rand::Rng;

use steamward_core::constants::*;
use steamward_core::enums::{BossPhase, EnemyKind};
use steamward_core::types::Position;

/// A damage ring from a shoggoth ground slam.
#[derive(Debug, Clone, Copy)]
pub struct DamageRing {
    pub radius: f64,
    pub damage: f64,
}

/// Stat multipliers for a summoned minion.
#[derive(Debug, Clone, Copy)]
pub struct MinionMods {
    pub damage_mult: f64,
    pub speed_mult: f64,
}

/// One boss special attack outcome.
#[derive(Debug, Clone)]
pub enum BossAction {
    /// Summon minions in a ring around the boss.
    SummonMinions {
        kind: EnemyKind,
        positions: Vec<Position>,
        mods: MinionMods,
    },
    /// Temporary speed/damage burst, reverted after the duration.
    Frenzy {
        speed_mult: f64,
        damage_mult: f64,
        duration_ticks: u64,
    },
    /// Concentric damage rings centered on the boss. Anything inside a
    /// ring's radius takes that ring's damage.
    DamageRings { rings: Vec<DamageRing> },
}

/// Check whether the boss should enter a new phase given its health
/// fraction. Returns the next phase, never skipping one.
pub fn next_phase(current: BossPhase, health_fraction: f64) -> Option<BossPhase> {
    match current {
        BossPhase::One if health_fraction <= BOSS_PHASE_2_THRESHOLD => Some(BossPhase::Two),
        BossPhase::Two if health_fraction <= BOSS_PHASE_3_THRESHOLD => Some(BossPhase::Three),
        _ => None,
    }
}

/// Resolve one boss special attack.
pub fn fire_special(
    kind: EnemyKind,
    phase: BossPhase,
    position: Position,
    damage: f64,
    rng: &mut impl Rng,
) -> BossAction {
    match kind {
        EnemyKind::Cultist => summon(phase, position, rng),
        EnemyKind::DeepOne => frenzy(phase),
        EnemyKind::Shoggoth => ground_slam(phase, damage),
    }
}

/// Cultist boss: summon a ring of minions, stronger in later phases.
fn summon(phase: BossPhase, position: Position, rng: &mut impl Rng) -> BossAction {
    let (count, mods) = match phase {
        BossPhase::One => (
            3,
            MinionMods {
                damage_mult: 1.0,
                speed_mult: 1.0,
            },
        ),
        BossPhase::Two => (
            4,
            MinionMods {
                damage_mult: 1.5,
                speed_mult: 1.0,
            },
        ),
        BossPhase::Three => (
            6,
            MinionMods {
                damage_mult: 2.0,
                speed_mult: 1.5,
            },
        ),
    };

    let base_angle = rng.gen_range(0.0..std::f64::consts::TAU);
    let positions = (0..count)
        .map(|i| {
            let angle = base_angle + i as f64 / count as f64 * std::f64::consts::TAU;
            let offset = DVec2::from_angle(angle) * 60.0;
            Position::from_vec(position.as_vec() + offset)
        })
        .collect();

    BossAction::SummonMinions {
        kind: EnemyKind::Cultist,
        positions,
        mods,
    }
}

/// Deep one boss: timed speed/damage burst, harsher and longer per phase.
fn frenzy(phase: BossPhase) -> BossAction {
    match phase {
        BossPhase::One => BossAction::Frenzy {
            speed_mult: 2.0,
            damage_mult: 1.0,
            duration_ticks: 60,
        },
        BossPhase::Two => BossAction::Frenzy {
            speed_mult: 2.5,
            damage_mult: 1.5,
            duration_ticks: 90,
        },
        BossPhase::Three => BossAction::Frenzy {
            speed_mult: 3.0,
            damage_mult: 2.0,
            duration_ticks: 120,
        },
    }
}

/// Shoggoth boss: concentric damage rings. Later phases add inner rings
/// with higher damage.
fn ground_slam(phase: BossPhase, damage: f64) -> BossAction {
    let rings = match phase {
        BossPhase::One => vec![DamageRing {
            radius: 100.0,
            damage: damage * 0.5,
        }],
        BossPhase::Two => vec![
            DamageRing {
                radius: 100.0,
                damage: damage * 0.7,
            },
            DamageRing {
                radius: 50.0,
                damage,
            },
        ],
        BossPhase::Three => vec![
            DamageRing {
                radius: 150.0,
                damage: damage * 0.5,
            },
            DamageRing {
                radius: 100.0,
                damage: damage * 0.75,
            },
            DamageRing {
                radius: 50.0,
                damage,
            },
        ],
    };
    BossAction::DamageRings { rings }
}
