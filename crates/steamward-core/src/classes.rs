//! Stat tables for follower classes and enemy species.
//!
//! Consolidates per-class and per-species tuning so systems never hardcode
//! individual numbers.

use crate::constants::*;
use crate::enums::{AttackStyle, BossPhase, EnemyKind, SteamClass};

/// Base stats and special attack for a follower class.
#[derive(Debug, Clone, Copy)]
pub struct ClassSpec {
    pub style: AttackStyle,
    pub damage: f64,
    pub range: f64,
    pub speed: f64,
}

/// Get the stat spec for a follower class.
pub fn class_spec(class: SteamClass) -> ClassSpec {
    match class {
        SteamClass::Warrior => ClassSpec {
            style: AttackStyle::SwordSweep,
            damage: 2.5,
            range: 180.0,
            speed: 1.6,
        },
        SteamClass::IceMage => ClassSpec {
            style: AttackStyle::TimeBurst,
            damage: 1.2,
            range: 120.0,
            speed: 1.8,
        },
        SteamClass::ThunderMage => ClassSpec {
            style: AttackStyle::ChainLightning,
            damage: 1.5,
            range: 150.0,
            speed: 1.5,
        },
        SteamClass::ShroomPixie => ClassSpec {
            style: AttackStyle::PressureBlast,
            damage: 2.0,
            range: 80.0,
            speed: 1.2,
        },
        SteamClass::Ninja => ClassSpec {
            style: AttackStyle::GearThrow,
            damage: 1.8,
            range: 200.0,
            speed: 1.3,
        },
        SteamClass::HolyBard => ClassSpec {
            style: AttackStyle::ShrapnelField,
            damage: 1.6,
            range: 100.0,
            speed: 1.4,
        },
        SteamClass::DarkMage => ClassSpec {
            style: AttackStyle::AetherBeam,
            damage: 2.2,
            range: 180.0,
            speed: 1.1,
        },
        SteamClass::Shotgunner => ClassSpec {
            style: AttackStyle::EmberSpray,
            damage: 1.7,
            range: 90.0,
            speed: 1.6,
        },
        SteamClass::Sniper => ClassSpec {
            style: AttackStyle::PistonPunch,
            damage: 1.9,
            range: 60.0,
            speed: 2.0,
        },
        SteamClass::GoblinTrapper => ClassSpec {
            style: AttackStyle::TemporalMine,
            damage: 2.5,
            range: 140.0,
            speed: 1.0,
        },
        SteamClass::Shaman => ClassSpec {
            style: AttackStyle::CorrosionCloud,
            damage: 1.4,
            range: 110.0,
            speed: 1.7,
        },
    }
}

/// Special attack cooldown for a style, in ticks.
pub fn special_cooldown_ticks(style: AttackStyle) -> u64 {
    match style {
        AttackStyle::SwordSweep => SWORD_SWEEP_COOLDOWN_TICKS,
        AttackStyle::AetherBeam => AETHER_BEAM_COOLDOWN_TICKS,
        _ => SPECIAL_COOLDOWN_TICKS,
    }
}

/// Base stats for an enemy species, before level scaling.
#[derive(Debug, Clone, Copy)]
pub struct EnemySpec {
    pub size: f64,
    pub speed: f64,
    pub health: f64,
    pub damage: f64,
    /// Score for a kill, before the level multiplier.
    pub score: i64,
}

/// Get the stat spec for an enemy species. Bosses use a larger variant.
pub fn enemy_spec(kind: EnemyKind, boss: bool) -> EnemySpec {
    match (kind, boss) {
        (EnemyKind::Cultist, false) => EnemySpec {
            size: 15.0,
            speed: 1.0,
            health: 2.0,
            damage: 10.0,
            score: 50,
        },
        (EnemyKind::Cultist, true) => EnemySpec {
            size: 30.0,
            speed: 1.5,
            health: 10.0,
            damage: 20.0,
            score: 50,
        },
        (EnemyKind::DeepOne, false) => EnemySpec {
            size: 20.0,
            speed: 1.5,
            health: 3.0,
            damage: 15.0,
            score: 100,
        },
        (EnemyKind::DeepOne, true) => EnemySpec {
            size: 40.0,
            speed: 2.0,
            health: 15.0,
            damage: 30.0,
            score: 100,
        },
        (EnemyKind::Shoggoth, false) => EnemySpec {
            size: 25.0,
            speed: 0.8,
            health: 5.0,
            damage: 20.0,
            score: 200,
        },
        (EnemyKind::Shoggoth, true) => EnemySpec {
            size: 50.0,
            speed: 1.2,
            health: 25.0,
            damage: 40.0,
            score: 200,
        },
    }
}

/// Permanent stat multipliers applied when a boss enters a phase.
/// Applied once per transition, on top of whatever the boss already has.
#[derive(Debug, Clone, Copy, Default)]
pub struct BossPhaseMods {
    pub damage_mult: f64,
    pub speed_mult: f64,
    pub size_mult: f64,
    pub special_interval_mult: f64,
}

impl BossPhaseMods {
    fn identity() -> Self {
        Self {
            damage_mult: 1.0,
            speed_mult: 1.0,
            size_mult: 1.0,
            special_interval_mult: 1.0,
        }
    }
}

/// Stat changes for a boss species entering the given phase.
pub fn boss_phase_mods(kind: EnemyKind, phase: BossPhase) -> BossPhaseMods {
    let id = BossPhaseMods::identity();
    match (kind, phase) {
        (EnemyKind::Cultist, BossPhase::Two) => BossPhaseMods {
            damage_mult: 1.5,
            speed_mult: 1.2,
            ..id
        },
        (EnemyKind::Cultist, BossPhase::Three) => BossPhaseMods {
            damage_mult: 2.0,
            special_interval_mult: 0.7,
            ..id
        },
        (EnemyKind::DeepOne, BossPhase::Two) => BossPhaseMods {
            speed_mult: 1.5,
            size_mult: 1.2,
            ..id
        },
        (EnemyKind::DeepOne, BossPhase::Three) => BossPhaseMods {
            speed_mult: 2.0,
            damage_mult: 1.5,
            ..id
        },
        (EnemyKind::Shoggoth, BossPhase::Two) => BossPhaseMods {
            size_mult: 1.3,
            damage_mult: 1.3,
            ..id
        },
        (EnemyKind::Shoggoth, BossPhase::Three) => BossPhaseMods {
            size_mult: 1.5,
            special_interval_mult: 0.5,
            ..id
        },
        (_, BossPhase::One) => id,
    }
}

/// Enemy kind distribution for a given level: cumulative probability
/// thresholds (cultist, deep one); the remainder is shoggoth.
pub fn enemy_kind_thresholds(level: u32) -> (f64, f64) {
    if level <= 2 {
        (0.7, 0.9)
    } else if level <= 5 {
        (0.4, 0.8)
    } else {
        (0.3, 0.6)
    }
}
