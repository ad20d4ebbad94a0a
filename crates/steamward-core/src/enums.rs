//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Follower class. Each class has fixed base stats and one special attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteamClass {
    Warrior,
    IceMage,
    ThunderMage,
    ShroomPixie,
    Ninja,
    HolyBard,
    DarkMage,
    Shotgunner,
    Sniper,
    GoblinTrapper,
    Shaman,
}

impl SteamClass {
    /// All classes in table order (used for iteration and weighted selection).
    pub const ALL: [SteamClass; 11] = [
        SteamClass::Warrior,
        SteamClass::IceMage,
        SteamClass::ThunderMage,
        SteamClass::ShroomPixie,
        SteamClass::Ninja,
        SteamClass::HolyBard,
        SteamClass::DarkMage,
        SteamClass::Shotgunner,
        SteamClass::Sniper,
        SteamClass::GoblinTrapper,
        SteamClass::Shaman,
    ];
}

/// Special attack style, one per class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackStyle {
    /// Melee arc with knockback.
    SwordSweep,
    /// Area slow with timed revert.
    TimeBurst,
    /// Bolt that arcs between enemies with damage falloff.
    ChainLightning,
    /// Radial burst with distance-scaled knockback.
    PressureBlast,
    /// Spinning projectile toward the nearest enemy.
    GearThrow,
    /// Ring of staggered fragment bursts.
    ShrapnelField,
    /// Narrow cone beam.
    AetherBeam,
    /// Fan of short-lived embers.
    EmberSpray,
    /// Short-range heavy strike with knockback.
    PistonPunch,
    /// Placed charge with delayed detonation.
    TemporalMine,
    /// Area damage-over-time cloud.
    CorrosionCloud,
}

/// Enemy species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Cultist,
    DeepOne,
    Shoggoth,
}

/// Boss fight phase. Transitions at health thresholds, each fired once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BossPhase {
    #[default]
    One,
    Two,
    Three,
}

/// Stat bonus carried by a steam core pickup. Applies to all living followers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoreBonus {
    Damage,
    Range,
    Speed,
}

impl CoreBonus {
    pub const ALL: [CoreBonus; 3] = [CoreBonus::Damage, CoreBonus::Range, CoreBonus::Speed];
}

/// Terrain patch kind. Determines the movement speed modifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerrainKind {
    #[default]
    Grass,
    Bush,
    Forest,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Title,
    Active,
    Paused,
    GameOver,
}

/// Floating notification category, used by the frontend for styling and motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    Damage,
    Pickup,
    Upgrade,
    Wave,
    Warning,
}
