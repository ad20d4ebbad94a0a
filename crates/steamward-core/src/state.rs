//! Game state snapshot — the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, Notice};
use crate::types::{Position, SimTime};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: i64,
    pub wave: WaveView,
    pub commander: CommanderView,
    pub followers: Vec<FollowerView>,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    pub pickups: Vec<PickupView>,
    pub mines: Vec<MineView>,
    pub effects: Vec<EffectView>,
    pub terrain: Vec<TerrainView>,
    pub screen_shake: ShakeView,
    pub flash: f64,
    pub notices: Vec<Notice>,
    pub audio_events: Vec<AudioEvent>,
}

/// Wave progression for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub level: u32,
    pub kills: u32,
    pub quota: u32,
    pub boss_spawned: bool,
    pub boss_defeated: bool,
}

/// Commander state for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommanderView {
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    /// True while the critical-health warning latch is armed low.
    pub critical: bool,
}

/// A follower in chain order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowerView {
    pub class: SteamClass,
    pub style: AttackStyle,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    pub damage: f64,
    pub range: f64,
    pub speed: f64,
    pub trail: Vec<Position>,
}

/// An enemy for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub size: f64,
    pub health: f64,
    pub max_health: f64,
    pub corroded: bool,
    pub is_boss: bool,
}

/// Boss HUD state (health bar, phase indicator).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub kind: EnemyKind,
    pub phase: BossPhase,
    pub position: Position,
    pub health: f64,
    pub max_health: f64,
    /// True during the phase-change pulse.
    pub transitioning: bool,
}

/// An uncollected pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub position: Position,
    pub payload: PickupViewPayload,
}

/// Pickup payload for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PickupViewPayload {
    Engineer { class: SteamClass },
    SteamCore { bonus: CoreBonus },
}

/// An armed temporal mine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MineView {
    pub position: Position,
    pub radius: f64,
    /// Ticks until detonation.
    pub fuse_remaining: u64,
}

/// A transient visual effect. Each variant carries the data its renderer
/// needs; no string-keyed property bags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EffectView {
    SwordSweep { position: Position, angle: f64, range: f64 },
    SwordHit { position: Position },
    TimeBurst { position: Position, radius: f64 },
    ChainBolt { points: Vec<Position> },
    PressureBlast { position: Position, radius: f64 },
    GearLaunch { position: Position },
    Gear { position: Position, trail: Vec<Position> },
    ShrapnelCast { position: Position, radius: f64 },
    ShrapnelBurst { position: Position },
    AetherBeam { position: Position, angle: f64, range: f64 },
    Ember { position: Position, life: f64 },
    PistonPunch { position: Position, angle: f64 },
    PistonHit { position: Position },
    CorrosionCloud { position: Position, radius: f64 },
    MineBlast { position: Position, radius: f64 },
    BossRing { position: Position, radius: f64 },
    PickupRejected { position: Position },
    Spark { position: Position, life: f64 },
    Collection { position: Position, life: f64 },
}

/// A terrain patch for background rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerrainView {
    pub kind: TerrainKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Screen shake offsets for the camera.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShakeView {
    pub intensity: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}
