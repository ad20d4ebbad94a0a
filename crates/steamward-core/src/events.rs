//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Commander sweep attack connected.
    CommanderStrike,
    /// A follower fired its special.
    SpecialFired { style: AttackStyle },
    /// An enemy died.
    EnemyDown { kind: EnemyKind },
    /// A boss entered a new phase.
    BossPhaseChange { phase: BossPhase },
    /// A boss was defeated.
    BossDown { kind: EnemyKind },
    /// A boss appeared.
    BossSpawned { kind: EnemyKind },
    /// A pickup was collected.
    PickupCollected,
    /// A follower died.
    FollowerLost { class: SteamClass },
    /// Commander health crossed the critical threshold.
    CriticalHealth,
    /// A wave was completed.
    WaveComplete { level: u32 },
    /// The commander died.
    GameOver,
}

/// Floating notification for the UI (damage numbers, banners).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub position: Position,
    /// Tick at which the notice was created; drives float/fade.
    pub spawned_tick: u64,
}
