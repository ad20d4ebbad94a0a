//! Wave progression: kill quotas, the boss gate, and completion rewards.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steamward_core::constants::*;
use steamward_core::enums::{EnemyKind, NoticeKind};
use steamward_core::events::{AudioEvent, Notice};
use steamward_core::types::Position;

use crate::systems::combat_apply::heal_entity;
use crate::world_setup;

/// Wave progression state owned by the engine.
#[derive(Debug, Clone)]
pub struct WaveState {
    pub level: u32,
    pub kills: u32,
    pub quota: u32,
    pub boss_spawned: bool,
    pub boss_defeated: bool,
    /// Enemy pressure interval while the boss is alive. Shrinks per wave.
    pub spawn_interval_ticks: u64,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            level: 1,
            kills: 0,
            quota: WAVE_1_QUOTA,
            boss_spawned: false,
            boss_defeated: false,
            spawn_interval_ticks: WAVE_SPAWN_INTERVAL_BASE_TICKS,
        }
    }
}

impl WaveState {
    /// Kills required before the boss appears.
    pub fn boss_gate(&self) -> u32 {
        (self.quota as f64 * BOSS_SPAWN_QUOTA_FRACTION).ceil() as u32
    }

    /// Quota for the wave after this one.
    pub fn next_quota(&self) -> u32 {
        match self.level {
            1 => WAVE_2_QUOTA,
            _ => self.quota.saturating_mul(2),
        }
    }
}

fn spawn_interval_for_level(level: u32) -> u64 {
    WAVE_SPAWN_INTERVAL_BASE_TICKS
        .saturating_sub(level.saturating_sub(1) as u64 * WAVE_SPAWN_INTERVAL_STEP_TICKS)
        .max(WAVE_SPAWN_INTERVAL_MIN_TICKS)
}

/// Per-tick wave update: spawn the boss once the kill gate is reached, and
/// roll the wave over once the quota is met and the boss is down.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    wave: &mut WaveState,
    commander: Entity,
    chain: &[Entity],
    boss: &mut Option<Entity>,
    score: &mut i64,
    tick: u64,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    notices: &mut Vec<Notice>,
) {
    if !wave.boss_spawned && wave.kills >= wave.boss_gate() {
        let kind = roll_boss_kind(rng);
        let pos = world_setup::random_edge_midpoint(rng);
        *boss = Some(world_setup::spawn_boss(world, kind, wave.level, pos));
        wave.boss_spawned = true;
        audio.push(AudioEvent::BossSpawned { kind });
        notices.push(Notice {
            kind: NoticeKind::Warning,
            text: format!("{kind:?} boss approaching!"),
            position: pos,
            spawned_tick: tick,
        });
    }

    if wave.kills >= wave.quota && wave.boss_defeated {
        // Rewards scale with the wave just finished.
        *score += wave.level as i64 * WAVE_COMPLETE_SCORE_PER_LEVEL;
        heal_entity(world, commander, WAVE_COMPLETE_COMMANDER_HEAL);
        for &follower in chain {
            heal_entity(world, follower, WAVE_COMPLETE_FOLLOWER_HEAL);
        }
        audio.push(AudioEvent::WaveComplete { level: wave.level });

        let completed = wave.level;
        wave.quota = wave.next_quota();
        wave.level += 1;
        wave.kills = 0;
        wave.boss_spawned = false;
        wave.boss_defeated = false;
        wave.spawn_interval_ticks = spawn_interval_for_level(wave.level);

        let position = commander_position(world, commander);
        notices.push(Notice {
            kind: NoticeKind::Wave,
            text: format!("Wave {completed} cleared!"),
            position,
            spawned_tick: tick,
        });
    }
}

fn roll_boss_kind(rng: &mut ChaCha8Rng) -> EnemyKind {
    match rng.gen_range(0..3u8) {
        0 => EnemyKind::Cultist,
        1 => EnemyKind::DeepOne,
        _ => EnemyKind::Shoggoth,
    }
}

fn commander_position(world: &mut World, commander: Entity) -> Position {
    world
        .query_one_mut::<&Position>(commander)
        .map(|p| *p)
        .unwrap_or_default()
}
