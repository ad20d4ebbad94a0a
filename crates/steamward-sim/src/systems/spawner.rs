//! Spawn director: enemy bursts, group formations, and timed pickups.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steamward_core::classes::enemy_kind_thresholds;
use steamward_core::constants::*;
use steamward_core::enums::{CoreBonus, EnemyKind, NoticeKind, SteamClass};
use steamward_core::events::Notice;
use steamward_core::types::Position;

use crate::systems::waves::WaveState;
use crate::world_setup;

/// A queued group formation, drip-fed one enemy per tick.
#[derive(Debug, Clone, Copy)]
pub struct PendingGroupSpawn {
    pub remaining: u32,
    pub base: Position,
    pub kind: EnemyKind,
    pub spacing: f64,
}

/// Mutable spawn director state owned by the engine.
#[derive(Debug)]
pub struct SpawnerState {
    pub last_enemy_spawn_tick: u64,
    pub last_engineer_tick: u64,
    pub last_core_tick: u64,
    pub pending_group: Option<PendingGroupSpawn>,
    /// Relative engineer class weights, parallel to `SteamClass::ALL`.
    /// A zero weight excludes the class.
    pub spawn_rates: [u32; 11],
}

impl Default for SpawnerState {
    fn default() -> Self {
        Self {
            last_enemy_spawn_tick: 0,
            last_engineer_tick: 0,
            last_core_tick: 0,
            pending_group: None,
            spawn_rates: [DEFAULT_CLASS_SPAWN_RATE; 11],
        }
    }
}

impl SpawnerState {
    pub fn set_rate(&mut self, class: SteamClass, rate: u32) {
        let index = SteamClass::ALL.iter().position(|&c| c == class);
        if let Some(index) = index {
            self.spawn_rates[index] = rate;
        }
    }

    pub fn reset_rates(&mut self) {
        self.spawn_rates = [DEFAULT_CLASS_SPAWN_RATE; 11];
    }
}

/// Weighted class pick over a snapshot of the spawn-rate table.
/// Returns None when every weight is zero.
pub fn pick_class(rates: &[u32; 11], rng: &mut ChaCha8Rng) -> Option<SteamClass> {
    let total: u64 = rates.iter().map(|&r| r as u64).sum();
    if total == 0 {
        return None;
    }
    let mut roll = rng.gen_range(0..total);
    for (i, &rate) in rates.iter().enumerate() {
        let rate = rate as u64;
        if roll < rate {
            return Some(SteamClass::ALL[i]);
        }
        roll -= rate;
    }
    None
}

/// Ticks between enemy spawn bursts. Shrinks with level; once the boss is
/// on the field the wave's tighter pressure interval takes over.
pub fn enemy_spawn_gate(wave: &WaveState) -> u64 {
    if wave.boss_spawned && !wave.boss_defeated {
        return wave.spawn_interval_ticks;
    }
    ENEMY_SPAWN_BASE_TICKS
        .saturating_sub(wave.level as u64 * ENEMY_SPAWN_STEP_TICKS)
        .max(ENEMY_SPAWN_MIN_TICKS)
}

/// Per-tick spawn director update.
pub fn run(
    world: &mut World,
    state: &mut SpawnerState,
    wave: &WaveState,
    tick: u64,
    rng: &mut ChaCha8Rng,
    notices: &mut Vec<Notice>,
) {
    drip_group(world, state, wave.level);
    spawn_enemies(world, state, wave, tick, rng);
    spawn_pickups(world, state, tick, rng, notices);
}

/// Release one queued group member per tick.
fn drip_group(world: &mut World, state: &mut SpawnerState, level: u32) {
    if let Some(group) = &mut state.pending_group {
        let offset = (group.remaining as f64) * group.spacing;
        let pos = Position::new(group.base.x + offset, group.base.y);
        world_setup::spawn_enemy(world, group.kind, level, pos);
        group.remaining -= 1;
        if group.remaining == 0 {
            state.pending_group = None;
        }
    }
}

fn spawn_enemies(
    world: &mut World,
    state: &mut SpawnerState,
    wave: &WaveState,
    tick: u64,
    rng: &mut ChaCha8Rng,
) {
    if tick.saturating_sub(state.last_enemy_spawn_tick) < enemy_spawn_gate(wave) {
        return;
    }
    state.last_enemy_spawn_tick = tick;

    let level = wave.level;

    // Group formations replace the whole burst.
    if level >= 5 && rng.gen_bool(0.3) && state.pending_group.is_none() {
        state.pending_group = Some(PendingGroupSpawn {
            remaining: rng.gen_range(2..=4),
            base: world_setup::random_edge_position(rng),
            kind: roll_kind(level, rng),
            spacing: GROUP_SPAWN_SPACING,
        });
        return;
    }

    let corner_burst = level >= 3 && rng.gen_bool(0.4);
    let count = level.min(ENEMY_BURST_CAP);
    for _ in 0..count {
        let pos = if corner_burst {
            world_setup::random_corner_position(rng)
        } else {
            world_setup::random_edge_position(rng)
        };
        world_setup::spawn_enemy(world, roll_kind(level, rng), level, pos);
    }
}

/// Enemy species roll, weighted by level tier.
fn roll_kind(level: u32, rng: &mut ChaCha8Rng) -> EnemyKind {
    let (cultist, deep_one) = enemy_kind_thresholds(level);
    let roll: f64 = rng.gen();
    if roll < cultist {
        EnemyKind::Cultist
    } else if roll < deep_one {
        EnemyKind::DeepOne
    } else {
        EnemyKind::Shoggoth
    }
}

fn spawn_pickups(
    world: &mut World,
    state: &mut SpawnerState,
    tick: u64,
    rng: &mut ChaCha8Rng,
    notices: &mut Vec<Notice>,
) {
    if tick.saturating_sub(state.last_engineer_tick) >= ENGINEER_SPAWN_INTERVAL_TICKS {
        state.last_engineer_tick = tick;
        // Table snapshot taken at the decision point; command edits landing
        // later this tick affect the next spawn.
        let rates = state.spawn_rates;
        if let Some(class) = pick_class(&rates, rng) {
            if let Some(pos) = world_setup::place_pickup(world, rng) {
                world_setup::spawn_engineer(world, class, pos);
                notices.push(Notice {
                    kind: NoticeKind::Pickup,
                    text: format!("Engineer spotted: {class:?}"),
                    position: pos,
                    spawned_tick: tick,
                });
            }
        }
    }

    if tick.saturating_sub(state.last_core_tick) >= STEAM_CORE_SPAWN_INTERVAL_TICKS {
        state.last_core_tick = tick;
        let bonus = CoreBonus::ALL[rng.gen_range(0..CoreBonus::ALL.len())];
        if let Some(pos) = world_setup::place_pickup(world, rng) {
            world_setup::spawn_steam_core(world, bonus, pos);
            notices.push(Notice {
                kind: NoticeKind::Pickup,
                text: "Steam core detected".to_string(),
                position: pos,
                spawned_tick: tick,
            });
        }
    }
}
