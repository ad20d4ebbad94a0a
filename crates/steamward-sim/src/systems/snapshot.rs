//! Snapshot builder: flattens the world and engine state into the
//! serializable view sent to the frontend each tick.

use hecs::{Entity, World};

use steamward_core::components::{
    Boss, BossState, ClassAssignment, CombatStats, Corrosion, EnemyState, Health, PickupPayload,
    Trail,
};
use steamward_core::constants::MINE_RADIUS;
use steamward_core::enums::GamePhase;
use steamward_core::events::{AudioEvent, Notice};
use steamward_core::state::*;
use steamward_core::types::{Position, SimTime};

use steamward_terrain::TerrainTile;

use crate::pool::ParticlePool;
use crate::systems::effects::ActiveEffect;
use crate::systems::mines::TemporalMine;
use crate::systems::projectiles::{Ember, Gear};
use crate::systems::waves::WaveState;

/// Everything outside the ECS world that the snapshot reads.
pub struct SnapshotInputs<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: i64,
    pub wave: &'a WaveState,
    pub commander: Option<Entity>,
    pub critical: bool,
    pub chain: &'a [Entity],
    pub boss: Option<Entity>,
    pub mines: &'a [TemporalMine],
    pub effects: &'a [ActiveEffect],
    pub gears: &'a [Gear],
    pub embers: &'a [Ember],
    pub particles: &'a ParticlePool,
    pub collections: &'a ParticlePool,
    pub terrain: &'a [TerrainTile],
    pub shake: f64,
    pub shake_offset: (f64, f64),
    pub flash: f64,
    pub notices: &'a [Notice],
}

/// Build the complete per-tick snapshot. Audio events are drained into the
/// snapshot; they fire exactly once.
pub fn build(world: &World, inputs: &SnapshotInputs, audio: Vec<AudioEvent>) -> GameStateSnapshot {
    GameStateSnapshot {
        time: inputs.time,
        phase: inputs.phase,
        score: inputs.score,
        wave: WaveView {
            level: inputs.wave.level,
            kills: inputs.wave.kills,
            quota: inputs.wave.quota,
            boss_spawned: inputs.wave.boss_spawned,
            boss_defeated: inputs.wave.boss_defeated,
        },
        commander: commander_view(world, inputs.commander, inputs.critical),
        followers: follower_views(world, inputs.chain),
        enemies: enemy_views(world),
        boss: boss_view(world, inputs.boss),
        pickups: pickup_views(world),
        mines: mine_views(inputs),
        effects: effect_views(inputs),
        terrain: terrain_views(inputs.terrain),
        screen_shake: ShakeView {
            intensity: inputs.shake,
            offset_x: inputs.shake_offset.0,
            offset_y: inputs.shake_offset.1,
        },
        flash: inputs.flash,
        notices: inputs.notices.to_vec(),
        audio_events: audio,
    }
}

fn commander_view(world: &World, commander: Option<Entity>, critical: bool) -> CommanderView {
    let Some(commander) = commander else {
        return CommanderView::default();
    };
    let position = world
        .get::<&Position>(commander)
        .map(|p| *p)
        .unwrap_or_default();
    let health = world.get::<&Health>(commander).map(|h| *h).ok();
    CommanderView {
        position,
        health: health.map(|h| h.current).unwrap_or(0.0),
        max_health: health.map(|h| h.max).unwrap_or(0.0),
        critical,
    }
}

/// Followers in chain order, so the frontend can draw the links.
fn follower_views(world: &World, chain: &[Entity]) -> Vec<FollowerView> {
    chain
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(
                    &ClassAssignment,
                    &Position,
                    &Health,
                    &CombatStats,
                    &Trail,
                )>(entity)
                .ok()?;
            let (class, pos, health, stats, trail) = query.get()?;
            Some(FollowerView {
                class: class.class,
                style: class.style,
                position: *pos,
                health: health.current,
                max_health: health.max,
                damage: stats.damage,
                range: stats.range,
                speed: stats.speed,
                trail: trail.positions.clone(),
            })
        })
        .collect()
}

fn enemy_views(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Position, &EnemyState, &Health)>()
        .iter()
        .map(|(entity, (pos, state, health))| EnemyView {
            kind: state.kind,
            position: *pos,
            size: state.size,
            health: health.current,
            max_health: health.max,
            corroded: world.satisfies::<&Corrosion>(entity).unwrap_or(false),
            is_boss: world.satisfies::<&Boss>(entity).unwrap_or(false),
        })
        .collect()
}

fn boss_view(world: &World, boss: Option<Entity>) -> Option<BossView> {
    let entity = boss?;
    let mut query = world
        .query_one::<(&Position, &EnemyState, &Health, &BossState)>(entity)
        .ok()?;
    let (pos, enemy, health, state) = query.get()?;
    Some(BossView {
        kind: enemy.kind,
        phase: state.phase,
        position: *pos,
        health: health.current,
        max_health: health.max,
        transitioning: state.transition_ticks_left > 0,
    })
}

fn pickup_views(world: &World) -> Vec<PickupView> {
    world
        .query::<(&Position, &PickupPayload)>()
        .iter()
        .map(|(_, (pos, payload))| PickupView {
            position: *pos,
            payload: match payload {
                PickupPayload::Engineer { class } => {
                    PickupViewPayload::Engineer { class: *class }
                }
                PickupPayload::SteamCore { bonus } => {
                    PickupViewPayload::SteamCore { bonus: *bonus }
                }
            },
        })
        .collect()
}

fn mine_views(inputs: &SnapshotInputs) -> Vec<MineView> {
    inputs
        .mines
        .iter()
        .map(|mine| MineView {
            position: mine.position,
            radius: MINE_RADIUS,
            fuse_remaining: mine.detonate_at_tick.saturating_sub(inputs.time.tick),
        })
        .collect()
}

/// Timed effects first, then live projectiles and pool particles as views.
fn effect_views(inputs: &SnapshotInputs) -> Vec<EffectView> {
    let mut views: Vec<EffectView> = inputs.effects.iter().map(|e| e.view.clone()).collect();

    for gear in inputs.gears {
        views.push(EffectView::Gear {
            position: Position::from_vec(gear.position),
            trail: gear.trail.clone(),
        });
    }
    for ember in inputs.embers {
        views.push(EffectView::Ember {
            position: Position::from_vec(ember.position),
            life: ember.life,
        });
    }
    for particle in inputs.particles.iter() {
        views.push(EffectView::Spark {
            position: particle.position,
            life: particle.life,
        });
    }
    for particle in inputs.collections.iter() {
        views.push(EffectView::Collection {
            position: particle.position,
            life: particle.life,
        });
    }
    views
}

fn terrain_views(terrain: &[TerrainTile]) -> Vec<TerrainView> {
    terrain
        .iter()
        .map(|tile| TerrainView {
            kind: tile.kind,
            x: tile.x,
            y: tile.y,
            width: tile.width,
            height: tile.height,
        })
        .collect()
}
