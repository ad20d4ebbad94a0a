//! Death processing: prune dead followers and enemies, award score, and
//! queue despawns.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steamward_core::classes::enemy_spec;
use steamward_core::components::{Boss, ClassAssignment, EnemyState, Health};
use steamward_core::constants::*;
use steamward_core::enums::NoticeKind;
use steamward_core::events::{AudioEvent, Notice};
use steamward_core::types::Position;

use crate::pool::{Particle, ParticlePool};
use crate::systems::combat_apply::{heal_entity, SideEffects};
use crate::systems::waves::WaveState;

/// Per-tick death sweep. Runs after all damage has been applied.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    commander: Entity,
    chain: &mut Vec<Entity>,
    boss: &mut Option<Entity>,
    wave: &mut WaveState,
    score: &mut i64,
    tick: u64,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    notices: &mut Vec<Notice>,
    particles: &mut ParticlePool,
    despawn_buffer: &mut Vec<Entity>,
    out: &mut SideEffects,
) {
    prune_followers(world, chain, score, tick, audio, notices, despawn_buffer);
    prune_enemies(
        world,
        commander,
        chain,
        boss,
        wave,
        score,
        tick,
        rng,
        audio,
        notices,
        particles,
        despawn_buffer,
        out,
    );
}

/// Remove dead followers from the chain. Survivors close the gap on the
/// next movement pass since follow targets come from chain order.
fn prune_followers(
    world: &mut World,
    chain: &mut Vec<Entity>,
    score: &mut i64,
    tick: u64,
    audio: &mut Vec<AudioEvent>,
    notices: &mut Vec<Notice>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let dead: Vec<Entity> = chain
        .iter()
        .copied()
        .filter(|&e| {
            world
                .get::<&Health>(e)
                .map(|h| h.is_dead())
                .unwrap_or(true)
        })
        .collect();
    if dead.is_empty() {
        return;
    }

    for entity in dead {
        let (class, position) = {
            let class = world
                .get::<&ClassAssignment>(entity)
                .map(|c| c.class)
                .ok();
            let position = world.get::<&Position>(entity).map(|p| *p).unwrap_or_default();
            (class, position)
        };
        *score -= FOLLOWER_DEATH_PENALTY;
        if let Some(class) = class {
            audio.push(AudioEvent::FollowerLost { class });
            notices.push(Notice {
                kind: NoticeKind::Damage,
                text: format!("{class:?} has fallen"),
                position,
                spawned_tick: tick,
            });
        }
        chain.retain(|&e| e != entity);
        despawn_buffer.push(entity);
    }
}

#[allow(clippy::too_many_arguments)]
fn prune_enemies(
    world: &mut World,
    commander: Entity,
    chain: &[Entity],
    boss: &mut Option<Entity>,
    wave: &mut WaveState,
    score: &mut i64,
    tick: u64,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    notices: &mut Vec<Notice>,
    particles: &mut ParticlePool,
    despawn_buffer: &mut Vec<Entity>,
    out: &mut SideEffects,
) {
    let dead: Vec<(Entity, Position, EnemyState, bool)> = world
        .query::<(&Health, &Position, &EnemyState)>()
        .iter()
        .filter(|(_, (health, _, _))| health.is_dead())
        .map(|(e, (_, pos, state))| {
            let is_boss = world.satisfies::<&Boss>(e).unwrap_or(false);
            (e, *pos, *state, is_boss)
        })
        .collect();

    for (entity, position, state, is_boss) in dead {
        if is_boss {
            wave.boss_defeated = true;
            *boss = None;
            *score += state.level as i64 * BOSS_DEFEAT_SCORE_PER_LEVEL;
            heal_entity(world, commander, BOSS_DEFEAT_COMMANDER_HEAL);
            for &follower in chain {
                heal_entity(world, follower, BOSS_DEFEAT_FOLLOWER_HEAL);
            }
            audio.push(AudioEvent::BossDown { kind: state.kind });
            out.shake = out.shake.max(8.0);
            notices.push(Notice {
                kind: NoticeKind::Wave,
                text: format!("{:?} boss destroyed!", state.kind),
                position,
                spawned_tick: tick,
            });
        } else {
            let spec = enemy_spec(state.kind, false);
            *score += spec.score * state.level as i64;
            // Boss minions count toward the quota; the boss itself does not.
            wave.kills += 1;
            audio.push(AudioEvent::EnemyDown { kind: state.kind });
            death_sparks(particles, position, rng);
        }
        despawn_buffer.push(entity);
    }
}

fn death_sparks(particles: &mut ParticlePool, position: Position, rng: &mut ChaCha8Rng) {
    for _ in 0..5 {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = rng.gen_range(1.0..3.0);
        let _ = particles.spawn(Particle {
            position,
            velocity_x: angle.cos() * speed,
            velocity_y: angle.sin() * speed,
            life: 1.0,
            decay: rng.gen_range(0.04..0.1),
        });
    }
}
