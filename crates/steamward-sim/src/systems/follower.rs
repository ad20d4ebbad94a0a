//! Follower system: chain trailing movement, regeneration, basic attacks,
//! and special attack dispatch.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steamward_combat::actions::CasterContext;
use steamward_combat::specials;

use steamward_core::components::{
    BasicAttack, ChainSamples, ClassAssignment, CombatStats, Health, Regen, SpecialAttack, Trail,
};
use steamward_core::constants::*;
use steamward_core::events::AudioEvent;
use steamward_core::types::Position;

use steamward_terrain::TerrainTile;

use crate::pool::{Particle, ParticlePool};
use crate::systems::combat_apply::{self, SideEffects};

/// Per-tick follower update. `chain` is the engine's follow order:
/// index 0 trails the commander, index i trails index i-1.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    commander: Entity,
    chain: &[Entity],
    tick: u64,
    terrain: &[TerrainTile],
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    particles: &mut ParticlePool,
    out: &mut SideEffects,
) {
    record_samples(world, commander, chain, tick);
    trail_predecessors(world, commander, chain, terrain);
    regenerate(world, chain, tick);
    attack(world, chain, tick, rng, audio, particles, out);
}

/// Record chain samples (and follower trails) on the sampling interval.
fn record_samples(world: &mut World, commander: Entity, chain: &[Entity], tick: u64) {
    if !tick.is_multiple_of(CHAIN_SAMPLE_INTERVAL_TICKS) {
        return;
    }

    let mut links = vec![commander];
    links.extend_from_slice(chain);
    for entity in links {
        if let Ok((pos, samples)) = world.query_one_mut::<(&Position, &mut ChainSamples)>(entity) {
            samples.positions.push(*pos);
            while samples.positions.len() > CHAIN_SAMPLE_CAP {
                samples.positions.remove(0);
            }
        }
    }

    for &entity in chain {
        if let Ok((pos, trail)) = world.query_one_mut::<(&Position, &mut Trail)>(entity) {
            trail.positions.insert(0, *pos);
            trail.positions.truncate(MAX_TRAIL_POINTS);
        }
    }
}

/// Move each follower toward a delayed sample of its predecessor's path.
fn trail_predecessors(world: &mut World, commander: Entity, chain: &[Entity], terrain: &[TerrainTile]) {
    for (i, &entity) in chain.iter().enumerate() {
        let predecessor = if i == 0 { commander } else { chain[i - 1] };

        let target = {
            let samples = match world.get::<&ChainSamples>(predecessor) {
                Ok(s) => s,
                Err(_) => continue,
            };
            if samples.positions.len() > CHAIN_FOLLOW_DELAY {
                samples.positions[samples.positions.len() - 1 - CHAIN_FOLLOW_DELAY]
            } else {
                match world.get::<&Position>(predecessor) {
                    Ok(p) => *p,
                    Err(_) => continue,
                }
            }
        };

        if let Ok((pos, stats)) = world.query_one_mut::<(&mut Position, &CombatStats)>(entity) {
            let dist = pos.distance_to(&target);
            if dist > 1.0 {
                let modifier = steamward_terrain::speed_modifier_at(terrain, pos);
                // Ease in as the follower closes on its slot.
                let step = stats.speed.min(dist * 0.5) * modifier;
                let dir = DVec2::new(target.x - pos.x, target.y - pos.y).normalize_or_zero();
                pos.x += dir.x * step;
                pos.y += dir.y * step;
            }
        }
    }
}

fn regenerate(world: &mut World, chain: &[Entity], tick: u64) {
    for &entity in chain {
        if let Ok((health, regen)) = world.query_one_mut::<(&mut Health, &Regen)>(entity) {
            if !health.is_dead()
                && health.current < health.max
                && tick.saturating_sub(regen.last_damage_tick) >= regen.delay_ticks
            {
                health.current = (health.current + regen.rate).min(health.max);
            }
        }
    }
}

/// Basic attacks and specials. Both require an enemy within attack range;
/// cooldowns are tracked per follower.
fn attack(
    world: &mut World,
    chain: &[Entity],
    tick: u64,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    particles: &mut ParticlePool,
    out: &mut SideEffects,
) {
    let (enemy_entities, enemy_targets) = combat_apply::collect_enemy_targets(world);
    if enemy_targets.is_empty() {
        return;
    }

    for &entity in chain {
        let (position, stats, style, basic_ready, special_ready) = {
            let query = world.query_one_mut::<(
                &Position,
                &CombatStats,
                &ClassAssignment,
                &BasicAttack,
                &SpecialAttack,
            )>(entity);
            match query {
                Ok((pos, stats, class, basic, special)) => (
                    *pos,
                    *stats,
                    class.style,
                    tick.saturating_sub(basic.last_attack_tick) >= FOLLOWER_BASIC_COOLDOWN_TICKS,
                    tick.saturating_sub(special.last_fire_tick) >= special.cooldown_ticks,
                ),
                Err(_) => continue,
            }
        };

        let nearest = specials::nearest_in_range(&position, &enemy_targets, stats.range);
        let Some(nearest) = nearest else { continue };

        if special_ready {
            let ctx = CasterContext {
                position,
                damage: stats.damage,
                range: stats.range,
                facing: DVec2::from_angle(
                    position.angle_to(&enemy_targets[nearest].position),
                ),
            };
            let actions = specials::fire(style, &ctx, &enemy_targets, rng);
            combat_apply::apply(world, actions, &enemy_entities, tick, out);
            audio.push(AudioEvent::SpecialFired { style });
            if let Ok(special) = world.query_one_mut::<&mut SpecialAttack>(entity) {
                special.last_fire_tick = tick;
            }
        } else if basic_ready {
            let target_pos = enemy_targets[nearest].position;
            combat_apply::damage_entity(world, enemy_entities[nearest], stats.damage, tick, out);
            spawn_sparks(particles, target_pos, rng);
            if let Ok(basic) = world.query_one_mut::<&mut BasicAttack>(entity) {
                basic.last_attack_tick = tick;
            }
        }
    }
}

/// A small spark burst at a basic-attack impact.
fn spawn_sparks(particles: &mut ParticlePool, position: Position, rng: &mut ChaCha8Rng) {
    for _ in 0..3 {
        let angle = rng.gen_range(0.0..std::f64::consts::TAU);
        let speed = rng.gen_range(0.5..2.0);
        let _ = particles.spawn(Particle {
            position,
            velocity_x: angle.cos() * speed,
            velocity_y: angle.sin() * speed,
            life: 1.0,
            decay: rng.gen_range(0.03..0.08),
        });
    }
}
