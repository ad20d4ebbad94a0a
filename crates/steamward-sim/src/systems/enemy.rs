//! Enemy system: pursuit movement, corrosion pulses, and the boss phase
//! machine with its per-species specials.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use steamward_combat::boss::{self, BossAction};

use steamward_core::classes::boss_phase_mods;
use steamward_core::components::{BossState, Corrosion, EnemyState, Health};
use steamward_core::constants::*;
use steamward_core::enums::NoticeKind;
use steamward_core::events::{AudioEvent, Notice};
use steamward_core::state::EffectView;
use steamward_core::types::Position;

use steamward_terrain::TerrainTile;

use crate::deferred::DeferredEvent;
use crate::systems::combat_apply::{damage_entity, SideEffects};
use crate::world_setup;

const BOSS_RING_EFFECT_TICKS: u64 = 25;

/// Per-tick enemy update.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    commander: Entity,
    chain: &[Entity],
    boss: Option<Entity>,
    tick: u64,
    terrain: &[TerrainTile],
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    out: &mut SideEffects,
) {
    let commander_pos = match world.get::<&Position>(commander) {
        Ok(p) => *p,
        Err(_) => return,
    };

    pursue(world, &commander_pos, terrain);
    corrode(world, tick, out);
    if let Some(boss_entity) = boss {
        run_boss(world, boss_entity, commander, chain, tick, rng, audio, out);
    }
}

/// Move every enemy straight toward the commander, slowed by terrain.
fn pursue(world: &mut World, commander_pos: &Position, terrain: &[TerrainTile]) {
    for (_entity, (pos, state)) in world.query_mut::<(&mut Position, &EnemyState)>() {
        let (dx, dy) = pos.direction_to(commander_pos);
        let modifier = steamward_terrain::speed_modifier_at(terrain, pos);
        pos.x += dx * state.speed * modifier;
        pos.y += dy * state.speed * modifier;
    }
}

/// Pulse corrosion damage and expire finished effects.
fn corrode(world: &mut World, tick: u64, out: &mut SideEffects) {
    let mut expired = Vec::new();
    for (entity, (pos, health, corrosion)) in
        world.query_mut::<(&Position, &mut Health, &mut Corrosion)>()
    {
        if tick.saturating_sub(corrosion.last_pulse_tick) >= CORROSION_PULSE_INTERVAL_TICKS {
            health.current = (health.current - corrosion.pulse_damage).max(0.0);
            corrosion.last_pulse_tick = tick;
            out.notices.push(Notice {
                kind: NoticeKind::Damage,
                text: format!("-{}", corrosion.pulse_damage.round() as i64),
                position: *pos,
                spawned_tick: tick,
            });
        }
        if tick >= corrosion.expires_at_tick {
            expired.push(entity);
        }
    }
    for entity in expired {
        let _ = world.remove_one::<Corrosion>(entity);
    }
}

/// Boss phase transitions and special attacks.
#[allow(clippy::too_many_arguments)]
fn run_boss(
    world: &mut World,
    boss_entity: Entity,
    commander: Entity,
    chain: &[Entity],
    tick: u64,
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    out: &mut SideEffects,
) {
    // Phase check. One step per tick, only from the matching phase, and
    // never while the transition pulse is still playing.
    let transition = {
        let query = world.query_one_mut::<(&Health, &mut BossState)>(boss_entity);
        match query {
            Ok((health, state)) => {
                if state.transition_ticks_left > 0 {
                    state.transition_ticks_left -= 1;
                    None
                } else {
                    boss::next_phase(state.phase, health.current / health.max)
                }
            }
            Err(_) => return,
        }
    };

    if let Some(new_phase) = transition {
        if let Ok((state, enemy)) =
            world.query_one_mut::<(&mut BossState, &mut EnemyState)>(boss_entity)
        {
            let mods = boss_phase_mods(enemy.kind, new_phase);
            enemy.damage *= mods.damage_mult;
            enemy.speed *= mods.speed_mult;
            enemy.size *= mods.size_mult;
            state.special_interval_ticks =
                (state.special_interval_ticks as f64 * mods.special_interval_mult) as u64;
            state.phase = new_phase;
            state.transition_ticks_left = BOSS_TRANSITION_TICKS;
            audio.push(AudioEvent::BossPhaseChange { phase: new_phase });
            out.shake = out.shake.max(5.0);
        }
    }

    // Special attack on the interval timer.
    let special = {
        let query = world.query_one_mut::<(&Position, &EnemyState, &mut BossState)>(boss_entity);
        match query {
            Ok((pos, enemy, state)) => {
                if state.transition_ticks_left == 0
                    && tick.saturating_sub(state.last_special_tick) >= state.special_interval_ticks
                {
                    state.last_special_tick = tick;
                    Some(boss::fire_special(
                        enemy.kind,
                        state.phase,
                        *pos,
                        enemy.damage,
                        rng,
                    ))
                } else {
                    None
                }
            }
            Err(_) => None,
        }
    };

    match special {
        Some(BossAction::SummonMinions {
            kind,
            positions,
            mods,
        }) => {
            let level = world
                .query_one_mut::<&EnemyState>(boss_entity)
                .map(|s| s.level)
                .unwrap_or(1);
            for pos in positions {
                let minion = world_setup::spawn_enemy(world, kind, level, pos);
                if let Ok(state) = world.query_one_mut::<&mut EnemyState>(minion) {
                    state.damage *= mods.damage_mult;
                    state.speed *= mods.speed_mult;
                }
            }
        }
        Some(BossAction::Frenzy {
            speed_mult,
            damage_mult,
            duration_ticks,
        }) => {
            if let Ok(state) = world.query_one_mut::<&mut EnemyState>(boss_entity) {
                state.speed *= speed_mult;
                state.damage *= damage_mult;
                out.deferred.push((
                    duration_ticks,
                    DeferredEvent::RevertFrenzy {
                        entity: boss_entity,
                        speed_factor: 1.0 / speed_mult,
                        damage_factor: 1.0 / damage_mult,
                    },
                ));
            }
        }
        Some(BossAction::DamageRings { rings }) => {
            let boss_pos = match world.get::<&Position>(boss_entity) {
                Ok(p) => *p,
                Err(_) => return,
            };
            for ring in &rings {
                out.effects.push((
                    EffectView::BossRing {
                        position: boss_pos,
                        radius: ring.radius,
                    },
                    BOSS_RING_EFFECT_TICKS,
                ));
            }

            let mut victims = vec![commander];
            victims.extend_from_slice(chain);
            for victim in victims {
                let victim_pos = match world.get::<&Position>(victim) {
                    Ok(p) => *p,
                    Err(_) => continue,
                };
                let dist = boss_pos.distance_to(&victim_pos);
                for ring in &rings {
                    if dist <= ring.radius {
                        damage_entity(world, victim, ring.damage, tick, out);
                    }
                }
            }
            out.shake = out.shake.max(6.0);
        }
        None => {}
    }
}
