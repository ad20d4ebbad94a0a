//! Contact resolution: enemies against the team, and pickup collection.

use hecs::{Entity, World};

use steamward_core::components::{CombatStats, EnemyState, Pickup, PickupPayload};
use steamward_core::constants::*;
use steamward_core::enums::{CoreBonus, NoticeKind};
use steamward_core::events::{AudioEvent, Notice};
use steamward_core::state::EffectView;
use steamward_core::types::Position;

use crate::pool::{Particle, ParticlePool};
use crate::systems::combat_apply::{damage_entity, SideEffects};
use crate::world_setup;

const PICKUP_REJECTED_EFFECT_TICKS: u64 = 30;

/// Per-tick contact pass.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    commander: Entity,
    chain: &mut Vec<Entity>,
    score: &mut i64,
    tick: u64,
    audio: &mut Vec<AudioEvent>,
    notices: &mut Vec<Notice>,
    collections: &mut ParticlePool,
    despawn_buffer: &mut Vec<Entity>,
    out: &mut SideEffects,
) {
    enemy_contacts(world, commander, chain, tick, out);
    pickup_contacts(
        world,
        commander,
        chain,
        score,
        tick,
        audio,
        notices,
        collections,
        despawn_buffer,
        out,
    );
}

/// Enemies bumping the commander or a follower deal contact damage and are
/// shoved back, so a single enemy cannot grind every tick.
fn enemy_contacts(
    world: &mut World,
    commander: Entity,
    chain: &[Entity],
    tick: u64,
    out: &mut SideEffects,
) {
    let enemies: Vec<(Entity, Position, f64, f64)> = world
        .query::<(&Position, &EnemyState)>()
        .iter()
        .map(|(e, (pos, state))| (e, *pos, state.size, state.damage))
        .collect();

    let mut victims = vec![(commander, COMMANDER_RADIUS, COMMANDER_CONTACT_KNOCKBACK)];
    for &follower in chain {
        victims.push((follower, FOLLOWER_RADIUS, FOLLOWER_CONTACT_KNOCKBACK));
    }

    for (victim, radius, knockback) in victims {
        let victim_pos = match world.get::<&Position>(victim) {
            Ok(p) => *p,
            Err(_) => continue,
        };
        for &(enemy, enemy_pos, size, damage) in &enemies {
            if victim_pos.distance_to(&enemy_pos) > radius + size {
                continue;
            }
            damage_entity(world, victim, damage, tick, out);
            let angle = victim_pos.angle_to(&enemy_pos);
            if let Ok(pos) = world.query_one_mut::<&mut Position>(enemy) {
                pos.x = (pos.x + angle.cos() * knockback).clamp(0.0, WORLD_WIDTH);
                pos.y = (pos.y + angle.sin() * knockback).clamp(0.0, WORLD_HEIGHT);
            }
            if victim == commander {
                out.shake = out.shake.max(4.0);
            }
        }
    }
}

/// Commander walking over a pickup collects it.
#[allow(clippy::too_many_arguments)]
fn pickup_contacts(
    world: &mut World,
    commander: Entity,
    chain: &mut Vec<Entity>,
    score: &mut i64,
    tick: u64,
    audio: &mut Vec<AudioEvent>,
    notices: &mut Vec<Notice>,
    collections: &mut ParticlePool,
    despawn_buffer: &mut Vec<Entity>,
    out: &mut SideEffects,
) {
    let commander_pos = match world.get::<&Position>(commander) {
        Ok(p) => *p,
        Err(_) => return,
    };

    let touched: Vec<(Entity, Position, PickupPayload)> = world
        .query::<(&Position, &PickupPayload)>()
        .with::<&Pickup>()
        .iter()
        .filter(|(_, (pos, _))| {
            commander_pos.distance_to(pos) <= COMMANDER_RADIUS + PICKUP_RADIUS
        })
        .map(|(e, (pos, payload))| (e, *pos, *payload))
        .collect();

    for (entity, position, payload) in touched {
        match payload {
            PickupPayload::Engineer { class } => {
                if chain.len() >= MAX_FOLLOWERS {
                    // Team is full. The pickup stays on the field.
                    out.effects.push((
                        EffectView::PickupRejected { position },
                        PICKUP_REJECTED_EFFECT_TICKS,
                    ));
                    notices.push(Notice {
                        kind: NoticeKind::Warning,
                        text: "Team is full".to_string(),
                        position,
                        spawned_tick: tick,
                    });
                    continue;
                }
                let follower = world_setup::spawn_follower(world, class, position);
                chain.push(follower);
                *score += ENGINEER_PICKUP_SCORE;
                audio.push(AudioEvent::PickupCollected);
                spawn_collection_burst(collections, position);
                notices.push(Notice {
                    kind: NoticeKind::Pickup,
                    text: format!("{class:?} joins the chain"),
                    position,
                    spawned_tick: tick,
                });
            }
            PickupPayload::SteamCore { bonus } => {
                apply_core_bonus(world, chain, bonus);
                audio.push(AudioEvent::PickupCollected);
                spawn_collection_burst(collections, position);
                notices.push(Notice {
                    kind: NoticeKind::Upgrade,
                    text: core_bonus_text(bonus).to_string(),
                    position,
                    spawned_tick: tick,
                });
            }
        }
        despawn_buffer.push(entity);
    }
}

/// A steam core upgrades every current follower.
fn apply_core_bonus(world: &mut World, chain: &[Entity], bonus: CoreBonus) {
    for &follower in chain {
        if let Ok(stats) = world.query_one_mut::<&mut CombatStats>(follower) {
            match bonus {
                CoreBonus::Damage => {
                    stats.damage += CORE_DAMAGE_BONUS;
                    stats.upgrades.damage += 1;
                }
                CoreBonus::Range => {
                    stats.range += CORE_RANGE_BONUS;
                    stats.upgrades.range += 1;
                }
                CoreBonus::Speed => {
                    stats.speed += CORE_SPEED_BONUS;
                    stats.upgrades.speed += 1;
                }
            }
        }
    }
}

fn core_bonus_text(bonus: CoreBonus) -> &'static str {
    match bonus {
        CoreBonus::Damage => "Team damage up!",
        CoreBonus::Range => "Team range up!",
        CoreBonus::Speed => "Team speed up!",
    }
}

/// Radial particle burst marking a collection.
fn spawn_collection_burst(collections: &mut ParticlePool, position: Position) {
    for i in 0..8 {
        let angle = std::f64::consts::TAU * i as f64 / 8.0;
        let _ = collections.spawn(Particle {
            position,
            velocity_x: angle.cos() * 1.5,
            velocity_y: angle.sin() * 1.5,
            life: 1.0,
            decay: 0.04,
        });
    }
}
