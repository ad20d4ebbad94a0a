//! Commander system: movement, regeneration, the auto sweep attack, and
//! the critical-health warning latch.

use glam::DVec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use steamward_combat::actions::CasterContext;
use steamward_combat::specials;

use steamward_core::components::{BasicAttack, Health, MoveDirection, Regen};
use steamward_core::constants::*;
use steamward_core::enums::{AttackStyle, NoticeKind};
use steamward_core::events::{AudioEvent, Notice};
use steamward_core::types::Position;

use steamward_terrain::TerrainTile;

use crate::systems::combat_apply::{self, SideEffects};

/// Per-tick commander update.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    commander: Entity,
    tick: u64,
    terrain: &[TerrainTile],
    rng: &mut ChaCha8Rng,
    critical_latched: &mut bool,
    audio: &mut Vec<AudioEvent>,
    notices: &mut Vec<Notice>,
    out: &mut SideEffects,
) {
    let mut facing = DVec2::X;

    // Movement, clamped to world bounds, slowed by terrain.
    if let Ok((pos, dir)) = world.query_one_mut::<(&mut Position, &MoveDirection)>(commander) {
        let v = DVec2::new(dir.dx, dir.dy);
        if v.length_squared() > 0.0 {
            facing = v.normalize();
            let modifier = steamward_terrain::speed_modifier_at(terrain, pos);
            let step = facing * COMMANDER_SPEED * modifier;
            pos.x += step.x;
            pos.y += step.y;
            pos.clamp_to(WORLD_WIDTH, WORLD_HEIGHT);
        }
    }

    // Regeneration after the quiet period.
    if let Ok((health, regen)) = world.query_one_mut::<(&mut Health, &Regen)>(commander) {
        if !health.is_dead()
            && health.current < health.max
            && tick.saturating_sub(regen.last_damage_tick) >= regen.delay_ticks
        {
            health.current = (health.current + regen.rate).min(health.max);
        }
    }

    // Auto sweep attack when an enemy is in range.
    let position = match world.query_one_mut::<&Position>(commander) {
        Ok(pos) => *pos,
        Err(_) => return,
    };
    let last_attack = world
        .query_one_mut::<&BasicAttack>(commander)
        .map(|b| b.last_attack_tick)
        .unwrap_or(0);
    if tick.saturating_sub(last_attack) >= COMMANDER_ATTACK_COOLDOWN_TICKS {
        let (entities, targets) = combat_apply::collect_enemy_targets(world);
        if specials::nearest_in_range(&position, &targets, COMMANDER_ATTACK_RANGE).is_some() {
            let ctx = CasterContext {
                position,
                damage: COMMANDER_ATTACK_DAMAGE,
                range: COMMANDER_ATTACK_RANGE,
                facing,
            };
            let actions = specials::fire(AttackStyle::SwordSweep, &ctx, &targets, rng);
            combat_apply::apply(world, actions, &entities, tick, out);
            audio.push(AudioEvent::CommanderStrike);
            if let Ok(basic) = world.query_one_mut::<&mut BasicAttack>(commander) {
                basic.last_attack_tick = tick;
            }
        }
    }

    // Critical-health warning: fires once on the downward crossing, and
    // re-arms only after health rises back above the threshold.
    if let Ok(health) = world.query_one_mut::<&Health>(commander) {
        let fraction = health.current / health.max;
        if !*critical_latched && fraction <= CRITICAL_HEALTH_FRACTION && fraction > 0.0 {
            *critical_latched = true;
            audio.push(AudioEvent::CriticalHealth);
            out.shake = out.shake.max(6.0);
            out.flash = out.flash.max(0.4);
            notices.push(Notice {
                kind: NoticeKind::Warning,
                text: "COMMANDER CRITICAL".to_string(),
                position,
                spawned_tick: tick,
            });
        } else if *critical_latched && fraction > CRITICAL_HEALTH_FRACTION {
            *critical_latched = false;
        }
    }
}
