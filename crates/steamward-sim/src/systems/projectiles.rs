//! Projectile-type attack effects: gears and embers.
//!
//! These live on the engine, not in the ECS: their population is small and
//! they need ordered update-then-collide semantics within a tick.

use glam::DVec2;
use hecs::{Entity, World};

use steamward_core::constants::*;
use steamward_core::types::Position;

use crate::systems::combat_apply::{damage_entity, SideEffects};
use steamward_combat::actions::TargetInfo;

/// A spinning gear projectile from a gear throw.
#[derive(Debug, Clone)]
pub struct Gear {
    pub position: DVec2,
    pub velocity: DVec2,
    pub damage: f64,
    pub spawned_tick: u64,
    pub trail: Vec<Position>,
}

impl Gear {
    pub fn new(origin: Position, velocity: DVec2, damage: f64, tick: u64) -> Self {
        Self {
            position: origin.as_vec(),
            velocity,
            damage,
            spawned_tick: tick,
            trail: Vec::new(),
        }
    }
}

/// A short-lived ember from an ember spray.
#[derive(Debug, Clone)]
pub struct Ember {
    pub position: DVec2,
    pub velocity: DVec2,
    pub damage: f64,
    pub life: f64,
}

impl Ember {
    pub fn new(origin: Position, velocity: DVec2, damage: f64) -> Self {
        Self {
            position: origin.as_vec(),
            velocity,
            damage,
            life: 1.0,
        }
    }
}

/// Advance gears: move, extend the trail, collide, expire.
pub fn run_gears(
    world: &mut World,
    gears: &mut Vec<Gear>,
    enemy_entities: &[Entity],
    enemy_targets: &[TargetInfo],
    tick: u64,
    out: &mut SideEffects,
) {
    gears.retain_mut(|gear| {
        if tick.saturating_sub(gear.spawned_tick) >= GEAR_LIFETIME_TICKS {
            return false;
        }
        gear.position += gear.velocity;
        gear.trail.insert(0, Position::from_vec(gear.position));
        gear.trail.truncate(MAX_TRAIL_POINTS);

        let pos = Position::from_vec(gear.position);
        for (i, target) in enemy_targets.iter().enumerate() {
            if pos.distance_to(&target.position) <= GEAR_RADIUS + target.size {
                damage_entity(world, enemy_entities[i], gear.damage, tick, out);
                out.shake = out.shake.max(2.0);
                return false;
            }
        }
        in_world(&pos)
    });
}

/// Advance embers: move, decay, collide on first contact.
pub fn run_embers(
    world: &mut World,
    embers: &mut Vec<Ember>,
    enemy_entities: &[Entity],
    enemy_targets: &[TargetInfo],
    tick: u64,
    out: &mut SideEffects,
) {
    embers.retain_mut(|ember| {
        ember.position += ember.velocity;
        ember.life -= EMBER_LIFE_DECAY;
        if ember.life <= 0.0 {
            return false;
        }

        let pos = Position::from_vec(ember.position);
        for (i, target) in enemy_targets.iter().enumerate() {
            if pos.distance_to(&target.position) <= EMBER_RADIUS + target.size {
                damage_entity(world, enemy_entities[i], ember.damage, tick, out);
                return false;
            }
        }
        in_world(&pos)
    });
}

fn in_world(pos: &Position) -> bool {
    pos.x >= -50.0 && pos.x <= WORLD_WIDTH + 50.0 && pos.y >= -50.0 && pos.y <= WORLD_HEIGHT + 50.0
}
