//! Applies combat action lists to the ECS world.
//!
//! Combat resolution is pure (steamward-combat); this module is the single
//! place where its actions touch entities. Side effects that belong to the
//! engine rather than an entity — new projectiles, mines, visual effects,
//! deferred events, shake/flash requests — are accumulated in `SideEffects`
//! for the engine to absorb after the apply pass.

use hecs::{Entity, World};

use steamward_combat::actions::{CombatAction, TargetInfo};

use steamward_core::components::{Corrosion, EnemyState, Health, Regen};
use steamward_core::constants::{
    CORROSION_DURATION_TICKS, WORLD_HEIGHT, WORLD_WIDTH,
};
use steamward_core::enums::NoticeKind;
use steamward_core::events::Notice;
use steamward_core::state::EffectView;
use steamward_core::types::Position;

use crate::deferred::DeferredEvent;
use crate::systems::mines::TemporalMine;
use crate::systems::projectiles::{Ember, Gear};

/// Engine-level side effects accumulated while applying actions.
#[derive(Debug, Default)]
pub struct SideEffects {
    pub effects: Vec<(EffectView, u64)>,
    pub gears: Vec<Gear>,
    pub embers: Vec<Ember>,
    pub mines: Vec<TemporalMine>,
    /// (delay_ticks, event) pairs for the deferred queue.
    pub deferred: Vec<(u64, DeferredEvent)>,
    /// Floating notices raised while applying (damage numbers).
    pub notices: Vec<Notice>,
    /// Largest shake intensity requested this pass.
    pub shake: f64,
    /// Largest flash alpha requested this pass.
    pub flash: f64,
}

impl SideEffects {
    pub fn merge(&mut self, other: SideEffects) {
        self.effects.extend(other.effects);
        self.gears.extend(other.gears);
        self.embers.extend(other.embers);
        self.mines.extend(other.mines);
        self.deferred.extend(other.deferred);
        self.notices.extend(other.notices);
        self.shake = self.shake.max(other.shake);
        self.flash = self.flash.max(other.flash);
    }
}

/// Snapshot the current enemies as combat targets. The entity list is
/// parallel to the TargetInfo list; action target indices map through it.
pub fn collect_enemy_targets(world: &World) -> (Vec<Entity>, Vec<TargetInfo>) {
    let mut entities = Vec::new();
    let mut infos = Vec::new();
    for (entity, (pos, state)) in world.query::<(&Position, &EnemyState)>().iter() {
        entities.push(entity);
        infos.push(TargetInfo {
            position: *pos,
            size: state.size,
        });
    }
    (entities, infos)
}

/// Apply a resolved action list against the world.
pub fn apply(
    world: &mut World,
    actions: Vec<CombatAction>,
    targets: &[Entity],
    tick: u64,
    out: &mut SideEffects,
) {
    for action in actions {
        match action {
            CombatAction::Damage { target, amount } => {
                if let Some(&entity) = targets.get(target) {
                    damage_entity(world, entity, amount, tick, out);
                }
            }
            CombatAction::Knockback {
                target,
                angle,
                distance,
            } => {
                if let Some(&entity) = targets.get(target) {
                    if let Ok(pos) = world.query_one_mut::<&mut Position>(entity) {
                        pos.x = (pos.x + angle.cos() * distance).clamp(0.0, WORLD_WIDTH);
                        pos.y = (pos.y + angle.sin() * distance).clamp(0.0, WORLD_HEIGHT);
                    }
                }
            }
            CombatAction::Slow {
                target,
                factor,
                duration_ticks,
            } => {
                if let Some(&entity) = targets.get(target) {
                    if let Ok(state) = world.query_one_mut::<&mut EnemyState>(entity) {
                        state.speed *= factor;
                        out.deferred.push((
                            duration_ticks,
                            DeferredEvent::RevertSlow {
                                entity,
                                factor: 1.0 / factor,
                            },
                        ));
                    }
                }
            }
            CombatAction::Corrode {
                target,
                pulse_damage,
            } => {
                if let Some(&entity) = targets.get(target) {
                    apply_corrosion(world, entity, pulse_damage, tick);
                }
            }
            CombatAction::Effect {
                effect,
                duration_ticks,
            } => {
                out.effects.push((effect, duration_ticks));
            }
            CombatAction::LaunchGear {
                origin,
                velocity,
                damage,
            } => {
                out.gears.push(Gear::new(origin, velocity, damage, tick));
            }
            CombatAction::SpawnEmber {
                origin,
                velocity,
                damage,
            } => {
                out.embers.push(Ember::new(origin, velocity, damage));
            }
            CombatAction::PlaceMine { position, damage } => {
                out.mines.push(TemporalMine::new(position, damage, tick));
            }
            CombatAction::ScheduleShrapnel {
                position,
                damage,
                delay_ticks,
            } => {
                out.deferred.push((
                    delay_ticks,
                    DeferredEvent::ShrapnelBurst { position, damage },
                ));
            }
            CombatAction::Shake { intensity } => {
                out.shake = out.shake.max(intensity);
            }
            CombatAction::Flash { alpha } => {
                out.flash = out.flash.max(alpha);
            }
        }
    }
}

/// Deal damage to any entity with a health pool, clamping at zero and
/// resetting its regen quiet period. Raises a floating damage number at
/// the target's position.
pub fn damage_entity(
    world: &mut World,
    entity: Entity,
    amount: f64,
    tick: u64,
    out: &mut SideEffects,
) {
    let position = world.get::<&Position>(entity).map(|p| *p).ok();
    let Ok(health) = world.query_one_mut::<&mut Health>(entity) else {
        return;
    };
    health.current = (health.current - amount).max(0.0);
    if let Ok(regen) = world.query_one_mut::<&mut Regen>(entity) {
        regen.last_damage_tick = tick;
    }
    if let Some(position) = position {
        out.notices.push(Notice {
            kind: NoticeKind::Damage,
            text: format!("-{}", amount.round() as i64),
            position,
            spawned_tick: tick,
        });
    }
}

/// Heal an entity, clamping at its maximum.
pub fn heal_entity(world: &mut World, entity: Entity, amount: f64) {
    if let Ok(health) = world.query_one_mut::<&mut Health>(entity) {
        health.current = (health.current + amount).min(health.max);
    }
}

/// Apply or refresh corrosion. Reapplication resets the expiry to the full
/// duration; it never stacks a second instance.
fn apply_corrosion(world: &mut World, entity: Entity, pulse_damage: f64, tick: u64) {
    if let Ok(existing) = world.query_one_mut::<&mut Corrosion>(entity) {
        existing.pulse_damage = pulse_damage;
        existing.expires_at_tick = tick + CORROSION_DURATION_TICKS;
        return;
    }
    let _ = world.insert_one(
        entity,
        Corrosion {
            pulse_damage,
            expires_at_tick: tick + CORROSION_DURATION_TICKS,
            last_pulse_tick: tick,
        },
    );
}
