//! Special attack resolution.
//!
//! Each style is a pure function from the caster's situation to a list of
//! combat actions. Range checks are inclusive: a target at exactly attack
//! range is in range. Area checks extend by the target's collision size.

use glam::DVec2;
use rand::Rng;

use steamward_core::constants::*;
use steamward_core::enums::AttackStyle;
use steamward_core::state::EffectView;
use steamward_core::types::{angle_diff, Position};

use crate::actions::{CasterContext, CombatAction, TargetInfo};

// Visual effect lifetimes (ticks).
const SWEEP_EFFECT_TICKS: u64 = 18;
const HIT_EFFECT_TICKS: u64 = 12;
const BURST_EFFECT_TICKS: u64 = 30;
const BOLT_EFFECT_TICKS: u64 = 15;
const BLAST_EFFECT_TICKS: u64 = 20;
const LAUNCH_EFFECT_TICKS: u64 = 10;
const BEAM_EFFECT_TICKS: u64 = 12;
const CLOUD_EFFECT_TICKS: u64 = 45;

/// Resolve one special attack cast.
pub fn fire(
    style: AttackStyle,
    ctx: &CasterContext,
    targets: &[TargetInfo],
    rng: &mut impl Rng,
) -> Vec<CombatAction> {
    match style {
        AttackStyle::SwordSweep => sword_sweep(ctx, targets),
        AttackStyle::TimeBurst => time_burst(ctx, targets),
        AttackStyle::ChainLightning => chain_lightning(ctx, targets, rng),
        AttackStyle::PressureBlast => pressure_blast(ctx, targets),
        AttackStyle::GearThrow => gear_throw(ctx, targets),
        AttackStyle::ShrapnelField => shrapnel_field(ctx, rng),
        AttackStyle::AetherBeam => aether_beam(ctx, targets),
        AttackStyle::EmberSpray => ember_spray(ctx, targets),
        AttackStyle::PistonPunch => piston_punch(ctx, targets),
        AttackStyle::TemporalMine => temporal_mine(ctx),
        AttackStyle::CorrosionCloud => corrosion_cloud(ctx, targets),
    }
}

/// Inclusive range check against a sized target.
pub fn in_range(caster: &Position, target: &TargetInfo, range: f64) -> bool {
    caster.distance_to(&target.position) <= range + target.size
}

/// Index of the nearest target within range, if any.
pub fn nearest_in_range(caster: &Position, targets: &[TargetInfo], range: f64) -> Option<usize> {
    targets
        .iter()
        .enumerate()
        .filter(|&(_, t)| in_range(caster, t, range))
        .min_by(|(_, a), (_, b)| {
            let da = caster.distance_to(&a.position);
            let db = caster.distance_to(&b.position);
            da.total_cmp(&db)
        })
        .map(|(i, _)| i)
}

/// Chain lightning damage falloff by strike order (0-based).
pub fn chain_falloff(strike_index: usize) -> f64 {
    match strike_index {
        0 => 1.0,
        1 => 0.8,
        _ => 0.6,
    }
}

/// Aim direction: toward the nearest in-range target, or the caster's facing.
fn aim(ctx: &CasterContext, targets: &[TargetInfo]) -> (Option<usize>, f64) {
    match nearest_in_range(&ctx.position, targets, ctx.range) {
        Some(i) => (Some(i), ctx.position.angle_to(&targets[i].position)),
        None => (None, ctx.facing.y.atan2(ctx.facing.x)),
    }
}

fn sword_sweep(ctx: &CasterContext, targets: &[TargetInfo]) -> Vec<CombatAction> {
    let (nearest, sweep_angle) = aim(ctx, targets);
    let mut actions = vec![CombatAction::Effect {
        effect: EffectView::SwordSweep {
            position: ctx.position,
            angle: sweep_angle,
            range: ctx.range,
        },
        duration_ticks: SWEEP_EFFECT_TICKS,
    }];
    if nearest.is_none() {
        return actions;
    }

    for (i, t) in targets.iter().enumerate() {
        if !in_range(&ctx.position, t, ctx.range) {
            continue;
        }
        let to_target = ctx.position.angle_to(&t.position);
        if angle_diff(to_target, sweep_angle).abs() > SWORD_SWEEP_HALF_ARC {
            continue;
        }
        actions.push(CombatAction::Damage {
            target: i,
            amount: ctx.damage,
        });
        actions.push(CombatAction::Knockback {
            target: i,
            angle: to_target,
            distance: SWORD_SWEEP_KNOCKBACK,
        });
        actions.push(CombatAction::Effect {
            effect: EffectView::SwordHit {
                position: t.position,
            },
            duration_ticks: HIT_EFFECT_TICKS,
        });
    }
    actions
}

fn time_burst(ctx: &CasterContext, targets: &[TargetInfo]) -> Vec<CombatAction> {
    let radius = ctx.range * TIME_BURST_RANGE_FACTOR;
    let mut actions = Vec::new();
    let mut any = false;

    for (i, t) in targets.iter().enumerate() {
        if !in_range(&ctx.position, t, radius) {
            continue;
        }
        any = true;
        actions.push(CombatAction::Slow {
            target: i,
            factor: TIME_BURST_SLOW_FACTOR,
            duration_ticks: TIME_BURST_DURATION_TICKS,
        });
        actions.push(CombatAction::Effect {
            effect: EffectView::TimeBurst {
                position: t.position,
                radius: t.size + 10.0,
            },
            duration_ticks: BURST_EFFECT_TICKS,
        });
    }

    if any {
        actions.push(CombatAction::Effect {
            effect: EffectView::TimeBurst {
                position: ctx.position,
                radius,
            },
            duration_ticks: BURST_EFFECT_TICKS,
        });
        actions.push(CombatAction::Flash { alpha: 0.3 });
        actions.push(CombatAction::Shake { intensity: 3.0 });
    }
    actions
}

fn chain_lightning(
    ctx: &CasterContext,
    targets: &[TargetInfo],
    rng: &mut impl Rng,
) -> Vec<CombatAction> {
    let base_damage = ctx.damage * CHAIN_LIGHTNING_DAMAGE_FACTOR;

    // Primary candidates: in range of the caster, nearest first.
    let mut primary: Vec<usize> = targets
        .iter()
        .enumerate()
        .filter(|&(_, t)| in_range(&ctx.position, t, ctx.range))
        .map(|(i, _)| i)
        .collect();
    primary.sort_by(|&a, &b| {
        ctx.position
            .distance_to(&targets[a].position)
            .total_cmp(&ctx.position.distance_to(&targets[b].position))
    });

    let mut struck: Vec<usize> = Vec::new();
    let mut actions = Vec::new();
    let mut last_pos = ctx.position;

    for &i in &primary {
        if struck.len() >= CHAIN_LIGHTNING_JUMPS {
            break;
        }
        strike(targets, i, base_damage, &mut struck, &mut actions, &mut last_pos, rng);
    }

    // Remaining jumps arc out to targets beyond caster range, nearest to the
    // last struck target first. No target is struck twice per cast.
    if struck.len() < CHAIN_LIGHTNING_JUMPS {
        let arc_range = ctx.range * CHAIN_LIGHTNING_ARC_RANGE_FACTOR;
        let mut secondary: Vec<usize> = targets
            .iter()
            .enumerate()
            .filter(|&(i, t)| !struck.contains(&i) && in_range(&last_pos, t, arc_range))
            .map(|(i, _)| i)
            .collect();
        secondary.sort_by(|&a, &b| {
            last_pos
                .distance_to(&targets[a].position)
                .total_cmp(&last_pos.distance_to(&targets[b].position))
        });
        for i in secondary {
            if struck.len() >= CHAIN_LIGHTNING_JUMPS {
                break;
            }
            strike(targets, i, base_damage, &mut struck, &mut actions, &mut last_pos, rng);
        }
    }

    actions
}

#[allow(clippy::too_many_arguments)]
fn strike(
    targets: &[TargetInfo],
    index: usize,
    base_damage: f64,
    struck: &mut Vec<usize>,
    actions: &mut Vec<CombatAction>,
    last_pos: &mut Position,
    rng: &mut impl Rng,
) {
    let amount = base_damage * chain_falloff(struck.len());
    actions.push(CombatAction::Damage {
        target: index,
        amount,
    });
    actions.push(CombatAction::Effect {
        effect: EffectView::ChainBolt {
            points: bolt_points(last_pos, &targets[index].position, rng),
        },
        duration_ticks: BOLT_EFFECT_TICKS,
    });
    actions.push(CombatAction::Shake { intensity: 2.0 });
    *last_pos = targets[index].position;
    struck.push(index);
}

/// Jagged bolt path between two points: endpoints plus jittered midpoints.
fn bolt_points(from: &Position, to: &Position, rng: &mut impl Rng) -> Vec<Position> {
    let a = from.as_vec();
    let b = to.as_vec();
    let along = b - a;
    let perp = DVec2::new(-along.y, along.x).normalize_or_zero();

    let mut points = vec![*from];
    for step in 1..4 {
        let t = step as f64 / 4.0;
        let jitter = rng.gen_range(-12.0..12.0);
        points.push(Position::from_vec(a + along * t + perp * jitter));
    }
    points.push(*to);
    points
}

fn pressure_blast(ctx: &CasterContext, targets: &[TargetInfo]) -> Vec<CombatAction> {
    let mut actions = vec![CombatAction::Effect {
        effect: EffectView::PressureBlast {
            position: ctx.position,
            radius: PRESSURE_BLAST_RADIUS,
        },
        duration_ticks: BLAST_EFFECT_TICKS,
    }];

    for (i, t) in targets.iter().enumerate() {
        let dist = ctx.position.distance_to(&t.position);
        if dist > PRESSURE_BLAST_RADIUS + t.size {
            continue;
        }
        let effective = dist.min(PRESSURE_BLAST_RADIUS);
        let push = (PRESSURE_BLAST_RADIUS - effective) / PRESSURE_BLAST_RADIUS
            * PRESSURE_BLAST_KNOCKBACK;
        actions.push(CombatAction::Damage {
            target: i,
            amount: ctx.damage,
        });
        actions.push(CombatAction::Knockback {
            target: i,
            angle: ctx.position.angle_to(&t.position),
            distance: push,
        });
    }
    actions.push(CombatAction::Shake { intensity: 4.0 });
    actions
}

fn gear_throw(ctx: &CasterContext, targets: &[TargetInfo]) -> Vec<CombatAction> {
    let (_, angle) = aim(ctx, targets);
    let velocity = DVec2::from_angle(angle) * GEAR_SPEED;
    vec![
        CombatAction::LaunchGear {
            origin: ctx.position,
            velocity,
            damage: ctx.damage * GEAR_DAMAGE_FACTOR,
        },
        CombatAction::Effect {
            effect: EffectView::GearLaunch {
                position: ctx.position,
            },
            duration_ticks: LAUNCH_EFFECT_TICKS,
        },
    ]
}

fn shrapnel_field(ctx: &CasterContext, rng: &mut impl Rng) -> Vec<CombatAction> {
    let ring = ctx.range * SHRAPNEL_RING_FACTOR;
    let mut actions = vec![
        CombatAction::Effect {
            effect: EffectView::ShrapnelCast {
                position: ctx.position,
                radius: ring,
            },
            duration_ticks: BLAST_EFFECT_TICKS,
        },
        CombatAction::Shake { intensity: 3.0 },
    ];

    for i in 0..SHRAPNEL_COUNT {
        let angle = i as f64 / SHRAPNEL_COUNT as f64 * std::f64::consts::TAU
            + rng.gen_range(-0.1..0.1);
        let offset = DVec2::from_angle(angle) * ring;
        actions.push(CombatAction::ScheduleShrapnel {
            position: Position::from_vec(ctx.position.as_vec() + offset),
            damage: ctx.damage * 0.5,
            delay_ticks: i as u64 * SHRAPNEL_STAGGER_TICKS,
        });
    }
    actions
}

/// Resolve one staggered shrapnel burst when its delay elapses.
pub fn shrapnel_burst(
    position: Position,
    damage: f64,
    targets: &[TargetInfo],
) -> Vec<CombatAction> {
    let mut actions = vec![CombatAction::Effect {
        effect: EffectView::ShrapnelBurst { position },
        duration_ticks: HIT_EFFECT_TICKS,
    }];
    for (i, t) in targets.iter().enumerate() {
        if position.distance_to(&t.position) <= SHRAPNEL_BURST_RADIUS + t.size {
            actions.push(CombatAction::Damage {
                target: i,
                amount: damage,
            });
        }
    }
    actions
}

fn aether_beam(ctx: &CasterContext, targets: &[TargetInfo]) -> Vec<CombatAction> {
    let (_, beam_angle) = aim(ctx, targets);
    let mut actions = vec![CombatAction::Effect {
        effect: EffectView::AetherBeam {
            position: ctx.position,
            angle: beam_angle,
            range: ctx.range,
        },
        duration_ticks: BEAM_EFFECT_TICKS,
    }];

    for (i, t) in targets.iter().enumerate() {
        if !in_range(&ctx.position, t, ctx.range) {
            continue;
        }
        let to_target = ctx.position.angle_to(&t.position);
        if angle_diff(to_target, beam_angle).abs() > AETHER_BEAM_HALF_CONE {
            continue;
        }
        actions.push(CombatAction::Damage {
            target: i,
            amount: ctx.damage * AETHER_BEAM_DAMAGE_FACTOR,
        });
    }
    actions
}

fn ember_spray(ctx: &CasterContext, targets: &[TargetInfo]) -> Vec<CombatAction> {
    let (_, center) = aim(ctx, targets);
    let mut actions = Vec::with_capacity(EMBER_COUNT);
    for i in 0..EMBER_COUNT {
        let frac = if EMBER_COUNT > 1 {
            i as f64 / (EMBER_COUNT - 1) as f64 - 0.5
        } else {
            0.0
        };
        let angle = center + frac * EMBER_SPREAD;
        actions.push(CombatAction::SpawnEmber {
            origin: ctx.position,
            velocity: DVec2::from_angle(angle) * EMBER_SPEED,
            damage: ctx.damage * 0.5,
        });
    }
    actions
}

fn piston_punch(ctx: &CasterContext, targets: &[TargetInfo]) -> Vec<CombatAction> {
    let reach = ctx.range * PISTON_PUNCH_RANGE_FACTOR;
    let (nearest, punch_angle) = aim(ctx, targets);
    let mut actions = Vec::new();

    if nearest.is_some() {
        actions.push(CombatAction::Effect {
            effect: EffectView::PistonPunch {
                position: ctx.position,
                angle: punch_angle,
            },
            duration_ticks: BEAM_EFFECT_TICKS,
        });
    }

    for (i, t) in targets.iter().enumerate() {
        if !in_range(&ctx.position, t, reach) {
            continue;
        }
        actions.push(CombatAction::Damage {
            target: i,
            amount: ctx.damage * PISTON_PUNCH_DAMAGE_FACTOR,
        });
        actions.push(CombatAction::Knockback {
            target: i,
            angle: ctx.position.angle_to(&t.position),
            distance: PISTON_PUNCH_KNOCKBACK,
        });
        actions.push(CombatAction::Effect {
            effect: EffectView::PistonHit {
                position: t.position,
            },
            duration_ticks: HIT_EFFECT_TICKS,
        });
    }
    actions
}

fn temporal_mine(ctx: &CasterContext) -> Vec<CombatAction> {
    vec![CombatAction::PlaceMine {
        position: ctx.position,
        damage: ctx.damage * MINE_DAMAGE_FACTOR,
    }]
}

/// Resolve a mine detonation: linear damage falloff with distance.
pub fn mine_detonation(
    position: Position,
    damage: f64,
    targets: &[TargetInfo],
) -> Vec<CombatAction> {
    let mut actions = vec![
        CombatAction::Effect {
            effect: EffectView::MineBlast {
                position,
                radius: MINE_RADIUS,
            },
            duration_ticks: BLAST_EFFECT_TICKS,
        },
        CombatAction::Shake { intensity: 5.0 },
    ];
    for (i, t) in targets.iter().enumerate() {
        let dist = position.distance_to(&t.position);
        if dist > MINE_RADIUS + t.size {
            continue;
        }
        let falloff = 1.0 - (dist / MINE_RADIUS).min(1.0);
        actions.push(CombatAction::Damage {
            target: i,
            amount: damage * falloff,
        });
    }
    actions
}

fn corrosion_cloud(ctx: &CasterContext, targets: &[TargetInfo]) -> Vec<CombatAction> {
    let radius = ctx.range * CORROSION_RANGE_FACTOR;
    let mut actions = vec![CombatAction::Effect {
        effect: EffectView::CorrosionCloud {
            position: ctx.position,
            radius,
        },
        duration_ticks: CLOUD_EFFECT_TICKS,
    }];

    for (i, t) in targets.iter().enumerate() {
        if !in_range(&ctx.position, t, radius) {
            continue;
        }
        actions.push(CombatAction::Damage {
            target: i,
            amount: ctx.damage * CORROSION_INITIAL_DAMAGE_FACTOR,
        });
        actions.push(CombatAction::Corrode {
            target: i,
            pulse_damage: ctx.damage * CORROSION_TICK_DAMAGE_FACTOR,
        });
    }
    actions
}
