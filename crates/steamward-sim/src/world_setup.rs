//! Entity construction: commander, followers, enemies, bosses, pickups.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use steamward_core::classes::{class_spec, enemy_spec, special_cooldown_ticks};
use steamward_core::components::*;
use steamward_core::constants::*;
use steamward_core::enums::{CoreBonus, EnemyKind, SteamClass};
use steamward_core::types::Position;

/// Spawn the commander at the center of the world.
pub fn spawn_commander(world: &mut World) -> Entity {
    world.spawn((
        Commander,
        Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        MoveDirection::default(),
        Health::full(COMMANDER_MAX_HEALTH),
        Regen {
            rate: COMMANDER_REGEN_RATE,
            delay_ticks: COMMANDER_REGEN_DELAY_TICKS,
            last_damage_tick: 0,
        },
        BasicAttack::default(),
        ChainSamples::default(),
    ))
}

/// Spawn a follower of the given class at a position. The caller appends
/// the entity to the chain.
pub fn spawn_follower(world: &mut World, class: SteamClass, position: Position) -> Entity {
    let spec = class_spec(class);
    world.spawn((
        Follower,
        position,
        Health::full(FOLLOWER_MAX_HEALTH),
        Regen {
            rate: FOLLOWER_REGEN_RATE,
            delay_ticks: FOLLOWER_REGEN_DELAY_TICKS,
            last_damage_tick: 0,
        },
        ClassAssignment {
            class,
            style: spec.style,
        },
        CombatStats {
            damage: spec.damage,
            range: spec.range,
            speed: spec.speed,
            upgrades: Upgrades::default(),
        },
        BasicAttack::default(),
        SpecialAttack {
            cooldown_ticks: special_cooldown_ticks(spec.style),
            last_fire_tick: 0,
        },
        ChainSamples::default(),
        Trail::default(),
    ))
}

/// Spawn a regular enemy with level scaling applied.
pub fn spawn_enemy(world: &mut World, kind: EnemyKind, level: u32, position: Position) -> Entity {
    let spec = enemy_spec(kind, false);
    let scale = (level.saturating_sub(1)) as f64;
    world.spawn((
        Enemy,
        position,
        Health::full(spec.health * (1.0 + scale * ENEMY_HEALTH_SCALE_PER_LEVEL)),
        EnemyState {
            kind,
            size: spec.size,
            speed: spec.speed * (1.0 + scale * ENEMY_SPEED_SCALE_PER_LEVEL),
            damage: spec.damage * (1.0 + scale * ENEMY_DAMAGE_SCALE_PER_LEVEL),
            level,
        },
    ))
}

/// Spawn a boss of the given species. Starts in phase one.
pub fn spawn_boss(world: &mut World, kind: EnemyKind, level: u32, position: Position) -> Entity {
    let spec = enemy_spec(kind, true);
    let scale = (level.saturating_sub(1)) as f64;
    world.spawn((
        Enemy,
        Boss,
        position,
        Health::full(spec.health * (1.0 + scale * ENEMY_HEALTH_SCALE_PER_LEVEL)),
        EnemyState {
            kind,
            size: spec.size,
            speed: spec.speed * (1.0 + scale * ENEMY_SPEED_SCALE_PER_LEVEL),
            damage: spec.damage * (1.0 + scale * ENEMY_DAMAGE_SCALE_PER_LEVEL),
            level,
        },
        BossState {
            phase: Default::default(),
            transition_ticks_left: 0,
            last_special_tick: 0,
            special_interval_ticks: BOSS_SPECIAL_INTERVAL_TICKS,
        },
    ))
}

/// A point just outside a random world edge.
pub fn random_edge_position(rng: &mut ChaCha8Rng) -> Position {
    match rng.gen_range(0..4u8) {
        0 => Position::new(rng.gen_range(0.0..WORLD_WIDTH), -ENEMY_SPAWN_MARGIN),
        1 => Position::new(
            rng.gen_range(0.0..WORLD_WIDTH),
            WORLD_HEIGHT + ENEMY_SPAWN_MARGIN,
        ),
        2 => Position::new(-ENEMY_SPAWN_MARGIN, rng.gen_range(0.0..WORLD_HEIGHT)),
        _ => Position::new(
            WORLD_WIDTH + ENEMY_SPAWN_MARGIN,
            rng.gen_range(0.0..WORLD_HEIGHT),
        ),
    }
}

/// A point just outside a random world corner.
pub fn random_corner_position(rng: &mut ChaCha8Rng) -> Position {
    let x = if rng.gen_bool(0.5) {
        -ENEMY_SPAWN_MARGIN
    } else {
        WORLD_WIDTH + ENEMY_SPAWN_MARGIN
    };
    let y = if rng.gen_bool(0.5) {
        -ENEMY_SPAWN_MARGIN
    } else {
        WORLD_HEIGHT + ENEMY_SPAWN_MARGIN
    };
    Position::new(x, y)
}

/// The midpoint of a random world edge, where bosses make their entrance.
pub fn random_edge_midpoint(rng: &mut ChaCha8Rng) -> Position {
    match rng.gen_range(0..4u8) {
        0 => Position::new(WORLD_WIDTH / 2.0, -ENEMY_SPAWN_MARGIN),
        1 => Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT + ENEMY_SPAWN_MARGIN),
        2 => Position::new(-ENEMY_SPAWN_MARGIN, WORLD_HEIGHT / 2.0),
        _ => Position::new(WORLD_WIDTH + ENEMY_SPAWN_MARGIN, WORLD_HEIGHT / 2.0),
    }
}

/// Rejection-sample a pickup position: inside the margin, at least the
/// minimum separation from every live actor and pickup. Returns None after
/// the attempt budget is spent; the caller skips the spawn.
pub fn place_pickup(world: &World, rng: &mut ChaCha8Rng) -> Option<Position> {
    let occupied: Vec<Position> = world
        .query::<&Position>()
        .iter()
        .map(|(_, pos)| *pos)
        .collect();

    for _ in 0..PICKUP_PLACEMENT_ATTEMPTS {
        let candidate = Position::new(
            rng.gen_range(PICKUP_SPAWN_MARGIN..(WORLD_WIDTH - PICKUP_SPAWN_MARGIN)),
            rng.gen_range(PICKUP_SPAWN_MARGIN..(WORLD_HEIGHT - PICKUP_SPAWN_MARGIN)),
        );
        let clear = occupied
            .iter()
            .all(|p| p.distance_to(&candidate) >= PICKUP_MIN_SEPARATION);
        if clear {
            return Some(candidate);
        }
    }
    None
}

/// Spawn an engineer pickup carrying a follower class.
pub fn spawn_engineer(world: &mut World, class: SteamClass, position: Position) -> Entity {
    world.spawn((Pickup, position, PickupPayload::Engineer { class }))
}

/// Spawn a steam core pickup carrying a team-wide bonus.
pub fn spawn_steam_core(world: &mut World, bonus: CoreBonus, position: Position) -> Entity {
    world.spawn((Pickup, position, PickupPayload::SteamCore { bonus }))
}
