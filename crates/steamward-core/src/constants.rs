//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- World bounds ---

/// World width in pixels.
pub const WORLD_WIDTH: f64 = 2048.0;

/// World height in pixels.
pub const WORLD_HEIGHT: f64 = 1536.0;

// --- Commander ---

/// Commander maximum health.
pub const COMMANDER_MAX_HEALTH: f64 = 500.0;

/// Commander health regeneration per tick.
pub const COMMANDER_REGEN_RATE: f64 = 0.05;

/// Ticks without taking damage before commander regen starts (3 s).
pub const COMMANDER_REGEN_DELAY_TICKS: u64 = 180;

/// Commander movement speed (pixels per tick, before terrain modifier).
pub const COMMANDER_SPEED: f64 = 2.0;

/// Commander sweep attack range.
pub const COMMANDER_ATTACK_RANGE: f64 = 80.0;

/// Commander sweep attack damage.
pub const COMMANDER_ATTACK_DAMAGE: f64 = 3.0;

/// Commander attack cooldown in ticks (800 ms).
pub const COMMANDER_ATTACK_COOLDOWN_TICKS: u64 = 48;

/// Commander collision radius.
pub const COMMANDER_RADIUS: f64 = 20.0;

/// Health fraction below which the one-shot critical warning fires.
pub const CRITICAL_HEALTH_FRACTION: f64 = 0.25;

// --- Followers ---

/// Maximum team size. Engineer pickups beyond this are rejected.
pub const MAX_FOLLOWERS: usize = 12;

/// Follower maximum health.
pub const FOLLOWER_MAX_HEALTH: f64 = 50.0;

/// Follower health regeneration per tick.
pub const FOLLOWER_REGEN_RATE: f64 = 0.02;

/// Ticks without taking damage before follower regen starts (5 s).
pub const FOLLOWER_REGEN_DELAY_TICKS: u64 = 300;

/// Follower basic attack cooldown in ticks (1 s).
pub const FOLLOWER_BASIC_COOLDOWN_TICKS: u64 = 60;

/// Default special attack cooldown in ticks (5 s).
pub const SPECIAL_COOLDOWN_TICKS: u64 = 300;

/// Sword sweep special cooldown (2 s).
pub const SWORD_SWEEP_COOLDOWN_TICKS: u64 = 120;

/// Aether beam special cooldown (1.5 s).
pub const AETHER_BEAM_COOLDOWN_TICKS: u64 = 90;

/// Follower collision radius.
pub const FOLLOWER_RADIUS: f64 = 14.0;

/// Chain position sampling interval in ticks.
pub const CHAIN_SAMPLE_INTERVAL_TICKS: u64 = 3;

/// Maximum samples kept per chain link.
pub const CHAIN_SAMPLE_CAP: usize = 60;

/// How many samples back a follower trails its predecessor.
pub const CHAIN_FOLLOW_DELAY: usize = 5;

/// Score penalty when a follower dies.
pub const FOLLOWER_DEATH_PENALTY: i64 = 50;

// --- Special attack tuning ---

/// Sword sweep arc half-width (radians): enemies within 90 degrees of the
/// sweep direction are hit.
pub const SWORD_SWEEP_HALF_ARC: f64 = std::f64::consts::FRAC_PI_2;

/// Sword sweep knockback distance.
pub const SWORD_SWEEP_KNOCKBACK: f64 = 20.0;

/// Time burst range multiplier.
pub const TIME_BURST_RANGE_FACTOR: f64 = 1.5;

/// Time burst slow factor applied to enemy speed.
pub const TIME_BURST_SLOW_FACTOR: f64 = 0.5;

/// Ticks until a time burst slow reverts (3 s).
pub const TIME_BURST_DURATION_TICKS: u64 = 180;

/// Chain lightning maximum strikes per cast.
pub const CHAIN_LIGHTNING_JUMPS: usize = 5;

/// Chain lightning base damage multiplier.
pub const CHAIN_LIGHTNING_DAMAGE_FACTOR: f64 = 1.2;

/// Chain lightning secondary search range multiplier.
pub const CHAIN_LIGHTNING_ARC_RANGE_FACTOR: f64 = 1.5;

/// Pressure blast radius.
pub const PRESSURE_BLAST_RADIUS: f64 = 100.0;

/// Pressure blast maximum knockback at zero distance.
pub const PRESSURE_BLAST_KNOCKBACK: f64 = 50.0;

/// Gear projectile speed (pixels per tick).
pub const GEAR_SPEED: f64 = 6.0;

/// Gear projectile damage multiplier.
pub const GEAR_DAMAGE_FACTOR: f64 = 2.0;

/// Gear projectile collision radius.
pub const GEAR_RADIUS: f64 = 8.0;

/// Gear projectile lifetime in ticks.
pub const GEAR_LIFETIME_TICKS: u64 = 90;

/// Shrapnel fragment count per cast.
pub const SHRAPNEL_COUNT: usize = 18;

/// Shrapnel ring radius as a fraction of attack range.
pub const SHRAPNEL_RING_FACTOR: f64 = 0.8;

/// Ticks between staggered shrapnel bursts.
pub const SHRAPNEL_STAGGER_TICKS: u64 = 2;

/// Shrapnel burst damage radius.
pub const SHRAPNEL_BURST_RADIUS: f64 = 20.0;

/// Aether beam cone half-width (radians).
pub const AETHER_BEAM_HALF_CONE: f64 = std::f64::consts::PI / 8.0;

/// Aether beam damage multiplier.
pub const AETHER_BEAM_DAMAGE_FACTOR: f64 = 1.5;

/// Ember count per spray.
pub const EMBER_COUNT: usize = 8;

/// Ember spray total spread (radians).
pub const EMBER_SPREAD: f64 = std::f64::consts::FRAC_PI_4;

/// Ember speed (pixels per tick).
pub const EMBER_SPEED: f64 = 4.0;

/// Ember collision radius.
pub const EMBER_RADIUS: f64 = 5.0;

/// Ember life decay per tick (life starts at 1.0).
pub const EMBER_LIFE_DECAY: f64 = 0.01;

/// Piston punch range as a fraction of attack range.
pub const PISTON_PUNCH_RANGE_FACTOR: f64 = 0.6;

/// Piston punch damage multiplier.
pub const PISTON_PUNCH_DAMAGE_FACTOR: f64 = 1.2;

/// Piston punch knockback distance.
pub const PISTON_PUNCH_KNOCKBACK: f64 = 30.0;

/// Temporal mine fuse in ticks (2 s).
pub const MINE_FUSE_TICKS: u64 = 120;

/// Temporal mine blast radius.
pub const MINE_RADIUS: f64 = 80.0;

/// Temporal mine damage multiplier.
pub const MINE_DAMAGE_FACTOR: f64 = 2.0;

/// Corrosion cloud range as a fraction of attack range.
pub const CORROSION_RANGE_FACTOR: f64 = 0.7;

/// Corrosion cloud immediate damage multiplier.
pub const CORROSION_INITIAL_DAMAGE_FACTOR: f64 = 0.5;

/// Corrosion damage-over-time multiplier per pulse.
pub const CORROSION_TICK_DAMAGE_FACTOR: f64 = 0.2;

/// Ticks between corrosion pulses (1 s).
pub const CORROSION_PULSE_INTERVAL_TICKS: u64 = 60;

/// Corrosion total duration in ticks (3 s). Reapplication refreshes this.
pub const CORROSION_DURATION_TICKS: u64 = 180;

// --- Enemies ---

/// Per-level enemy health scaling increment.
pub const ENEMY_HEALTH_SCALE_PER_LEVEL: f64 = 0.2;

/// Per-level enemy damage scaling increment.
pub const ENEMY_DAMAGE_SCALE_PER_LEVEL: f64 = 0.1;

/// Per-level enemy speed scaling increment.
pub const ENEMY_SPEED_SCALE_PER_LEVEL: f64 = 0.05;

/// Knockback applied to an enemy colliding with the commander.
pub const COMMANDER_CONTACT_KNOCKBACK: f64 = 30.0;

/// Knockback applied to an enemy colliding with a follower.
pub const FOLLOWER_CONTACT_KNOCKBACK: f64 = 20.0;

// --- Bosses ---

/// Health fraction that triggers the phase 2 transition.
pub const BOSS_PHASE_2_THRESHOLD: f64 = 0.7;

/// Health fraction that triggers the phase 3 transition.
pub const BOSS_PHASE_3_THRESHOLD: f64 = 0.3;

/// Boss phase transition pulse duration in ticks (1 s).
pub const BOSS_TRANSITION_TICKS: u64 = 60;

/// Base interval between boss special attacks in ticks (3 s).
pub const BOSS_SPECIAL_INTERVAL_TICKS: u64 = 180;

/// Fraction of the wave kill quota at which the boss spawns.
pub const BOSS_SPAWN_QUOTA_FRACTION: f64 = 0.75;

// --- Spawning ---

/// Enemy spawn gate: base ticks between bursts at level 1 (5 s).
pub const ENEMY_SPAWN_BASE_TICKS: u64 = 300;

/// Enemy spawn gate: reduction per level in ticks.
pub const ENEMY_SPAWN_STEP_TICKS: u64 = 30;

/// Enemy spawn gate floor in ticks (1 s).
pub const ENEMY_SPAWN_MIN_TICKS: u64 = 60;

/// Maximum enemies per spawn burst.
pub const ENEMY_BURST_CAP: u32 = 5;

/// Distance outside the world edge at which enemies spawn.
pub const ENEMY_SPAWN_MARGIN: f64 = 20.0;

/// Spacing between members of a group spawn formation.
pub const GROUP_SPAWN_SPACING: f64 = 40.0;

/// Engineer pickup spawn interval in ticks (10 s).
pub const ENGINEER_SPAWN_INTERVAL_TICKS: u64 = 600;

/// Steam core pickup spawn interval in ticks (~16.7 s).
pub const STEAM_CORE_SPAWN_INTERVAL_TICKS: u64 = 1000;

/// Margin from world edges for pickup placement.
pub const PICKUP_SPAWN_MARGIN: f64 = 40.0;

/// Minimum separation between a new pickup and any live actor or pickup.
pub const PICKUP_MIN_SEPARATION: f64 = 100.0;

/// Maximum placement attempts before a pickup spawn is skipped.
pub const PICKUP_PLACEMENT_ATTEMPTS: u32 = 50;

/// Pickup collection radius.
pub const PICKUP_RADIUS: f64 = 18.0;

/// Default relative weight for each class in the engineer spawn table.
pub const DEFAULT_CLASS_SPAWN_RATE: u32 = 100;

/// Score for collecting an engineer.
pub const ENGINEER_PICKUP_SCORE: i64 = 100;

/// Steam core damage bonus per collection.
pub const CORE_DAMAGE_BONUS: f64 = 1.0;

/// Steam core range bonus per collection.
pub const CORE_RANGE_BONUS: f64 = 20.0;

/// Steam core speed bonus per collection.
pub const CORE_SPEED_BONUS: f64 = 0.5;

// --- Waves ---

/// Kill quota for the first wave.
pub const WAVE_1_QUOTA: u32 = 10;

/// Kill quota for the second wave. Doubles every wave after.
pub const WAVE_2_QUOTA: u32 = 20;

/// Wave spawn-interval stat: base ticks at level 1 (2 s).
pub const WAVE_SPAWN_INTERVAL_BASE_TICKS: u64 = 120;

/// Wave spawn-interval stat: reduction per level in ticks.
pub const WAVE_SPAWN_INTERVAL_STEP_TICKS: u64 = 12;

/// Wave spawn-interval stat floor in ticks (0.5 s).
pub const WAVE_SPAWN_INTERVAL_MIN_TICKS: u64 = 30;

/// Score per completed wave, multiplied by level.
pub const WAVE_COMPLETE_SCORE_PER_LEVEL: i64 = 500;

/// Score per defeated boss, multiplied by level.
pub const BOSS_DEFEAT_SCORE_PER_LEVEL: i64 = 1000;

/// Commander heal on wave completion.
pub const WAVE_COMPLETE_COMMANDER_HEAL: f64 = 20.0;

/// Follower heal on wave completion.
pub const WAVE_COMPLETE_FOLLOWER_HEAL: f64 = 10.0;

/// Commander heal on boss defeat.
pub const BOSS_DEFEAT_COMMANDER_HEAL: f64 = 30.0;

/// Follower heal on boss defeat.
pub const BOSS_DEFEAT_FOLLOWER_HEAL: f64 = 20.0;

// --- Terrain ---

/// Speed modifier on grass.
pub const TERRAIN_GRASS_MODIFIER: f64 = 1.0;

/// Speed modifier in bushes.
pub const TERRAIN_BUSH_MODIFIER: f64 = 0.8;

/// Speed modifier in forest.
pub const TERRAIN_FOREST_MODIFIER: f64 = 0.5;

/// Terrain patch counts generated at game start.
pub const TERRAIN_GRASS_PATCHES: usize = 20;
pub const TERRAIN_BUSH_PATCHES: usize = 10;
pub const TERRAIN_FOREST_PATCHES: usize = 3;

// --- Feedback ---

/// Screen shake intensity decay per tick.
pub const SHAKE_DECAY: f64 = 0.9;

/// Screen flash alpha decay per tick.
pub const FLASH_DECAY: f64 = 0.9;

/// Notification lifetime in ticks.
pub const NOTICE_LIFETIME_TICKS: u64 = 90;

// --- Pools ---

/// Particle pool capacity.
pub const PARTICLE_POOL_CAPACITY: usize = 1000;

/// Collection-effect pool capacity.
pub const COLLECTION_POOL_CAPACITY: usize = 100;

// --- Display ---

/// Maximum trail positions kept per follower.
pub const MAX_TRAIL_POINTS: usize = 12;

/// Trail point interval in ticks.
pub const TRAIL_POINT_INTERVAL: u64 = 3;
