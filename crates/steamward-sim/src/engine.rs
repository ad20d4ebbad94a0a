//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use steamward_core::commands::PlayerCommand;
use steamward_core::components::{Health, MoveDirection};
use steamward_core::constants::{COLLECTION_POOL_CAPACITY, PARTICLE_POOL_CAPACITY};
use steamward_core::enums::GamePhase;
use steamward_core::events::{AudioEvent, Notice};
use steamward_core::state::GameStateSnapshot;
use steamward_core::types::SimTime;

use steamward_combat::specials;
use steamward_terrain::TerrainTile;

use crate::deferred::{DeferredEvent, DeferredQueue};
use crate::pool::ParticlePool;
use crate::systems;
use crate::systems::combat_apply::{self, SideEffects};
use crate::systems::effects::ActiveEffect;
use crate::systems::mines::TemporalMine;
use crate::systems::projectiles::{Ember, Gear};
use crate::systems::spawner::SpawnerState;
use crate::systems::waves::WaveState;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    notices: Vec<Notice>,

    score: i64,
    commander: Option<Entity>,
    /// Follow order: index 0 trails the commander.
    chain: Vec<Entity>,
    boss: Option<Entity>,
    wave: WaveState,
    spawner: SpawnerState,
    deferred: DeferredQueue,

    mines: Vec<TemporalMine>,
    effects: Vec<ActiveEffect>,
    gears: Vec<Gear>,
    embers: Vec<Ember>,
    particles: ParticlePool,
    collections: ParticlePool,
    terrain: Vec<TerrainTile>,

    shake: f64,
    shake_offset: (f64, f64),
    flash: f64,
    critical_latched: bool,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            notices: Vec::new(),
            score: 0,
            commander: None,
            chain: Vec::new(),
            boss: None,
            wave: WaveState::default(),
            spawner: SpawnerState::default(),
            deferred: DeferredQueue::default(),
            mines: Vec::new(),
            effects: Vec::new(),
            gears: Vec::new(),
            embers: Vec::new(),
            particles: ParticlePool::new(PARTICLE_POOL_CAPACITY),
            collections: ParticlePool::new(COLLECTION_POOL_CAPACITY),
            terrain: Vec::new(),
            shake: 0.0,
            shake_offset: (0.0, 0.0),
            flash: 0.0,
            critical_latched: false,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.check_game_over();
            self.time.advance();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(
            &self.world,
            &systems::snapshot::SnapshotInputs {
                time: self.time,
                phase: self.phase,
                score: self.score,
                wave: &self.wave,
                commander: self.commander,
                critical: self.critical_latched,
                chain: &self.chain,
                boss: self.boss,
                mines: &self.mines,
                effects: &self.effects,
                gears: &self.gears,
                embers: &self.embers,
                particles: &self.particles,
                collections: &self.collections,
                terrain: &self.terrain,
                shake: self.shake,
                shake_offset: self.shake_offset,
                flash: self.flash,
                notices: &self.notices,
            },
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get the current score.
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Commander entity, present while a run is live.
    pub fn commander(&self) -> Option<Entity> {
        self.commander
    }

    /// Followers in chain order.
    pub fn chain(&self) -> &[Entity] {
        &self.chain
    }

    /// Live boss entity, if any.
    pub fn boss(&self) -> Option<Entity> {
        self.boss
    }

    /// Current wave state.
    pub fn wave(&self) -> &WaveState {
        &self.wave
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn wave_mut(&mut self) -> &mut WaveState {
        &mut self.wave
    }

    #[cfg(test)]
    pub fn particles(&self) -> &ParticlePool {
        &self.particles
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Title | GamePhase::GameOver) {
                    self.reset_run();
                    self.phase = GamePhase::Active;
                    log::info!("new run started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            PlayerCommand::SetDirection { dx, dy } => {
                if let Some(commander) = self.commander {
                    let length = (dx * dx + dy * dy).sqrt();
                    let (dx, dy) = if length > f64::EPSILON {
                        (dx / length, dy / length)
                    } else {
                        (0.0, 0.0)
                    };
                    if let Ok(dir) = self.world.query_one_mut::<&mut MoveDirection>(commander) {
                        dir.dx = dx;
                        dir.dy = dy;
                    }
                }
            }
            PlayerCommand::SetClassSpawnRate { class, rate } => {
                self.spawner.set_rate(class, rate);
            }
            PlayerCommand::DisableClassSpawn { class } => {
                self.spawner.set_rate(class, 0);
            }
            PlayerCommand::ResetClassSpawnRates => {
                self.spawner.reset_rates();
            }
        }
    }

    /// Wipe all run state and spawn a fresh world.
    fn reset_run(&mut self) {
        self.world = World::new();
        self.time = SimTime::default();
        self.score = 0;
        self.chain.clear();
        self.boss = None;
        self.wave = WaveState::default();
        self.spawner = SpawnerState::default();
        self.deferred.clear();
        self.despawn_buffer.clear();
        self.audio_events.clear();
        self.notices.clear();
        self.mines.clear();
        self.effects.clear();
        self.gears.clear();
        self.embers.clear();
        self.particles.clear();
        self.collections.clear();
        self.shake = 0.0;
        self.shake_offset = (0.0, 0.0);
        self.flash = 0.0;
        self.critical_latched = false;

        self.terrain = steamward_terrain::generate_layout(&mut self.rng);
        self.commander = Some(world_setup::spawn_commander(&mut self.world));
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let Some(commander) = self.commander else {
            return;
        };
        let tick = self.time.tick;
        let mut out = SideEffects::default();

        // 1. Spawning (enemies, group drip, pickups)
        systems::spawner::run(
            &mut self.world,
            &mut self.spawner,
            &self.wave,
            tick,
            &mut self.rng,
            &mut self.notices,
        );
        // 2. Commander (movement, regen, auto sweep, critical latch)
        systems::commander::run(
            &mut self.world,
            commander,
            tick,
            &self.terrain,
            &mut self.rng,
            &mut self.critical_latched,
            &mut self.audio_events,
            &mut self.notices,
            &mut out,
        );
        // 3. Followers (chain trailing, regen, attacks)
        systems::follower::run(
            &mut self.world,
            commander,
            &self.chain,
            tick,
            &self.terrain,
            &mut self.rng,
            &mut self.audio_events,
            &mut self.particles,
            &mut out,
        );
        // 4. Enemies (pursuit, corrosion, boss phase machine)
        systems::enemy::run(
            &mut self.world,
            commander,
            &self.chain,
            self.boss,
            tick,
            &self.terrain,
            &mut self.rng,
            &mut self.audio_events,
            &mut out,
        );
        // 5. Contacts (enemy bumps, pickup collection)
        systems::collision::run(
            &mut self.world,
            commander,
            &mut self.chain,
            &mut self.score,
            tick,
            &mut self.audio_events,
            &mut self.notices,
            &mut self.collections,
            &mut self.despawn_buffer,
            &mut out,
        );
        // 6. Projectiles and mines, against a shared target snapshot
        let (enemy_entities, enemy_targets) = combat_apply::collect_enemy_targets(&self.world);
        systems::projectiles::run_gears(
            &mut self.world,
            &mut self.gears,
            &enemy_entities,
            &enemy_targets,
            tick,
            &mut out,
        );
        systems::projectiles::run_embers(
            &mut self.world,
            &mut self.embers,
            &enemy_entities,
            &enemy_targets,
            tick,
            &mut out,
        );
        systems::mines::run(
            &mut self.world,
            &mut self.mines,
            &enemy_entities,
            &enemy_targets,
            tick,
            &mut out,
        );
        // 7. Deferred events due this tick
        self.poll_deferred(tick, &mut out);
        // 8. Particle pools
        self.particles.update();
        self.collections.update();
        // 9. Deaths (score, wave kills, chain pruning)
        systems::cleanup::run(
            &mut self.world,
            commander,
            &mut self.chain,
            &mut self.boss,
            &mut self.wave,
            &mut self.score,
            tick,
            &mut self.rng,
            &mut self.audio_events,
            &mut self.notices,
            &mut self.particles,
            &mut self.despawn_buffer,
            &mut out,
        );
        // 10. Wave progression (boss gate, completion)
        systems::waves::run(
            &mut self.world,
            &mut self.wave,
            commander,
            &self.chain,
            &mut self.boss,
            &mut self.score,
            tick,
            &mut self.rng,
            &mut self.audio_events,
            &mut self.notices,
        );
        // 11. Despawn flush
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }
        // 12. Absorb side effects collected this tick
        self.absorb(out, tick);
        // 13. Presentation decay (effects, shake, flash, notices)
        systems::effects::run(
            &mut self.effects,
            &mut self.shake,
            &mut self.shake_offset,
            &mut self.flash,
            &mut self.notices,
            tick,
            &mut self.rng,
        );
    }

    /// Fire deferred events that came due. Entity-referencing events are
    /// dropped silently when the entity has despawned since scheduling.
    fn poll_deferred(&mut self, tick: u64, out: &mut SideEffects) {
        use steamward_core::components::EnemyState;

        for event in self.deferred.drain_due(tick) {
            match event {
                DeferredEvent::RevertSlow { entity, factor } => {
                    if let Ok(state) = self.world.query_one_mut::<&mut EnemyState>(entity) {
                        state.speed *= factor;
                    }
                }
                DeferredEvent::RevertFrenzy {
                    entity,
                    speed_factor,
                    damage_factor,
                } => {
                    if let Ok(state) = self.world.query_one_mut::<&mut EnemyState>(entity) {
                        state.speed *= speed_factor;
                        state.damage *= damage_factor;
                    }
                }
                DeferredEvent::ShrapnelBurst { position, damage } => {
                    let (entities, targets) = combat_apply::collect_enemy_targets(&self.world);
                    let actions = specials::shrapnel_burst(position, damage, &targets);
                    combat_apply::apply(&mut self.world, actions, &entities, tick, out);
                }
            }
        }
    }

    /// Fold a tick's accumulated side effects into engine state.
    fn absorb(&mut self, out: SideEffects, tick: u64) {
        for (view, duration_ticks) in out.effects {
            self.effects.push(ActiveEffect {
                view,
                spawned_tick: tick,
                duration_ticks,
            });
        }
        self.gears.extend(out.gears);
        self.embers.extend(out.embers);
        self.mines.extend(out.mines);
        for (delay_ticks, event) in out.deferred {
            self.deferred.schedule(tick, delay_ticks, event);
        }
        self.notices.extend(out.notices);
        self.shake = self.shake.max(out.shake);
        self.flash = self.flash.max(out.flash);
    }

    /// End the run when the commander dies. Fires once per run.
    fn check_game_over(&mut self) {
        let Some(commander) = self.commander else {
            return;
        };
        let dead = self
            .world
            .get::<&Health>(commander)
            .map(|h| h.is_dead())
            .unwrap_or(true);
        if dead && self.phase == GamePhase::Active {
            self.phase = GamePhase::GameOver;
            self.audio_events.push(AudioEvent::GameOver);
            log::info!(
                "run over at tick {} with score {}",
                self.time.tick,
                self.score
            );
        }
    }
}
