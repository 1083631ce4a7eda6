//! Simulation engine — the core of the game.
//!
//! `SimEngine` owns the hecs ECS world, consumes one input snapshot per
//! tick, runs all systems in fixed phase order, and reports notable
//! events. Completely headless, enabling deterministic testing.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use cannonade_agent_ai::schedule::DropCycle;
use cannonade_core::components::EnemyCannon;
use cannonade_core::constants::{ARENA_HEIGHT, ARENA_WIDTH, ENEMY_CANNON_COUNT, WAVE_SIZE};
use cannonade_core::enums::GamePhase;
use cannonade_core::events::GameEvent;
use cannonade_core::input::InputFrame;
use cannonade_core::render::Renderer;
use cannonade_core::state::ScoreBoard;
use cannonade_core::types::{Arena, SimTime};

use crate::systems;
use crate::world_setup::{self, SpawnRequest};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    pub arena: Arena,
    /// Targets per respawned wave.
    pub wave_size: usize,
    /// Autonomous cannons to field.
    pub enemy_cannons: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: Arena::new(ARENA_WIDTH, ARENA_HEIGHT),
            wave_size: WAVE_SIZE,
            enemy_cannons: ENEMY_CANNON_COUNT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimEngine {
    world: World,
    arena: Arena,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    score: ScoreBoard,
    player: Entity,
    wave_size: usize,
    spawn_queue: Vec<SpawnRequest>,
    despawn_buffer: Vec<Entity>,
    drop_cycle: DropCycle<Entity>,
    events: Vec<GameEvent>,
}

impl SimEngine {
    /// Create a new engine: player cannon at the left edge, enemy
    /// cannons at the right. The first wave of targets appears on the
    /// first tick via the wave spawner.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let player = world_setup::spawn_player_cannon(&mut world, config.arena);
        for index in 0..config.enemy_cannons {
            world_setup::spawn_enemy_cannon(&mut world, config.arena, index, config.enemy_cannons);
        }

        Self {
            world,
            arena: config.arena,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            score: ScoreBoard::default(),
            player,
            wave_size: config.wave_size,
            spawn_queue: Vec::new(),
            despawn_buffer: Vec::new(),
            drop_cycle: DropCycle::default(),
            events: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the events it
    /// produced. A no-op once the game is over.
    pub fn tick(&mut self, input: &InputFrame) -> Vec<GameEvent> {
        if self.phase == GamePhase::Active {
            self.run_systems(input);
            self.time.advance();
        }
        std::mem::take(&mut self.events)
    }

    /// Delegate every live entity and the panels to the renderer.
    pub fn render(&self, renderer: &mut dyn Renderer) {
        systems::draw::run(&self.world, self.player, &self.score, self.phase, renderer);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> ScoreBoard {
        self.score
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    /// The player cannon's entity id.
    pub fn player(&self) -> Entity {
        self.player
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for test setups.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Run all phases in order.
    fn run_systems(&mut self, input: &InputFrame) {
        // 1. Decision: input, agent FSM, schedules. Spawns are enqueued.
        systems::cannons::run_player(
            &mut self.world,
            self.player,
            input,
            &mut self.score,
            &mut self.spawn_queue,
        );
        systems::cannons::run_agents(
            &mut self.world,
            &mut self.rng,
            self.player,
            self.time.tick,
            self.score,
            &mut self.spawn_queue,
            &mut self.events,
        );
        systems::bombardier::run(
            &mut self.world,
            &mut self.rng,
            &mut self.drop_cycle,
            self.time.tick,
            &mut self.spawn_queue,
            &mut self.events,
        );
        // 2. Movement; the spawn queue drains at this fixed point so
        // new entities move on the tick they appear.
        self.drain_spawn_queue();
        systems::movement::run(&mut self.world, self.arena);
        // 3. Collision/damage resolution.
        systems::combat::run(&mut self.world, self.player, &mut self.score, &mut self.events);
        // 4. Prune dead entities + ownership cascade.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 5. Wave respawn check.
        systems::wave_spawner::run(
            &mut self.world,
            &mut self.rng,
            self.arena,
            self.player,
            self.score,
            self.wave_size,
            &mut self.events,
        );
        // 6. Drawing happens via `render` between ticks.
        // 7. Game-over detection.
        self.check_game_over();
    }

    fn drain_spawn_queue(&mut self) {
        for request in self.spawn_queue.drain(..) {
            world_setup::apply_request(&mut self.world, &mut self.rng, request);
        }
    }

    /// Dead cannons were pruned this tick, so presence means alive.
    fn check_game_over(&mut self) {
        let phase = if !self.world.contains(self.player) {
            Some(GamePhase::Lost)
        } else {
            let enemies_remain = {
                let mut query = self.world.query::<&EnemyCannon>();
                query.iter().next().is_some()
            };
            (!enemies_remain).then_some(GamePhase::Won)
        };

        if let Some(phase) = phase {
            self.phase = phase;
            self.events.push(GameEvent::GameOver { phase });
            info!(?phase, score = self.score.score(), "game over");
        }
    }
}
