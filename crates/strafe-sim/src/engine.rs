//! Simulation engine: the core of the game.
//!
//! `FlightEngine` owns the hecs world (the entity pools), the round state,
//! the player frame and the render scene. It applies queued player commands,
//! runs all systems once per frame and produces `FrameSnapshot`s. It is
//! completely headless, enabling deterministic testing.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strafe_core::commands::PlayerCommand;
use strafe_core::components::{Debris, Enemy, Projectile};
use strafe_core::config::FlightConfig;
use strafe_core::constants::{FRAME_DT_FALLBACK, FRAME_DT_MAX};
use strafe_core::enums::RoundPhase;
use strafe_core::events::GameEvent;
use strafe_core::input::InputState;
use strafe_core::state::FrameSnapshot;
use strafe_core::types::{PlayerFrame, SimTime};

use crate::round::RoundState;
use crate::scene::{HeadlessScene, RenderScene};
use crate::systems;
use crate::world_setup;

/// Configuration for a new engine.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Gameplay tuning.
    pub flight: FlightConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            flight: FlightConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all round state.
pub struct FlightEngine<S: RenderScene = HeadlessScene> {
    world: World,
    scene: S,
    config: FlightConfig,
    rng: ChaCha8Rng,
    time: SimTime,
    phase: RoundPhase,
    round: RoundState,
    player: PlayerFrame,
    world_offset: DVec3,
    input: InputState,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
    last_timestamp_ms: Option<f64>,
}

impl FlightEngine<HeadlessScene> {
    /// Create an engine that renders into an in-memory scene.
    pub fn new(config: SimConfig) -> Self {
        Self::with_scene(config, HeadlessScene::new())
    }
}

impl<S: RenderScene> FlightEngine<S> {
    /// Create an engine driving the given scene. The round starts seeded and idle.
    pub fn with_scene(config: SimConfig, scene: S) -> Self {
        let round = RoundState::new(&config.flight);
        let mut engine = Self {
            world: World::new(),
            scene,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config: config.flight,
            time: SimTime::default(),
            phase: RoundPhase::default(),
            round,
            player: PlayerFrame::default(),
            world_offset: DVec3::ZERO,
            input: InputState::new(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            last_timestamp_ms: None,
        };
        engine.reset_round();
        engine
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Run one display frame stamped `timestamp_ms` and return the snapshot.
    ///
    /// The step length is derived from the previous frame's timestamp and
    /// clamped; see [`frame_dt`].
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameSnapshot {
        self.process_commands();
        let dt = frame_dt(self.last_timestamp_ms, timestamp_ms);
        self.last_timestamp_ms = Some(timestamp_ms);
        self.advance(dt, timestamp_ms)
    }

    /// Run one frame with an explicit step length (seconds) at `wall_ms`.
    pub fn step(&mut self, dt: f64, wall_ms: f64) -> FrameSnapshot {
        self.process_commands();
        self.advance(dt.max(0.0), wall_ms)
    }

    /// Get the current round phase.
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn player(&self) -> &PlayerFrame {
        &self.player
    }

    pub fn world_offset(&self) -> DVec3 {
        self.world_offset
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn enemy_count(&self) -> usize {
        self.world.query::<&Enemy>().iter().count()
    }

    pub fn projectile_count(&self) -> usize {
        self.world.query::<&Projectile>().iter().count()
    }

    pub fn debris_count(&self) -> usize {
        self.world.query::<&Debris>().iter().count()
    }

    /// Place an enemy at a world-local position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: DVec3) -> Entity {
        use strafe_core::components::{Radius, SceneLink};
        use strafe_core::enums::SceneObjectKind;
        use strafe_core::types::Position;

        let handle = self.scene.add_object(SceneObjectKind::Enemy, position);
        self.world.spawn((
            Enemy,
            Position(position),
            Radius(self.config.enemy_radius),
            SceneLink(handle),
        ))
    }

    /// Place a projectile at a world-local position (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(&mut self, position: DVec3, velocity: DVec3) -> Entity {
        use strafe_core::components::{Lifetime, Radius, SceneLink};
        use strafe_core::enums::SceneObjectKind;
        use strafe_core::types::{Position, Velocity};

        let handle = self.scene.add_object(SceneObjectKind::Projectile, position);
        self.world.spawn((
            Projectile,
            Position(position),
            Velocity(velocity),
            Lifetime {
                remaining_secs: self.config.projectile_lifetime,
                total_secs: self.config.projectile_lifetime,
            },
            Radius(self.config.projectile_radius),
            SceneLink(handle),
        ))
    }

    /// Remove every enemy (for tests that need an empty sky).
    #[cfg(test)]
    pub fn clear_enemies(&mut self) {
        let enemies: Vec<Entity> = self
            .world
            .query::<&Enemy>()
            .iter()
            .map(|(e, _)| e)
            .collect();
        for entity in enemies {
            world_setup::despawn_linked(&mut self.world, &mut self.scene, entity);
        }
    }

    /// Mutable round state (for tests).
    #[cfg(test)]
    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
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
            PlayerCommand::KeyDown { key } => self.input.key_down(key),
            PlayerCommand::KeyUp { key } => self.input.key_up(key),
            PlayerCommand::PointerMoved { dx, dy } => self.input.pointer_moved(dx, dy),
            PlayerCommand::PointerHover {
                x,
                y,
                viewport_width,
                viewport_height,
            } => {
                if self.phase == RoundPhase::Running {
                    self.input
                        .pointer_hover(x, y, viewport_width, viewport_height);
                }
            }
            PlayerCommand::PointerLockChanged { locked } => self.input.set_pointer_locked(locked),
            PlayerCommand::StartRound => {
                if self.phase == RoundPhase::Idle {
                    self.phase = RoundPhase::Running;
                    self.last_timestamp_ms = None;
                    self.events.push(GameEvent::RoundStarted);
                    log::info!("round started with {} enemies", self.enemy_count());
                }
            }
            PlayerCommand::Pause => {
                if self.phase == RoundPhase::Running {
                    self.phase = RoundPhase::Paused;
                    self.input.release_all();
                }
            }
            PlayerCommand::Resume => {
                if self.phase == RoundPhase::Paused {
                    self.phase = RoundPhase::Running;
                    self.last_timestamp_ms = None;
                }
            }
        }
    }

    /// Step the round if it is running, handle game over, build the snapshot.
    fn advance(&mut self, dt: f64, wall_ms: f64) -> FrameSnapshot {
        if self.phase == RoundPhase::Running {
            self.run_systems(dt, wall_ms);
            self.time.advance(dt, wall_ms);
        }

        if self.phase == RoundPhase::GameOver {
            let final_score = self.round.score;
            log::info!(
                "game over after {} frames, final score {final_score}",
                self.time.frame
            );
            self.events.push(GameEvent::GameOver { final_score });
            self.reset_round();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.round,
            &self.player,
            self.world_offset,
            events,
        )
    }

    /// Clear the pools and restore a fresh, idle round.
    fn reset_round(&mut self) {
        world_setup::clear_world(&mut self.world, &mut self.scene);
        self.round = RoundState::new(&self.config);
        self.player = PlayerFrame::default();
        self.world_offset = DVec3::ZERO;
        self.time = SimTime::default();
        self.last_timestamp_ms = None;
        self.scene.set_world_offset(self.world_offset);
        self.scene
            .set_player_transform(self.player.position, self.player.orientation);

        world_setup::seed_enemies(
            &mut self.world,
            &mut self.scene,
            &mut self.rng,
            &self.config,
            &self.player,
            self.world_offset,
        );
        self.phase = RoundPhase::Idle;
        log::debug!("round reset, {} enemies seeded", self.enemy_count());
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64, wall_ms: f64) {
        // 1. Orientation
        systems::orientation::run(&mut self.player, &mut self.input, &self.config, dt);
        // 2. Speed / boost
        self.round.boost = if self.input.boost_held() {
            self.config.boost_speed
        } else {
            0.0
        };
        let speed = self.round.speed();
        // 3. World translation
        systems::world_translation::run(
            &mut self.world_offset,
            &mut self.scene,
            &self.player,
            speed,
            dt,
        );
        // 4. Fire control
        systems::fire_control::run(
            &mut self.world,
            &mut self.scene,
            &self.input,
            &mut self.round,
            &self.config,
            &self.player,
            self.world_offset,
            wall_ms,
            &mut self.events,
        );
        // 5. Projectiles
        systems::projectiles::run(&mut self.world, &mut self.scene, dt, &mut self.despawn_buffer);
        // 6. Explosion debris
        systems::debris::run(&mut self.world, &mut self.scene, dt, &mut self.despawn_buffer);
        // 7. Spawn cadence
        systems::spawner::run(
            &mut self.world,
            &mut self.scene,
            &mut self.rng,
            &mut self.round,
            &self.config,
            &self.player,
            self.world_offset,
            dt,
        );
        // 8. Enemy movement and recycling
        systems::enemies::run(
            &mut self.world,
            &mut self.scene,
            &mut self.rng,
            &self.config,
            &self.player,
            self.world_offset,
            speed,
            dt,
            wall_ms,
            &mut self.despawn_buffer,
        );
        // 9. Projectile / enemy collisions
        systems::collision::resolve_projectile_hits(
            &mut self.world,
            &mut self.scene,
            &mut self.rng,
            &mut self.round,
            &self.config,
            &mut self.events,
        );
        // 10. Player / enemy collisions
        let out_of_lives = systems::collision::resolve_player_hits(
            &mut self.world,
            &mut self.scene,
            &mut self.rng,
            &mut self.round,
            &self.config,
            &self.player,
            self.world_offset,
            &mut self.events,
        );
        if out_of_lives {
            self.phase = RoundPhase::GameOver;
        }
    }
}

/// Step length for a display frame: the time since the previous frame,
/// clamped to [0, FRAME_DT_MAX], or FRAME_DT_FALLBACK when there is no
/// previous frame or no usable elapsed time.
pub fn frame_dt(last_timestamp_ms: Option<f64>, timestamp_ms: f64) -> f64 {
    let raw = match last_timestamp_ms {
        Some(last) => (timestamp_ms - last) / 1000.0,
        None => return FRAME_DT_FALLBACK,
    };
    if raw == 0.0 || !raw.is_finite() {
        FRAME_DT_FALLBACK
    } else {
        raw.clamp(0.0, FRAME_DT_MAX)
    }
}
