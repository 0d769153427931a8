//! Scene engine: the core of the animation.
//!
//! `SceneEngine` owns the hecs world, the seeded RNG, the rotation
//! accumulator and the pointer state. It processes host commands, runs all
//! systems and produces `SceneSnapshot`s. Completely headless (no windowing
//! dependency) and driven by caller-supplied timestamps, enabling
//! deterministic testing.

use std::collections::VecDeque;

use glam::DVec2;
use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use helix_core::commands::SceneCommand;
use helix_core::config::{ConfigError, SceneConfig};
use helix_core::constants::ROTATION_STEP;
use helix_core::enums::ScenePhase;
use helix_core::state::SceneSnapshot;
use helix_core::types::{Canvas, FrameClock, PointerState};

use crate::systems;
use crate::world_setup;

/// The scene engine. Owns the ECS world and all scene state.
pub struct SceneEngine {
    world: World,
    config: SceneConfig,
    canvas: Canvas,
    clock: FrameClock,
    phase: ScenePhase,
    rotation: f64,
    pointer: PointerState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<SceneCommand>,
}

impl SceneEngine {
    /// Validate the config and generate the initial scene.
    pub fn new(config: SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut engine = Self {
            world: World::new(),
            canvas: config.canvas,
            clock: FrameClock::default(),
            phase: ScenePhase::default(),
            rotation: 0.0,
            pointer: PointerState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            config,
        };
        world_setup::setup_scene(
            &mut engine.world,
            &mut engine.rng,
            &engine.config,
            &engine.canvas,
        );
        Ok(engine)
    }

    /// Queue a host command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the scene to `now_ms` and return the frame to render.
    /// Returns `None` once the scene has been stopped.
    pub fn tick(&mut self, now_ms: f64) -> Option<SceneSnapshot> {
        self.process_commands();

        if self.phase == ScenePhase::Stopped {
            return None;
        }

        self.clock.advance_to(now_ms);
        self.run_systems();

        let snapshot = systems::snapshot::build_snapshot(
            &self.world,
            &self.clock,
            &self.canvas,
            self.rotation,
            &self.pointer,
        );
        // Stars are drawn where they are, then drift for the next frame.
        systems::stars::run(&mut self.world, now_ms);
        Some(snapshot)
    }

    /// Advance by one nominal 60 Hz frame.
    pub fn step(&mut self) -> Option<SceneSnapshot> {
        let now_ms = self.clock.next_fixed_step();
        self.tick(now_ms)
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command. Everything is ignored after `Stop`.
    fn handle_command(&mut self, command: SceneCommand) {
        if self.phase == ScenePhase::Stopped {
            return;
        }
        match command {
            SceneCommand::PointerMoved { x, y, at_ms } => {
                self.pointer.moved(DVec2::new(x, y), at_ms);
            }
            SceneCommand::Resize { width, height } => self.resize(Canvas::new(width, height)),
            SceneCommand::Stop => {
                tracing::info!(frame = self.clock.frame, "scene stopped");
                self.phase = ScenePhase::Stopped;
                self.command_queue.clear();
            }
        }
    }

    fn resize(&mut self, canvas: Canvas) {
        if !canvas.is_valid() {
            tracing::warn!(
                width = canvas.width,
                height = canvas.height,
                "ignoring resize to invalid canvas"
            );
            return;
        }
        self.canvas = canvas;

        if self.config.regenerate_on_resize {
            self.world.clear();
            world_setup::setup_scene(&mut self.world, &mut self.rng, &self.config, &self.canvas);
        }
        tracing::info!(
            width = canvas.width,
            height = canvas.height,
            regenerated = self.config.regenerate_on_resize,
            "canvas resized"
        );
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now_ms = self.clock.now_ms;

        // 1. Rotation
        self.rotation += ROTATION_STEP;
        // 2. Helix rotation, depth brightness, vertical easing
        systems::helix::run(
            &mut self.world,
            &mut self.rng,
            self.rotation,
            self.config.sphere_count,
            now_ms,
        );
        // 3. Scatter drift
        systems::scatter::run(&mut self.world, now_ms);
        // 4. Pointer drag / rest recovery
        systems::pointer::run(&mut self.world, &self.pointer, &self.canvas, now_ms);
    }
}
