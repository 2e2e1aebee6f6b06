//! Headless driver that steps the brownian plugin tick by tick.

use bevy::{log::LogPlugin, prelude::*};

use crate::{
    components::BrownianAgent,
    plugins::BrownianPlugin,
    resources::{SimulationConfig, TickCounter, Trajectory},
    utils::SimError,
};

/// Owns a bevy [`App`] and advances it one fixed tick per [`Simulation::step`].
///
/// Schedules are run directly instead of through `App::update`, so the number
/// of ticks never depends on wall-clock time.
pub struct Simulation {
    app: App,
    started: bool,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        Self::from_app(app, config)
    }

    /// Same as [`Simulation::new`] with a `RUST_LOG`-aware subscriber installed.
    pub fn with_logging(config: SimulationConfig) -> Result<Self, SimError> {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, LogPlugin::default()));
        Self::from_app(app, config)
    }

    /// Adds the brownian plugin to a caller-prepared app.
    pub fn from_app(mut app: App, config: SimulationConfig) -> Result<Self, SimError> {
        app.add_plugins(BrownianPlugin::new(config)?);
        Ok(Self {
            app,
            started: false,
        })
    }

    fn ensure_started(&mut self) {
        if !self.started {
            self.app.world_mut().run_schedule(Startup);
            self.started = true;
        }
    }

    /// Runs one tick. Returns `false` once the configured tick count is reached.
    pub fn step(&mut self) -> bool {
        self.ensure_started();
        if self.is_finished() {
            return false;
        }
        self.app.world_mut().run_schedule(FixedUpdate);
        true
    }

    /// Runs all remaining ticks and returns how many were executed.
    pub fn run(&mut self) -> u64 {
        let mut executed = 0;
        while self.step() {
            executed += 1;
        }
        executed
    }

    pub fn is_finished(&self) -> bool {
        self.tick() >= self.config().ticks
    }

    pub fn tick(&self) -> u64 {
        self.app.world().resource::<TickCounter>().tick
    }

    pub fn config(&self) -> &SimulationConfig {
        self.app.world().resource::<SimulationConfig>()
    }

    pub fn trajectory(&self) -> &Trajectory {
        self.app.world().resource::<Trajectory>()
    }

    /// The agent, once the startup schedule has spawned it.
    pub fn agent(&mut self) -> Option<&BrownianAgent> {
        self.ensure_started();
        let world = self.app.world_mut();
        let mut query = world.query::<&BrownianAgent>();
        query.get_single(world).ok()
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}
