use bevy::prelude::*;

use crate::{
    resources::{SimulationConfig, TickCounter, Trajectory, TrajectorySample},
    systems::{brownian_motion_system, record_trajectory_system, simulation_running},
    utils::{AgentRng, RngManager, SimError, MOTION_RNG_STREAM, START_RNG_STREAM},
};

/// Motion stages within a fixed tick
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum MotionSet {
    Update,
    Record,
}

/// Spawns one brownian agent and drives it on the fixed timestep.
pub struct BrownianPlugin {
    config: SimulationConfig,
}

impl BrownianPlugin {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(BrownianPlugin { config })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn setup_agent(
        mut commands: Commands,
        config: Res<SimulationConfig>,
        rng_manager: Res<RngManager>,
        mut trajectory: ResMut<Trajectory>,
    ) {
        let mut start_rng = rng_manager.get_rng(START_RNG_STREAM);
        let agent = match config
            .arena()
            .and_then(|arena| config.start.build(arena, &mut start_rng))
        {
            Ok(agent) => agent,
            Err(e) => {
                error!("Failed to spawn brownian agent: {}", e);
                return;
            }
        };

        info!(
            "Spawning agent at ({:.2}, {:.2}) heading {:.3} rad, seed {}",
            agent.position().x,
            agent.position().y,
            agent.heading(),
            rng_manager.master_seed()
        );
        trajectory.push(TrajectorySample::from_agent(0, 0.0, &agent));

        commands.spawn((
            agent,
            config.motion,
            AgentRng::new(rng_manager.get_rng(MOTION_RNG_STREAM)),
            Name::new("brownian_agent"),
        ));
    }
}

impl Plugin for BrownianPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        let capacity = (config.ticks as usize).saturating_add(1).min(1 << 20);

        app.insert_resource(RngManager::from_seed(config.seed))
            .insert_resource(Trajectory::with_capacity(capacity))
            .init_resource::<TickCounter>()
            .insert_resource(Time::<Fixed>::from_seconds(config.timestep))
            .insert_resource(config)
            .configure_sets(
                FixedUpdate,
                (MotionSet::Update, MotionSet::Record)
                    .chain()
                    .run_if(simulation_running),
            )
            .add_systems(Startup, Self::setup_agent)
            .add_systems(
                FixedUpdate,
                (
                    brownian_motion_system.in_set(MotionSet::Update),
                    record_trajectory_system.in_set(MotionSet::Record),
                ),
            );
    }
}
