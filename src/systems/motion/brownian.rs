use bevy::prelude::*;

use crate::{
    components::{BrownianAgent, MotionConfig, StepOutcome},
    resources::{SimulationConfig, TickCounter},
    utils::{rad_to_deg, wrap_angle, AgentRng},
};

/// Advances every agent by one fixed tick.
///
/// `dt` comes from [`SimulationConfig::timestep`] rather than `Time<Fixed>` so
/// that a run is reproducible regardless of wall-clock scheduling.
pub fn brownian_motion_system(
    mut query: Query<(Entity, &mut BrownianAgent, &MotionConfig, &mut AgentRng)>,
    config: Res<SimulationConfig>,
    counter: Res<TickCounter>,
) {
    let dt = config.timestep;

    for (entity, mut agent, motion, mut rng) in query.iter_mut() {
        match agent.update(dt, motion, &mut rng.0) {
            Ok(StepOutcome::Collided { recovery_time }) => {
                let position = agent.position();
                debug!(
                    "tick {}: {:?} hit the wall at ({:.3}, {:.3}) heading {:.1} deg, recovering {:.3} s",
                    counter.tick + 1,
                    entity,
                    position.x,
                    position.y,
                    rad_to_deg(wrap_angle(agent.heading())),
                    recovery_time
                );
            }
            Ok(_) => {}
            Err(e) => error!("Failed to update {:?}: {}", entity, e),
        }
    }
}

/// Run condition: true until the configured number of ticks has completed.
pub fn simulation_running(config: Res<SimulationConfig>, counter: Res<TickCounter>) -> bool {
    counter.tick < config.ticks
}
