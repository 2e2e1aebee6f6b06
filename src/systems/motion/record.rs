use bevy::prelude::*;

use crate::{
    components::BrownianAgent,
    resources::{SimulationConfig, TickCounter, Trajectory, TrajectorySample},
};

/// Closes the tick: bumps the counter and appends the post-update state.
pub fn record_trajectory_system(
    query: Query<&BrownianAgent>,
    config: Res<SimulationConfig>,
    mut counter: ResMut<TickCounter>,
    mut trajectory: ResMut<Trajectory>,
) {
    counter.tick += 1;
    let time = counter.tick as f64 * config.timestep;

    for agent in query.iter() {
        trajectory.push(TrajectorySample::from_agent(counter.tick, time, agent));
    }

    if counter.tick == config.ticks {
        info!(
            "Simulation finished after {} ticks ({:.1} s), {} collisions",
            counter.tick,
            time,
            trajectory.collision_count()
        );
    }
}
