use approx::assert_relative_eq;
use brownian::{BrownianAgent, MotionMode, Trajectory};
use nalgebra::Vector2;

pub fn assert_position_eq(actual: Vector2<f64>, expected: Vector2<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
}

/// Containment plus the cruising/recovery-timer invariant.
pub fn assert_agent_valid(agent: &BrownianAgent) {
    let size = agent.arena().size();
    let position = agent.position();
    assert!(
        (0.0..=size).contains(&position.x) && (0.0..=size).contains(&position.y),
        "agent at ({}, {}) left the [0, {}] arena",
        position.x,
        position.y,
        size
    );
    assert!(agent.heading().is_finite());
    match agent.mode() {
        MotionMode::Cruising => assert_eq!(agent.recovery_time_remaining(), 0.0),
        MotionMode::Recovering => assert!(agent.recovery_time_remaining() >= 0.0),
    }
}

pub fn assert_trajectory_valid(trajectory: &Trajectory, arena_size: f64) {
    for (index, sample) in trajectory.samples().iter().enumerate() {
        assert_eq!(sample.tick, index as u64, "ticks must be contiguous");
        for coordinate in sample.position {
            assert!(
                (0.0..=arena_size).contains(&coordinate),
                "tick {} left the arena: {:?}",
                sample.tick,
                sample.position
            );
        }
    }
    for pair in trajectory.samples().windows(2) {
        if pair[0].mode == MotionMode::Recovering {
            assert_eq!(
                pair[0].position, pair[1].position,
                "agent moved while recovering at tick {}",
                pair[1].tick
            );
        }
    }
}
