use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::{BrownianAgent, MotionMode};
use crate::utils::SimError;

/// Agent state captured after a tick (tick 0 is the spawn state).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub tick: u64,
    /// Simulated time (s).
    pub time: f64,
    pub position: [f64; 2],
    pub heading: f64,
    pub mode: MotionMode,
}

impl TrajectorySample {
    pub fn from_agent(tick: u64, time: f64, agent: &BrownianAgent) -> Self {
        let position = agent.position();
        Self {
            tick,
            time,
            position: [position.x, position.y],
            heading: agent.heading(),
            mode: agent.mode(),
        }
    }
}

/// Per-tick history of the agent, in tick order.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: TrajectorySample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    /// Number of wall hits, counted as Cruising -> Recovering transitions.
    pub fn collision_count(&self) -> usize {
        self.samples
            .windows(2)
            .filter(|pair| {
                pair[0].mode == MotionMode::Cruising && pair[1].mode == MotionMode::Recovering
            })
            .count()
    }

    /// Fraction of recorded ticks spent recovering.
    pub fn recovering_fraction(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let recovering = self
            .samples
            .iter()
            .filter(|s| s.mode == MotionMode::Recovering)
            .count();
        recovering as f64 / self.samples.len() as f64
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample(tick: u64, mode: MotionMode) -> TrajectorySample {
        TrajectorySample {
            tick,
            time: tick as f64 * 0.1,
            position: [5.0, 5.0],
            heading: 0.0,
            mode,
        }
    }

    fn trajectory(modes: &[MotionMode]) -> Trajectory {
        let mut trajectory = Trajectory::default();
        for (tick, mode) in modes.iter().enumerate() {
            trajectory.push(sample(tick as u64, *mode));
        }
        trajectory
    }

    #[test]
    fn test_collision_count() {
        use MotionMode::*;
        let trajectory = trajectory(&[
            Cruising, Cruising, Recovering, Recovering, Cruising, Recovering, Cruising,
        ]);
        assert_eq!(trajectory.collision_count(), 2);
        assert!((trajectory.recovering_fraction() - 3.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_trajectory() {
        let trajectory = Trajectory::default();
        assert!(trajectory.is_empty());
        assert_eq!(trajectory.collision_count(), 0);
        assert_eq!(trajectory.recovering_fraction(), 0.0);
    }

    #[test]
    fn test_json_export() -> Result<(), Box<dyn std::error::Error>> {
        let trajectory = trajectory(&[MotionMode::Cruising, MotionMode::Recovering]);
        let dir = tempdir()?;
        let path = dir.path().join("trajectory.json");

        trajectory.save_json(&path)?;
        let text = std::fs::read_to_string(&path)?;
        assert!(text.contains("\"recovering\""));
        assert_eq!(Trajectory::load_json(&path)?, trajectory);
        Ok(())
    }
}
