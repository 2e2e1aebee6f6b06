use crate::components::{MotionConfig, RecoveryRange, StartConfig};
use crate::resources::{RenderConfig, SimulationConfig};
use crate::utils::SimError;

/// Fluent construction of a validated [`SimulationConfig`].
#[derive(Default, Debug, Clone)]
pub struct SimulationConfigBuilder {
    pub arena_size: Option<f64>,
    pub timestep: Option<f64>,
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
    pub speed: Option<f64>,
    pub angular_speed: Option<f64>,
    pub recovery: Option<(f64, f64)>,
    pub start: Option<StartConfig>,
    pub render: Option<RenderConfig>,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena_size(mut self, size: f64) -> Self {
        self.arena_size = Some(size);
        self
    }

    pub fn timestep(mut self, dt: f64) -> Self {
        self.timestep = Some(dt);
        self
    }

    pub fn ticks(mut self, ticks: u64) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Rotation rate while recovering, in rad/s.
    pub fn angular_speed(mut self, angular_speed: f64) -> Self {
        self.angular_speed = Some(angular_speed);
        self
    }

    pub fn recovery_range(mut self, min: f64, max: f64) -> Self {
        self.recovery = Some((min, max));
        self
    }

    pub fn start(mut self, start: StartConfig) -> Self {
        self.start = Some(start);
        self
    }

    pub fn render(mut self, render: RenderConfig) -> Self {
        self.render = Some(render);
        self
    }

    pub fn build(self) -> Result<SimulationConfig, SimError> {
        let mut config = SimulationConfig::default();
        let mut motion = MotionConfig::default();

        if let Some(arena_size) = self.arena_size {
            config.arena_size = arena_size;
        }
        if let Some(timestep) = self.timestep {
            config.timestep = timestep;
        }
        if let Some(ticks) = self.ticks {
            config.ticks = ticks;
        }
        if let Some(speed) = self.speed {
            motion.speed = speed;
        }
        if let Some(angular_speed) = self.angular_speed {
            motion.angular_speed = angular_speed;
        }
        if let Some((min, max)) = self.recovery {
            motion.recovery = RecoveryRange::new(min, max)?;
        }
        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(render) = self.render {
            config.render = render;
        }
        config.seed = self.seed;
        config.motion = motion;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SimulationConfigBuilder::new().build().unwrap();
        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = SimulationConfigBuilder::new()
            .arena_size(4.0)
            .timestep(0.05)
            .ticks(10)
            .seed(3)
            .speed(1.5)
            .recovery_range(0.25, 0.5)
            .build()
            .unwrap();

        assert_eq!(config.arena_size, 4.0);
        assert_eq!(config.timestep, 0.05);
        assert_eq!(config.ticks, 10);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.motion.speed, 1.5);
        assert_eq!(config.motion.recovery, RecoveryRange::new(0.25, 0.5).unwrap());
    }

    #[test]
    fn test_builder_validates() {
        assert!(matches!(
            SimulationConfigBuilder::new().timestep(0.0).build(),
            Err(SimError::InvalidTimestep(_))
        ));
        assert!(SimulationConfigBuilder::new()
            .recovery_range(2.0, 1.0)
            .build()
            .is_err());
        assert!(SimulationConfigBuilder::new()
            .arena_size(2.0)
            .start(StartConfig::Fixed {
                position: [3.0, 1.0],
                heading: 0.0
            })
            .build()
            .is_err());
    }
}
