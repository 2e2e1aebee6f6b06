use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::render::RenderConfig;
use crate::components::{Arena, MotionConfig, StartConfig};
use crate::utils::{
    validate_timestep, SimError, DEFAULT_ARENA_SIZE, DEFAULT_TICKS, DEFAULT_TIMESTEP,
};

/// Everything needed to reproduce one run.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub arena_size: f64,
    /// Fixed tick size (s).
    pub timestep: f64,
    pub ticks: u64,
    /// Master seed; `None` draws one from entropy.
    pub seed: Option<u64>,
    pub motion: MotionConfig,
    pub start: StartConfig,
    pub render: RenderConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            arena_size: DEFAULT_ARENA_SIZE,
            timestep: DEFAULT_TIMESTEP,
            ticks: DEFAULT_TICKS,
            seed: None,
            motion: MotionConfig::default(),
            start: StartConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load(path: &str) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn arena(&self) -> Result<Arena, SimError> {
        Arena::new(self.arena_size)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let arena = self.arena()?;
        validate_timestep(self.timestep)?;
        self.motion.validate()?;
        self.start.validate(&arena)?;
        self.render.validate()
    }

    /// Simulated seconds covered by a complete run.
    pub fn duration(&self) -> f64 {
        self.ticks as f64 * self.timestep
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.arena_size, 10.0);
        assert_eq!(config.timestep, 0.1);
        assert_eq!(config.ticks, 600);
        assert_eq!(config.render.fps, 30);
        assert!(config.validate().is_ok());
        assert!((config.duration() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_save_load() -> Result<(), Box<dyn std::error::Error>> {
        let config = SimulationConfig {
            seed: Some(99),
            start: StartConfig::Fixed {
                position: [2.0, 3.0],
                heading: 1.0,
            },
            ..Default::default()
        };
        let temp_file = NamedTempFile::new()?;
        let path = temp_file.path().to_str().unwrap();

        config.save(path)?;
        assert!(fs::metadata(path).is_ok());

        let loaded_config = SimulationConfig::load(path)?;
        assert_eq!(loaded_config, config);

        Ok(())
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: SimulationConfig =
            serde_yaml::from_str("arena_size: 20.0\nseed: 5\n").unwrap();
        assert_eq!(config.arena_size, 20.0);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.timestep, 0.1);
        assert_eq!(config.motion, MotionConfig::default());
    }

    #[test]
    fn test_invalid_config_load() {
        let result = SimulationConfig::load("nonexistent_file.yaml");
        assert!(matches!(result, Err(SimError::Io(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() -> Result<(), Box<dyn std::error::Error>> {
        let temp_file = NamedTempFile::new()?;
        fs::write(temp_file.path(), "timestep: -0.1\n")?;

        let result = SimulationConfig::load(temp_file.path().to_str().unwrap());
        assert!(matches!(result, Err(SimError::InvalidTimestep(_))));
        Ok(())
    }

    #[test]
    fn test_validation() {
        let config = SimulationConfig {
            arena_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SimError::InvalidArena(_))));

        let config = SimulationConfig {
            start: StartConfig::Fixed {
                position: [11.0, 1.0],
                heading: 0.0,
            },
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SimError::OutOfBounds { .. })
        ));
    }
}
