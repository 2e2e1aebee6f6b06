use nalgebra::Vector2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::components::{Arena, BrownianAgent};
use crate::utils::SimError;

/// Where and how the agent is placed when the run starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StartConfig {
    /// Arena center; random heading in [0, 2π) unless given.
    Center {
        #[serde(default)]
        heading: Option<f64>,
    },
    /// Explicit position (must lie inside the arena) and heading.
    Fixed { position: [f64; 2], heading: f64 },
}

impl Default for StartConfig {
    fn default() -> Self {
        StartConfig::Center { heading: None }
    }
}

impl StartConfig {
    pub fn validate(&self, arena: &Arena) -> Result<(), SimError> {
        match self {
            StartConfig::Center { heading: Some(h) } if !h.is_finite() => Err(
                SimError::InvalidConfig(format!("start heading {} must be finite", h)),
            ),
            StartConfig::Center { .. } => Ok(()),
            StartConfig::Fixed { position, heading } => {
                arena.check_contains(&Vector2::new(position[0], position[1]))?;
                if heading.is_finite() {
                    Ok(())
                } else {
                    Err(SimError::InvalidConfig(format!(
                        "start heading {} must be finite",
                        heading
                    )))
                }
            }
        }
    }

    pub fn build<R: Rng + ?Sized>(
        &self,
        arena: Arena,
        rng: &mut R,
    ) -> Result<BrownianAgent, SimError> {
        match self {
            StartConfig::Center { heading } => BrownianAgent::new(arena, *heading, rng),
            StartConfig::Fixed { position, heading } => {
                BrownianAgent::at(arena, Vector2::new(position[0], position[1]), *heading)
            }
        }
    }
}
