use nalgebra::Vector2;
use serde::Serialize;

use crate::utils::SimError;

/// Square region `[0, size] x [0, size]` the agent is confined to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Arena {
    size: f64,
}

impl Arena {
    pub fn new(size: f64) -> Result<Self, SimError> {
        if size.is_finite() && size > 0.0 {
            Ok(Self { size })
        } else {
            Err(SimError::InvalidArena(size))
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.size / 2.0, self.size / 2.0)
    }

    /// True when the point lies inside the closed arena.
    pub fn contains(&self, point: &Vector2<f64>) -> bool {
        (0.0..=self.size).contains(&point.x) && (0.0..=self.size).contains(&point.y)
    }

    /// True when either coordinate is at or beyond an edge.
    pub fn touches_boundary(&self, point: &Vector2<f64>) -> bool {
        point.x <= 0.0 || point.x >= self.size || point.y <= 0.0 || point.y >= self.size
    }

    /// Clamp each axis independently into `[0, size]`.
    pub fn clamp(&self, point: &Vector2<f64>) -> Vector2<f64> {
        Vector2::new(point.x.clamp(0.0, self.size), point.y.clamp(0.0, self.size))
    }

    pub fn check_contains(&self, point: &Vector2<f64>) -> Result<(), SimError> {
        if self.contains(point) {
            Ok(())
        } else {
            Err(SimError::OutOfBounds {
                x: point.x,
                y: point.y,
                size: self.size,
            })
        }
    }
}
