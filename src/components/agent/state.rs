use bevy::log::debug;
use bevy::prelude::Component;
use nalgebra::Vector2;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::components::{Arena, MotionConfig};
use crate::utils::{validate_timestep, SimError};

/// Which update rule applies on the next tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Moving straight along the heading.
    #[default]
    Cruising,
    /// Rotating in place after hitting a wall.
    Recovering,
}

/// What a single `update` call did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Advanced without reaching an edge.
    Moved,
    /// Reached an edge, was clamped, and started recovering for `recovery_time` seconds.
    Collided { recovery_time: f64 },
    /// Rotated in place; still recovering.
    Rotated,
    /// Rotated in place and the recovery timer ran out.
    Recovered,
}

/// State of a single point robot performing a bounded random walk.
///
/// The agent alternates between two modes. While cruising it moves forward
/// along its heading; as soon as a step lands on or past an arena edge the
/// position is clamped back onto the boundary and the agent switches to
/// recovering, where it only turns at a fixed rate for a randomly drawn
/// duration. No reflection angle is computed.
///
/// Time is stepped discretely. The recovery timer may overshoot below zero on
/// its last tick and a large step may carry the agent far past an edge before
/// clamping; neither is interpolated.
#[derive(Component, Debug, Clone, PartialEq, Serialize)]
pub struct BrownianAgent {
    arena: Arena,
    position: Vector2<f64>,
    /// Radians, not normalized.
    heading: f64,
    mode: MotionMode,
    /// Always 0 while cruising.
    recovery_time_remaining: f64,
}

impl BrownianAgent {
    /// Creates an agent at the arena center.
    ///
    /// When `initial_heading` is `None` the heading is drawn uniformly from `[0, 2π)`.
    pub fn new<R: Rng + ?Sized>(
        arena: Arena,
        initial_heading: Option<f64>,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        let heading = match initial_heading {
            Some(heading) => heading,
            None => rng.gen_range(0.0..TAU),
        };
        Self::at(arena, arena.center(), heading)
    }

    /// Creates a cruising agent at an explicit position inside the arena.
    pub fn at(arena: Arena, position: Vector2<f64>, heading: f64) -> Result<Self, SimError> {
        arena.check_contains(&position)?;
        if !heading.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "heading {} must be finite",
                heading
            )));
        }
        Ok(Self {
            arena,
            position,
            heading,
            mode: MotionMode::Cruising,
            recovery_time_remaining: 0.0,
        })
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    pub fn recovery_time_remaining(&self) -> f64 {
        self.recovery_time_remaining
    }

    pub fn is_recovering(&self) -> bool {
        self.mode == MotionMode::Recovering
    }

    /// Forces the agent into recovery for `duration` seconds without moving it.
    pub fn begin_recovery(&mut self, duration: f64) -> Result<(), SimError> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "recovery duration {} must be finite and >= 0",
                duration
            )));
        }
        self.mode = MotionMode::Recovering;
        self.recovery_time_remaining = duration;
        Ok(())
    }

    /// Advances the agent by `dt` seconds.
    ///
    /// Invalid `dt` or motion parameters are rejected before any state changes.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        config: &MotionConfig,
        rng: &mut R,
    ) -> Result<StepOutcome, SimError> {
        validate_timestep(dt)?;
        config.validate()?;
        self.check_step_finite(dt, config)?;

        let outcome = match self.mode {
            MotionMode::Recovering => self.rotate(dt, config),
            MotionMode::Cruising => self.cruise(dt, config, rng),
        };
        Ok(outcome)
    }

    /// A finite `dt` can still overflow once scaled by a large speed, and the
    /// resulting infinities turn into NaN positions.
    fn check_step_finite(&self, dt: f64, config: &MotionConfig) -> Result<(), SimError> {
        let (quantity, value) = match self.mode {
            MotionMode::Cruising => ("displacement", config.speed * dt),
            MotionMode::Recovering => ("heading", self.heading + config.angular_speed * dt),
        };
        if value.is_finite() {
            Ok(())
        } else {
            Err(SimError::InvalidConfig(format!(
                "{} is not finite for dt = {}",
                quantity, dt
            )))
        }
    }

    fn rotate(&mut self, dt: f64, config: &MotionConfig) -> StepOutcome {
        self.heading += config.angular_speed * dt;
        self.recovery_time_remaining -= dt;

        if self.recovery_time_remaining <= 0.0 {
            // Overshoot is dropped, not carried into the next tick.
            self.recovery_time_remaining = 0.0;
            self.mode = MotionMode::Cruising;
            debug!("Recovered, cruising at heading {:.3} rad", self.heading);
            StepOutcome::Recovered
        } else {
            StepOutcome::Rotated
        }
    }

    fn cruise<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        config: &MotionConfig,
        rng: &mut R,
    ) -> StepOutcome {
        let direction = Vector2::new(self.heading.cos(), self.heading.sin());
        self.position += direction * (config.speed * dt);

        if !self.arena.touches_boundary(&self.position) {
            return StepOutcome::Moved;
        }

        let recovery_time = config.recovery.sample(rng);
        self.mode = MotionMode::Recovering;
        self.recovery_time_remaining = recovery_time;
        self.position = self.arena.clamp(&self.position);
        debug!(
            "Collision at ({:.3}, {:.3}), recovering for {:.3} s",
            self.position.x, self.position.y, recovery_time
        );
        StepOutcome::Collided { recovery_time }
    }
}
