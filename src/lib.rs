//! Point robot performing a bounded random walk in a square arena.
//!
//! [`components::BrownianAgent`] is the motion state machine; the rest of the
//! crate drives it on a fixed timestep, records its trajectory and renders
//! frames.

pub mod components;
pub mod plugins;
pub mod rendering;
pub mod resources;
pub mod sim;
pub mod systems;
pub mod utils;

pub use components::{Arena, BrownianAgent, MotionConfig, MotionMode, RecoveryRange, StepOutcome};
pub use resources::{SimulationConfig, Trajectory};
pub use sim::Simulation;
pub use utils::SimError;
