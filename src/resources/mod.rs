pub mod config;
mod tick;
mod trajectory;

pub use config::{RenderConfig, SimulationConfig, SimulationConfigBuilder};
pub use tick::TickCounter;
pub use trajectory::{Trajectory, TrajectorySample};
