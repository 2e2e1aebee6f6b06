mod config;
mod start;
mod state;

pub use config::{MotionConfig, RecoveryRange};
pub use start::StartConfig;
pub use state::{BrownianAgent, MotionMode, StepOutcome};
