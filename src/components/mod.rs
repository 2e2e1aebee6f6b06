pub mod agent;
pub mod arena;

pub use agent::{BrownianAgent, MotionConfig, MotionMode, RecoveryRange, StartConfig, StepOutcome};
pub use arena::Arena;
