// Defaults for the arena robot run.
pub const DEFAULT_ARENA_SIZE: f64 = 10.0; // units
pub const DEFAULT_TIMESTEP: f64 = 0.1; // s
pub const DEFAULT_SPEED: f64 = 3.0; // units/s
pub const DEFAULT_ANGULAR_SPEED_DEG: f64 = 90.0; // deg/s while recovering
pub const DEFAULT_RECOVERY_MIN: f64 = 0.5; // s
pub const DEFAULT_RECOVERY_MAX: f64 = 2.0; // s
pub const DEFAULT_TICKS: u64 = 600;

// Output
pub const DEFAULT_FPS: u32 = 30;
pub const DEFAULT_CANVAS_SIZE: u32 = 640; // px
pub const DEFAULT_TRAIL_LENGTH: usize = 120; // samples

// RNG stream names
pub const START_RNG_STREAM: &str = "agent_start";
pub const MOTION_RNG_STREAM: &str = "agent_motion";
