mod motion;

pub use motion::{brownian_motion_system, record_trajectory_system, simulation_running};
