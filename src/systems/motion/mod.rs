mod brownian;
mod record;

pub use brownian::{brownian_motion_system, simulation_running};
pub use record::record_trajectory_system;
