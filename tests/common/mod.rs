#![allow(dead_code)]

mod assertions;
mod fixtures;
mod test_app;

pub use assertions::{assert_agent_valid, assert_position_eq, assert_trajectory_valid};
pub use fixtures::*;
pub use test_app::{TestApp, TestAppBuilder};
