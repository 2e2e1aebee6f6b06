use brownian::{
    components::StartConfig, resources::SimulationConfigBuilder, Arena, BrownianAgent,
    MotionConfig, SimulationConfig,
};
use nalgebra::Vector2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub const TEST_SEED: u64 = 2024;

pub fn create_test_arena() -> Arena {
    Arena::new(10.0).expect("valid arena")
}

pub fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(TEST_SEED)
}

/// Agent placed explicitly in the 10 x 10 test arena.
pub fn create_test_agent(x: f64, y: f64, heading: f64) -> BrownianAgent {
    BrownianAgent::at(create_test_arena(), Vector2::new(x, y), heading).expect("valid agent")
}

/// Speed 3, rotation 90 deg/s, recovery in [0.5, 2.0] s.
pub fn create_test_motion_config() -> MotionConfig {
    MotionConfig::default()
}

/// Seeded 600-tick run with frame output disabled.
pub fn create_test_simulation_config() -> SimulationConfig {
    let mut config = SimulationConfigBuilder::new()
        .seed(TEST_SEED)
        .build()
        .expect("valid config");
    config.render.write_frames = false;
    config
}

pub fn create_wall_start_config(ticks: u64) -> SimulationConfig {
    SimulationConfigBuilder::new()
        .seed(TEST_SEED)
        .ticks(ticks)
        .start(StartConfig::Fixed {
            position: [9.95, 5.0],
            heading: 0.0,
        })
        .build()
        .expect("valid config")
}
