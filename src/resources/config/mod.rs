pub mod builder;
pub mod render;
pub mod simulation;

pub use builder::SimulationConfigBuilder;
pub use render::RenderConfig;
pub use simulation::SimulationConfig;
