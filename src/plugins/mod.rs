mod brownian;

pub use brownian::{BrownianPlugin, MotionSet};
