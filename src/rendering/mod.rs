mod renderer;

pub use renderer::{frame_path, FrameRenderer};
