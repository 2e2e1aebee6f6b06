use serde::{Deserialize, Serialize};

use crate::utils::{SimError, DEFAULT_CANVAS_SIZE, DEFAULT_FPS, DEFAULT_TRAIL_LENGTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    /// Padding around the arena square (px).
    pub margin: f32,
    /// Radius of the agent marker (px).
    pub agent_radius: f32,
    /// Number of past samples drawn behind the agent; 0 disables the trail.
    pub trail_length: usize,
    /// Render every n-th tick.
    pub frame_stride: usize,
    /// Playback rate for the encoded sequence.
    pub fps: u32,
    pub write_frames: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_CANVAS_SIZE,
            screen_height: DEFAULT_CANVAS_SIZE,
            margin: 20.0,
            agent_radius: 6.0,
            trail_length: DEFAULT_TRAIL_LENGTH,
            frame_stride: 1,
            fps: DEFAULT_FPS,
            write_frames: true,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "canvas {}x{} must be non-empty",
                self.screen_width, self.screen_height
            )));
        }
        let side = self.screen_width.min(self.screen_height) as f32;
        if !self.margin.is_finite() || self.margin < 0.0 || 2.0 * self.margin >= side {
            return Err(SimError::InvalidConfig(format!(
                "margin {} does not fit a {}x{} canvas",
                self.margin, self.screen_width, self.screen_height
            )));
        }
        if !self.agent_radius.is_finite() || self.agent_radius <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "agent radius {} must be > 0",
                self.agent_radius
            )));
        }
        if self.frame_stride == 0 || self.fps == 0 {
            return Err(SimError::InvalidConfig(
                "frame stride and fps must be > 0".into(),
            ));
        }
        Ok(())
    }
}
