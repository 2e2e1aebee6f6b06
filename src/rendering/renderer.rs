use glam::Vec2;
use std::path::{Path, PathBuf};
use tiny_skia::*;

use crate::components::MotionMode;
use crate::resources::{RenderConfig, Trajectory, TrajectorySample};
use crate::utils::SimError;

/// Draws trajectory samples onto square arena frames.
pub struct FrameRenderer {
    config: RenderConfig,
    arena_size: f64,
    /// Canvas position of the arena origin (bottom-left corner).
    origin: Vec2,
    /// Pixels per arena unit.
    scale: f32,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig, arena_size: f64) -> Result<Self, SimError> {
        config.validate()?;
        if !(arena_size.is_finite() && arena_size > 0.0) {
            return Err(SimError::InvalidArena(arena_size));
        }

        let screen_dims = Vec2::new(config.screen_width as f32, config.screen_height as f32);
        let side = screen_dims.min_element() - 2.0 * config.margin;
        let scale = side / arena_size as f32;
        // Center the arena square on a non-square canvas
        let origin = Vec2::new((screen_dims.x - side) / 2.0, (screen_dims.y + side) / 2.0);

        Ok(Self {
            config,
            arena_size,
            origin,
            scale,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Maps arena coordinates (y up) to canvas pixels (y down).
    pub fn to_screen(&self, position: [f64; 2]) -> Vec2 {
        Vec2::new(
            self.origin.x + position[0] as f32 * self.scale,
            self.origin.y - position[1] as f32 * self.scale,
        )
    }

    /// Renders the last sample of `history` with up to `trail_length` earlier samples.
    ///
    /// Frames carry no title text since there is no font rasterizer in the stack.
    pub fn render_frame(&self, history: &[TrajectorySample]) -> Result<Pixmap, SimError> {
        let current = history
            .last()
            .ok_or_else(|| SimError::RenderError("No samples to render".into()))?;

        let mut canvas = self.create_canvas()?;
        canvas.fill(Color::WHITE);
        self.draw_arena(&mut canvas)?;

        let trail_start = history.len().saturating_sub(self.config.trail_length + 1);
        self.draw_trail(&mut canvas, &history[trail_start..history.len() - 1])?;
        self.draw_agent(&mut canvas, current)?;

        Ok(canvas)
    }

    /// Writes `frame_00000.png`, `frame_00001.png`, ... for ticks 1..=N at the
    /// configured stride. Returns the number of frames written.
    pub fn write_frames(&self, trajectory: &Trajectory, dir: &Path) -> Result<usize, SimError> {
        std::fs::create_dir_all(dir)?;
        let samples = trajectory.samples();

        let mut written = 0;
        for end in (1..samples.len()).step_by(self.config.frame_stride) {
            let frame = self.render_frame(&samples[..=end])?;
            frame
                .save_png(frame_path(dir, written))
                .map_err(|e| SimError::RenderError(format!("Failed to save frame: {}", e)))?;
            written += 1;
        }
        Ok(written)
    }

    fn create_canvas(&self) -> Result<Pixmap, SimError> {
        Pixmap::new(self.config.screen_width, self.config.screen_height)
            .ok_or_else(|| SimError::RenderError("Failed to create canvas".into()))
    }

    fn draw_arena(&self, canvas: &mut Pixmap) -> Result<(), SimError> {
        let top_left = self.to_screen([0.0, self.arena_size]);
        let side = self.arena_size as f32 * self.scale;
        let rect = Rect::from_xywh(top_left.x, top_left.y, side, side)
            .ok_or_else(|| SimError::RenderError("Invalid arena rectangle".into()))?;
        let path = PathBuilder::from_rect(rect);

        let mut stroke = Stroke::default();
        stroke.width = 2.0;

        let mut paint = Paint::default();
        paint.set_color_rgba8(40, 40, 40, 255);
        paint.anti_alias = true;

        canvas.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        Ok(())
    }

    fn draw_trail(
        &self,
        canvas: &mut Pixmap,
        trail: &[TrajectorySample],
    ) -> Result<(), SimError> {
        let count = trail.len() as f32;
        for (idx, sample) in trail.iter().enumerate() {
            // Older samples fade out
            let alpha = (40.0 + 160.0 * (idx as f32 + 1.0) / count) as u8;
            let mut paint = Paint::default();
            paint.set_color_rgba8(255, 120, 120, alpha);
            paint.anti_alias = true;

            let point = self.to_screen(sample.position);
            let dot = PathBuilder::from_circle(point.x, point.y, 2.0)
                .ok_or_else(|| SimError::RenderError("Invalid trail point".into()))?;
            canvas.fill_path(&dot, &paint, FillRule::Winding, Transform::identity(), None);
        }
        Ok(())
    }

    fn draw_agent(
        &self,
        canvas: &mut Pixmap,
        sample: &TrajectorySample,
    ) -> Result<(), SimError> {
        let center = self.to_screen(sample.position);
        let radius = self.config.agent_radius;

        // Heading tick, drawn first so the disc covers its root
        let direction = Vec2::new(sample.heading.cos() as f32, -(sample.heading.sin() as f32));
        let tip = center + direction * radius * 2.0;
        let heading_path = {
            let mut pb = PathBuilder::new();
            pb.move_to(center.x, center.y);
            pb.line_to(tip.x, tip.y);
            pb.finish()
                .ok_or_else(|| SimError::RenderError("Invalid heading path".into()))?
        };
        let mut stroke = Stroke::default();
        stroke.width = 2.0;
        stroke.line_cap = LineCap::Round;
        let mut heading_paint = Paint::default();
        heading_paint.set_color_rgba8(30, 30, 30, 255);
        heading_paint.anti_alias = true;
        canvas.stroke_path(
            &heading_path,
            &heading_paint,
            &stroke,
            Transform::identity(),
            None,
        );

        let mut paint = Paint::default();
        match sample.mode {
            MotionMode::Cruising => paint.set_color_rgba8(220, 20, 20, 255),
            MotionMode::Recovering => paint.set_color_rgba8(230, 140, 0, 255),
        }
        paint.anti_alias = true;

        let disc = PathBuilder::from_circle(center.x, center.y, radius)
            .ok_or_else(|| SimError::RenderError("Invalid agent marker".into()))?;
        canvas.fill_path(&disc, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }
}

pub fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame_{:05}.png", index))
}
