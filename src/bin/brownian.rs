use bevy::prelude::*;
use std::{env, fs, path::PathBuf};

use brownian::{rendering::FrameRenderer, Simulation, SimulationConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let config = match args.next() {
        Some(path) => SimulationConfig::load(&path)?,
        None => SimulationConfig::default(),
    };
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| "brownian_frames".to_string()));

    let mut sim = Simulation::with_logging(config.clone())?;
    info!(
        "Running {} ticks of {} s in a {} x {} arena",
        config.ticks, config.timestep, config.arena_size, config.arena_size
    );
    let ticks = sim.run();

    fs::create_dir_all(&output_dir)?;
    let trajectory = sim.trajectory();
    let trajectory_path = output_dir.join("trajectory.json");
    trajectory.save_json(&trajectory_path)?;
    info!(
        "Wrote {} samples to {} ({} collisions, {:.0}% of ticks recovering)",
        trajectory.len(),
        trajectory_path.display(),
        trajectory.collision_count(),
        trajectory.recovering_fraction() * 100.0
    );

    if config.render.write_frames {
        let renderer = FrameRenderer::new(config.render.clone(), config.arena_size)?;
        let frames = renderer.write_frames(trajectory, &output_dir)?;
        info!(
            "Wrote {} frames for {} ticks; encode with: ffmpeg -framerate {} -i {}/frame_%05d.png brownian_robot.mp4",
            frames,
            ticks,
            config.render.fps,
            output_dir.display()
        );
    }

    Ok(())
}
