use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use mbrt::{camera::Float, cli::Args, output};
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let (world, mut settings) = args.scene.build();
    args.apply(&mut settings);
    let camera = settings.build().context("Failed to set up camera")?;

    let total_frames = camera.total_frames();
    if total_frames == 0 {
        warn!("Frame count is 0, nothing to render");
        return Ok(());
    }
    if total_frames > 1 && settings.shutter_speed * (settings.fps as Float) > 1.0 {
        warn!(
            "Shutter stays open {}s but frames are {}s apart, consecutive frames will overlap",
            settings.shutter_speed,
            1.0 / settings.fps as Float
        );
    }

    info!(
        "Rendering {} frame(s) of {} spheres at {}x{}, {} samples per pixel",
        total_frames,
        world.len(),
        camera.image_width(),
        camera.image_height(),
        camera.samples_per_pixel()
    );

    let style = ProgressStyle::with_template(
        "{msg} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} ({eta})",
    )?
    .progress_chars("#>-");

    let start = Instant::now();
    for (frame, frame_time) in camera.frame_times() {
        let progress_bar = ProgressBar::new(camera.image_height() as u64)
            .with_style(style.clone())
            .with_message(format!("frame {}/{}", frame + 1, total_frames));

        info!("Frame {} at t={:.3}s", frame + 1, frame_time);
        let frame_start = Instant::now();
        let image = camera
            .render(&world, frame_time, progress_bar)
            .with_context(|| format!("Failed to render frame {}", frame + 1))?;

        let path = output::frame_path(&args.output, frame, total_frames);
        output::write_image(&image, &path)
            .with_context(|| format!("Failed to write frame {} to {}", frame + 1, path.display()))?;
        info!(
            "Frame {} done in {:.2?}",
            frame + 1,
            frame_start.elapsed()
        );
    }

    info!("Rendered {} frame(s) in {:.2?}", total_frames, start.elapsed());
    Ok(())
}
