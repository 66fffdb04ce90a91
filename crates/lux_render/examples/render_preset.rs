//! Render a built-in preset scene to a PNG.
//!
//! Usage: render_preset [preset] [output.png]

use anyhow::Context;
use lux_render::{render_parallel, Camera, Preset, RenderConfig, Vec3};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut args = std::env::args().skip(1);
    let preset_index: u32 = match args.next() {
        Some(arg) => arg.parse().context("preset must be a number")?,
        None => 1,
    };
    let output = args.next().unwrap_or_else(|| "output.png".to_string());

    let preset = Preset::from_index(preset_index)?;
    let scene = preset.build();

    let camera = Camera::new()
        .with_resolution(800, 800)
        .with_view_point(Vec3::new(0.0, 0.0, 1.3));
    let config = RenderConfig::default();

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, &camera, &config);
    log::info!("rendered in {:?}", start.elapsed());

    image
        .save_png(&output)
        .with_context(|| format!("failed to write {output}"))?;
    log::info!("saved {output}");

    Ok(())
}
